use semver::Version;

use crate::{FeatureFlag, Platform};

/// Context values that can be "unset" without being optional.
///
/// A falsy context value bypasses the allow-list it is checked against.
pub trait Falsy {
    /// Return `true` if the value counts as unset.
    fn is_falsy(&self) -> bool;
}

impl Falsy for String {
    fn is_falsy(&self) -> bool {
        self.is_empty()
    }
}

impl Falsy for i64 {
    fn is_falsy(&self) -> bool {
        *self == 0
    }
}

/// Generic allow-list membership.
///
/// Passes if `value` is falsy, if `list` is unset, or if `value` is one of `list`.
pub fn is_allowed_by_list<T>(value: &T, list: Option<&[T]>) -> bool
where
    T: Falsy + PartialEq,
{
    if value.is_falsy() {
        return true;
    }
    list.map_or(true, |list| list.contains(value))
}

/// Platform gating.
///
/// Vacuous unless at least one platform switch is on. Unknown platforms are never enabled.
pub fn is_allowed_by_platform(flag: &FeatureFlag, platform: Platform) -> bool {
    let android = flag.enabled_android.unwrap_or(false);
    let ios = flag.enabled_ios.unwrap_or(false);
    let web = flag.enabled_web.unwrap_or(false);

    if !(android || ios || web) {
        return true;
    }

    match platform {
        Platform::Android => android,
        Platform::Ios => ios,
        Platform::Web => web,
        Platform::Unknown => false,
    }
}

/// Minimum version gating.
///
/// Returns `None` if a minimum version is configured but the context has no version, so that the
/// caller can tell it apart from a version that is too low.
pub fn is_allowed_by_version(
    allow_from_version: Option<&str>,
    mobile_version: Option<&str>,
) -> Option<bool> {
    let Some(allow_from_version) = allow_from_version else {
        return Some(true);
    };
    let mobile_version = mobile_version.filter(|v| !v.is_empty())?;

    Some(version_gte(mobile_version, allow_from_version).unwrap_or_else(|| {
        log::debug!(target: "feature_decision",
                    mobile_version,
                    allow_from_version;
                    "unable to compare versions, treating requirement as not met");
        false
    }))
}

/// Compare two semantic versions. Returns `None` if either one fails to parse.
fn version_gte(version: &str, minimum: &str) -> Option<bool> {
    let version = Version::parse(version.trim()).ok()?;
    let minimum = Version::parse(minimum.trim()).ok()?;
    Some(version >= minimum)
}

#[cfg(test)]
mod tests {
    use crate::{FeatureFlag, Platform};

    use super::{is_allowed_by_list, is_allowed_by_platform, is_allowed_by_version};

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|&v| v.to_owned()).collect()
    }

    #[test]
    fn list_membership() {
        let roles = strings(&["CN", "GN"]);
        assert!(is_allowed_by_list(&"CN".to_owned(), Some(&roles[..])));
        assert!(is_allowed_by_list(&"GN".to_owned(), Some(&roles[..])));
        assert!(!is_allowed_by_list(&"SV".to_owned(), Some(&roles[..])));
    }

    #[test]
    fn list_unset_is_vacuous() {
        assert!(is_allowed_by_list(&"SV".to_owned(), None));
        assert!(is_allowed_by_list::<i64>(&456, None));
    }

    #[test]
    fn falsy_value_bypasses_list() {
        assert!(is_allowed_by_list(&0i64, Some(&[123i64][..])));
        assert!(is_allowed_by_list(&String::new(), Some(&strings(&["AR"])[..])));
    }

    #[test]
    fn empty_list_rejects_truthy_value() {
        let empty: &[i64] = &[];
        assert!(!is_allowed_by_list(&123, Some(empty)));
        assert!(is_allowed_by_list(&0, Some(empty)));
    }

    #[test]
    fn gv_codes() {
        let codes: &[i64] = &[123];
        assert!(is_allowed_by_list(&123, Some(codes)));
        assert!(!is_allowed_by_list(&456, Some(codes)));
    }

    #[test]
    fn platform_not_configured() {
        let flag = FeatureFlag::new("f", true);
        for platform in [
            Platform::Web,
            Platform::Ios,
            Platform::Android,
            Platform::Unknown,
        ] {
            assert!(is_allowed_by_platform(&flag, platform));
        }
    }

    #[test]
    fn platform_switches_set_to_false_are_vacuous() {
        let flag = FeatureFlag {
            enabled_android: Some(false),
            enabled_ios: Some(false),
            enabled_web: Some(false),
            ..FeatureFlag::new("f", true)
        };
        assert!(is_allowed_by_platform(&flag, Platform::Android));
    }

    #[test]
    fn platform_single_switch() {
        let flag = FeatureFlag {
            enabled_ios: Some(true),
            ..FeatureFlag::new("f", true)
        };
        assert!(is_allowed_by_platform(&flag, Platform::Ios));
        assert!(!is_allowed_by_platform(&flag, Platform::Android));
        assert!(!is_allowed_by_platform(&flag, Platform::Web));
    }

    #[test]
    fn platform_unknown_fails_closed() {
        let flag = FeatureFlag {
            enabled_android: Some(true),
            enabled_ios: Some(true),
            enabled_web: Some(true),
            ..FeatureFlag::new("f", true)
        };
        assert!(!is_allowed_by_platform(&flag, Platform::Unknown));
    }

    #[test]
    fn version_not_configured() {
        assert_eq!(is_allowed_by_version(None, None), Some(true));
        assert_eq!(is_allowed_by_version(None, Some("0.0.1")), Some(true));
    }

    #[test]
    fn version_missing() {
        assert_eq!(is_allowed_by_version(Some("1.2.3"), None), None);
        assert_eq!(is_allowed_by_version(Some("1.2.3"), Some("")), None);
    }

    #[test]
    fn version_at_least_minimum() {
        for version in ["2.1.3", "1.4.0", "1.2.3", "1.10.0"] {
            assert_eq!(
                is_allowed_by_version(Some("1.2.3"), Some(version)),
                Some(true),
                "{version}"
            );
        }
        for version in ["1.3.4", "2.1.4", "2.3.1", "2.3.3"] {
            assert_eq!(
                is_allowed_by_version(Some("2.3.4"), Some(version)),
                Some(false),
                "{version}"
            );
        }
    }

    #[test]
    fn version_is_not_compared_as_string() {
        assert_eq!(is_allowed_by_version(Some("1.9.0"), Some("1.10.0")), Some(true));
        assert_eq!(is_allowed_by_version(Some("1.10.0"), Some("1.9.0")), Some(false));
    }

    #[test]
    fn malformed_version_fails_closed() {
        assert_eq!(is_allowed_by_version(Some("1.2.3"), Some("latest")), Some(false));
        assert_eq!(is_allowed_by_version(Some("1.2"), Some("1.2.3")), Some(false));
        assert_eq!(is_allowed_by_version(Some("not-a-version"), Some("9.9.9")), Some(false));
    }
}
