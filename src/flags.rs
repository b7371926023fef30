use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Timestamp used by release windows.
pub type Timestamp = DateTime<Utc>;

/// A named on/off switch with optional contextual gating conditions.
///
/// All optional conditions are vacuous when unset: a flag with only `feature` and `active` is
/// active for every context whenever `active` is `true`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureFlag {
    /// Feature name.
    pub feature: String,
    /// Base condition. If `false`, no other condition can make the feature active.
    pub active: bool,
    /// Enable on Android devices.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled_android: Option<bool>,
    /// Enable on iOS devices.
    #[serde(
        default,
        rename = "enablediOS",
        skip_serializing_if = "Option::is_none"
    )]
    pub enabled_ios: Option<bool>,
    /// Enable on the web application.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled_web: Option<bool>,
    /// Minimum client version (`major.minor.patch`) required on mobile devices.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_mobile_from_version: Option<String>,
    /// Allowed role tags.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roles: Option<Vec<String>>,
    /// Allowed tenant/group codes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gv_codes: Option<Vec<i64>>,
    /// Allowed country codes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub countries: Option<Vec<String>>,
    /// Release windows. Kept as part of the flag definition but not consulted during evaluation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release: Option<Vec<ReleaseOptions>>,
}

impl FeatureFlag {
    /// Create a flag with no gating conditions.
    ///
    /// ```
    /// # use feature_decision::FeatureFlag;
    /// let flag = FeatureFlag::new("SHOW_SEARCH", true);
    /// assert!(flag.roles.is_none());
    /// ```
    pub fn new(feature: impl Into<String>, active: bool) -> Self {
        FeatureFlag {
            feature: feature.into(),
            active,
            ..Default::default()
        }
    }
}

/// Release window of a flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReleaseOptions {
    /// Tenant/group codes the window applies to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gv_codes: Option<Vec<i64>>,
    /// Start of the window.
    pub available_from: Timestamp,
}

/// `TryParse` allows the subfield to fail parsing without failing the parsing of the whole
/// structure.
#[derive(Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TryParse<T> {
    Parsed(T),
    ParseFailed(serde_json::Value),
}
impl<T> From<TryParse<T>> for Option<T> {
    fn from(value: TryParse<T>) -> Self {
        match value {
            TryParse::Parsed(v) => Some(v),
            TryParse::ParseFailed(_) => None,
        }
    }
}
