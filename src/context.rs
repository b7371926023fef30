use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Client platform of the requester.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Web application.
    #[display(fmt = "web")]
    Web,
    /// iOS application.
    #[display(fmt = "ios")]
    Ios,
    /// Android application.
    #[display(fmt = "android")]
    Android,
    /// Any platform this crate does not know about. Never enabled by platform gating.
    #[serde(other)]
    #[display(fmt = "unknown")]
    Unknown,
}

/// Attributes of a single evaluation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecisionContext {
    /// Country code, e.g. `"AR"`.
    pub country: String,
    /// Role tag, e.g. `"CN"`.
    pub role: String,
    /// Tenant/group code.
    pub gv_code: i64,
    /// Client version, `major.minor.patch`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile_version: Option<String>,
    /// Client platform.
    pub platform: Platform,
}

impl DecisionContext {
    /// Create a context without a mobile version.
    ///
    /// ```
    /// # use feature_decision::{DecisionContext, Platform};
    /// let context = DecisionContext::new("AR", "SV", 123, Platform::Web);
    /// assert_eq!(context.mobile_version, None);
    /// ```
    pub fn new(
        country: impl Into<String>,
        role: impl Into<String>,
        gv_code: i64,
        platform: Platform,
    ) -> Self {
        DecisionContext {
            country: country.into(),
            role: role.into(),
            gv_code,
            mobile_version: None,
            platform,
        }
    }

    /// Set the client version.
    pub fn with_mobile_version(mut self, mobile_version: impl Into<String>) -> Self {
        self.mobile_version = Some(mobile_version.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::{DecisionContext, Platform};

    #[test]
    fn parse_context() {
        let context: DecisionContext = serde_json::from_str(
            r#"
              {
                "country": "AR",
                "role": "CN",
                "gvCode": 123,
                "mobileVersion": "1.2.3",
                "platform": "ios"
              }
            "#,
        )
        .unwrap();
        assert_eq!(
            context,
            DecisionContext::new("AR", "CN", 123, Platform::Ios).with_mobile_version("1.2.3")
        );
    }

    #[test]
    fn unrecognized_platform_is_unknown() {
        let platform: Platform = serde_json::from_str(r#""tvos""#).unwrap();
        assert_eq!(platform, Platform::Unknown);
    }

    #[test]
    fn platform_display() {
        assert_eq!(Platform::Android.to_string(), "android");
        assert_eq!(Platform::Web.to_string(), "web");
    }
}
