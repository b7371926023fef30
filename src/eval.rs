use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::{
    rules::{is_allowed_by_list, is_allowed_by_platform, is_allowed_by_version},
    DecisionContext, FeatureFlag,
};

/// Outcome of evaluating a feature for a context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Decision {
    /// Whether the feature is active.
    pub active: bool,
    /// The first check that rejected the feature, or [`DecisionReason::Matched`].
    pub reason: DecisionReason,
}

/// Why a [`Decision`] came out the way it did.
///
/// Checks run in declaration order; the reason names the first one that rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DecisionReason {
    /// No flag with the requested name exists.
    #[display(fmt = "flag not found")]
    FlagNotFound,
    /// The flag is switched off.
    #[display(fmt = "flag is not active")]
    Inactive,
    /// Platform gating is configured and does not include the context's platform.
    #[display(fmt = "platform is not enabled")]
    Platform,
    /// The context's country is not in the allow-list.
    #[display(fmt = "country is not allowed")]
    Country,
    /// The context's tenant/group code is not in the allow-list.
    #[display(fmt = "gv code is not allowed")]
    GvCode,
    /// The context's role is not in the allow-list.
    #[display(fmt = "role is not allowed")]
    Role,
    /// A minimum version is configured but the context has no version.
    #[display(fmt = "mobile version is missing")]
    MissingMobileVersion,
    /// The context's version is below the minimum (or could not be compared).
    #[display(fmt = "mobile version is below minimum")]
    MobileVersion,
    /// All checks passed.
    #[display(fmt = "matched")]
    Matched,
}

impl Decision {
    pub(crate) fn inactive(reason: DecisionReason) -> Self {
        Decision {
            active: false,
            reason,
        }
    }

    pub(crate) fn matched() -> Self {
        Decision {
            active: true,
            reason: DecisionReason::Matched,
        }
    }
}

impl FeatureFlag {
    /// Evaluate this flag for `context`.
    ///
    /// The result is the logical AND of all configured conditions; unset conditions never
    /// restrict it.
    pub fn eval(&self, context: &DecisionContext) -> Decision {
        if !self.active {
            return Decision::inactive(DecisionReason::Inactive);
        }

        if !is_allowed_by_platform(self, context.platform) {
            return Decision::inactive(DecisionReason::Platform);
        }

        if !is_allowed_by_list(&context.country, self.countries.as_deref()) {
            return Decision::inactive(DecisionReason::Country);
        }

        if !is_allowed_by_list(&context.gv_code, self.gv_codes.as_deref()) {
            return Decision::inactive(DecisionReason::GvCode);
        }

        if !is_allowed_by_list(&context.role, self.roles.as_deref()) {
            return Decision::inactive(DecisionReason::Role);
        }

        match is_allowed_by_version(
            self.allow_mobile_from_version.as_deref(),
            context.mobile_version.as_deref(),
        ) {
            None => Decision::inactive(DecisionReason::MissingMobileVersion),
            Some(false) => Decision::inactive(DecisionReason::MobileVersion),
            Some(true) => Decision::matched(),
        }
    }
}
