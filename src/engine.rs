use std::collections::HashSet;

use crate::{eval::DecisionReason, Decision, DecisionContext, FeatureFlag};

/// Decides whether features are active for a request context.
///
/// The flag list is fixed at construction. To change flags, build a new engine. The engine holds
/// no per-call state, so a single instance can be shared between threads.
///
/// # Examples
/// ```
/// # use feature_decision::{DecisionContext, DecisionEngine, FeatureFlag, Platform};
/// let engine = DecisionEngine::new(vec![FeatureFlag {
///     roles: Some(vec!["SV".to_owned(), "GN".to_owned()]),
///     ..FeatureFlag::new("SHOW_SEARCH_FOR_SV_AND_GN", true)
/// }]);
///
/// let context = DecisionContext::new("AR", "SV", 123, Platform::Ios);
/// assert!(engine.is_active("SHOW_SEARCH_FOR_SV_AND_GN", &context));
/// ```
#[derive(Debug, Clone, Default)]
pub struct DecisionEngine {
    flags: Vec<FeatureFlag>,
}

impl DecisionEngine {
    /// Create an engine over `flags`. Duplicate feature names are allowed; the first one wins.
    pub fn new(flags: Vec<FeatureFlag>) -> Self {
        DecisionEngine { flags }
    }

    /// Return `true` if `feature` is active for `context`.
    ///
    /// Undefined features are never active.
    pub fn is_active(&self, feature: &str, context: &DecisionContext) -> bool {
        self.evaluate(feature, context).active
    }

    /// Evaluate `feature` for `context`, reporting why the decision came out the way it did.
    pub fn evaluate(&self, feature: &str, context: &DecisionContext) -> Decision {
        let Some(flag) = self.get_flag(feature) else {
            log::trace!(target: "feature_decision",
                        feature;
                        "evaluating a feature that is not defined");
            return Decision::inactive(DecisionReason::FlagNotFound);
        };

        let decision = flag.eval(context);

        log::trace!(target: "feature_decision",
                    feature,
                    context:serde,
                    active = decision.active,
                    reason:display = decision.reason;
                    "evaluated a feature");

        decision
    }

    /// Return the first flag named `feature`.
    pub fn get_flag(&self, feature: &str) -> Option<&FeatureFlag> {
        self.flags.iter().find(|flag| flag.feature == feature)
    }

    /// All flags in insertion order.
    pub fn flags(&self) -> &[FeatureFlag] {
        &self.flags
    }

    /// Set of all defined feature names, including inactive ones.
    pub fn feature_names(&self) -> HashSet<&str> {
        self.flags.iter().map(|flag| flag.feature.as_str()).collect()
    }
}

impl From<Vec<FeatureFlag>> for DecisionEngine {
    fn from(flags: Vec<FeatureFlag>) -> Self {
        DecisionEngine::new(flags)
    }
}

impl FromIterator<FeatureFlag> for DecisionEngine {
    fn from_iter<T: IntoIterator<Item = FeatureFlag>>(iter: T) -> Self {
        DecisionEngine::new(iter.into_iter().collect())
    }
}
