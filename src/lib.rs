//! A feature flag decision engine.
//!
//! # Overview
//!
//! A [`DecisionEngine`] holds a fixed list of [`FeatureFlag`] definitions and decides whether a
//! named feature is active for a [`DecisionContext`] describing the requester (country, role,
//! tenant/group code, platform and client version).
//!
//! A flag is active when its base `active` switch is on and every configured condition passes:
//! platform switches, country allow-list, gv code allow-list, role allow-list and minimum mobile
//! version. Conditions that are not configured never restrict the decision. Context values that
//! are empty (`""` or a gv code of `0`) bypass the matching allow-list.
//!
//! Flag definitions can be built in code or loaded from JSON with [`FlagsConfig`].
//!
//! # Error Handling
//!
//! Evaluation never fails. Undefined features, missing context values, malformed versions and
//! unknown platforms all resolve to a boolean, failing closed where a condition cannot be
//! checked. Errors, represented by the [`Error`] enum, are only returned while loading flag
//! definitions.
//!
//! # Logging
//!
//! The package uses the [`log`](https://docs.rs/log/latest/log/) crate with target
//! `feature_decision`. Every decision is logged at trace level along with the reason reported by
//! [`DecisionEngine::evaluate`].

#![warn(rustdoc::missing_crate_level_docs)]
#![warn(missing_docs)]

mod config;
mod context;
mod engine;
mod error;
mod eval;
mod flags;
mod rules;

pub use config::FlagsConfig;
pub use context::{DecisionContext, Platform};
pub use engine::DecisionEngine;
pub use error::{Error, Result};
pub use eval::{Decision, DecisionReason};
pub use flags::{FeatureFlag, ReleaseOptions, Timestamp};
