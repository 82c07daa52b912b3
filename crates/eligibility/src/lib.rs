//! Publish-eligibility policy for business owners.
//!
//! The single source of truth for "may this owner publish or edit a listing
//! right now": admin approval first, then subscription coverage. Pure policy —
//! no IO, no panics, no stored state. The original system re-derived this
//! check inline on every page; it lives here exactly once.

pub mod decision;
pub mod evaluate;
pub mod report;

pub use decision::{DecisionReason, EligibilityDecision};
pub use evaluate::{evaluate, evaluate_owner};
pub use report::{EligibilityReport, explain};
