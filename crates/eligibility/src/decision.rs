use serde::{Deserialize, Serialize};

/// Why an eligibility decision came out the way it did.
///
/// Reasons are ordered by check priority: approval problems always win over
/// subscription problems, so an unapproved owner sees `NotApproved` even if
/// they also hold an expired subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DecisionReason {
    Ok,
    NotApproved,
    NoActiveSubscription,
    SubscriptionExpired,
}

impl DecisionReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            DecisionReason::Ok => "OK",
            DecisionReason::NotApproved => "NOT_APPROVED",
            DecisionReason::NoActiveSubscription => "NO_ACTIVE_SUBSCRIPTION",
            DecisionReason::SubscriptionExpired => "SUBSCRIPTION_EXPIRED",
        }
    }
}

impl core::fmt::Display for DecisionReason {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of an eligibility check. Derived, never stored.
///
/// The UI layer translates `reason` into localized user-facing text; this core
/// never formats messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EligibilityDecision {
    pub eligible: bool,
    pub reason: DecisionReason,
}

impl EligibilityDecision {
    pub fn granted() -> Self {
        Self {
            eligible: true,
            reason: DecisionReason::Ok,
        }
    }

    pub fn denied(reason: DecisionReason) -> Self {
        debug_assert!(reason != DecisionReason::Ok, "denial needs a denial reason");
        Self {
            eligible: false,
            reason,
        }
    }
}
