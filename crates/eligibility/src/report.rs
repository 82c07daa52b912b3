//! Diagnostic expansion of an eligibility decision.
//!
//! Answers "why was this owner allowed/denied?" for admin tooling and support,
//! with enough state to debug a complaint without reading the stores by hand.

use chrono::{DateTime, Utc};
use serde::Serialize;

use shoramall_accounts::{Account, Role};
use shoramall_core::AccountId;
use shoramall_subscriptions::{PeriodStatus, SubscriptionPeriod};

use crate::decision::EligibilityDecision;
use crate::evaluate::evaluate;

/// Snapshot of the directory state that fed a decision.
#[derive(Debug, Clone, Serialize)]
pub struct AccountState {
    pub role: Role,
    pub is_approved: bool,
    pub business_name: Option<String>,
}

/// Snapshot of the ledger state that fed a decision.
#[derive(Debug, Clone, Serialize)]
pub struct PeriodState {
    pub status: PeriodStatus,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    /// Computed at evaluation time; the stored status never reflects expiry.
    pub expired: bool,
}

/// Detailed explanation of an eligibility decision.
#[derive(Debug, Clone, Serialize)]
pub struct EligibilityReport {
    pub owner_id: AccountId,
    pub checked_at: DateTime<Utc>,
    pub decision: EligibilityDecision,
    /// None when the owner id is unknown to the directory.
    pub account: Option<AccountState>,
    /// None when the owner has never subscribed.
    pub latest_period: Option<PeriodState>,
}

/// Run the eligibility walk and keep the evidence.
///
/// Same semantics as [`evaluate`]; the report only adds the state snapshots
/// the decision was based on.
pub fn explain(
    owner_id: AccountId,
    account: Option<&Account>,
    latest_period: Option<&SubscriptionPeriod>,
    now: DateTime<Utc>,
) -> EligibilityReport {
    EligibilityReport {
        owner_id,
        checked_at: now,
        decision: evaluate(account, latest_period, now),
        account: account.map(|a| AccountState {
            role: a.role(),
            is_approved: a.is_approved(),
            business_name: a.business_name().map(str::to_string),
        }),
        latest_period: latest_period.map(|p| PeriodState {
            status: p.status(),
            start_date: p.start_date(),
            end_date: p.end_date(),
            expired: p.end_date() <= now,
        }),
    }
}
