use chrono::{DateTime, Utc};

use shoramall_accounts::Account;
use shoramall_core::{AccountId, DomainResult};

use crate::period::{PaymentMethod, SubscriptionPeriod};

/// Select the period representing an owner's current coverage.
///
/// Greatest `end_date` wins — coverage, not insertion order, is what matters.
/// Ties go to the most recently created period, which is why the scan keeps
/// the *last* maximum: `periods` is expected in creation order.
pub fn latest_of(periods: &[SubscriptionPeriod]) -> Option<&SubscriptionPeriod> {
    let mut latest: Option<&SubscriptionPeriod> = None;
    for period in periods {
        match latest {
            Some(best) if period.end_date() < best.end_date() => {}
            _ => latest = Some(period),
        }
    }
    latest
}

/// Storage boundary for subscription periods.
///
/// The ledger exclusively owns `SubscriptionPeriod` records and upholds the
/// one-active-period-per-owner invariant: implementations must make
/// `start_period` atomic, so no concurrent reader can observe two `Active`
/// periods for an owner, or a gap between demoting the old period and
/// inserting the new one.
pub trait SubscriptionLedger: Send + Sync {
    /// The period with the greatest `end_date` among the owner's periods
    /// (ties broken by most recent creation), or `None` if the owner has
    /// never subscribed.
    fn latest_period(&self, owner_id: AccountId) -> Option<SubscriptionPeriod>;

    /// Open a new active period for `owner`.
    ///
    /// The approval gate consumes directory state: callers pass the owner's
    /// current `Account`, and the checks in [`SubscriptionPeriod::open`]
    /// reject non-owners (`InvalidRole`) and unapproved owners
    /// (`NotApproved`) without touching the ledger. On success any prior
    /// `Active` period for the owner is demoted to `Inactive` and the new
    /// period is inserted, atomically.
    fn start_period(
        &self,
        owner: &Account,
        payment_method: PaymentMethod,
        now: DateTime<Utc>,
    ) -> DomainResult<SubscriptionPeriod>;

    /// Full period history for one owner, in creation order.
    fn periods_for(&self, owner_id: AccountId) -> Vec<SubscriptionPeriod>;

    /// Every recorded period, for admin payment listings.
    fn periods(&self) -> Vec<SubscriptionPeriod>;

    /// Whether the owner holds coverage at `now`: the latest period exists,
    /// is stored `Active`, and has not yet reached its `end_date`.
    fn is_currently_active(&self, owner_id: AccountId, now: DateTime<Utc>) -> bool {
        self.latest_period(owner_id)
            .is_some_and(|period| period.is_current(now))
    }
}
