//! Subscriptions domain module (the subscription ledger).
//!
//! Business rules for paid coverage windows: one active period per owner,
//! month-rollover expiry arithmetic, and latest-period selection. Purely
//! deterministic domain logic; storage backends implement the
//! [`SubscriptionLedger`] trait.

pub mod ledger;
pub mod period;

pub use ledger::{SubscriptionLedger, latest_of};
pub use period::{
    PaymentMethod, PeriodStatus, SUBSCRIPTION_AMOUNT, SUBSCRIPTION_CURRENCY, SubscriptionPeriod,
    coverage_end,
};
