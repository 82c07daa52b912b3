use chrono::{DateTime, Months, Utc};
use serde::{Deserialize, Serialize};

use shoramall_accounts::{Account, Role};
use shoramall_core::{AccountId, DomainError, DomainResult, Entity, SubscriptionId, TransactionId};

/// Flat monthly subscription fee, in whole currency units.
pub const SUBSCRIPTION_AMOUNT: u64 = 2_000;

/// ISO currency code for subscription fees.
pub const SUBSCRIPTION_CURRENCY: &str = "RWF";

/// Stored status of a subscription period.
///
/// Only `Active` periods confer eligibility, and even then only while
/// unexpired. Expiry is computed from `end_date` against the current time and
/// is never written back: an `Active` period whose `end_date` has passed still
/// reads `Active` from storage but is not current.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PeriodStatus {
    Active,
    Inactive,
    Pending,
}

/// Payment channel used for a subscription charge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMethod {
    #[serde(rename = "MTN Mobile Money")]
    MtnMobileMoney,
    #[serde(rename = "Airtel Money")]
    AirtelMoney,
    #[serde(rename = "Bank Transfer")]
    BankTransfer,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::MtnMobileMoney => "MTN Mobile Money",
            PaymentMethod::AirtelMoney => "Airtel Money",
            PaymentMethod::BankTransfer => "Bank Transfer",
        }
    }
}

impl core::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Compute the coverage end for a period starting at `start`.
///
/// Coverage runs one calendar month. Month-rollover policy: **clamp to the
/// last day of the target month** — January 31 + 1 month is February 28 (or
/// 29 in a leap year), never March 2/3. `checked_add_months` implements
/// exactly this clamping.
pub fn coverage_end(start: DateTime<Utc>) -> DomainResult<DateTime<Utc>> {
    start
        .checked_add_months(Months::new(1))
        .filter(|end| end > &start)
        .ok_or_else(|| DomainError::invariant("coverage end does not follow coverage start"))
}

/// One paid coverage window for a business owner.
///
/// Immutable after creation, with one exception: a period is demoted to
/// `Inactive` when a newer period supersedes it (the ledger's
/// one-active-period-per-owner invariant). Payment metadata never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptionPeriod {
    id: SubscriptionId,
    owner_id: AccountId,
    status: PeriodStatus,
    start_date: DateTime<Utc>,
    end_date: DateTime<Utc>,
    amount: u64,
    currency: String,
    payment_method: PaymentMethod,
    transaction_id: TransactionId,
}

impl SubscriptionPeriod {
    /// Open a new active period for `owner`, covering `[now, now + 1 month]`.
    ///
    /// Fails with `InvalidRole` unless the owner is a business owner, and with
    /// `NotApproved` unless an admin has approved the account. A fresh
    /// transaction id is generated; real payment processing happens at an
    /// excluded integration boundary.
    pub fn open(
        owner: &Account,
        payment_method: PaymentMethod,
        now: DateTime<Utc>,
    ) -> DomainResult<Self> {
        if owner.role() != Role::BusinessOwner {
            return Err(DomainError::invalid_role(
                "only business owners can subscribe",
            ));
        }
        if !owner.is_approved() {
            return Err(DomainError::NotApproved);
        }

        Ok(Self {
            id: SubscriptionId::new(),
            owner_id: owner.id_typed(),
            status: PeriodStatus::Active,
            start_date: now,
            end_date: coverage_end(now)?,
            amount: SUBSCRIPTION_AMOUNT,
            currency: SUBSCRIPTION_CURRENCY.to_string(),
            payment_method,
            transaction_id: TransactionId::generate(),
        })
    }

    pub fn id_typed(&self) -> SubscriptionId {
        self.id
    }

    pub fn owner_id(&self) -> AccountId {
        self.owner_id
    }

    pub fn status(&self) -> PeriodStatus {
        self.status
    }

    pub fn start_date(&self) -> DateTime<Utc> {
        self.start_date
    }

    pub fn end_date(&self) -> DateTime<Utc> {
        self.end_date
    }

    pub fn amount(&self) -> u64 {
        self.amount
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn payment_method(&self) -> PaymentMethod {
        self.payment_method
    }

    pub fn transaction_id(&self) -> &TransactionId {
        &self.transaction_id
    }

    /// Whether this period confers coverage at `now`.
    ///
    /// Requires stored status `Active` *and* `end_date > now`. The stored
    /// status is not consulted alone: time passage never mutates it.
    pub fn is_current(&self, now: DateTime<Utc>) -> bool {
        self.status == PeriodStatus::Active && self.end_date > now
    }

    /// Demote this period to `Inactive` because a newer period supersedes it.
    pub fn demote(&mut self) {
        self.status = PeriodStatus::Inactive;
    }
}

impl Entity for SubscriptionPeriod {
    type Id = SubscriptionId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
