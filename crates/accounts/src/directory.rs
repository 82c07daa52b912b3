use chrono::{DateTime, Utc};

use shoramall_core::{AccountId, DomainResult};

use crate::account::{Account, NewAccount};

/// Storage boundary for account records.
///
/// The directory exclusively owns `Account` records. Implementations must make
/// each operation atomic with respect to concurrent readers (no torn reads of
/// an account mid-update).
pub trait AccountDirectory: Send + Sync {
    /// Look up an account by id.
    ///
    /// Returns `DomainError::NotFound` for unknown ids.
    fn account(&self, id: AccountId) -> DomainResult<Account>;

    /// Register a new account.
    ///
    /// Fails with `Conflict` when the email or phone is already registered,
    /// and with `Validation` for malformed input (delegated to
    /// [`Account::register`]).
    fn register(&self, input: NewAccount, now: DateTime<Utc>) -> DomainResult<Account>;

    /// Set the admin approval flag on a business owner account.
    ///
    /// Idempotent; returns the (possibly unchanged) account. Fails with
    /// `NotFound` for unknown ids and `InvalidRole` for non-business-owner
    /// accounts.
    fn set_approval(&self, id: AccountId, approved: bool) -> DomainResult<Account>;

    /// All accounts, for admin listings.
    fn accounts(&self) -> Vec<Account>;

    /// Business owners still waiting on admin approval (the moderation queue).
    fn pending_approval(&self) -> Vec<Account> {
        self.accounts()
            .into_iter()
            .filter(Account::awaiting_approval)
            .collect()
    }
}
