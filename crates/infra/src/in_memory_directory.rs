use std::collections::HashMap;
use std::sync::RwLock;

use chrono::{DateTime, Utc};

use shoramall_accounts::{Account, AccountDirectory, NewAccount};
use shoramall_core::{AccountId, DomainError, DomainResult};

/// In-memory account directory.
///
/// Intended for tests/dev. Not optimized for performance.
#[derive(Debug, Default)]
pub struct InMemoryAccountDirectory {
    accounts: RwLock<HashMap<AccountId, Account>>,
}

impl InMemoryAccountDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> DomainResult<std::sync::RwLockReadGuard<'_, HashMap<AccountId, Account>>> {
        self.accounts
            .read()
            .map_err(|_| DomainError::invariant("account directory lock poisoned"))
    }

    fn write(&self) -> DomainResult<std::sync::RwLockWriteGuard<'_, HashMap<AccountId, Account>>> {
        self.accounts
            .write()
            .map_err(|_| DomainError::invariant("account directory lock poisoned"))
    }
}

impl AccountDirectory for InMemoryAccountDirectory {
    fn account(&self, id: AccountId) -> DomainResult<Account> {
        self.read()?.get(&id).cloned().ok_or(DomainError::NotFound)
    }

    fn register(&self, input: NewAccount, now: DateTime<Utc>) -> DomainResult<Account> {
        let mut accounts = self.write()?;

        let duplicate = accounts.values().any(|existing| {
            existing.email().eq_ignore_ascii_case(input.email.trim())
                || existing.phone() == input.phone.trim()
        });
        if duplicate {
            return Err(DomainError::conflict(
                "an account with this email or phone already exists",
            ));
        }

        let account = Account::register(input, now)?;
        tracing::info!(
            account_id = %account.id_typed(),
            role = %account.role(),
            "account registered"
        );
        accounts.insert(account.id_typed(), account.clone());
        Ok(account)
    }

    fn set_approval(&self, id: AccountId, approved: bool) -> DomainResult<Account> {
        let mut accounts = self.write()?;
        let account = accounts.get_mut(&id).ok_or(DomainError::NotFound)?;
        account.set_approval(approved)?;
        tracing::info!(account_id = %id, approved, "business owner approval updated");
        Ok(account.clone())
    }

    fn accounts(&self) -> Vec<Account> {
        match self.read() {
            Ok(accounts) => accounts.values().cloned().collect(),
            Err(_) => Vec::new(),
        }
    }
}
