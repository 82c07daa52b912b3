use std::collections::HashMap;
use std::sync::RwLock;

use chrono::{DateTime, Utc};

use shoramall_accounts::Account;
use shoramall_core::{AccountId, DomainError, DomainResult};
use shoramall_subscriptions::{
    PaymentMethod, PeriodStatus, SubscriptionLedger, SubscriptionPeriod, latest_of,
};

/// In-memory subscription ledger.
///
/// Periods are kept per owner in creation order, which `latest_of` relies on
/// for tie-breaking. `start_period` holds the write lock across the
/// demote-then-insert pair, so readers never observe two `Active` periods for
/// one owner or a gap between the two steps.
#[derive(Debug, Default)]
pub struct InMemorySubscriptionLedger {
    periods: RwLock<HashMap<AccountId, Vec<SubscriptionPeriod>>>,
}

impl InMemorySubscriptionLedger {
    pub fn new() -> Self {
        Self::default()
    }

    fn write(
        &self,
    ) -> DomainResult<std::sync::RwLockWriteGuard<'_, HashMap<AccountId, Vec<SubscriptionPeriod>>>>
    {
        self.periods
            .write()
            .map_err(|_| DomainError::invariant("subscription ledger lock poisoned"))
    }
}

impl SubscriptionLedger for InMemorySubscriptionLedger {
    fn latest_period(&self, owner_id: AccountId) -> Option<SubscriptionPeriod> {
        let periods = self.periods.read().ok()?;
        periods
            .get(&owner_id)
            .and_then(|history| latest_of(history))
            .cloned()
    }

    fn start_period(
        &self,
        owner: &Account,
        payment_method: PaymentMethod,
        now: DateTime<Utc>,
    ) -> DomainResult<SubscriptionPeriod> {
        // Eligibility checks happen in the constructor; a failure here leaves
        // the ledger untouched.
        let period = SubscriptionPeriod::open(owner, payment_method, now)?;

        let mut periods = self.write()?;
        let history = periods.entry(owner.id_typed()).or_default();
        for prior in history.iter_mut() {
            if prior.status() == PeriodStatus::Active {
                tracing::debug!(
                    owner_id = %owner.id_typed(),
                    superseded = %prior.id_typed(),
                    "demoting superseded subscription period"
                );
                prior.demote();
            }
        }
        history.push(period.clone());

        tracing::info!(
            owner_id = %owner.id_typed(),
            period_id = %period.id_typed(),
            end_date = %period.end_date(),
            "subscription period opened"
        );
        Ok(period)
    }

    fn periods_for(&self, owner_id: AccountId) -> Vec<SubscriptionPeriod> {
        match self.periods.read() {
            Ok(periods) => periods.get(&owner_id).cloned().unwrap_or_default(),
            Err(_) => Vec::new(),
        }
    }

    fn periods(&self) -> Vec<SubscriptionPeriod> {
        match self.periods.read() {
            Ok(periods) => periods.values().flatten().cloned().collect(),
            Err(_) => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shoramall_accounts::{AccountDirectory, NewAccount, Role};

    use crate::in_memory_directory::InMemoryAccountDirectory;

    fn registered_owner(directory: &InMemoryAccountDirectory, approved: bool) -> Account {
        let account = directory
            .register(
                NewAccount {
                    email: "business@example.com".to_string(),
                    phone: "0787654321".to_string(),
                    role: Role::BusinessOwner,
                    business_name: Some("My Awesome Shop".to_string()),
                    location: None,
                },
                Utc::now(),
            )
            .unwrap();
        if approved {
            directory.set_approval(account.id_typed(), true).unwrap()
        } else {
            account
        }
    }

    fn active_count(ledger: &InMemorySubscriptionLedger, owner_id: AccountId) -> usize {
        ledger
            .periods_for(owner_id)
            .iter()
            .filter(|p| p.status() == PeriodStatus::Active)
            .count()
    }

    #[test]
    fn starting_twice_leaves_exactly_one_active_period() {
        let directory = InMemoryAccountDirectory::new();
        let ledger = InMemorySubscriptionLedger::new();
        let owner = registered_owner(&directory, true);
        let now = Utc::now();

        let first = ledger
            .start_period(&owner, PaymentMethod::MtnMobileMoney, now)
            .unwrap();
        let second = ledger
            .start_period(&owner, PaymentMethod::AirtelMoney, now + chrono::Duration::days(3))
            .unwrap();

        assert_eq!(active_count(&ledger, owner.id_typed()), 1);

        let history = ledger.periods_for(owner.id_typed());
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].id_typed(), first.id_typed());
        assert_eq!(history[0].status(), PeriodStatus::Inactive);
        assert_eq!(history[1].id_typed(), second.id_typed());
        assert_eq!(history[1].status(), PeriodStatus::Active);

        let latest = ledger.latest_period(owner.id_typed()).unwrap();
        assert_eq!(latest.id_typed(), second.id_typed());
    }

    #[test]
    fn start_period_for_unapproved_owner_leaves_ledger_unchanged() {
        let directory = InMemoryAccountDirectory::new();
        let ledger = InMemorySubscriptionLedger::new();
        let owner = registered_owner(&directory, false);

        let err = ledger
            .start_period(&owner, PaymentMethod::MtnMobileMoney, Utc::now())
            .unwrap_err();
        assert_eq!(err, DomainError::NotApproved);
        assert!(ledger.periods_for(owner.id_typed()).is_empty());
        assert!(ledger.latest_period(owner.id_typed()).is_none());
    }

    #[test]
    fn is_currently_active_goes_false_once_now_passes_end_date() {
        let directory = InMemoryAccountDirectory::new();
        let ledger = InMemorySubscriptionLedger::new();
        let owner = registered_owner(&directory, true);
        let now = Utc::now();

        let period = ledger
            .start_period(&owner, PaymentMethod::BankTransfer, now)
            .unwrap();

        assert!(ledger.is_currently_active(owner.id_typed(), now));
        assert!(!ledger.is_currently_active(owner.id_typed(), period.end_date()));

        // Expiry is computed: the stored status still reads Active.
        let stored = ledger.latest_period(owner.id_typed()).unwrap();
        assert_eq!(stored.status(), PeriodStatus::Active);
    }

    #[test]
    fn owner_with_no_history_is_not_active() {
        let ledger = InMemorySubscriptionLedger::new();
        assert!(!ledger.is_currently_active(AccountId::new(), Utc::now()));
    }

    #[test]
    fn periods_collects_history_across_owners() {
        let directory = InMemoryAccountDirectory::new();
        let ledger = InMemorySubscriptionLedger::new();
        let owner_a = registered_owner(&directory, true);
        let owner_b = directory
            .register(
                NewAccount {
                    email: "other@example.com".to_string(),
                    phone: "0780000002".to_string(),
                    role: Role::BusinessOwner,
                    business_name: Some("Other Shop".to_string()),
                    location: None,
                },
                Utc::now(),
            )
            .unwrap();
        let owner_b = directory.set_approval(owner_b.id_typed(), true).unwrap();

        let now = Utc::now();
        ledger
            .start_period(&owner_a, PaymentMethod::MtnMobileMoney, now)
            .unwrap();
        ledger
            .start_period(&owner_b, PaymentMethod::AirtelMoney, now)
            .unwrap();

        assert_eq!(ledger.periods().len(), 2);
    }
}
