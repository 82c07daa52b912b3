use std::sync::Arc;

use chrono::{DateTime, Utc};

use shoramall_accounts::AccountDirectory;
use shoramall_core::{AccountId, DomainResult};
use shoramall_subscriptions::{PaymentMethod, SubscriptionLedger, SubscriptionPeriod};

/// Subscription checkout: the composition point between directory and ledger.
///
/// Payment processing is simulated in this scope; a real gateway integration
/// would slot in before `start_period` and bring its own timeout/retry
/// semantics.
pub struct CheckoutService {
    directory: Arc<dyn AccountDirectory>,
    ledger: Arc<dyn SubscriptionLedger>,
}

impl CheckoutService {
    pub fn new(directory: Arc<dyn AccountDirectory>, ledger: Arc<dyn SubscriptionLedger>) -> Self {
        Self { directory, ledger }
    }

    /// Charge the owner (simulated) and open a new subscription period.
    ///
    /// Fails with `NotFound` for unknown owners, `InvalidRole` for
    /// non-business accounts, and `NotApproved` for owners still waiting on
    /// admin approval; the ledger is untouched in every failure case.
    pub fn subscribe(
        &self,
        owner_id: AccountId,
        payment_method: PaymentMethod,
        now: DateTime<Utc>,
    ) -> DomainResult<SubscriptionPeriod> {
        let owner = self.directory.account(owner_id)?;

        tracing::info!(%owner_id, method = %payment_method, "simulating subscription payment");
        self.ledger.start_period(&owner, payment_method, now)
    }

    /// All recorded payments, for the admin subscriptions page.
    pub fn payments(&self) -> Vec<SubscriptionPeriod> {
        self.ledger.periods()
    }
}
