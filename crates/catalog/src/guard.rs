use chrono::{DateTime, Utc};
use thiserror::Error;

use shoramall_accounts::AccountDirectory;
use shoramall_core::AccountId;
use shoramall_eligibility::{DecisionReason, evaluate_owner};
use shoramall_subscriptions::SubscriptionLedger;

/// Capability token for one listing mutation.
///
/// Scoped to the owner it was issued for and the moment of issue; nothing is
/// persisted. Deliberately not `Clone` and not serializable — it exists to be
/// handed straight to the catalog mutation it authorizes and then dropped.
#[derive(Debug)]
pub struct Authorization {
    owner_id: AccountId,
    issued_at: DateTime<Utc>,
}

impl Authorization {
    pub fn owner_id(&self) -> AccountId {
        self.owner_id
    }

    pub fn issued_at(&self) -> DateTime<Utc> {
        self.issued_at
    }
}

/// Why a listing mutation was refused.
///
/// Both variants are expected business states and are surfaced verbatim to
/// the end user by the (excluded) UI layer; neither is silently retried.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GuardDenial {
    /// The owner failed the eligibility policy (approval or subscription).
    #[error("denied: {0}")]
    Ineligible(DecisionReason),

    /// The owner tried to touch a listing that belongs to someone else.
    #[error("forbidden: listing belongs to another owner")]
    Forbidden,
}

/// Enforcement wrapper that listing create/update flows must pass through.
///
/// Read-only: the guard evaluates and either issues an [`Authorization`] or
/// refuses. Listing mutation happens in the excluded catalog collaborator.
pub struct CatalogGuard<'a> {
    directory: &'a dyn AccountDirectory,
    ledger: &'a dyn SubscriptionLedger,
}

impl<'a> CatalogGuard<'a> {
    pub fn new(directory: &'a dyn AccountDirectory, ledger: &'a dyn SubscriptionLedger) -> Self {
        Self { directory, ledger }
    }

    /// Authorize creating a new listing on behalf of `owner_id`.
    pub fn authorize_create(
        &self,
        owner_id: AccountId,
        now: DateTime<Utc>,
    ) -> Result<Authorization, GuardDenial> {
        self.check_eligibility(owner_id, now)
    }

    /// Authorize editing a listing owned by `listing_owner_id`.
    ///
    /// Ownership precedes eligibility: an owner editing someone else's
    /// listing is `Forbidden` regardless of their own eligibility state.
    pub fn authorize_edit(
        &self,
        owner_id: AccountId,
        listing_owner_id: AccountId,
        now: DateTime<Utc>,
    ) -> Result<Authorization, GuardDenial> {
        if owner_id != listing_owner_id {
            tracing::warn!(%owner_id, %listing_owner_id, "edit refused: not the listing owner");
            return Err(GuardDenial::Forbidden);
        }
        self.check_eligibility(owner_id, now)
    }

    fn check_eligibility(
        &self,
        owner_id: AccountId,
        now: DateTime<Utc>,
    ) -> Result<Authorization, GuardDenial> {
        let decision = evaluate_owner(self.directory, self.ledger, owner_id, now);
        if !decision.eligible {
            tracing::debug!(%owner_id, reason = %decision.reason, "listing mutation denied");
            return Err(GuardDenial::Ineligible(decision.reason));
        }

        Ok(Authorization {
            owner_id,
            issued_at: now,
        })
    }
}
