use chrono::{DateTime, Utc};

use shoramall_accounts::{Account, AccountDirectory, Role};
use shoramall_core::AccountId;
use shoramall_subscriptions::{PeriodStatus, SubscriptionLedger, SubscriptionPeriod};

use crate::decision::{DecisionReason, EligibilityDecision};

/// Decide whether an owner may publish, given snapshots of their account and
/// latest subscription period.
///
/// - No IO
/// - No panics
/// - No stored state (pure policy check over the supplied snapshots)
///
/// Check order is deliberate: approval before subscription, so an unapproved
/// owner always sees "needs approval" even if they hold a past subscription.
/// A missing or non-business-owner account is simply ineligible
/// (`NotApproved`) — a read-only check never errors out to its caller.
pub fn evaluate(
    account: Option<&Account>,
    latest_period: Option<&SubscriptionPeriod>,
    now: DateTime<Utc>,
) -> EligibilityDecision {
    let approved = account
        .is_some_and(|a| a.role() == Role::BusinessOwner && a.is_approved());
    if !approved {
        return EligibilityDecision::denied(DecisionReason::NotApproved);
    }

    let Some(period) = latest_period else {
        return EligibilityDecision::denied(DecisionReason::NoActiveSubscription);
    };

    if period.status() != PeriodStatus::Active || period.end_date() <= now {
        return EligibilityDecision::denied(DecisionReason::SubscriptionExpired);
    }

    EligibilityDecision::granted()
}

/// Convenience wrapper: fetch the snapshots from the directory and ledger,
/// then run [`evaluate`].
pub fn evaluate_owner(
    directory: &dyn AccountDirectory,
    ledger: &dyn SubscriptionLedger,
    owner_id: AccountId,
    now: DateTime<Utc>,
) -> EligibilityDecision {
    let account = directory.account(owner_id).ok();
    let latest = ledger.latest_period(owner_id);
    evaluate(account.as_ref(), latest.as_ref(), now)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use shoramall_accounts::NewAccount;
    use shoramall_subscriptions::PaymentMethod;

    fn owner(approved: bool) -> Account {
        let mut account = Account::register(
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
            account.set_approval(true).unwrap();
        }
        account
    }

    fn customer() -> Account {
        Account::register(
            NewAccount {
                email: "customer@example.com".to_string(),
                phone: "0781234567".to_string(),
                role: Role::Customer,
                business_name: None,
                location: None,
            },
            Utc::now(),
        )
        .unwrap()
    }

    #[test]
    fn unapproved_owner_without_subscription_is_not_approved() {
        let account = owner(false);
        let now = Utc::now();

        let decision = evaluate(Some(&account), None, now);
        assert!(!decision.eligible);
        assert_eq!(decision.reason, DecisionReason::NotApproved);
    }

    #[test]
    fn approved_owner_without_subscription_lacks_active_subscription() {
        let account = owner(true);
        let decision = evaluate(Some(&account), None, Utc::now());
        assert!(!decision.eligible);
        assert_eq!(decision.reason, DecisionReason::NoActiveSubscription);
    }

    #[test]
    fn approved_owner_with_expired_period_sees_subscription_expired() {
        let account = owner(true);
        let now = Utc::now();
        // Opened long enough ago that end_date = now - 1 day.
        let opened = now - Duration::days(32);
        let period = SubscriptionPeriod::open(&account, PaymentMethod::MtnMobileMoney, opened)
            .unwrap();
        assert!(period.end_date() <= now);
        assert_eq!(period.status(), PeriodStatus::Active);

        let decision = evaluate(Some(&account), Some(&period), now);
        assert!(!decision.eligible);
        assert_eq!(decision.reason, DecisionReason::SubscriptionExpired);
    }

    #[test]
    fn approved_owner_with_current_period_is_eligible() {
        let account = owner(true);
        let now = Utc::now();
        let period =
            SubscriptionPeriod::open(&account, PaymentMethod::MtnMobileMoney, now).unwrap();

        let decision = evaluate(Some(&account), Some(&period), now + Duration::days(1));
        assert!(decision.eligible);
        assert_eq!(decision.reason, DecisionReason::Ok);
    }

    #[test]
    fn demoted_period_counts_as_expired() {
        let account = owner(true);
        let now = Utc::now();
        let mut period =
            SubscriptionPeriod::open(&account, PaymentMethod::AirtelMoney, now).unwrap();
        period.demote();

        let decision = evaluate(Some(&account), Some(&period), now);
        assert_eq!(decision.reason, DecisionReason::SubscriptionExpired);
    }

    #[test]
    fn approval_check_precedes_subscription_check() {
        let mut account = owner(true);
        let now = Utc::now();
        let period =
            SubscriptionPeriod::open(&account, PaymentMethod::BankTransfer, now).unwrap();

        // Approval later revoked: the owner holds a current period but must
        // still see NOT_APPROVED, never a subscription reason.
        account.set_approval(false).unwrap();
        let decision = evaluate(Some(&account), Some(&period), now);
        assert_eq!(decision.reason, DecisionReason::NotApproved);
    }

    #[test]
    fn missing_account_is_ineligible_not_an_error() {
        let decision = evaluate(None, None, Utc::now());
        assert!(!decision.eligible);
        assert_eq!(decision.reason, DecisionReason::NotApproved);
    }

    #[test]
    fn non_business_roles_are_ineligible() {
        let account = customer();
        let decision = evaluate(Some(&account), None, Utc::now());
        assert_eq!(decision.reason, DecisionReason::NotApproved);
    }
}
