use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use shoramall_core::{AccountId, DomainError, DomainResult, Entity, ValueObject};

/// Role of a registered account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Customer,
    BusinessOwner,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Customer => "customer",
            Role::BusinessOwner => "business_owner",
            Role::Admin => "admin",
        }
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a business operates (business owner profile field).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub district: String,
    pub sector: String,
    pub village: Option<String>,
    /// e.g. "Lat: -1.9403, Lng: 29.8739"
    pub gps: Option<String>,
}

impl ValueObject for Location {}

/// Registration input for a new account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAccount {
    pub email: String,
    pub phone: String,
    pub role: Role,
    pub business_name: Option<String>,
    pub location: Option<Location>,
}

/// A registered account (customer, business owner, or admin).
///
/// Only business owners carry eligibility fields: `is_approved` is flipped by
/// explicit admin actions and defaults to false at registration. Accounts are
/// never deleted in this scope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    id: AccountId,
    email: String,
    phone: String,
    role: Role,
    is_approved: bool,
    business_name: Option<String>,
    location: Option<Location>,
    registered_at: DateTime<Utc>,
}

impl Account {
    /// Validate registration input and create the account.
    ///
    /// Business owners always start unapproved; approval is a separate admin
    /// action. Uniqueness of email/phone is a directory concern, not checked here.
    pub fn register(input: NewAccount, registered_at: DateTime<Utc>) -> DomainResult<Self> {
        let email = input.email.trim().to_string();
        if email.is_empty() || !email.contains('@') {
            return Err(DomainError::validation("email is not valid"));
        }

        let phone = input.phone.trim().to_string();
        if phone.is_empty() {
            return Err(DomainError::validation("phone cannot be empty"));
        }

        if input.role == Role::BusinessOwner {
            let named = input
                .business_name
                .as_deref()
                .is_some_and(|n| !n.trim().is_empty());
            if !named {
                return Err(DomainError::validation(
                    "business owners must provide a business name",
                ));
            }
        }

        Ok(Self {
            id: AccountId::new(),
            email,
            phone,
            role: input.role,
            is_approved: false,
            business_name: input.business_name,
            location: input.location,
            registered_at,
        })
    }

    pub fn id_typed(&self) -> AccountId {
        self.id
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn is_approved(&self) -> bool {
        self.is_approved
    }

    pub fn business_name(&self) -> Option<&str> {
        self.business_name.as_deref()
    }

    pub fn location(&self) -> Option<&Location> {
        self.location.as_ref()
    }

    pub fn registered_at(&self) -> DateTime<Utc> {
        self.registered_at
    }

    /// Whether this account is a business owner still waiting on admin approval.
    pub fn awaiting_approval(&self) -> bool {
        self.role == Role::BusinessOwner && !self.is_approved
    }

    /// Set the admin approval flag.
    ///
    /// Idempotent: setting approval to its current value is a no-op, not an
    /// error. Only valid for business owner accounts.
    pub fn set_approval(&mut self, approved: bool) -> DomainResult<()> {
        if self.role != Role::BusinessOwner {
            return Err(DomainError::invalid_role(format!(
                "cannot set approval on a {} account",
                self.role
            )));
        }
        self.is_approved = approved;
        Ok(())
    }
}

impl Entity for Account {
    type Id = AccountId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
