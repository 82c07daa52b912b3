//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (validation,
/// invariants, expected rejections). Infrastructure concerns belong elsewhere.
///
/// Everything here is an *expected business state*: callers are meant to branch
/// on these, surface them to users, or retry with a corrected request. Genuine
/// defects (e.g. a subscription period with `end_date <= start_date` reaching
/// storage) are reported as `InvariantViolation` and indicate a bug upstream,
/// not a user-correctable condition.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. malformed input).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A domain invariant was violated. Indicates a defect, not user error.
    #[error("invariant violated: {0}")]
    InvariantViolation(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// A requested record was not found (domain-level).
    #[error("not found")]
    NotFound,

    /// A conflict occurred (e.g. duplicate registration).
    #[error("conflict: {0}")]
    Conflict(String),

    /// Operation attempted on an account whose role does not support it
    /// (e.g. approving a customer, subscribing as an admin).
    #[error("invalid role: {0}")]
    InvalidRole(String),

    /// Subscription start attempted for a business owner lacking admin approval.
    #[error("business account not approved")]
    NotApproved,
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn invalid_role(msg: impl Into<String>) -> Self {
        Self::InvalidRole(msg.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }
}
