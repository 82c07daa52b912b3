//! Accounts domain module (the account directory).
//!
//! This crate contains business rules for registered users: roles, business
//! owner profiles, and the admin approval lifecycle. It is purely deterministic
//! domain logic (no IO, no HTTP, no storage); storage backends implement the
//! [`AccountDirectory`] trait.

pub mod account;
pub mod directory;

pub use account::{Account, Location, NewAccount, Role};
pub use directory::AccountDirectory;
