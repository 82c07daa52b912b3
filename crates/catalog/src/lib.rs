//! Catalog guard: the enforcement seam for listing mutations.
//!
//! The product catalog itself (listing storage and mutation) lives outside
//! this core. Whatever implements it must obtain an [`Authorization`] from
//! [`CatalogGuard`] before creating or editing a listing, and abort on
//! [`GuardDenial`].

pub mod guard;

pub use guard::{Authorization, CatalogGuard, GuardDenial};
