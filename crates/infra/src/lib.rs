//! In-memory infrastructure for the marketplace core.
//!
//! The reference system is intentionally memory-only and non-durable: these
//! stores hold process-local maps behind `RwLock` and vanish with the process.
//! A persistent deployment would swap in transactional implementations of the
//! same traits.

pub mod checkout;
pub mod in_memory_directory;
pub mod in_memory_ledger;


pub use checkout::CheckoutService;
pub use in_memory_directory::InMemoryAccountDirectory;
pub use in_memory_ledger::InMemorySubscriptionLedger;
