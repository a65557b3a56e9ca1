//! Session-scoped transaction storage.

pub mod store;

pub use store::LedgerStore;
