//! Deterministic billing ledger for consulting time entries and milestones.
//!
//! Every operation is a state transition against a key-value store: read the
//! records an invocation touches, compute the new values, write them back.
//! Replaying the same invocations against the same starting state always
//! produces the same bytes.

pub mod config;
pub mod db;
pub mod dispatch;
pub mod error;
pub mod keys;
pub mod ledger;
pub mod models;
pub mod store;

pub use error::{ArgumentError, LedgerError, StoreError};
pub use keys::{EntityKey, Namespace};
pub use ledger::Ledger;
pub use store::{KvStore, MemoryStore};
