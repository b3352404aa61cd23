//! Runtime configuration for the `bledger` binary.
//!
//! Every option can also come from the environment:
//! - `BILLING_LEDGER_DB` - SQLite database path (default: platform data dir)
//! - `BILLING_LEDGER_TENANT` - tenant segment of active-user keys
//! - `BILLING_LEDGER_INDEX_KEY` - key holding the project index
//! - `RUST_LOG` - log filter (default: `billing_ledger=info`)

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use crate::db::SqliteStore;
use crate::keys::{Namespace, DEFAULT_INDEX_KEY, DEFAULT_TENANT};

pub const DEFAULT_LOG_FILTER: &str = "billing_ledger=info";

#[derive(Debug, Clone, Args)]
pub struct Config {
    /// SQLite database holding ledger state
    #[arg(long, global = true, env = "BILLING_LEDGER_DB")]
    pub db: Option<PathBuf>,

    /// Use a throwaway in-memory store; takes priority over `--db`
    #[arg(long, global = true)]
    pub memory: bool,

    /// Tenant segment used in active-user keys
    #[arg(long, global = true, env = "BILLING_LEDGER_TENANT", default_value = DEFAULT_TENANT)]
    pub tenant: String,

    /// Key under which the project index is stored
    #[arg(long, global = true, env = "BILLING_LEDGER_INDEX_KEY", default_value = DEFAULT_INDEX_KEY)]
    pub index_key: String,
}

impl Config {
    pub fn namespace(&self) -> Namespace {
        Namespace::new(self.index_key.clone(), self.tenant.clone())
    }

    /// Open and migrate the configured database.
    pub fn open_store(&self) -> Result<SqliteStore> {
        let store = match (&self.db, self.memory) {
            (_, true) => SqliteStore::open_memory()?,
            (Some(path), false) => SqliteStore::open(path.clone())
                .with_context(|| format!("Failed to open database at {}", path.display()))?,
            (None, false) => SqliteStore::open_default()?,
        };
        store.migrate()?;
        Ok(store)
    }
}

pub fn log_filter() -> String {
    std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTER.into())
}
