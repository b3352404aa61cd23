//! Error types for the ledger and its storage collaborator.

use thiserror::Error;

/// Failures reported by a [`KvStore`](crate::store::KvStore).
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Failed to encode value: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

/// Invalid invocation arguments.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ArgumentError {
    #[error("Incorrect number of arguments. Expecting {expected}")]
    Count { expected: usize, actual: usize },

    #[error("{} argument {field} must be a non-empty string", ordinal(.position))]
    Empty {
        position: usize,
        field: &'static str,
    },
}

/// Everything an invocation can fail with. All of them end the invocation.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error(transparent)]
    Argument(#[from] ArgumentError),

    #[error("Storage failure: {0}")]
    Storage(#[from] StoreError),

    #[error("Received unknown function invocation: {0}")]
    UnknownFunction(String),

    #[error("Received unknown function query: {0}")]
    UnknownQuery(String),

    #[error("{{\"Error\":\"Failed to get state for {0}\"}}")]
    NotFound(String),
}

fn ordinal(n: &usize) -> String {
    let n = *n;
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}
