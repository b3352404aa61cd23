//! Key namespace for every record the ledger stores.
//!
//! Keys are built by plain concatenation:
//!
//! | Record | Key |
//! |---|---|
//! | bootstrap marker | `test` |
//! | project index | the namespace index key (`GE::ABCConsulting`) |
//! | rate table | `<project>` |
//! | time entries | `<project>::<person>` |
//! | active users | `<project>::users::<tenant>` |
//! | milestones | `<project>::milestones` |
//!
//! Identifiers are not escaped. A project or person containing `::` can
//! collide with another record's key.

use serde::{Deserialize, Serialize};

pub const MARKER_KEY: &str = "test";
pub const DEFAULT_INDEX_KEY: &str = "GE::ABCConsulting";
pub const DEFAULT_TENANT: &str = "ABCConsulting";

const SEPARATOR: &str = "::";
const USERS_SEGMENT: &str = "users";
const MILESTONES_SEGMENT: &str = "milestones";

/// A record the ledger reads or writes, with the identifiers that locate it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKey<'a> {
    Marker,
    ProjectIndex,
    RateTable { project: &'a str },
    TimeEntries { project: &'a str, person: &'a str },
    ActiveUsers { project: &'a str },
    Milestones { project: &'a str },
}

/// The fixed parts of the key space for one deployment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Namespace {
    pub index_key: String,
    pub tenant: String,
}

impl Default for Namespace {
    fn default() -> Self {
        Self {
            index_key: DEFAULT_INDEX_KEY.to_string(),
            tenant: DEFAULT_TENANT.to_string(),
        }
    }
}

impl Namespace {
    pub fn new(index_key: impl Into<String>, tenant: impl Into<String>) -> Self {
        Self {
            index_key: index_key.into(),
            tenant: tenant.into(),
        }
    }

    pub fn key(&self, entity: EntityKey<'_>) -> String {
        match entity {
            EntityKey::Marker => MARKER_KEY.to_string(),
            EntityKey::ProjectIndex => self.index_key.clone(),
            EntityKey::RateTable { project } => project.to_string(),
            EntityKey::TimeEntries { project, person } => {
                format!("{project}{SEPARATOR}{person}")
            }
            EntityKey::ActiveUsers { project } => {
                format!("{project}{SEPARATOR}{USERS_SEGMENT}{SEPARATOR}{}", self.tenant)
            }
            EntityKey::Milestones { project } => {
                format!("{project}{SEPARATOR}{MILESTONES_SEGMENT}")
            }
        }
    }
}
