//! Fixed reference data written by bootstrap.

use crate::models::{ProjectIndex, RateTable, UserRate};

pub const SEED_PROJECTS: [&str; 3] = ["Proj1", "Proj2", "Proj3"];

pub fn project_index() -> ProjectIndex {
    ProjectIndex::new(SEED_PROJECTS)
}

/// Rates for `Proj1`.
pub fn primary_rates() -> RateTable {
    RateTable::new(vec![
        UserRate::new("Chandra", "110"),
        UserRate::new("Sudheer", "100"),
        UserRate::new("Sanjay", "80"),
    ])
}

/// Rates for `Proj2`, reused verbatim for `Proj3`.
pub fn secondary_rates() -> RateTable {
    RateTable::new(vec![
        UserRate::new("Chandra", "105"),
        UserRate::new("Sudheer", "110"),
        UserRate::new("Sanjay", "75"),
    ])
}
