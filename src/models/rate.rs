use serde::{Deserialize, Serialize};

/// A person's hourly rate on one project.
///
/// Rates are stored as decimal strings. They are not validated when written;
/// a rate that fails to parse bills at zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRate {
    #[serde(rename = "user")]
    pub person: String,
    pub rate: String,
}

impl UserRate {
    pub fn new(person: impl Into<String>, rate: impl Into<String>) -> Self {
        Self {
            person: person.into(),
            rate: rate.into(),
        }
    }
}

/// Hourly rates for every person billing against a project.
///
/// Stored under the project identifier itself. Lookups are case-insensitive
/// and, when a person appears more than once, the last entry wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RateTable(pub Vec<UserRate>);

impl RateTable {
    pub fn new(rates: Vec<UserRate>) -> Self {
        Self(rates)
    }

    pub fn rates(&self) -> &[UserRate] {
        &self.0
    }

    /// Resolve the raw rate string for `person`.
    ///
    /// Scans the whole table; a later match overwrites an earlier one.
    pub fn resolve(&self, person: &str) -> Option<&str> {
        let wanted = person.to_lowercase();
        let mut found = None;
        for entry in &self.0 {
            if entry.person.to_lowercase() == wanted {
                found = Some(entry.rate.as_str());
            }
        }
        found
    }
}
