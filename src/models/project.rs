use serde::{Deserialize, Serialize};

/// The ordered list of billable project identifiers.
///
/// There is exactly one index per namespace. It is written by bootstrap and
/// never changed afterwards; no operation adds or removes a project.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectIndex(pub Vec<String>);

impl ProjectIndex {
    pub fn new<I, S>(projects: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(projects.into_iter().map(Into::into).collect())
    }

    pub fn projects(&self) -> &[String] {
        &self.0
    }
}
