use serde::{Deserialize, Serialize};

/// Everyone who has logged time on a project.
///
/// Membership is case-insensitive and the set only grows. Members keep the
/// spelling of their first time entry, in insertion order, so the encoded
/// value is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActiveUsers(pub Vec<String>);

impl ActiveUsers {
    pub fn members(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, person: &str) -> bool {
        let wanted = person.to_lowercase();
        self.0.iter().any(|member| member.to_lowercase() == wanted)
    }

    /// Add `person` unless already present. Returns whether the set changed.
    pub fn insert(&mut self, person: &str) -> bool {
        if self.contains(person) {
            return false;
        }
        self.0.push(person.to_string());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_is_case_insensitive() {
        let mut users = ActiveUsers::default();
        assert!(users.insert("Chandra"));
        assert!(!users.insert("chandra"));
        assert!(!users.insert("CHANDRA"));
        assert_eq!(users.members(), ["Chandra".to_string()]);
    }

    #[test]
    fn encodes_as_plain_array() {
        let mut users = ActiveUsers::default();
        users.insert("Chandra");
        users.insert("Sanjay");
        assert_eq!(serde_json::to_string(&users).unwrap(), r#"["Chandra","Sanjay"]"#);
    }
}
