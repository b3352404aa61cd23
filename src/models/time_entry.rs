use serde::{Deserialize, Serialize};

use crate::error::ArgumentError;

use super::args::{expect_arity, required};

/// Hours a person logged against a project task.
///
/// Entries are immutable once appended. `derived_amount` is computed from the
/// person's project rate when the entry is recorded; callers never supply it.
///
/// Older records were written with `user` and `totalamount`; both names are
/// still accepted when decoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeEntry {
    #[serde(rename = "projectname")]
    pub project_name: String,
    #[serde(rename = "taskname")]
    pub task_name: String,
    #[serde(rename = "personname", alias = "user")]
    pub person_name: String,
    #[serde(rename = "quantityhours")]
    pub quantity_in_hours: String,
    /// Expense or category tag, e.g. `travel`.
    #[serde(rename = "expensetype", default)]
    pub expense_type: String,
    #[serde(rename = "derivedamount", alias = "totalamount")]
    pub derived_amount: String,
}

/// Input for recording a time entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeEntryInput {
    pub project_name: String,
    pub task_name: String,
    pub person_name: String,
    pub quantity_in_hours: String,
    pub expense_type: String,
}

impl TimeEntryInput {
    const FIELDS: [&'static str; 5] = [
        "ProjectName",
        "TaskName",
        "PersonName",
        "QuantityInHours",
        "ExpenseType",
    ];

    /// Build from positional arguments: project, task, person, hours, expense type.
    pub fn from_args(args: &[String]) -> Result<Self, ArgumentError> {
        expect_arity(args, Self::FIELDS.len())?;
        Ok(Self {
            project_name: required(args, 0, Self::FIELDS[0])?,
            task_name: required(args, 1, Self::FIELDS[1])?,
            person_name: required(args, 2, Self::FIELDS[2])?,
            quantity_in_hours: required(args, 3, Self::FIELDS[3])?,
            expense_type: required(args, 4, Self::FIELDS[4])?,
        })
    }

    pub fn into_entry(self, derived_amount: String) -> TimeEntry {
        TimeEntry {
            project_name: self.project_name,
            task_name: self.task_name,
            person_name: self.person_name,
            quantity_in_hours: self.quantity_in_hours,
            expense_type: self.expense_type,
            derived_amount,
        }
    }
}
