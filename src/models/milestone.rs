use serde::{Deserialize, Serialize};

use crate::error::ArgumentError;

use super::args::{expect_arity, required};

/// A completed project milestone.
///
/// Unlike [`TimeEntry`](super::TimeEntry), the amount is taken verbatim from
/// the caller. It is neither parsed nor reconciled against logged time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Milestone {
    #[serde(rename = "projectname")]
    pub project_name: String,
    #[serde(rename = "milestonename")]
    pub milestone_name: String,
    #[serde(rename = "personname", alias = "user")]
    pub person_name: String,
    pub amount: String,
}

/// Input for completing a milestone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MilestoneInput {
    pub project_name: String,
    pub milestone_name: String,
    pub person_name: String,
    pub amount: String,
}

impl MilestoneInput {
    const FIELDS: [&'static str; 4] = ["ProjectName", "MilestoneName", "PersonName", "Amount"];

    /// Build from positional arguments: project, milestone, person, amount.
    pub fn from_args(args: &[String]) -> Result<Self, ArgumentError> {
        expect_arity(args, Self::FIELDS.len())?;
        Ok(Self {
            project_name: required(args, 0, Self::FIELDS[0])?,
            milestone_name: required(args, 1, Self::FIELDS[1])?,
            person_name: required(args, 2, Self::FIELDS[2])?,
            amount: required(args, 3, Self::FIELDS[3])?,
        })
    }
}

impl From<MilestoneInput> for Milestone {
    fn from(input: MilestoneInput) -> Self {
        Self {
            project_name: input.project_name,
            milestone_name: input.milestone_name,
            person_name: input.person_name,
            amount: input.amount,
        }
    }
}
