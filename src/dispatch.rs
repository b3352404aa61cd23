//! Routes a function name and string arguments to a ledger operation.
//!
//! Mutations go through [`invoke`], reads through [`query`]. A name that is
//! valid on one path is unknown on the other.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ArgumentError, LedgerError};
use crate::ledger::Ledger;
use crate::models::{MilestoneInput, TimeEntryInput};
use crate::store::KvStore;

/// Every function name the dispatcher understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Function {
    Init,
    ResourceTimeEntry,
    CompleteProjectMilestone,
    Read,
}

impl Function {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Init => "init",
            Self::ResourceTimeEntry => "resourcetimeentry",
            Self::CompleteProjectMilestone => "completeprojectmilestone",
            Self::Read => "read",
        }
    }
}

impl FromStr for Function {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "init" => Ok(Self::Init),
            "resourcetimeentry" => Ok(Self::ResourceTimeEntry),
            "completeprojectmilestone" => Ok(Self::CompleteProjectMilestone),
            "read" => Ok(Self::Read),
            other => Err(LedgerError::UnknownFunction(other.to_string())),
        }
    }
}

/// One call as the host delivers it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invocation {
    pub function: String,
    #[serde(default)]
    pub args: Vec<String>,
}

impl Invocation {
    pub fn new<I, A>(function: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<String>,
    {
        Self {
            function: function.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }
}

/// Apply a state-changing function. Successful mutations return no payload.
pub fn invoke<S: KvStore>(
    ledger: &Ledger<S>,
    function: &str,
    args: &[String],
) -> Result<Option<Vec<u8>>, LedgerError> {
    tracing::debug!("invoke is running {}", function);

    match function.parse::<Function>()? {
        Function::Init => ledger.bootstrap(args)?,
        Function::ResourceTimeEntry => {
            ledger.record_time_entry(TimeEntryInput::from_args(args)?)?;
        }
        Function::CompleteProjectMilestone => {
            ledger.complete_milestone(MilestoneInput::from_args(args)?)?;
        }
        Function::Read => return Err(LedgerError::UnknownFunction(function.to_string())),
    }
    Ok(None)
}

/// Run a read-only function and return its payload.
pub fn query<S: KvStore>(
    ledger: &Ledger<S>,
    function: &str,
    args: &[String],
) -> Result<Option<Vec<u8>>, LedgerError> {
    tracing::debug!("query is running {}", function);

    let unknown = || LedgerError::UnknownQuery(function.to_string());
    match function.parse::<Function>().map_err(|_| unknown())? {
        Function::Read => {
            let [key] = args else {
                return Err(ArgumentError::Count {
                    expected: 1,
                    actual: args.len(),
                }
                .into());
            };
            ledger.read(key).map(Some)
        }
        _ => Err(unknown()),
    }
}

/// Apply each invocation through [`invoke`] in order.
///
/// A failed invocation is reported and the run continues; it leaves whatever
/// its successful writes produced, exactly as it would live.
pub fn replay<S: KvStore>(
    ledger: &Ledger<S>,
    invocations: &[Invocation],
) -> Vec<Result<Option<Vec<u8>>, LedgerError>> {
    invocations
        .iter()
        .map(|inv| {
            let outcome = invoke(ledger, &inv.function, &inv.args);
            if let Err(ref e) = outcome {
                tracing::warn!("Replayed {} failed: {}", inv.function, e);
            }
            outcome
        })
        .collect()
}
