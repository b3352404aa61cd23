//! Domain records for the billing ledger.
//!
//! # Core Concepts
//!
//! ## Seeded Reference Data
//!
//! - [`ProjectIndex`]: The ordered list of billable projects.
//! - [`RateTable`]: Per-project hourly rates, one [`UserRate`] per person.
//!
//! ## Append-only Ledgers
//!
//! Records are never edited or removed once written:
//!
//! - [`TimeEntry`]: Hours a person logged against a project task, with the
//!   amount derived from their rate.
//! - [`Milestone`]: A completed project milestone with a caller-supplied amount.
//!
//! ## Indexes
//!
//! - [`ActiveUsers`]: Who has logged time on a project. Grows only.

mod active_users;
mod amount;
mod args;
mod milestone;
mod project;
mod rate;
mod time_entry;

pub use active_users::*;
pub use amount::*;
pub use milestone::*;
pub use project::*;
pub use rate::*;
pub use time_entry::*;
