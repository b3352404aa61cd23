//! State transitions for the billing ledger.
//!
//! [`Ledger`] wraps a [`KvStore`] and a key [`Namespace`]. Each public
//! operation reads what it needs, computes, and writes back; nothing is cached
//! between calls. Invocations must be applied one at a time by the host.

pub mod seed;

use crate::error::{ArgumentError, LedgerError};
use crate::keys::{EntityKey, Namespace};
use crate::models::*;
use crate::store::{self, KvStore};

pub struct Ledger<S> {
    store: S,
    namespace: Namespace,
}

impl<S: KvStore> Ledger<S> {
    pub fn new(store: S) -> Self {
        Self::with_namespace(store, Namespace::default())
    }

    pub fn with_namespace(store: S, namespace: Namespace) -> Self {
        Self { store, namespace }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn key(&self, entity: EntityKey<'_>) -> String {
        self.namespace.key(entity)
    }

    // ============================================================
    // Bootstrap
    // ============================================================

    /// Reset the project index and rate tables to the seed data.
    ///
    /// Takes exactly one argument, stored under the marker key. Every seeded
    /// key is overwritten, so calling this again restores the same state.
    pub fn bootstrap(&self, args: &[String]) -> Result<(), LedgerError> {
        let [marker] = args else {
            return Err(ArgumentError::Count {
                expected: 1,
                actual: args.len(),
            }
            .into());
        };

        self.store.put(&self.key(EntityKey::Marker), marker.as_bytes())?;
        store::save(
            &self.store,
            &self.key(EntityKey::ProjectIndex),
            &seed::project_index(),
        )?;

        let [first, second, third] = seed::SEED_PROJECTS;
        store::save(
            &self.store,
            &self.key(EntityKey::RateTable { project: first }),
            &seed::primary_rates(),
        )?;

        let secondary = seed::secondary_rates();
        store::save(
            &self.store,
            &self.key(EntityKey::RateTable { project: second }),
            &secondary,
        )?;
        store::save(
            &self.store,
            &self.key(EntityKey::RateTable { project: third }),
            &secondary,
        )?;

        tracing::info!("Bootstrapped {} projects", seed::SEED_PROJECTS.len());
        Ok(())
    }

    // ============================================================
    // Rates
    // ============================================================

    /// The raw hourly rate for `person` on `project`, if the rate table has
    /// one. A missing or unreadable table has no rates.
    pub fn resolve_rate(&self, project: &str, person: &str) -> Result<Option<String>, LedgerError> {
        let table = self.rate_table(project)?;
        Ok(table.resolve(person).map(str::to_string))
    }

    // ============================================================
    // Time entries
    // ============================================================

    /// Record hours for a person and derive the billed amount from their rate.
    ///
    /// Appends to the `(project, person)` ledger, then adds the person to the
    /// project's active users if they are new. The two keys are written
    /// separately: a failure on the second write leaves the entry recorded.
    pub fn record_time_entry(&self, input: TimeEntryInput) -> Result<TimeEntry, LedgerError> {
        let rate = self.resolve_rate(&input.project_name, &input.person_name)?;
        if rate.is_none() {
            tracing::debug!(
                "No rate for {} on {}, amount stays {}",
                input.person_name,
                input.project_name,
                ZERO_AMOUNT
            );
        }
        let derived = derive_amount(&input.quantity_in_hours, rate.as_deref());
        let entry = input.into_entry(derived);

        let entries_key = self.key(EntityKey::TimeEntries {
            project: &entry.project_name,
            person: &entry.person_name,
        });
        let entries = store::append_to_collection(&self.store, &entries_key, entry.clone())?;

        self.mark_active(&entry.project_name, &entry.person_name)?;

        tracing::info!(
            "Recorded {}h of {} for {} on {} ({} entries, amount {})",
            entry.quantity_in_hours,
            entry.task_name,
            entry.person_name,
            entry.project_name,
            entries.len(),
            entry.derived_amount
        );
        Ok(entry)
    }

    /// Add `person` to the project's active users. Skips the write when they
    /// are already a member. Returns whether the set changed.
    fn mark_active(&self, project: &str, person: &str) -> Result<bool, LedgerError> {
        let key = self.key(EntityKey::ActiveUsers { project });
        let mut users: ActiveUsers = store::load_or_default(&self.store, &key)?;
        if !users.insert(person) {
            return Ok(false);
        }
        store::save(&self.store, &key, &users)?;
        Ok(true)
    }

    // ============================================================
    // Milestones
    // ============================================================

    /// Append a completed milestone. The amount is stored exactly as given.
    pub fn complete_milestone(&self, input: MilestoneInput) -> Result<Milestone, LedgerError> {
        let milestone = Milestone::from(input);
        let key = self.key(EntityKey::Milestones {
            project: &milestone.project_name,
        });
        let milestones = store::append_to_collection(&self.store, &key, milestone.clone())?;

        tracing::info!(
            "Completed milestone {} on {} ({} milestones)",
            milestone.milestone_name,
            milestone.project_name,
            milestones.len()
        );
        Ok(milestone)
    }

    // ============================================================
    // Reads
    // ============================================================

    /// The raw bytes stored at `key`, undecoded.
    pub fn read(&self, key: &str) -> Result<Vec<u8>, LedgerError> {
        match self.store.get(key) {
            Ok(Some(bytes)) => Ok(bytes),
            Ok(None) => Err(LedgerError::NotFound(key.to_string())),
            Err(e) => {
                tracing::warn!("Read of {} failed: {}", key, e);
                Err(LedgerError::NotFound(key.to_string()))
            }
        }
    }

    pub fn projects(&self) -> Result<ProjectIndex, LedgerError> {
        Ok(store::load_or_default(
            &self.store,
            &self.key(EntityKey::ProjectIndex),
        )?)
    }

    pub fn rate_table(&self, project: &str) -> Result<RateTable, LedgerError> {
        Ok(store::load_or_default(
            &self.store,
            &self.key(EntityKey::RateTable { project }),
        )?)
    }

    pub fn time_entries(&self, project: &str, person: &str) -> Result<Vec<TimeEntry>, LedgerError> {
        Ok(store::load_or_default(
            &self.store,
            &self.key(EntityKey::TimeEntries { project, person }),
        )?)
    }

    pub fn active_users(&self, project: &str) -> Result<ActiveUsers, LedgerError> {
        Ok(store::load_or_default(
            &self.store,
            &self.key(EntityKey::ActiveUsers { project }),
        )?)
    }

    pub fn milestones(&self, project: &str) -> Result<Vec<Milestone>, LedgerError> {
        Ok(store::load_or_default(
            &self.store,
            &self.key(EntityKey::Milestones { project }),
        )?)
    }
}
