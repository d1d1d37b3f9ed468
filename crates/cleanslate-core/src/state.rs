//! Application state: the loaded addictions plus the store they persist to.
//!
//! Front ends hold one [`AppState`] and route every mutation through it so
//! the in-memory list and the store never diverge.

use chrono::{DateTime, Utc};

use crate::addiction::{Addiction, AddictionPatch, NewAddiction};
use crate::error::{CoreError, Result};
use crate::progress::ProgressSnapshot;
use crate::storage::AddictionStore;

pub struct AppState<S: AddictionStore> {
    store: S,
    addictions: Vec<Addiction>,
}

impl<S: AddictionStore> AppState<S> {
    /// Load all records from `store`.
    ///
    /// # Errors
    /// Returns an error if the store cannot be read.
    pub fn load(store: S) -> Result<Self> {
        let addictions = store.load_all()?;
        tracing::debug!(count = addictions.len(), "loaded addictions");
        Ok(Self { store, addictions })
    }

    pub fn addictions(&self) -> &[Addiction] {
        &self.addictions
    }

    pub fn is_empty(&self) -> bool {
        self.addictions.is_empty()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Look up by exact id, or by a unique id prefix.
    ///
    /// # Errors
    /// Returns [`CoreError::NotFound`] if nothing (or more than one record)
    /// matches.
    pub fn find(&self, id: &str) -> Result<&Addiction> {
        self.position(id).map(|i| &self.addictions[i])
    }

    fn position(&self, id: &str) -> Result<usize> {
        if let Some(i) = self.addictions.iter().position(|a| a.id == id) {
            return Ok(i);
        }
        let mut matches = self
            .addictions
            .iter()
            .enumerate()
            .filter(|(_, a)| !id.is_empty() && a.id.starts_with(id));
        match (matches.next(), matches.next()) {
            (Some((i, _)), None) => Ok(i),
            _ => Err(CoreError::NotFound { id: id.to_string() }),
        }
    }

    /// Create and persist a new record.
    ///
    /// # Errors
    /// Returns an error on invalid input or a store failure.
    pub fn add(&mut self, input: NewAddiction) -> Result<&Addiction> {
        let addiction = Addiction::new(input)?;
        self.store.upsert(&addiction)?;
        tracing::info!(id = %addiction.id, category = %addiction.category, "addiction added");
        self.addictions.push(addiction);
        Ok(&self.addictions[self.addictions.len() - 1])
    }

    /// Append a relapse at `at`.
    ///
    /// # Errors
    /// Returns an error if the id is unknown or the store write fails.
    pub fn record_relapse(&mut self, id: &str, at: DateTime<Utc>) -> Result<&Addiction> {
        self.mutate(id, |a| {
            a.record_relapse(at);
            Ok(())
        })
    }

    /// Reset the streak to `now` and clear relapses.
    ///
    /// # Errors
    /// Returns an error if the id is unknown or the store write fails.
    pub fn restart(&mut self, id: &str, now: DateTime<Utc>) -> Result<&Addiction> {
        self.mutate(id, |a| {
            a.restart(now);
            Ok(())
        })
    }

    /// Apply cosmetic edits.
    ///
    /// # Errors
    /// Returns an error if the id is unknown, the patch is invalid, or the
    /// store write fails.
    pub fn edit(&mut self, id: &str, patch: AddictionPatch) -> Result<&Addiction> {
        self.mutate(id, |a| a.apply(patch).map_err(CoreError::from))
    }

    /// Delete a record.
    ///
    /// # Errors
    /// Returns an error if the id is unknown or the store write fails.
    pub fn delete(&mut self, id: &str) -> Result<Addiction> {
        let i = self.position(id)?;
        let full_id = self.addictions[i].id.clone();
        self.store.delete(&full_id)?;
        tracing::info!(id = %full_id, "addiction deleted");
        Ok(self.addictions.remove(i))
    }

    /// Progress for every record at `now`.
    pub fn snapshots(&self, now: DateTime<Utc>) -> Vec<ProgressSnapshot> {
        self.addictions
            .iter()
            .map(|a| ProgressSnapshot::compute(a, now))
            .collect()
    }

    // Edits a copy so a failed validation or store write leaves memory
    // unchanged.
    fn mutate<F>(&mut self, id: &str, f: F) -> Result<&Addiction>
    where
        F: FnOnce(&mut Addiction) -> Result<()>,
    {
        let i = self.position(id)?;
        let mut updated = self.addictions[i].clone();
        f(&mut updated)?;
        self.store.upsert(&updated)?;
        tracing::debug!(id = %updated.id, "addiction updated");
        self.addictions[i] = updated;
        Ok(&self.addictions[i])
    }
}
