//! In-memory store, used by tests and by callers that persist elsewhere.

use super::AddictionStore;
use crate::addiction::Addiction;
use crate::error::Result;

#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    records: Vec<Addiction>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl AddictionStore for MemoryStore {
    fn load_all(&self) -> Result<Vec<Addiction>> {
        Ok(self.records.clone())
    }

    fn upsert(&mut self, addiction: &Addiction) -> Result<()> {
        match self.records.iter_mut().find(|a| a.id == addiction.id) {
            Some(existing) => *existing = addiction.clone(),
            None => self.records.push(addiction.clone()),
        }
        Ok(())
    }

    fn delete(&mut self, id: &str) -> Result<bool> {
        let before = self.records.len();
        self.records.retain(|a| a.id != id);
        Ok(self.records.len() != before)
    }
}
