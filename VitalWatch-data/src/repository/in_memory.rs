use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::models::patient::PatientRecord;
use super::errors::RepositoryError;

/// In-memory storage implementation for patient records
#[derive(Debug, Clone)]
pub struct InMemoryStorage {
    /// Storage for patient records, keyed by patient identifier
    records: Arc<Mutex<HashMap<String, PatientRecord>>>,
}

impl Default for InMemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStorage {
    /// Create a new in-memory storage
    pub fn new() -> Self {
        Self {
            records: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Store a record in memory. The identifier must not already be taken.
    pub async fn insert_record(
        &self,
        record: &PatientRecord,
    ) -> Result<PatientRecord, RepositoryError> {
        let mut store = self
            .records
            .lock()
            .map_err(|e| RepositoryError::Lock(e.to_string()))?;

        if store.contains_key(&record.id) {
            return Err(RepositoryError::Duplicate(record.id.clone()));
        }

        store.insert(record.id.clone(), record.clone());
        Ok(record.clone())
    }

    /// Get a record by identifier from memory
    pub async fn get_by_id(&self, id: &str) -> Result<Option<PatientRecord>, RepositoryError> {
        let store = self
            .records
            .lock()
            .map_err(|e| RepositoryError::Lock(e.to_string()))?;
        Ok(store.get(id).cloned())
    }

    /// Get all records from memory, ordered by identifier
    pub async fn get_all(&self) -> Result<Vec<PatientRecord>, RepositoryError> {
        let store = self
            .records
            .lock()
            .map_err(|e| RepositoryError::Lock(e.to_string()))?;

        let mut records: Vec<PatientRecord> = store.values().cloned().collect();
        records.sort_by(|a, b| a.id.cmp(&b.id));

        Ok(records)
    }
}
