use async_trait::async_trait;
use tracing::debug;
use uuid::Uuid;

use crate::models::patient::{CreatePatientRequest, PatientRecord};
use super::errors::RepositoryError;
use super::in_memory::InMemoryStorage;

/// Repository trait for patient records
#[async_trait]
pub trait PatientRepositoryTrait {
    /// Store a new patient record from a request
    async fn add(&self, request: CreatePatientRequest) -> Result<PatientRecord, RepositoryError>;

    /// Get a patient record by its identifier
    async fn get_by_id(&self, id: &str) -> Result<Option<PatientRecord>, RepositoryError>;

    /// Get all stored patient records
    async fn get_all(&self) -> Result<Vec<PatientRecord>, RepositoryError>;
}

/// Repository for patient records backed by in-memory storage.
///
/// Clones share the same underlying store, so one repository can serve
/// several services at once.
#[derive(Debug, Clone, Default)]
pub struct PatientRepository {
    storage: InMemoryStorage,
}

impl PatientRepository {
    /// Create a new repository
    pub fn new() -> Self {
        Self {
            storage: InMemoryStorage::new(),
        }
    }
}

#[async_trait]
impl PatientRepositoryTrait for PatientRepository {
    /// Store a new patient record from a request
    async fn add(&self, request: CreatePatientRequest) -> Result<PatientRecord, RepositoryError> {
        // Use the caller-supplied identifier or generate one
        let id = match request.id {
            Some(id) => id,
            None => Uuid::new_v4().to_string(),
        };

        if id.trim().is_empty() {
            return Err(RepositoryError::Validation(
                "Patient identifier must not be empty".to_string(),
            ));
        }

        let record = PatientRecord {
            id,
            name: request.name,
            surname: request.surname,
            birth_date: request.birth_date,
            health_profile: request.health_profile,
        };

        debug!("Storing patient record: {}", record.id);
        self.storage.insert_record(&record).await
    }

    /// Get a patient record by its identifier
    async fn get_by_id(&self, id: &str) -> Result<Option<PatientRecord>, RepositoryError> {
        debug!("Getting patient record by id: {}", id);
        self.storage.get_by_id(id).await
    }

    /// Get all stored patient records
    async fn get_all(&self) -> Result<Vec<PatientRecord>, RepositoryError> {
        self.storage.get_all().await
    }
}

/// Mock patient repository for testing
#[cfg(any(test, feature = "mock"))]
pub mod tests {
    use super::*;

    /// Mock implementation of PatientRepository for testing
    pub struct MockPatientRepository {
        records: Vec<PatientRecord>,
    }

    impl Default for MockPatientRepository {
        fn default() -> Self {
            Self::new()
        }
    }

    impl MockPatientRepository {
        /// Create a new empty mock repository
        pub fn new() -> Self {
            Self {
                records: Vec::new(),
            }
        }

        /// Create a mock repository with predefined patient records
        pub fn with_patients(records: Vec<PatientRecord>) -> Self {
            Self { records }
        }
    }

    #[async_trait]
    impl PatientRepositoryTrait for MockPatientRepository {
        async fn add(&self, request: CreatePatientRequest) -> Result<PatientRecord, RepositoryError> {
            let id = request
                .id
                .unwrap_or_else(|| Uuid::new_v4().to_string());

            if self.records.iter().any(|r| r.id == id) {
                return Err(RepositoryError::Duplicate(id));
            }

            Ok(PatientRecord {
                id,
                name: request.name,
                surname: request.surname,
                birth_date: request.birth_date,
                health_profile: request.health_profile,
            })
        }

        async fn get_by_id(&self, id: &str) -> Result<Option<PatientRecord>, RepositoryError> {
            Ok(self.records.iter().find(|r| r.id == id).cloned())
        }

        async fn get_all(&self) -> Result<Vec<PatientRecord>, RepositoryError> {
            Ok(self.records.clone())
        }
    }
}
