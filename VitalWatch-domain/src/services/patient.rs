use async_trait::async_trait;
use thiserror::Error;
use tracing::debug;
use validator::Validate;

use crate::entities::conversions;
use crate::entities::patient::{PatientRecord, RegisterPatientRequest};
use vitalwatch_data::repository::{PatientRepository, PatientRepositoryTrait, RepositoryError};

/// Patient directory service errors
#[derive(Debug, Error)]
pub enum PatientServiceError {
    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Patient not found error
    #[error("Patient not found: {0}")]
    NotFound(String),

    /// Duplicate registration error
    #[error("Patient already registered: {0}")]
    AlreadyRegistered(String),

    /// Repository error
    #[error("Repository error: {0}")]
    Repository(String),
}

/// Trait for patient directory operations
#[async_trait]
pub trait PatientServiceTrait {
    /// Validate a register patient request
    fn validate_register_request(
        &self,
        request: &RegisterPatientRequest,
    ) -> Result<(), PatientServiceError>;

    /// Register a new patient
    async fn register_patient(
        &self,
        request: RegisterPatientRequest,
    ) -> Result<PatientRecord, PatientServiceError>;

    /// Get a patient record by identifier
    async fn get_patient(&self, id: &str) -> Result<PatientRecord, PatientServiceError>;

    /// List all registered patients
    async fn list_patients(&self) -> Result<Vec<PatientRecord>, PatientServiceError>;
}

/// Patient directory service over the patient repository
pub struct PatientDirectoryService<R: PatientRepositoryTrait> {
    repository: R,
}

impl<R: PatientRepositoryTrait> PatientDirectoryService<R> {
    /// Create a new patient directory service
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Map repository errors to service errors
    fn map_repo_error(&self, err: RepositoryError) -> PatientServiceError {
        match err {
            RepositoryError::NotFound(id) => PatientServiceError::NotFound(id),
            RepositoryError::Duplicate(id) => PatientServiceError::AlreadyRegistered(id),
            RepositoryError::Validation(msg) => PatientServiceError::Validation(msg),
            _ => PatientServiceError::Repository(err.to_string()),
        }
    }
}

#[async_trait]
impl<R: PatientRepositoryTrait + Send + Sync> PatientServiceTrait for PatientDirectoryService<R> {
    /// Validate a register patient request
    fn validate_register_request(
        &self,
        request: &RegisterPatientRequest,
    ) -> Result<(), PatientServiceError> {
        if let Err(validation_errors) = request.validate() {
            let error_message = validation_errors
                .field_errors()
                .iter()
                .map(|(field, errors)| {
                    let error_msgs: Vec<String> = errors
                        .iter()
                        .map(|err| match &err.message {
                            Some(msg) => msg.to_string(),
                            None => format!("Invalid {}", field),
                        })
                        .collect();
                    format!("{}: {}", field, error_msgs.join(", "))
                })
                .collect::<Vec<String>>()
                .join("; ");

            return Err(PatientServiceError::Validation(error_message));
        }

        // An explicit identifier must carry visible characters
        if let Some(id) = &request.id {
            if id.trim().is_empty() {
                return Err(PatientServiceError::Validation(
                    "id: Identifier must not be blank".to_string(),
                ));
            }
        }

        Ok(())
    }

    /// Register a new patient
    async fn register_patient(
        &self,
        request: RegisterPatientRequest,
    ) -> Result<PatientRecord, PatientServiceError> {
        self.validate_register_request(&request)?;

        let data_request = conversions::convert_to_data_create_request(&request);

        let data_record = self
            .repository
            .add(data_request)
            .await
            .map_err(|e| self.map_repo_error(e))?;

        debug!("Registered patient: {}", data_record.id);
        Ok(conversions::convert_to_domain_record(data_record))
    }

    /// Get a patient record by identifier
    async fn get_patient(&self, id: &str) -> Result<PatientRecord, PatientServiceError> {
        let data_record = self
            .repository
            .get_by_id(id)
            .await
            .map_err(|e| self.map_repo_error(e))?
            .ok_or_else(|| PatientServiceError::NotFound(id.to_string()))?;

        Ok(conversions::convert_to_domain_record(data_record))
    }

    /// List all registered patients
    async fn list_patients(&self) -> Result<Vec<PatientRecord>, PatientServiceError> {
        let data_records = self
            .repository
            .get_all()
            .await
            .map_err(|e| self.map_repo_error(e))?;

        Ok(data_records
            .into_iter()
            .map(conversions::convert_to_domain_record)
            .collect())
    }
}

/// Create a patient directory service over the given repository. Clone the
/// repository to share one patient store with the monitoring service.
pub fn create_default_patient_service(
    repository: PatientRepository,
) -> impl PatientServiceTrait + Send + Sync {
    PatientDirectoryService::new(repository)
}
