pub mod alert;
pub mod monitoring;
pub mod patient;

// Domain services
// This module contains business logic implementations.

// Re-export service traits and factory functions
pub use alert::{AlertNotifierTrait, BufferedAlertNotifier, TracingAlertNotifier};
pub use monitoring::{
    create_default_medical_service, MedicalService, MedicalServiceError, MedicalServiceTrait,
};
pub use patient::{
    create_default_patient_service, PatientDirectoryService, PatientServiceError,
    PatientServiceTrait,
};
