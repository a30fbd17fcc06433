// Domain entities and value objects
pub mod conversions;
pub mod patient;
pub mod vitals;

// Re-export common types for easier imports
pub use patient::{HealthProfile, PatientRecord, RegisterPatientRequest};
pub use vitals::{BloodPressure, BodyTemperature};
