// Testing utilities and mock implementations for the domain layer
// This module is available in unit tests and with the "mock" feature

// Re-export useful test mocks from the data layer
pub use vitalwatch_data::repository::tests::MockPatientRepository;

use rust_decimal::Decimal;
use vitalwatch_data::models::patient::{BloodPressure, HealthProfile, PatientRecord};

/// Build a stored patient record with the given baseline vitals
pub fn stored_patient(
    id: &str,
    normal_high: u16,
    normal_low: u16,
    normal_temperature: Decimal,
) -> PatientRecord {
    PatientRecord {
        id: id.to_string(),
        name: "Jane".to_string(),
        surname: "Doe".to_string(),
        birth_date: None,
        health_profile: HealthProfile {
            normal_temperature,
            normal_blood_pressure: BloodPressure {
                high: normal_high,
                low: normal_low,
            },
        },
    }
}
