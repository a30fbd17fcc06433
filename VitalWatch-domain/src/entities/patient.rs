use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::vitals::{BloodPressure, BodyTemperature};

/// A patient's baseline health profile.
///
/// Holds the personal normal values fresh measurements are compared
/// against. Immutable for the duration of a single check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthProfile {
    /// Personal normal body temperature
    pub normal_temperature: BodyTemperature,

    /// Personal normal blood pressure
    pub normal_blood_pressure: BloodPressure,
}

/// Domain model for a patient record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientRecord {
    /// Unique identifier for the patient
    pub id: String,

    /// Patient given name
    pub name: String,

    /// Patient family name
    pub surname: String,

    /// Date of birth
    pub birth_date: Option<NaiveDate>,

    /// Baseline health profile for this patient
    pub health_profile: HealthProfile,
}

/// Request payload for registering a new patient
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterPatientRequest {
    /// Identifier for the new record. Generated when not provided.
    #[validate(length(min = 1, message = "Identifier must not be empty"))]
    pub id: Option<String>,

    /// Patient given name
    #[validate(length(min = 1, max = 100, message = "Name must be between 1 and 100 characters"))]
    pub name: String,

    /// Patient family name
    #[validate(length(min = 1, max = 100, message = "Surname must be between 1 and 100 characters"))]
    pub surname: String,

    /// Date of birth
    pub birth_date: Option<NaiveDate>,

    /// Baseline health profile for the new patient
    pub health_profile: HealthProfile,
}
