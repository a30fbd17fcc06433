use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Storage model for a blood pressure value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BloodPressure {
    /// Systolic pressure (the higher number)
    pub high: u16,

    /// Diastolic pressure (the lower number)
    pub low: u16,
}

/// Storage model for a patient's baseline health profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthProfile {
    /// Personal normal body temperature, kept as a fixed-point decimal
    pub normal_temperature: Decimal,

    /// Personal normal blood pressure
    pub normal_blood_pressure: BloodPressure,
}

/// Storage model for a patient record
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

    /// Baseline health profile fresh measurements are compared against
    pub health_profile: HealthProfile,
}

/// Input data for registering a new patient
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePatientRequest {
    /// Identifier for the new record. Generated when not provided.
    pub id: Option<String>,

    /// Patient given name
    pub name: String,

    /// Patient family name
    pub surname: String,

    /// Date of birth
    pub birth_date: Option<NaiveDate>,

    /// Baseline health profile for the new patient
    pub health_profile: HealthProfile,
}
