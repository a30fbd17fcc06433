use crate::entities::patient::{HealthProfile, PatientRecord, RegisterPatientRequest};
use crate::entities::vitals::{BloodPressure, BodyTemperature};

/// Conversion functions between domain entities and data models
/// These functions follow the pattern convert_to_[target_layer]_[model_name]

/// Convert from data model to domain entity for a patient record
pub fn convert_to_domain_record(
    data_record: vitalwatch_data::models::patient::PatientRecord,
) -> PatientRecord {
    PatientRecord {
        id: data_record.id,
        name: data_record.name,
        surname: data_record.surname,
        birth_date: data_record.birth_date,
        health_profile: convert_to_domain_profile(data_record.health_profile),
    }
}

/// Convert from data model to domain entity for a health profile
pub fn convert_to_domain_profile(
    data_profile: vitalwatch_data::models::patient::HealthProfile,
) -> HealthProfile {
    HealthProfile {
        normal_temperature: BodyTemperature::new(data_profile.normal_temperature),
        normal_blood_pressure: BloodPressure::new(
            data_profile.normal_blood_pressure.high,
            data_profile.normal_blood_pressure.low,
        ),
    }
}

/// Convert from domain entity to data model for a health profile
pub fn convert_to_data_profile(
    domain_profile: &HealthProfile,
) -> vitalwatch_data::models::patient::HealthProfile {
    vitalwatch_data::models::patient::HealthProfile {
        normal_temperature: domain_profile.normal_temperature.value(),
        normal_blood_pressure: vitalwatch_data::models::patient::BloodPressure {
            high: domain_profile.normal_blood_pressure.high,
            low: domain_profile.normal_blood_pressure.low,
        },
    }
}

/// Convert from domain entity to data model for a register request
pub fn convert_to_data_create_request(
    domain_request: &RegisterPatientRequest,
) -> vitalwatch_data::models::patient::CreatePatientRequest {
    vitalwatch_data::models::patient::CreatePatientRequest {
        id: domain_request.id.clone(),
        name: domain_request.name.clone(),
        surname: domain_request.surname.clone(),
        birth_date: domain_request.birth_date,
        health_profile: convert_to_data_profile(&domain_request.health_profile),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_record_round_trips_through_layers() {
        let data_record = vitalwatch_data::models::patient::PatientRecord {
            id: "a93a".to_string(),
            name: "Jane".to_string(),
            surname: "Doe".to_string(),
            birth_date: None,
            health_profile: vitalwatch_data::models::patient::HealthProfile {
                normal_temperature: dec!(36.6),
                normal_blood_pressure: vitalwatch_data::models::patient::BloodPressure {
                    high: 120,
                    low: 80,
                },
            },
        };

        let domain_record = convert_to_domain_record(data_record.clone());

        assert_eq!(domain_record.id, data_record.id);
        assert_eq!(
            domain_record.health_profile.normal_temperature,
            BodyTemperature::new(dec!(36.6))
        );
        assert_eq!(
            domain_record.health_profile.normal_blood_pressure,
            BloodPressure::new(120, 80)
        );

        let data_profile = convert_to_data_profile(&domain_record.health_profile);
        assert_eq!(data_profile, data_record.health_profile);
    }
}
