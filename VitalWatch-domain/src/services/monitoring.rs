use async_trait::async_trait;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use thiserror::Error;
use tracing::debug;

use crate::entities::conversions;
use crate::entities::patient::PatientRecord;
use crate::entities::vitals::{BloodPressure, BodyTemperature};
use crate::services::alert::{AlertNotifierTrait, TracingAlertNotifier};
use vitalwatch_data::repository::{PatientRepository, PatientRepositoryTrait, RepositoryError};

/// Deviation from the personal baseline beyond which a temperature reading
/// is considered abnormal. The boundary itself still counts as normal.
pub const TEMPERATURE_TOLERANCE: Decimal = dec!(1.5);

/// Medical monitoring service errors
#[derive(Debug, Error)]
pub enum MedicalServiceError {
    /// Patient not found error
    #[error("Patient not found: {0}")]
    PatientNotFound(String),

    /// Repository error
    #[error("Repository error: {0}")]
    Repository(String),
}

/// Trait for vital-sign check operations
#[async_trait]
pub trait MedicalServiceTrait {
    /// Check a fresh blood pressure reading against the patient's baseline
    async fn check_blood_pressure(
        &self,
        patient_id: &str,
        current_reading: BloodPressure,
    ) -> Result<(), MedicalServiceError>;

    /// Check a fresh temperature reading against the patient's baseline
    async fn check_temperature(
        &self,
        patient_id: &str,
        current_reading: BodyTemperature,
    ) -> Result<(), MedicalServiceError>;
}

/// Medical monitoring service.
///
/// Each check fetches the patient's baseline, applies the comparison rule
/// and dispatches at most one alert.
pub struct MedicalService<R: PatientRepositoryTrait, N: AlertNotifierTrait> {
    repository: R,
    notifier: N,
}

impl<R: PatientRepositoryTrait, N: AlertNotifierTrait> MedicalService<R, N> {
    /// Create a new medical monitoring service
    pub fn new(repository: R, notifier: N) -> Self {
        Self {
            repository,
            notifier,
        }
    }

    /// Map repository errors to service errors
    fn map_repo_error(&self, err: RepositoryError) -> MedicalServiceError {
        match err {
            RepositoryError::NotFound(id) => MedicalServiceError::PatientNotFound(id),
            _ => MedicalServiceError::Repository(err.to_string()),
        }
    }

    /// Fetch a patient record, surfacing an unknown identifier as an error.
    ///
    /// A patient that cannot be resolved must never be treated as healthy,
    /// so the failure propagates to the caller instead of being swallowed.
    async fn fetch_patient(&self, patient_id: &str) -> Result<PatientRecord, MedicalServiceError> {
        let data_record = self
            .repository
            .get_by_id(patient_id)
            .await
            .map_err(|e| self.map_repo_error(e))?
            .ok_or_else(|| MedicalServiceError::PatientNotFound(patient_id.to_string()))?;

        Ok(conversions::convert_to_domain_record(data_record))
    }

    /// Dispatch the fixed-format warning for a patient, exactly once
    async fn raise_alert(&self, patient_id: &str) {
        let message = alert_message(patient_id);
        self.notifier.send(&message).await;
    }
}

/// Build the fixed alert text expected by downstream alert consumers
fn alert_message(patient_id: &str) -> String {
    format!("Warning, patient with id: {}, need help", patient_id)
}

#[async_trait]
impl<R, N> MedicalServiceTrait for MedicalService<R, N>
where
    R: PatientRepositoryTrait + Send + Sync,
    N: AlertNotifierTrait + Send + Sync,
{
    /// Check a fresh blood pressure reading against the patient's baseline.
    ///
    /// Either component differing from the baseline, in either direction,
    /// counts as abnormal and dispatches one alert.
    async fn check_blood_pressure(
        &self,
        patient_id: &str,
        current_reading: BloodPressure,
    ) -> Result<(), MedicalServiceError> {
        let patient = self.fetch_patient(patient_id).await?;
        let normal = patient.health_profile.normal_blood_pressure;

        if current_reading != normal {
            debug!(
                "Abnormal blood pressure for patient {}: {} (normal {})",
                patient_id, current_reading, normal
            );
            self.raise_alert(patient_id).await;
        } else {
            debug!(
                "Blood pressure within range for patient {}: {}",
                patient_id, current_reading
            );
        }

        Ok(())
    }

    /// Check a fresh temperature reading against the patient's baseline.
    ///
    /// Abnormal when the signed fixed-point delta exceeds the tolerance in
    /// either direction; the boundary itself counts as normal.
    async fn check_temperature(
        &self,
        patient_id: &str,
        current_reading: BodyTemperature,
    ) -> Result<(), MedicalServiceError> {
        let patient = self.fetch_patient(patient_id).await?;
        let normal = patient.health_profile.normal_temperature;
        let delta = current_reading.delta_from(normal);

        if delta.abs() > TEMPERATURE_TOLERANCE {
            debug!(
                "Abnormal temperature for patient {}: {} (normal {})",
                patient_id, current_reading, normal
            );
            self.raise_alert(patient_id).await;
        } else {
            debug!(
                "Temperature within range for patient {}: {}",
                patient_id, current_reading
            );
        }

        Ok(())
    }
}

/// Create a medical monitoring service over the given patient repository,
/// dispatching alerts through the tracing pipeline. Clone the repository
/// to share one patient store with other services.
pub fn create_default_medical_service(
    repository: PatientRepository,
) -> impl MedicalServiceTrait + Send + Sync {
    MedicalService::new(repository, TracingAlertNotifier::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    use crate::services::alert::MockAlertNotifierTrait;
    use crate::testing::{stored_patient, MockPatientRepository};

    fn service_for(
        patient: vitalwatch_data::models::patient::PatientRecord,
        notifier: MockAlertNotifierTrait,
    ) -> MedicalService<MockPatientRepository, MockAlertNotifierTrait> {
        MedicalService::new(MockPatientRepository::with_patients(vec![patient]), notifier)
    }

    #[test]
    fn test_alert_message_format() {
        assert_eq!(
            alert_message("a93a"),
            "Warning, patient with id: a93a, need help"
        );
    }

    #[tokio::test]
    async fn test_check_blood_pressure_normal_sends_no_alert() {
        let mut notifier = MockAlertNotifierTrait::new();
        notifier.expect_send().times(0);

        let service = service_for(stored_patient("a93a", 120, 80, dec!(36.6)), notifier);

        service
            .check_blood_pressure("a93a", BloodPressure::new(120, 80))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_check_blood_pressure_jump_sends_exactly_one_alert() {
        // Jumps in either direction, on either component or both
        for jump in [1i32, 10, -1, -10] {
            let high = (120 + jump) as u16;
            let low = (80 + jump) as u16;
            let readings = [
                BloodPressure::new(high, 80),
                BloodPressure::new(120, low),
                BloodPressure::new(high, low),
            ];

            for reading in readings {
                let mut notifier = MockAlertNotifierTrait::new();
                notifier
                    .expect_send()
                    .times(1)
                    .withf(|message: &str| message == "Warning, patient with id: a93a, need help")
                    .returning(|_| ());

                let service = service_for(stored_patient("a93a", 120, 80, dec!(36.6)), notifier);

                service.check_blood_pressure("a93a", reading).await.unwrap();
            }
        }
    }

    #[tokio::test]
    async fn test_check_temperature_within_tolerance_sends_no_alert() {
        let readings = [
            BodyTemperature::new(dec!(36.6)),
            BodyTemperature::new(dec!(37.0)),
            // The tolerance boundary itself still counts as normal
            BodyTemperature::new(dec!(38.1)),
            BodyTemperature::new(dec!(35.1)),
        ];

        for reading in readings {
            let mut notifier = MockAlertNotifierTrait::new();
            notifier.expect_send().times(0);

            let service = service_for(stored_patient("a93a", 120, 80, dec!(36.6)), notifier);

            service.check_temperature("a93a", reading).await.unwrap();
        }
    }

    #[tokio::test]
    async fn test_check_temperature_outside_tolerance_sends_exactly_one_alert() {
        let readings = [
            // Delta -1.51 against the 36.6 baseline
            BodyTemperature::new(dec!(35.09)),
            // Delta -2
            BodyTemperature::new(dec!(34.6)),
            // Delta +1.6
            BodyTemperature::new(dec!(38.2)),
        ];

        for reading in readings {
            let mut notifier = MockAlertNotifierTrait::new();
            notifier
                .expect_send()
                .times(1)
                .withf(|message: &str| message == "Warning, patient with id: a93a, need help")
                .returning(|_| ());

            let service = service_for(stored_patient("a93a", 120, 80, dec!(36.6)), notifier);

            service.check_temperature("a93a", reading).await.unwrap();
        }
    }

    #[tokio::test]
    async fn test_check_blood_pressure_unknown_patient_fails_without_alert() {
        let mut notifier = MockAlertNotifierTrait::new();
        notifier.expect_send().times(0);

        let service = MedicalService::new(MockPatientRepository::new(), notifier);

        let result = service
            .check_blood_pressure("missing", BloodPressure::new(120, 80))
            .await;

        assert!(matches!(
            result,
            Err(MedicalServiceError::PatientNotFound(id)) if id == "missing"
        ));
    }

    #[tokio::test]
    async fn test_check_temperature_unknown_patient_fails_without_alert() {
        let mut notifier = MockAlertNotifierTrait::new();
        notifier.expect_send().times(0);

        let service = MedicalService::new(MockPatientRepository::new(), notifier);

        let result = service
            .check_temperature("missing", BodyTemperature::new(dec!(36.6)))
            .await;

        assert!(matches!(
            result,
            Err(MedicalServiceError::PatientNotFound(id)) if id == "missing"
        ));
    }
}
