use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Domain model for a blood pressure measurement
///
/// Carries no invariant beyond both components being present; two values
/// are equal only when both components match exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BloodPressure {
    /// Systolic pressure (the higher number)
    pub high: u16,

    /// Diastolic pressure (the lower number)
    pub low: u16,
}

impl BloodPressure {
    /// Create a new blood pressure value
    pub fn new(high: u16, low: u16) -> Self {
        Self { high, low }
    }
}

impl fmt::Display for BloodPressure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.high, self.low)
    }
}

/// Domain model for a body temperature measurement.
///
/// Kept as a fixed-point decimal so comparisons against a baseline are
/// exact, with no binary floating-point rounding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BodyTemperature(Decimal);

impl BodyTemperature {
    /// Create a new body temperature value
    pub fn new(value: Decimal) -> Self {
        Self(value)
    }

    /// The raw decimal value
    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Signed difference between this measurement and a baseline
    pub fn delta_from(&self, baseline: BodyTemperature) -> Decimal {
        self.0 - baseline.0
    }
}

impl From<Decimal> for BodyTemperature {
    fn from(value: Decimal) -> Self {
        Self(value)
    }
}

impl fmt::Display for BodyTemperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_blood_pressure_equality_is_exact_on_both_components() {
        let normal = BloodPressure::new(120, 80);

        assert_eq!(normal, BloodPressure::new(120, 80));
        assert_ne!(normal, BloodPressure::new(121, 80));
        assert_ne!(normal, BloodPressure::new(120, 81));
        assert_ne!(normal, BloodPressure::new(119, 79));
    }

    #[test]
    fn test_temperature_delta_is_signed() {
        let baseline = BodyTemperature::new(dec!(36.6));

        assert_eq!(
            BodyTemperature::new(dec!(35.09)).delta_from(baseline),
            dec!(-1.51)
        );
        assert_eq!(
            BodyTemperature::new(dec!(38.2)).delta_from(baseline),
            dec!(1.6)
        );
        assert_eq!(baseline.delta_from(baseline), dec!(0));
    }

    #[test]
    fn test_temperature_equality_ignores_trailing_zeros() {
        assert_eq!(
            BodyTemperature::new(dec!(36.6)),
            BodyTemperature::new(dec!(36.60))
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(BloodPressure::new(120, 80).to_string(), "120/80");
        assert_eq!(BodyTemperature::new(dec!(36.6)).to_string(), "36.6");
    }
}
