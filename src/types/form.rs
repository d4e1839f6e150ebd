//! Request-scoped form inputs

use crate::types::feature::{Feature, FEATURE_COUNT};
use thiserror::Error;

/// Raw text that could not be coerced into a feature value
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("invalid number for {label}: '{text}'")]
    InvalidNumber { label: &'static str, text: String },

    #[error("{label} must be a finite number")]
    NotFinite { label: &'static str },
}

/// The fourteen values submitted with one prediction request.
///
/// Built fresh for every submission; nothing is shared between requests.
#[derive(Debug, Clone, PartialEq)]
pub struct FormInputs {
    values: [f64; FEATURE_COUNT],
}

impl FormInputs {
    /// Inputs with every field at its default value.
    pub fn new() -> Self {
        Self {
            values: Feature::ALL.map(Feature::default_value),
        }
    }

    /// Coerce one text field per feature, given in form order.
    pub fn parse<S: AsRef<str>>(fields: &[S; FEATURE_COUNT]) -> Result<Self, InputError> {
        let mut inputs = Self::new();
        for (feature, text) in Feature::ALL.iter().zip(fields.iter()) {
            inputs.set(*feature, parse_value(*feature, text.as_ref())?);
        }
        Ok(inputs)
    }

    pub fn get(&self, feature: Feature) -> f64 {
        self.values[feature.index()]
    }

    pub fn set(&mut self, feature: Feature, value: f64) {
        self.values[feature.index()] = value;
    }

    /// Builder-style setter
    pub fn with(mut self, feature: Feature, value: f64) -> Self {
        self.set(feature, value);
        self
    }
}

impl Default for FormInputs {
    fn default() -> Self {
        Self::new()
    }
}

/// Coerce a single field's text into a value.
///
/// Empty text means the field's default. Any finite real number is accepted,
/// including physically meaningless ones such as negative areas.
pub fn parse_value(feature: Feature, text: &str) -> Result<f64, InputError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(feature.default_value());
    }

    let value: f64 = trimmed.parse().map_err(|_| InputError::InvalidNumber {
        label: feature.label(),
        text: trimmed.to_string(),
    })?;

    if !value.is_finite() {
        return Err(InputError::NotFinite {
            label: feature.label(),
        });
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_zero() {
        let inputs = FormInputs::default();
        for feature in Feature::ALL {
            assert_eq!(inputs.get(feature), 0.0);
        }
    }

    #[test]
    fn test_parse_value() {
        assert_eq!(parse_value(Feature::Temperature, "21.5"), Ok(21.5));
        assert_eq!(parse_value(Feature::Temperature, "  -3 "), Ok(-3.0));
        assert_eq!(parse_value(Feature::Temperature, "1e3"), Ok(1000.0));
        assert_eq!(parse_value(Feature::Temperature, ""), Ok(0.0));
    }

    #[test]
    fn test_negative_area_is_accepted() {
        assert_eq!(parse_value(Feature::AreaHarvestedFao, "-120"), Ok(-120.0));
    }

    #[test]
    fn test_parse_value_rejects_garbage() {
        let err = parse_value(Feature::SoilWaterL4, "abc").unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid number for Soil Water L4 Fraction: 'abc'"
        );
    }

    #[test]
    fn test_parse_value_rejects_non_finite() {
        assert!(matches!(
            parse_value(Feature::Temperature, "inf"),
            Err(InputError::NotFinite { .. })
        ));
        assert!(matches!(
            parse_value(Feature::Temperature, "NaN"),
            Err(InputError::NotFinite { .. })
        ));
    }

    #[test]
    fn test_parse_all_fields() {
        let mut fields: [String; FEATURE_COUNT] = Default::default();
        fields[Feature::Temperature.index()] = "24.1".to_string();
        fields[Feature::ProductionFao.index()] = "3200".to_string();

        let inputs = FormInputs::parse(&fields).unwrap();
        assert_eq!(inputs.get(Feature::Temperature), 24.1);
        assert_eq!(inputs.get(Feature::ProductionFao), 3200.0);
        assert_eq!(inputs.get(Feature::SoilTempL1), 0.0);
    }

    #[test]
    fn test_parse_stops_at_first_bad_field() {
        let mut fields: [&str; FEATURE_COUNT] = ["0"; FEATURE_COUNT];
        fields[Feature::WindNorthward.index()] = "north";

        let err = FormInputs::parse(&fields).unwrap_err();
        assert!(err.to_string().contains("Wind Northward (m/s)"));
    }
}
