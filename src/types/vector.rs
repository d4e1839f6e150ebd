//! Model-ordered feature vector

use crate::types::feature::{Feature, FEATURE_COUNT};
use std::fmt;

/// The fourteen inputs laid out in [`Feature::MODEL_ORDER`].
///
/// The only constructor is [`FeatureVector::from_fn`], which walks
/// `MODEL_ORDER`, so a vector is never in form order by accident.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureVector {
    values: [f64; FEATURE_COUNT],
}

impl FeatureVector {
    /// Build a vector by asking for each feature's value in model order.
    pub fn from_fn<F: FnMut(Feature) -> f64>(mut value_of: F) -> Self {
        Self {
            values: Feature::MODEL_ORDER.map(|f| value_of(f)),
        }
    }

    /// Values in model order.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn get(&self, feature: Feature) -> f64 {
        self.values[feature.model_index()]
    }

    pub fn len(&self) -> usize {
        FEATURE_COUNT
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}

impl fmt::Display for FeatureVector {
    /// Diagnostic echo, e.g. `[0.0, 1.5, ...]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_fn_walks_model_order() {
        let vector = FeatureVector::from_fn(|f| f.index() as f64);

        assert_eq!(vector.values()[0], Feature::AreaHarvestedUsda.index() as f64);
        assert_eq!(vector.values()[13], Feature::PrecipitationChirps.index() as f64);
        for feature in Feature::ALL {
            assert_eq!(vector.get(feature), feature.index() as f64);
        }
    }

    #[test]
    fn test_display_echo() {
        let vector = FeatureVector::from_fn(|_| 0.0);
        let echo = vector.to_string();
        assert!(echo.starts_with("[0.0, 0.0"));
        assert_eq!(echo.matches("0.0").count(), FEATURE_COUNT);
    }
}
