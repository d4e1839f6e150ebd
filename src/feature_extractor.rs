//! Feature extraction for maize yield model inference.
//!
//! Turns the values collected on the form into the row the regression model
//! was trained on. The form shows fields grouped for reading; the model wants
//! them in training column order.

use crate::types::{Feature, FeatureVector, FormInputs, FEATURE_COUNT};

/// Maps form inputs to a model-ordered feature vector.
///
/// No scaling or derived features: the model consumes the raw values.
pub struct FeatureExtractor;

impl FeatureExtractor {
    /// Create a new feature extractor.
    pub fn new() -> Self {
        Self
    }

    /// Extract the model input row from one submission.
    pub fn extract(&self, inputs: &FormInputs) -> FeatureVector {
        FeatureVector::from_fn(|feature| inputs.get(feature))
    }

    /// Get the number of features produced.
    pub fn feature_count(&self) -> usize {
        FEATURE_COUNT
    }

    /// Get feature names in model order.
    pub fn feature_names(&self) -> Vec<&'static str> {
        Feature::MODEL_ORDER.iter().map(|f| f.key()).collect()
    }
}

impl Default for FeatureExtractor {
    fn default() -> Self {
        Self::new()
    }
}
