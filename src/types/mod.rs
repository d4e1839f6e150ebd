//! Type definitions for the yield predictor

pub mod feature;
pub mod form;
pub mod prediction;
pub mod vector;

pub use feature::{Feature, FEATURE_COUNT};
pub use form::{FormInputs, InputError};
pub use prediction::{Banner, Severity, YieldPrediction};
pub use vector::FeatureVector;
