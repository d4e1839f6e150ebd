//! Regression model artifacts and inference

pub mod inference;
pub mod linear;
pub mod loader;
#[cfg(feature = "onnx")]
pub mod onnx;

pub use inference::PredictionPipeline;
pub use linear::LinearRegressor;
pub use loader::{ModelFormat, ModelLoader};

use crate::error::InferenceError;

/// An opaque, read-only regression model.
///
/// Given one row of features in model order, produce a single prediction.
pub trait Regressor: Send + Sync {
    /// Short name for logs
    fn name(&self) -> &str;

    /// Predict for a single row
    fn predict_row(&self, row: &[f64]) -> Result<f64, InferenceError>;
}
