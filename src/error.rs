//! Error types for model loading and prediction

use std::path::PathBuf;
use thiserror::Error;

/// The model artifact could not be made available at startup.
///
/// Fatal to the predict capability, never to the process.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("model file not found at {}", path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse model artifact {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("unsupported model format '{extension}' ({})", path.display())]
    UnsupportedFormat { path: PathBuf, extension: String },

    #[error("incompatible model: {message}")]
    Incompatible { message: String },

    #[error("model runtime error: {message}")]
    Runtime { message: String },
}

/// The artifact is present but a single inference call failed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InferenceError {
    #[error("expected {expected} features, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },

    #[error("model returned no prediction")]
    EmptyOutput,

    #[error("model produced a non-finite prediction ({value})")]
    NonFinite { value: f64 },

    #[error("{message}")]
    Runtime { message: String },
}

/// Why a prediction request produced no yield value.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PredictError {
    /// Inference was refused because the artifact never loaded.
    #[error("Model not loaded properly: {reason}")]
    ModelNotLoaded { reason: String },

    #[error("Error during prediction: {0}")]
    Inference(#[from] InferenceError),
}

impl PredictError {
    pub fn is_load_error(&self) -> bool {
        matches!(self, PredictError::ModelNotLoaded { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = PredictError::ModelNotLoaded {
            reason: LoadError::NotFound {
                path: PathBuf::from("models/m.onnx"),
            }
            .to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Model not loaded properly: model file not found at models/m.onnx"
        );
        assert!(err.is_load_error());

        let err = PredictError::from(InferenceError::ShapeMismatch {
            expected: 14,
            actual: 12,
        });
        assert_eq!(
            err.to_string(),
            "Error during prediction: expected 14 features, got 12"
        );
        assert!(!err.is_load_error());
    }
}
