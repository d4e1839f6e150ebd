//! Linear regression artifact stored as JSON

use crate::error::{InferenceError, LoadError};
use crate::models::Regressor;
use crate::types::Feature;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// Coefficients and intercept of a fitted linear (e.g. ridge) regressor.
///
/// ```json
/// { "coefficients": [0.01, ...], "intercept": 1.7 }
/// ```
///
/// `feature_names`, when present, must list the training columns in
/// [`Feature::MODEL_ORDER`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearRegressor {
    pub coefficients: Vec<f64>,
    pub intercept: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feature_names: Option<Vec<String>>,
}

impl LinearRegressor {
    pub fn new(coefficients: Vec<f64>, intercept: f64) -> Self {
        Self {
            coefficients,
            intercept,
            feature_names: None,
        }
    }

    /// Read and validate an artifact from disk
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let path = path.as_ref();

        let bytes = std::fs::read(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let model: LinearRegressor =
            serde_json::from_slice(&bytes).map_err(|source| LoadError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        model.check_feature_names()?;

        info!(
            path = %path.display(),
            coefficients = model.coefficients.len(),
            intercept = model.intercept,
            "Linear model loaded"
        );

        Ok(model)
    }

    fn check_feature_names(&self) -> Result<(), LoadError> {
        let Some(names) = &self.feature_names else {
            return Ok(());
        };

        let expected: Vec<&str> = Feature::MODEL_ORDER.iter().map(|f| f.key()).collect();
        if names.iter().map(String::as_str).ne(expected.iter().copied()) {
            return Err(LoadError::Incompatible {
                message: format!(
                    "artifact was trained on columns {:?}, expected {:?}",
                    names, expected
                ),
            });
        }
        Ok(())
    }
}

impl Regressor for LinearRegressor {
    fn name(&self) -> &str {
        "linear"
    }

    fn predict_row(&self, row: &[f64]) -> Result<f64, InferenceError> {
        if row.len() != self.coefficients.len() {
            return Err(InferenceError::ShapeMismatch {
                expected: self.coefficients.len(),
                actual: row.len(),
            });
        }

        let dot: f64 = self
            .coefficients
            .iter()
            .zip(row)
            .map(|(w, x)| w * x)
            .sum();

        Ok(dot + self.intercept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_predict_row() {
        let model = LinearRegressor::new(vec![0.5, -1.0, 2.0], 1.0);
        let y = model.predict_row(&[2.0, 1.0, 0.25]).unwrap();
        assert!((y - 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_shape_mismatch() {
        let model = LinearRegressor::new(vec![1.0; 12], 0.0);
        let err = model.predict_row(&[0.0; 14]).unwrap_err();
        assert_eq!(
            err,
            InferenceError::ShapeMismatch {
                expected: 12,
                actual: 14
            }
        );
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"coefficients": [0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 0.9, 1.0, 1.1, 1.2, 1.3, 1.4], "intercept": 2.5}}"#
        )
        .unwrap();

        let model = LinearRegressor::load(file.path()).unwrap();
        assert_eq!(model.coefficients.len(), 14);
        assert_eq!(model.predict_row(&[0.0; 14]).unwrap(), 2.5);
    }

    #[test]
    fn test_load_rejects_malformed_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not a model").unwrap();

        let err = LinearRegressor::load(file.path()).unwrap_err();
        assert!(matches!(err, LoadError::Parse { .. }));
    }

    #[test]
    fn test_feature_names_must_match_model_order() {
        let mut names: Vec<String> = Feature::MODEL_ORDER
            .iter()
            .map(|f| f.key().to_string())
            .collect();

        let mut model = LinearRegressor::new(vec![0.0; 14], 0.0);
        model.feature_names = Some(names.clone());
        assert!(model.check_feature_names().is_ok());

        names.swap(0, 4);
        model.feature_names = Some(names);
        assert!(matches!(
            model.check_feature_names(),
            Err(LoadError::Incompatible { .. })
        ));
    }
}
