//! Prediction pipeline: loaded artifact plus the request path around it

use crate::config::ModelConfig;
use crate::error::{InferenceError, LoadError, PredictError};
use crate::feature_extractor::FeatureExtractor;
use crate::models::loader::ModelLoader;
use crate::models::Regressor;
use crate::types::{Banner, FeatureVector, FormInputs, YieldPrediction};
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, warn};

/// Owns the model artifact for the lifetime of the process.
///
/// The artifact either loaded or it did not; that is decided once in the
/// constructor and never changes. When it did not, every request is refused
/// without touching a model.
pub struct PredictionPipeline {
    model: Result<Box<dyn Regressor>, LoadError>,
    model_path: PathBuf,
    file_found: bool,
    extractor: FeatureExtractor,
}

impl PredictionPipeline {
    /// Load the configured artifact. Never fails; a load error disables prediction.
    pub fn new(config: &ModelConfig) -> Self {
        let loader = ModelLoader::with_threads(config.onnx_threads);
        let result = loader.load(&config.path);
        Self::from_load_result(&config.path, result)
    }

    /// Build a pipeline around an already-loaded model
    pub fn with_model(model: Box<dyn Regressor>) -> Self {
        Self::from_load_result(Path::new("<memory>"), Ok(model))
    }

    /// Build a pipeline from the outcome of a load attempt
    pub fn from_load_result<P: AsRef<Path>>(
        path: P,
        result: Result<Box<dyn Regressor>, LoadError>,
    ) -> Self {
        let model_path = path.as_ref().to_path_buf();
        let file_found = !matches!(result, Err(LoadError::NotFound { .. }));
        let extractor = FeatureExtractor::new();

        match &result {
            Ok(model) => info!(
                model = %model.name(),
                path = %model_path.display(),
                features = ?extractor.feature_names(),
                "Prediction pipeline ready"
            ),
            Err(e) => error!(
                path = %model_path.display(),
                error = %e,
                "Model failed to load, prediction disabled"
            ),
        }

        Self {
            model: result,
            model_path,
            file_found,
            extractor,
        }
    }

    /// Whether an artifact is available for inference
    pub fn is_ready(&self) -> bool {
        self.model.is_ok()
    }

    pub fn load_error(&self) -> Option<&LoadError> {
        self.model.as_ref().err()
    }

    /// Name of the loaded model, shown in the status block
    pub fn model_name(&self) -> Option<&str> {
        self.model.as_ref().ok().map(|m| m.name())
    }

    /// Messages describing how startup went, in the order they happened
    pub fn startup_banners(&self) -> Vec<Banner> {
        let mut banners = Vec::with_capacity(2);

        if self.file_found {
            banners.push(Banner::info(format!(
                "Model file found at {}.",
                self.model_path.display()
            )));
        } else {
            banners.push(Banner::error("Model file not found. Check the file path!"));
        }

        match &self.model {
            Ok(_) => banners.push(Banner::success("Model loaded successfully!")),
            Err(e) => banners.push(Banner::error(format!("Error loading the model: {}", e))),
        }

        banners
    }

    /// Assemble the model row for one submission
    pub fn extract(&self, inputs: &FormInputs) -> FeatureVector {
        self.extractor.extract(inputs)
    }

    /// Run the model on one feature vector
    pub fn predict(&self, features: &FeatureVector) -> Result<YieldPrediction, PredictError> {
        let model = match &self.model {
            Ok(model) => model,
            Err(e) => {
                warn!(error = %e, "Prediction refused, model not loaded");
                return Err(PredictError::ModelNotLoaded {
                    reason: e.to_string(),
                });
            }
        };

        let value = model.predict_row(features.values()).map_err(|e| {
            error!(model = %model.name(), error = %e, "Inference failed");
            e
        })?;

        if !value.is_finite() {
            error!(model = %model.name(), value = value, "Non-finite prediction");
            return Err(InferenceError::NonFinite { value }.into());
        }

        debug!(model = %model.name(), prediction = value, "Inference complete");

        Ok(YieldPrediction::new(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::linear::LinearRegressor;
    use crate::types::Feature;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    /// Counts calls and returns a fixed outcome
    struct StubRegressor {
        calls: Arc<AtomicUsize>,
        outcome: Result<f64, InferenceError>,
    }

    impl Regressor for StubRegressor {
        fn name(&self) -> &str {
            "stub"
        }

        fn predict_row(&self, _row: &[f64]) -> Result<f64, InferenceError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.outcome.clone()
        }
    }

    fn stub(outcome: Result<f64, InferenceError>) -> (PredictionPipeline, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let model = StubRegressor {
            calls: calls.clone(),
            outcome,
        };
        (PredictionPipeline::with_model(Box::new(model)), calls)
    }

    #[test]
    fn test_predict_defaults() {
        let pipeline =
            PredictionPipeline::with_model(Box::new(LinearRegressor::new(vec![0.3; 14], 1.25)));
        let features = pipeline.extract(&FormInputs::default());

        let prediction = pipeline.predict(&features).unwrap();
        assert_eq!(prediction.tons_per_ha, 1.25);
        assert_eq!(prediction.to_string(), "Predicted Maize Yield: 1.25 tons/ha");
    }

    #[test]
    fn test_predict_uses_model_order() {
        // Only the first model column carries weight
        let mut coefficients = vec![0.0; 14];
        coefficients[0] = 1.0;
        let pipeline =
            PredictionPipeline::with_model(Box::new(LinearRegressor::new(coefficients, 0.0)));

        let inputs = FormInputs::new()
            .with(Feature::SoilTempL1, 99.0)
            .with(Feature::AreaHarvestedUsda, 2.0);
        let prediction = pipeline.predict(&pipeline.extract(&inputs)).unwrap();

        assert_eq!(prediction.tons_per_ha, 2.0);
    }

    #[test]
    fn test_load_failure_never_invokes_model() {
        let pipeline = PredictionPipeline::from_load_result(
            "models/missing.onnx",
            Err(LoadError::NotFound {
                path: PathBuf::from("models/missing.onnx"),
            }),
        );

        assert!(!pipeline.is_ready());
        for _ in 0..3 {
            let err = pipeline
                .predict(&FeatureVector::from_fn(|_| 1.0))
                .unwrap_err();
            assert!(err.is_load_error());
        }
    }

    #[test]
    fn test_inference_failure_is_reported() {
        let (pipeline, calls) = stub(Err(InferenceError::Runtime {
            message: "numeric blowup".to_string(),
        }));

        let err = pipeline
            .predict(&FeatureVector::from_fn(|_| 0.0))
            .unwrap_err();

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(!err.is_load_error());
        assert_eq!(err.to_string(), "Error during prediction: numeric blowup");
    }

    #[test]
    fn test_non_finite_output_is_an_inference_error() {
        let (pipeline, _) = stub(Ok(f64::NAN));
        let err = pipeline
            .predict(&FeatureVector::from_fn(|_| 0.0))
            .unwrap_err();
        assert!(matches!(
            err,
            PredictError::Inference(InferenceError::NonFinite { .. })
        ));
    }

    #[test]
    fn test_predict_is_deterministic() {
        let pipeline = PredictionPipeline::with_model(Box::new(LinearRegressor::new(
            (0..14).map(|i| i as f64 * 0.01).collect(),
            0.7,
        )));
        let features = FeatureVector::from_fn(|f| f.index() as f64 + 0.5);

        let first = pipeline.predict(&features).unwrap();
        for _ in 0..10 {
            assert_eq!(pipeline.predict(&features).unwrap(), first);
        }
    }

    #[test]
    fn test_startup_banners() {
        let missing = PredictionPipeline::from_load_result(
            "models/missing.onnx",
            Err(LoadError::NotFound {
                path: PathBuf::from("models/missing.onnx"),
            }),
        );
        let banners = missing.startup_banners();
        assert_eq!(banners[0].message, "Model file not found. Check the file path!");
        assert!(banners[1].message.starts_with("Error loading the model:"));
        assert!(banners.iter().all(Banner::is_error));

        assert_eq!(missing.model_name(), None);

        let (ready, _) = stub(Ok(1.0));
        assert_eq!(ready.model_name(), Some("stub"));
        let banners = ready.startup_banners();
        assert!(banners[0].message.starts_with("Model file found at"));
        assert_eq!(banners[1].message, "Model loaded successfully!");
    }

    #[test]
    fn test_corrupt_artifact_found_but_not_loaded() {
        let pipeline = PredictionPipeline::from_load_result(
            "models/ridge.onnx",
            Err(LoadError::Runtime {
                message: "protobuf parsing failed".to_string(),
            }),
        );

        let banners = pipeline.startup_banners();
        assert_eq!(banners[0].message, "Model file found at models/ridge.onnx.");
        assert_eq!(
            banners[1].message,
            "Error loading the model: model runtime error: protobuf parsing failed"
        );
    }
}
