//! Maize Yield Predictor Library
//!
//! Loads a pre-trained regression model and predicts maize yield (tons/ha)
//! from fourteen climate and production readings entered on a terminal form.

pub mod config;
pub mod error;
pub mod feature_extractor;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod types;
pub mod ui;

pub use config::AppConfig;
pub use error::{InferenceError, LoadError, PredictError};
pub use feature_extractor::FeatureExtractor;
pub use models::{PredictionPipeline, Regressor};
pub use types::{Feature, FeatureVector, FormInputs, YieldPrediction};
