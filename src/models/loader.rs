//! Model artifact loader

use crate::error::LoadError;
use crate::models::linear::LinearRegressor;
use crate::models::Regressor;
use std::path::Path;
use tracing::{info, warn};

/// Artifact formats understood by the loader, keyed by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelFormat {
    Onnx,
    LinearJson,
}

impl ModelFormat {
    pub fn from_path(path: &Path) -> Result<Self, LoadError> {
        let extension = path
            .extension()
            .map(|e| e.to_string_lossy().to_ascii_lowercase())
            .unwrap_or_default();

        match extension.as_str() {
            "onnx" => Ok(ModelFormat::Onnx),
            "json" => Ok(ModelFormat::LinearJson),
            _ => Err(LoadError::UnsupportedFormat {
                path: path.to_path_buf(),
                extension,
            }),
        }
    }
}

/// Loader for regression artifacts
pub struct ModelLoader {
    /// Number of threads for ONNX inference
    onnx_threads: usize,
}

impl ModelLoader {
    /// Create a new model loader with default settings (1 thread)
    pub fn new() -> Self {
        Self::with_threads(1)
    }

    /// Create a new model loader with specified number of threads
    pub fn with_threads(onnx_threads: usize) -> Self {
        Self {
            onnx_threads: onnx_threads.max(1),
        }
    }

    /// Load the artifact at `path`, picking the format from its extension
    pub fn load<P: AsRef<Path>>(&self, path: P) -> Result<Box<dyn Regressor>, LoadError> {
        let path = path.as_ref();

        if !path.exists() {
            warn!(path = %path.display(), "Model file not found");
            return Err(LoadError::NotFound {
                path: path.to_path_buf(),
            });
        }

        let format = ModelFormat::from_path(path)?;
        info!(path = %path.display(), format = ?format, "Loading model artifact");

        match format {
            ModelFormat::LinearJson => Ok(Box::new(LinearRegressor::load(path)?)),
            ModelFormat::Onnx => self.load_onnx(path),
        }
    }

    #[cfg(feature = "onnx")]
    fn load_onnx(&self, path: &Path) -> Result<Box<dyn Regressor>, LoadError> {
        let model = crate::models::onnx::OnnxRegressor::load(path, self.onnx_threads)?;
        Ok(Box::new(model))
    }

    #[cfg(not(feature = "onnx"))]
    fn load_onnx(&self, path: &Path) -> Result<Box<dyn Regressor>, LoadError> {
        let _ = self.onnx_threads;
        Err(LoadError::UnsupportedFormat {
            path: path.to_path_buf(),
            extension: "onnx (built without the `onnx` feature)".to_string(),
        })
    }
}

impl Default for ModelLoader {
    fn default() -> Self {
        Self::new()
    }
}
