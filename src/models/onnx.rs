//! ONNX regression model
//!
//! The graph takes one `[1, n]` float tensor and produces the prediction as
//! its first element. Inputs may be declared `float` or `double`; the row is
//! cast to whichever the graph expects.

use crate::error::{InferenceError, LoadError};
use crate::models::Regressor;
use ort::session::{builder::GraphOptimizationLevel, Session};
use ort::tensor::TensorElementType;
use ort::value::{DynTensor, Tensor};
use std::fmt::Display;
use std::path::Path;
use std::sync::RwLock;
use tracing::{debug, info};

/// skl2onnx names a regressor's output "variable"
const PREFERRED_OUTPUT: &str = "variable";

/// Element type of the graph's input tensor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InputPrecision {
    F32,
    F64,
}

impl InputPrecision {
    fn from_element_type(ty: Option<TensorElementType>) -> Result<Self, LoadError> {
        match ty {
            Some(TensorElementType::Float32) => Ok(InputPrecision::F32),
            Some(TensorElementType::Float64) => Ok(InputPrecision::F64),
            other => Err(LoadError::Incompatible {
                message: format!("model input must be a float or double tensor, got {:?}", other),
            }),
        }
    }

    /// Single row tensor: shape [1, num_features]
    fn row_tensor(self, row: &[f64]) -> ort::Result<DynTensor> {
        let shape = vec![1_i64, row.len() as i64];
        Ok(match self {
            InputPrecision::F32 => {
                let data: Vec<f32> = row.iter().map(|&v| v as f32).collect();
                Tensor::from_array((shape, data))?.upcast()
            }
            InputPrecision::F64 => Tensor::from_array((shape, row.to_vec()))?.upcast(),
        })
    }
}

/// The output holding the prediction: "variable" when declared, else the first
fn pick_output<'a>(names: &[&'a str]) -> Option<&'a str> {
    names
        .iter()
        .find(|&&name| name == PREFERRED_OUTPUT)
        .or_else(|| names.first())
        .copied()
}

/// Loaded ONNX regressor with its I/O names
pub struct OnnxRegressor {
    name: String,
    /// Running a session needs `&mut`; the lock keeps the regressor `Sync`
    session: RwLock<Session>,
    input_name: String,
    precision: InputPrecision,
    output_name: String,
}

fn runtime<E: Display>(e: E) -> LoadError {
    LoadError::Runtime {
        message: e.to_string(),
    }
}

fn inference<E: Display>(e: E) -> InferenceError {
    InferenceError::Runtime {
        message: e.to_string(),
    }
}

impl OnnxRegressor {
    /// Load a regression graph from file
    pub fn load<P: AsRef<Path>>(path: P, threads: usize) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "onnx".to_string());

        info!(model = %name, path = %path.display(), threads = threads, "Loading ONNX model");

        let session = Session::builder()
            .map_err(runtime)?
            .with_optimization_level(GraphOptimizationLevel::Level3)
            .map_err(runtime)?
            .with_intra_threads(threads)
            .map_err(runtime)?
            .commit_from_file(path)
            .map_err(runtime)?;

        let input = session
            .inputs
            .first()
            .ok_or_else(|| LoadError::Incompatible {
                message: "model declares no inputs".to_string(),
            })?;
        let input_name = input.name.clone();
        let precision = InputPrecision::from_element_type(input.input_type.tensor_type())?;

        let output_names: Vec<&str> = session.outputs.iter().map(|o| o.name.as_str()).collect();
        let output_name = pick_output(&output_names)
            .map(str::to_string)
            .ok_or_else(|| LoadError::Incompatible {
                message: "model declares no outputs".to_string(),
            })?;

        info!(
            model = %name,
            input = %input_name,
            precision = ?precision,
            output = %output_name,
            "Model loaded successfully"
        );

        Ok(Self {
            name,
            session: RwLock::new(session),
            input_name,
            precision,
            output_name,
        })
    }
}

impl Regressor for OnnxRegressor {
    fn name(&self) -> &str {
        &self.name
    }

    fn predict_row(&self, row: &[f64]) -> Result<f64, InferenceError> {
        let input_tensor = self.precision.row_tensor(row).map_err(inference)?;

        let mut session = self
            .session
            .write()
            .map_err(|e| inference(format!("Lock error: {}", e)))?;

        let outputs = session
            .run(ort::inputs![&self.input_name => input_tensor])
            .map_err(inference)?;

        let output = outputs
            .get(&self.output_name)
            .ok_or_else(|| inference(format!("missing output '{}'", self.output_name)))?;

        let value = if let Ok((_, data)) = output.try_extract_tensor::<f32>() {
            data.first().map(|&v| v as f64)
        } else {
            let (_, data) = output.try_extract_tensor::<f64>().map_err(inference)?;
            data.first().copied()
        };

        debug!(model = %self.name, prediction = ?value, "ONNX inference complete");

        value.ok_or(InferenceError::EmptyOutput)
    }
}
