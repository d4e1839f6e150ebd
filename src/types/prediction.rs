//! Prediction output and user-facing status messages

use std::fmt;

/// Unit label for yield values
pub const YIELD_UNIT: &str = "tons/ha";

/// A successful point prediction, in tons per hectare
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YieldPrediction {
    pub tons_per_ha: f64,
}

impl YieldPrediction {
    pub fn new(tons_per_ha: f64) -> Self {
        Self { tons_per_ha }
    }
}

impl fmt::Display for YieldPrediction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Predicted Maize Yield: {:.2} {}",
            self.tons_per_ha, YIELD_UNIT
        )
    }
}

/// Severity of a status message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Error,
}

/// One line of feedback shown to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub severity: Severity,
    pub message: String,
}

impl Banner {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Info,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}
