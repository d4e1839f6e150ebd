//! Form state and key handling

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::Instant;
use tracing::info;

use crate::error::PredictError;
use crate::metrics::{Outcome, SessionMetrics};
use crate::models::PredictionPipeline;
use crate::types::{Banner, Feature, FormInputs, FEATURE_COUNT};

/// Longest text a field accepts
const MAX_FIELD_LEN: usize = 24;

/// Label of the submit control
pub const PREDICT_LABEL: &str = "Predict Maize Yield";

/// What currently has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Field(Feature),
    Predict,
}

pub enum Action {
    None,
    Quit,
}

/// Per-field text buffers plus the outcome of the last submission.
///
/// Field text lives here between key presses; a fresh [`FormInputs`] is
/// coerced from it on every submit.
pub struct FormState {
    fields: [String; FEATURE_COUNT],
    pub focus: Focus,
    pub startup: Vec<Banner>,
    pub echo: Option<String>,
    pub result: Option<Banner>,
}

impl FormState {
    pub fn new(startup: Vec<Banner>) -> Self {
        Self {
            fields: Feature::ALL.map(|f| format!("{:?}", f.default_value())),
            focus: Focus::Field(Feature::ALL[0]),
            startup,
            echo: None,
            result: None,
        }
    }

    /// Current text of one field
    pub fn text(&self, feature: Feature) -> &str {
        &self.fields[feature.index()]
    }

    pub fn set_text(&mut self, feature: Feature, text: impl Into<String>) {
        self.fields[feature.index()] = text.into();
    }

    pub fn handle_key(
        &mut self,
        key: KeyEvent,
        pipeline: &PredictionPipeline,
        metrics: &SessionMetrics,
    ) -> Action {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Esc => return Action::Quit,
            KeyCode::Char('c') if ctrl => return Action::Quit,
            KeyCode::Char('p') if ctrl => self.submit(pipeline, metrics),
            KeyCode::Tab | KeyCode::Down => self.focus = next(self.focus),
            KeyCode::BackTab | KeyCode::Up => self.focus = prev(self.focus),
            KeyCode::Left => self.focus = beside(self.focus, -1),
            KeyCode::Right => self.focus = beside(self.focus, 1),
            KeyCode::Enter => match self.focus {
                Focus::Predict => self.submit(pipeline, metrics),
                field => self.focus = next(field),
            },
            KeyCode::Backspace => {
                if let Focus::Field(feature) = self.focus {
                    self.fields[feature.index()].pop();
                }
            }
            KeyCode::Char(c) if !ctrl && is_numeric_char(c) => {
                if let Focus::Field(feature) = self.focus {
                    let text = &mut self.fields[feature.index()];
                    if text.len() < MAX_FIELD_LEN {
                        text.push(c);
                    }
                }
            }
            _ => {}
        }

        Action::None
    }

    /// Coerce the fields, run the pipeline and record the outcome
    pub fn submit(&mut self, pipeline: &PredictionPipeline, metrics: &SessionMetrics) {
        let inputs = match FormInputs::parse(&self.fields) {
            Ok(inputs) => inputs,
            Err(e) => {
                metrics.record(Outcome::InputError);
                self.echo = None;
                self.result = Some(Banner::error(format!("Error in prediction: {}", e)));
                return;
            }
        };

        let features = pipeline.extract(&inputs);
        self.echo = Some(format!("Input data: {}", features));
        info!(input = %features, "Prediction requested");

        let start = Instant::now();
        let result = pipeline.predict(&features);
        let elapsed = start.elapsed();

        self.result = Some(match result {
            Ok(prediction) => {
                metrics.record_inference_time(elapsed);
                metrics.record(Outcome::Success);
                info!(
                    tons_per_ha = prediction.tons_per_ha,
                    inference_us = elapsed.as_micros() as u64,
                    "Prediction complete"
                );
                Banner::success(prediction.to_string())
            }
            Err(e @ PredictError::ModelNotLoaded { .. }) => {
                metrics.record(Outcome::Refused);
                Banner::error(format!("Error in prediction: {}", e))
            }
            Err(e @ PredictError::Inference(_)) => {
                metrics.record_inference_time(elapsed);
                metrics.record(Outcome::InferenceError);
                Banner::error(e.to_string())
            }
        });
    }
}

fn is_numeric_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E')
}

/// Tab order: fields in form order, then the Predict button
fn next(focus: Focus) -> Focus {
    match focus {
        Focus::Field(f) if f.index() + 1 < FEATURE_COUNT => {
            Focus::Field(Feature::ALL[f.index() + 1])
        }
        Focus::Field(_) => Focus::Predict,
        Focus::Predict => Focus::Field(Feature::ALL[0]),
    }
}

fn prev(focus: Focus) -> Focus {
    match focus {
        Focus::Field(f) if f.index() > 0 => Focus::Field(Feature::ALL[f.index() - 1]),
        Focus::Field(_) => Focus::Predict,
        Focus::Predict => Focus::Field(Feature::ALL[FEATURE_COUNT - 1]),
    }
}

/// (column, row) of a field in the form layout
fn position(feature: Feature) -> (usize, usize) {
    for (col, features) in Feature::FORM_COLUMNS.iter().enumerate() {
        if let Some(row) = features.iter().position(|&f| f == feature) {
            return (col, row);
        }
    }
    (0, 0)
}

/// Same row in the neighbouring column, clamped to that column's length
fn beside(focus: Focus, step: isize) -> Focus {
    let Focus::Field(feature) = focus else {
        return focus;
    };

    let (col, row) = position(feature);
    let target = col as isize + step;
    if target < 0 || target as usize >= Feature::FORM_COLUMNS.len() {
        return focus;
    }

    let column = Feature::FORM_COLUMNS[target as usize];
    Focus::Field(column[row.min(column.len() - 1)])
}
