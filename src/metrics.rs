//! In-memory statistics for the current session.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;
use std::time::{Duration, Instant};
use tracing::info;

/// How a submission ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    /// Form text could not be coerced to numbers
    InputError,
    /// Model never loaded; inference was not attempted
    Refused,
    InferenceError,
}

/// Counters for one interactive session. Nothing is persisted.
pub struct SessionMetrics {
    pub attempts: AtomicU64,
    pub successes: AtomicU64,
    pub input_errors: AtomicU64,
    pub refusals: AtomicU64,
    pub inference_failures: AtomicU64,
    /// Inference times (in microseconds)
    inference_times: RwLock<Vec<u64>>,
    start_time: Instant,
}

/// Inference latency statistics
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LatencyStats {
    pub count: usize,
    pub mean_us: f64,
    pub min_us: u64,
    pub max_us: u64,
}

impl SessionMetrics {
    pub fn new() -> Self {
        Self {
            attempts: AtomicU64::new(0),
            successes: AtomicU64::new(0),
            input_errors: AtomicU64::new(0),
            refusals: AtomicU64::new(0),
            inference_failures: AtomicU64::new(0),
            inference_times: RwLock::new(Vec::new()),
            start_time: Instant::now(),
        }
    }

    /// Record one submission
    pub fn record(&self, outcome: Outcome) {
        self.attempts.fetch_add(1, Ordering::Relaxed);
        let counter = match outcome {
            Outcome::Success => &self.successes,
            Outcome::InputError => &self.input_errors,
            Outcome::Refused => &self.refusals,
            Outcome::InferenceError => &self.inference_failures,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    /// Record how long one inference call took
    pub fn record_inference_time(&self, duration: Duration) {
        if let Ok(mut times) = self.inference_times.write() {
            times.push(duration.as_micros() as u64);
            // Keep only the most recent 1000
            if times.len() > 1000 {
                times.drain(0..500);
            }
        }
    }

    pub fn latency_stats(&self) -> LatencyStats {
        let times = match self.inference_times.read() {
            Ok(times) => times,
            Err(_) => return LatencyStats::default(),
        };
        if times.is_empty() {
            return LatencyStats::default();
        }

        let sum: u64 = times.iter().sum();
        LatencyStats {
            count: times.len(),
            mean_us: sum as f64 / times.len() as f64,
            min_us: times.iter().copied().min().unwrap_or(0),
            max_us: times.iter().copied().max().unwrap_or(0),
        }
    }

    /// One-line status for the form footer
    pub fn summary_line(&self) -> String {
        format!(
            "predictions: {} ok / {} attempted  |  errors: {} input, {} refused, {} inference",
            self.successes.load(Ordering::Relaxed),
            self.attempts.load(Ordering::Relaxed),
            self.input_errors.load(Ordering::Relaxed),
            self.refusals.load(Ordering::Relaxed),
            self.inference_failures.load(Ordering::Relaxed),
        )
    }

    /// Log a summary of the session
    pub fn print_summary(&self) {
        let latency = self.latency_stats();
        info!(
            session_secs = self.start_time.elapsed().as_secs(),
            attempts = self.attempts.load(Ordering::Relaxed),
            successes = self.successes.load(Ordering::Relaxed),
            input_errors = self.input_errors.load(Ordering::Relaxed),
            refusals = self.refusals.load(Ordering::Relaxed),
            inference_failures = self.inference_failures.load(Ordering::Relaxed),
            mean_inference_us = latency.mean_us,
            max_inference_us = latency.max_us,
            "Session summary"
        );
    }
}

impl Default for SessionMetrics {
    fn default() -> Self {
        Self::new()
    }
}
