//! Maize Yield Predictor - Main Entry Point
//!
//! Loads the regression artifact once, then serves the interactive form.

use anyhow::Result;
use maize_yield_predictor::{
    config::AppConfig, logging, metrics::SessionMetrics, models::PredictionPipeline, ui,
};
use tracing::info;

fn main() -> Result<()> {
    let config = AppConfig::load()?;
    logging::init(&config.logging)?;

    info!("Starting Maize Yield Predictor");
    info!(
        model_path = %config.model.path.display(),
        onnx_threads = config.model.onnx_threads,
        "Configuration loaded"
    );

    // A load failure leaves the form usable; predictions report the error
    let pipeline = PredictionPipeline::new(&config.model);
    let metrics = SessionMetrics::new();

    ui::run(&pipeline, &metrics)?;

    metrics.print_summary();
    info!("Maize Yield Predictor shutting down");

    Ok(())
}
