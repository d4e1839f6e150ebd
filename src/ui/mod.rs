//! Terminal form around the prediction pipeline

pub mod draw;
pub mod form;
pub mod theme;

use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;

use crate::metrics::SessionMetrics;
use crate::models::PredictionPipeline;

use form::{Action, FormState};

struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen)?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

/// Runs the form until the user quits.
///
/// # Errors
/// Returns an error if terminal setup or rendering fails.
pub fn run(pipeline: &PredictionPipeline, metrics: &SessionMetrics) -> Result<()> {
    let _guard = TerminalGuard::enter()?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let mut form = FormState::new(pipeline.startup_banners());
    info!("Form opened");

    loop {
        terminal.draw(|f| draw::draw(f, &form, pipeline, metrics))?;

        if event::poll(Duration::from_millis(120))? {
            if let Event::Key(k) = event::read()? {
                if k.kind != KeyEventKind::Press {
                    continue;
                }
                match form.handle_key(k, pipeline, metrics) {
                    Action::Quit => break,
                    Action::None => {}
                }
            }
        }
    }

    terminal.show_cursor()?;
    info!("Form closed");
    Ok(())
}
