//! Rendering of the form screen

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::metrics::SessionMetrics;
use crate::models::PredictionPipeline;
use crate::types::{Banner, Feature, Severity};

use super::form::{Focus, FormState, PREDICT_LABEL};
use super::theme::Theme;

const TITLE: &str = "Maize Yield Prediction in Kenya";
const PROMPT: &str = "Enter the climate parameters to predict maize yield:";

/// Height of one bordered input
const FIELD_HEIGHT: u16 = 3;

/// Draws the entire form.
pub fn draw(f: &mut Frame, form: &FormState, pipeline: &PredictionPipeline, metrics: &SessionMetrics) {
    let area = f.size();
    f.render_widget(Block::default().style(Theme::base()), area);

    let tallest = Feature::FORM_COLUMNS
        .iter()
        .map(|c| c.len() as u16)
        .max()
        .unwrap_or(0);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // title + prompt
            Constraint::Length(form.startup.len() as u16 + 2),
            Constraint::Length(tallest * FIELD_HEIGHT),
            Constraint::Length(3), // predict button
            Constraint::Length(3), // input echo
            Constraint::Length(3), // result
            Constraint::Min(0),
            Constraint::Length(1), // metrics
            Constraint::Length(1), // hints
        ])
        .split(area);

    draw_header(f, chunks[0]);
    draw_status(f, chunks[1], &form.startup, pipeline.model_name());
    draw_columns(f, chunks[2], form);
    draw_button(f, chunks[3], form.focus == Focus::Predict, pipeline.is_ready());
    draw_echo(f, chunks[4], form.echo.as_deref());
    draw_result(f, chunks[5], form.result.as_ref());

    f.render_widget(
        Paragraph::new(Span::styled(metrics.summary_line(), Theme::muted()))
            .alignment(Alignment::Center),
        chunks[7],
    );
    draw_hints(f, chunks[8]);
}

fn draw_header(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(TITLE, Theme::title())),
        Line::from(Span::styled(PROMPT, Theme::dim())),
    ];
    f.render_widget(Paragraph::new(lines), area);
}

fn draw_status(f: &mut Frame, area: Rect, banners: &[Banner], model_name: Option<&str>) {
    let lines: Vec<Line> = banners.iter().map(banner_line).collect();
    let title = match model_name {
        Some(name) => format!(" Model: {} ", name),
        None => " Model ".to_string(),
    };

    f.render_widget(
        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Theme::border())
                    .title(title),
            )
            .wrap(Wrap { trim: true }),
        area,
    );
}

fn draw_columns(f: &mut Frame, area: Rect, form: &FormState) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(34),
            Constraint::Percentage(33),
        ])
        .split(area);

    for (features, col_area) in Feature::FORM_COLUMNS.iter().zip(cols.iter()) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(
                features
                    .iter()
                    .map(|_| Constraint::Length(FIELD_HEIGHT))
                    .collect::<Vec<_>>(),
            )
            .split(*col_area);

        for (&feature, row_area) in features.iter().zip(rows.iter()) {
            draw_field(f, *row_area, feature, form);
        }
    }
}

fn draw_field(f: &mut Frame, area: Rect, feature: Feature, form: &FormState) {
    let focused = form.focus == Focus::Field(feature);
    let border = if focused { Theme::focused() } else { Theme::border() };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(format!(" {} ", feature.label()))
        .title_style(if focused { Theme::title() } else { Theme::dim() });

    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut spans = vec![Span::styled(form.text(feature), Theme::text())];
    if focused {
        spans.push(Span::styled("█", Theme::key()));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), inner);
}

fn draw_button(f: &mut Frame, area: Rect, focused: bool, ready: bool) {
    let button = centered_width(PREDICT_LABEL.len() as u16 + 8, area);

    let (label_style, border_style) = match (focused, ready) {
        (_, false) => (Theme::muted(), Theme::muted()),
        (true, true) => (Theme::title(), Theme::focused()),
        (false, true) => (Theme::text(), Theme::border()),
    };

    f.render_widget(
        Paragraph::new(Span::styled(PREDICT_LABEL, label_style))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border_style),
            ),
        button,
    );
}

fn draw_echo(f: &mut Frame, area: Rect, echo: Option<&str>) {
    let text = echo.unwrap_or("");
    f.render_widget(
        Paragraph::new(Span::styled(text, Theme::dim()))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Theme::border())
                    .title(" Input "),
            )
            .wrap(Wrap { trim: true }),
        area,
    );
}

fn draw_result(f: &mut Frame, area: Rect, result: Option<&Banner>) {
    let (line, border) = match result {
        Some(banner) => (banner_line(banner), Theme::severity(banner.severity)),
        None => (
            Line::from(Span::styled("No prediction yet", Theme::muted())),
            Theme::border(),
        ),
    };

    f.render_widget(
        Paragraph::new(line)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border)
                    .title(" Result "),
            )
            .wrap(Wrap { trim: true }),
        area,
    );
}

fn banner_line(banner: &Banner) -> Line<'_> {
    let marker = match banner.severity {
        Severity::Info => " · ",
        Severity::Success => " ✔ ",
        Severity::Error => " ✖ ",
    };
    let style = Theme::severity(banner.severity);

    Line::from(vec![
        Span::styled(marker, style),
        Span::styled(banner.message.as_str(), style),
    ])
}

fn draw_hints(f: &mut Frame, area: Rect) {
    let hint = Paragraph::new(Line::from(vec![
        Span::styled("tab / arrows", Theme::key()),
        Span::styled("  move    ", Theme::muted()),
        Span::styled("enter", Theme::key()),
        Span::styled("  next / predict    ", Theme::muted()),
        Span::styled("ctrl+p", Theme::key()),
        Span::styled("  predict    ", Theme::muted()),
        Span::styled("esc", Theme::key()),
        Span::styled("  quit", Theme::muted()),
    ]))
    .alignment(Alignment::Center);

    f.render_widget(hint, area);
}

fn centered_width(width: u16, r: Rect) -> Rect {
    let width = width.min(r.width);
    Rect {
        x: r.x + (r.width - width) / 2,
        y: r.y,
        width,
        height: r.height,
    }
}
