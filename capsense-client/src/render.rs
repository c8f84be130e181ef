//! Plain-text views of the dashboard and the analysis panels.

use capsense_types::{AnalysisResult, Classification, DashboardRow};
use std::fmt::Write;

use crate::dashboard::DashboardLoader;

pub const PREVIEW_CHARS: usize = 50;
pub const EMPTY_DASHBOARD_MESSAGE: &str = "No data available in the dashboard.";
pub const LOADING_DASHBOARD_MESSAGE: &str = "Loading dashboard data...";
pub const HIDDEN_DASHBOARD_MESSAGE: &str = "Dashboard hidden.";
pub const AWAITING_ANALYSIS: &str = "Awaiting analysis";
pub const NO_RESPONSES_MESSAGE: &str = "AI-generated response will appear here";

const DASHBOARD_HEADERS: [&str; 7] = [
    "Customer Text",
    "Sentiment",
    "AI Response",
    "Empathy Score",
    "Sarcasm",
    "Emotion",
    "Date",
];

/// First [`PREVIEW_CHARS`] characters followed by an ellipsis.
pub fn preview(text: &str) -> String {
    let mut out: String = text.chars().take(PREVIEW_CHARS).collect();
    out.push_str("...");
    out
}

fn dashboard_cells(row: &DashboardRow) -> [String; 7] {
    [
        preview(&row.customer_text),
        row.sentiment.clone().unwrap_or_default(),
        preview(&row.response_text),
        row.empathy_score.map(|s| s.to_string()).unwrap_or_default(),
        if row.is_sarcastic() { "Yes" } else { "No" }.to_string(),
        row.emotion.clone().unwrap_or_default(),
        row.created_date()
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| row.created_at.clone()),
    ]
}

/// Render rows as an aligned text table.
pub fn render_table(rows: &[DashboardRow]) -> String {
    let body: Vec<[String; 7]> = rows.iter().map(dashboard_cells).collect();

    let mut widths = DASHBOARD_HEADERS.map(|h| h.chars().count());
    for cells in &body {
        for (width, cell) in widths.iter_mut().zip(cells.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    write_row(&mut out, &DASHBOARD_HEADERS.map(String::from), &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    let _ = writeln!(out, "{}", rule.join("-+-"));
    for cells in &body {
        write_row(&mut out, cells, &widths);
    }
    out
}

fn write_row(out: &mut String, cells: &[String; 7], widths: &[usize; 7]) {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths.iter())
        .map(|(cell, width)| {
            let pad = width.saturating_sub(cell.chars().count());
            format!("{}{}", cell, " ".repeat(pad))
        })
        .collect();
    let _ = writeln!(out, "{}", padded.join(" | ").trim_end());
}

/// Render the dashboard body, in priority order: the loading line, the error
/// of the last load, the hidden notice, the empty-state line, the table.
pub fn render_dashboard(dashboard: &DashboardLoader) -> String {
    if dashboard.is_loading() {
        return format!("{LOADING_DASHBOARD_MESSAGE}\n");
    }
    if let Some(error) = dashboard.error() {
        return format!("{error}\n");
    }
    if !dashboard.is_visible() {
        return format!("{HIDDEN_DASHBOARD_MESSAGE}\n");
    }
    if dashboard.rows().is_empty() {
        return format!("{EMPTY_DASHBOARD_MESSAGE}\n");
    }
    render_table(dashboard.rows())
}

fn or_awaiting(value: &str) -> &str {
    if value.is_empty() {
        AWAITING_ANALYSIS
    } else {
        value
    }
}

fn classification_choices(selected: Option<Classification>) -> String {
    [
        (Classification::Positive, "Positive"),
        (Classification::Neutral, "Neutral"),
        (Classification::Negative, "Negative"),
    ]
    .iter()
    .map(|(value, label)| {
        let mark = if Some(*value) == selected { "x" } else { " " };
        format!("[{mark}] {label}")
    })
    .collect::<Vec<_>>()
    .join("  ")
}

/// Render the four detector panels for the selected result.
pub fn render_analysis(current: Option<&AnalysisResult>) -> String {
    let (emotion, sarcasm, aspects, classification) = match current {
        Some(result) => (
            result.emotion.as_str(),
            result.sarcasm.as_str(),
            result.aspects.as_str(),
            Some(result.classification),
        ),
        None => ("", "", "", None),
    };

    let mut out = String::new();
    let _ = writeln!(out, "Emotion Detection: {}", or_awaiting(emotion));
    let _ = writeln!(out, "Sarcasm Detection: {}", or_awaiting(sarcasm));
    let _ = writeln!(
        out,
        "Aspect-based Sentiment Analysis: {}",
        or_awaiting(aspects)
    );
    let _ = writeln!(
        out,
        "Feedback Classification: {}",
        classification_choices(classification)
    );
    out
}

/// Render every generated response, marking the selected one.
pub fn render_responses(results: &[AnalysisResult], selected_index: usize) -> String {
    if results.is_empty() {
        return format!("{NO_RESPONSES_MESSAGE}\n");
    }

    let mut out = String::from("All AI-generated responses:\n");
    for (index, result) in results.iter().enumerate() {
        let marker = if index == selected_index { ">" } else { " " };
        let _ = writeln!(out, "{} Feedback {}", marker, index + 1);
        let _ = writeln!(out, "    User said: {}", result.original_text);
        let _ = writeln!(out, "    AI Response: {}", result.response);
    }
    out
}
