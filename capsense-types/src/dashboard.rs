use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Read-only historical record of a past analysis, as served by
/// `GET /api/dashboard`.
///
/// Rows written by the feedback endpoint carry only the texts, so the
/// detector columns come back as `null` for them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DashboardRow {
    pub customer_text: String,
    #[serde(default)]
    pub sentiment: Option<String>,
    pub response_text: String,
    #[serde(default)]
    pub empathy_score: Option<f64>,
    #[serde(default)]
    pub sarcasm_detected: Option<bool>,
    #[serde(default)]
    pub emotion: Option<String>,
    /// Timestamp exactly as the server rendered it.
    pub created_at: String,
}

impl DashboardRow {
    /// `true` only when the detector flagged sarcasm; unknown counts as no.
    pub fn is_sarcastic(&self) -> bool {
        self.sarcasm_detected.unwrap_or(false)
    }

    /// Calendar date of `created_at`, if the server's format is recognised.
    ///
    /// Accepts RFC 3339 as well as the `YYYY-MM-DD HH:MM:SS[.ffffff]` form the
    /// database driver produces.
    pub fn created_date(&self) -> Option<NaiveDate> {
        let raw = self.created_at.trim();

        if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
            return Some(ts.date_naive());
        }

        const FORMATS: [&str; 3] = [
            "%Y-%m-%d %H:%M:%S%.f",
            "%Y-%m-%d %H:%M:%S",
            "%Y-%m-%dT%H:%M:%S%.f",
        ];
        for format in FORMATS {
            if let Ok(ts) = NaiveDateTime::parse_from_str(raw, format) {
                return Some(ts.date());
            }
        }

        NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
    }
}
