use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

/// Sentiment label attached to an analyzed customer text.
///
/// The sentiment classifier emits capitalised labels (`"Positive"`) when its
/// trained model is loaded and lowercase ones from the keyword fallback, so
/// parsing is case-insensitive. Serialisation is always lowercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TS)]
#[ts(export, rename_all = "lowercase")]
pub enum Classification {
    Positive,
    Neutral,
    Negative,
}

impl Classification {
    pub fn as_str(&self) -> &'static str {
        match self {
            Classification::Positive => "positive",
            Classification::Neutral => "neutral",
            Classification::Negative => "negative",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Classification {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "positive" => Ok(Classification::Positive),
            "neutral" => Ok(Classification::Neutral),
            "negative" => Ok(Classification::Negative),
            other => Err(format!("unknown classification: '{other}'")),
        }
    }
}

impl Serialize for Classification {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Classification {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// One unit of AI-derived feedback analysis, as returned by `/batch-analyze`.
///
/// Immutable once received; the client only ever appends these to its
/// results sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct AnalysisResult {
    pub original_text: String,
    pub response: String,
    #[serde(default)]
    pub emotion: String,
    #[serde(default)]
    pub sarcasm: String,
    #[serde(default)]
    pub aspects: String,
    pub classification: Classification,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub empathy_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub f1_score: Option<f64>,
}

impl AnalysisResult {
    /// Whether both the customer text and the generated response are present,
    /// which is what a feedback submission requires.
    pub fn is_reviewable(&self) -> bool {
        !self.original_text.is_empty() && !self.response.is_empty()
    }
}

/// Body of `POST /batch-analyze`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AnalyzeRequest {
    pub text: String,
}
