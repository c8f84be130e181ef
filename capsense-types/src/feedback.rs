use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

/// Human judgment applied to a generated response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum FeedbackVerdict {
    Approved,
    Rejected,
}

impl FeedbackVerdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            FeedbackVerdict::Approved => "approved",
            FeedbackVerdict::Rejected => "rejected",
        }
    }
}

impl fmt::Display for FeedbackVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body of `POST /api/feedback`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FeedbackRequest {
    pub original_text: String,
    pub response_text: String,
    pub feedback: FeedbackVerdict,
}

impl FeedbackRequest {
    pub fn new(
        original_text: impl Into<String>,
        response_text: impl Into<String>,
        feedback: FeedbackVerdict,
    ) -> Self {
        Self {
            original_text: original_text.into(),
            response_text: response_text.into(),
            feedback,
        }
    }
}

/// Optional JSON body of a non-2xx API response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ErrorResponse {
    #[serde(default)]
    pub error: Option<String>,
}
