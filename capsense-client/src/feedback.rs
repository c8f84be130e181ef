use capsense_types::{AnalysisResult, FeedbackRequest, FeedbackVerdict};
use tracing::{debug, error, info};

use crate::{client::CapsenseApi, error::CapsenseError};

pub const MISSING_FIELDS_STATUS: &str =
    "Missing customer text or response. Please analyze the feedback first.";
pub const SAVED_STATUS: &str = "Feedback saved successfully.";
pub const FAILED_STATUS: &str = "Failed to submit feedback.";
pub const SERVER_ERROR_STATUS: &str = "Server error occurred. Please try again later.";

/// Result of one feedback submission, as shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedbackOutcome {
    /// The server accepted the verdict
    Saved,
    /// Nothing was sent: no selected result, or it lacks text or response
    MissingFields,
    /// The server answered with a non-2xx status
    Rejected { message: String },
    /// No response was received
    ServerUnreachable,
}

impl FeedbackOutcome {
    /// User-facing status line
    pub fn status_text(&self) -> &str {
        match self {
            FeedbackOutcome::Saved => SAVED_STATUS,
            FeedbackOutcome::MissingFields => MISSING_FIELDS_STATUS,
            FeedbackOutcome::Rejected { message } => message,
            FeedbackOutcome::ServerUnreachable => SERVER_ERROR_STATUS,
        }
    }

    pub fn is_saved(&self) -> bool {
        matches!(self, FeedbackOutcome::Saved)
    }
}

/// Build the request for the result at `selected_index`, or `None` when the
/// index is out of range or the result lacks text or response.
pub fn feedback_request(
    verdict: FeedbackVerdict,
    selected_index: usize,
    results: &[AnalysisResult],
) -> Option<FeedbackRequest> {
    let item = results.get(selected_index)?;
    if !item.is_reviewable() {
        return None;
    }
    Some(FeedbackRequest::new(
        item.original_text.clone(),
        item.response.clone(),
        verdict,
    ))
}

/// Submit a verdict on the selected analysis result.
///
/// Validation happens before any I/O: an invalid selection never reaches the
/// network. Exactly one POST is made otherwise; there is no retry and no
/// idempotency key, so calling this twice submits twice.
pub async fn submit_feedback<A>(
    api: &A,
    verdict: FeedbackVerdict,
    selected_index: usize,
    results: &[AnalysisResult],
) -> FeedbackOutcome
where
    A: CapsenseApi + ?Sized,
{
    let Some(request) = feedback_request(verdict, selected_index, results) else {
        error!(
            "Missing required fields for feedback submission (index {}, {} results)",
            selected_index,
            results.len()
        );
        return FeedbackOutcome::MissingFields;
    };

    debug!("Submitting {} feedback for result {}", verdict, selected_index);
    submit_request(api, &request).await
}

/// Submit an already-built request, applying the same empty-field check.
pub async fn submit_request<A>(api: &A, request: &FeedbackRequest) -> FeedbackOutcome
where
    A: CapsenseApi + ?Sized,
{
    if request.original_text.is_empty() || request.response_text.is_empty() {
        error!("Missing required fields for feedback submission");
        return FeedbackOutcome::MissingFields;
    }

    match api.post_feedback(request).await {
        Ok(()) => {
            info!("Feedback ({}) saved", request.feedback);
            FeedbackOutcome::Saved
        }
        Err(e) => {
            error!("Feedback submission error: {}", e);
            outcome_for_error(&e)
        }
    }
}

fn outcome_for_error(err: &CapsenseError) -> FeedbackOutcome {
    match err {
        CapsenseError::Network { .. } => FeedbackOutcome::ServerUnreachable,
        _ => FeedbackOutcome::Rejected {
            message: err.server_message().unwrap_or(FAILED_STATUS).to_string(),
        },
    }
}
