//! In-memory [`CapsenseApi`] used by the unit tests.

use async_trait::async_trait;
use capsense_types::{AnalysisResult, AnalyzeRequest, Classification, DashboardRow, FeedbackRequest};
use std::collections::VecDeque;
use std::sync::Mutex;

use crate::{client::CapsenseApi, error::CapsenseError};

/// Serves queued responses in order and records every request it receives.
#[derive(Default)]
pub struct RecordingApi {
    dashboard: Mutex<VecDeque<Result<Vec<DashboardRow>, CapsenseError>>>,
    feedback: Mutex<VecDeque<Result<(), CapsenseError>>>,
    analysis: Mutex<VecDeque<Result<AnalysisResult, CapsenseError>>>,
    feedback_requests: Mutex<Vec<FeedbackRequest>>,
    analyze_requests: Mutex<Vec<AnalyzeRequest>>,
    dashboard_calls: Mutex<usize>,
}

impl RecordingApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dashboard(self, response: Result<Vec<DashboardRow>, CapsenseError>) -> Self {
        self.dashboard.lock().unwrap().push_back(response);
        self
    }

    pub fn with_feedback(self, response: Result<(), CapsenseError>) -> Self {
        self.feedback.lock().unwrap().push_back(response);
        self
    }

    pub fn with_analysis(self, response: Result<AnalysisResult, CapsenseError>) -> Self {
        self.analysis.lock().unwrap().push_back(response);
        self
    }

    pub fn feedback_requests(&self) -> Vec<FeedbackRequest> {
        self.feedback_requests.lock().unwrap().clone()
    }

    pub fn analyze_requests(&self) -> Vec<AnalyzeRequest> {
        self.analyze_requests.lock().unwrap().clone()
    }

    pub fn dashboard_calls(&self) -> usize {
        *self.dashboard_calls.lock().unwrap()
    }
}

#[async_trait]
impl CapsenseApi for RecordingApi {
    async fn fetch_dashboard(&self) -> Result<Vec<DashboardRow>, CapsenseError> {
        *self.dashboard_calls.lock().unwrap() += 1;
        self.dashboard
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(CapsenseError::internal("no queued dashboard response")))
    }

    async fn post_feedback(&self, request: &FeedbackRequest) -> Result<(), CapsenseError> {
        self.feedback_requests.lock().unwrap().push(request.clone());
        self.feedback
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Ok(()))
    }

    async fn analyze_text(
        &self,
        request: &AnalyzeRequest,
    ) -> Result<AnalysisResult, CapsenseError> {
        self.analyze_requests.lock().unwrap().push(request.clone());
        self.analysis
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(CapsenseError::internal("no queued analysis response")))
    }

    fn base_url(&self) -> &str {
        "http://recording.test"
    }
}

pub fn analysis(original_text: &str, response: &str) -> AnalysisResult {
    AnalysisResult {
        original_text: original_text.to_string(),
        response: response.to_string(),
        emotion: "joy".to_string(),
        sarcasm: "No".to_string(),
        aspects: "Product quality".to_string(),
        classification: Classification::Positive,
        empathy_score: None,
        f1_score: Some(0.8),
    }
}

pub fn dashboard_row(customer_text: &str) -> DashboardRow {
    DashboardRow {
        customer_text: customer_text.to_string(),
        sentiment: Some("positive".to_string()),
        response_text: format!("reply to {customer_text}"),
        empathy_score: Some(0.9),
        sarcasm_detected: Some(false),
        emotion: Some("joy".to_string()),
        created_at: "2025-01-01 10:00:00".to_string(),
    }
}
