use async_trait::async_trait;
use capsense_types::{AnalysisResult, AnalyzeRequest, DashboardRow, FeedbackRequest};

use crate::error::CapsenseError;

/// Core trait for talking to a CapSense backend.
///
/// Every call is a single request with no retry; state handling lives in the
/// callers ([`crate::dashboard::DashboardLoader`],
/// [`crate::workspace::AnalysisWorkspace`]) so they can be driven by any
/// implementation of this trait.
#[async_trait]
pub trait CapsenseApi: Send + Sync {
    /// `GET /api/dashboard`
    async fn fetch_dashboard(&self) -> Result<Vec<DashboardRow>, CapsenseError>;

    /// `POST /api/feedback`. Any 2xx counts as success regardless of body.
    async fn post_feedback(&self, request: &FeedbackRequest) -> Result<(), CapsenseError>;

    /// `POST /batch-analyze`
    async fn analyze_text(&self, request: &AnalyzeRequest)
        -> Result<AnalysisResult, CapsenseError>;

    /// Base URL requests are issued against
    fn base_url(&self) -> &str;
}
