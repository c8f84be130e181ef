//! Wire types shared between the CapSense API and its clients.
//!
//! Field names follow the JSON the backend actually emits: the analysis
//! endpoint answers in camelCase, the dashboard and feedback endpoints in
//! snake_case.

pub mod analysis;
pub mod dashboard;
pub mod feedback;
pub mod typescript_gen;

pub use analysis::{AnalysisResult, AnalyzeRequest, Classification};
pub use dashboard::DashboardRow;
pub use feedback::{ErrorResponse, FeedbackRequest, FeedbackVerdict};
pub use typescript_gen::{generate_all_definitions, generate_typescript_definitions};
