//! # CapSense Client
//!
//! Client for the CapSense feedback-analysis API: load the dashboard of past
//! analyses, analyze new customer texts, and approve or reject the generated
//! responses.
//!
//! ## Example
//!
//! ```rust,no_run
//! use capsense_client::{AnalysisWorkspace, CapsenseClient, DashboardLoader};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = CapsenseClient::new("http://127.0.0.1:5000")?;
//!
//!     let mut workspace = AnalysisWorkspace::new();
//!     workspace.analyze(&client, "The package arrived broken").await?;
//!     println!("{}", workspace.approve(&client).await);
//!
//!     let mut dashboard = DashboardLoader::new();
//!     for row in dashboard.load(&client).await? {
//!         println!("{}: {}", row.created_at, row.customer_text);
//!     }
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod dashboard;
pub mod error;
pub mod feedback;
pub mod http;
pub mod render;
pub mod workspace;

#[cfg(test)]
mod testing;

pub use client::CapsenseApi;
pub use dashboard::DashboardLoader;
pub use error::CapsenseError;
pub use feedback::{submit_feedback, submit_request, FeedbackOutcome};
pub use http::{CapsenseClient, DEFAULT_BASE_URL};
pub use workspace::AnalysisWorkspace;

pub use capsense_types as types;
