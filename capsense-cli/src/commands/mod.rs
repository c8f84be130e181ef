//! Command implementations for the capsense CLI

pub mod analyze;
pub mod dashboard;
pub mod feedback;
pub mod session;
pub mod types;

pub use analyze::*;
pub use dashboard::*;
pub use feedback::*;
pub use session::*;
pub use types::*;
