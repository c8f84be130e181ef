//! View controllers for the portfolio site.
//!
//! Both controllers are plain state driven by view events, so a browser
//! binding only has to forward clicks and intersection reports and apply the
//! resulting state.

pub mod fade;
pub mod modal;

pub use fade::{FadeInObserver, IntersectionEntry, IN_VIEW_CLASS, VISIBLE_THRESHOLD};
pub use modal::{ClickTarget, EmbeddedFrame, MediaFrame, VideoModal};
