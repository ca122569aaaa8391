//! Report rendering.

pub mod html;

pub use html::{render_report, DEFAULT_TEMPLATE};
