//! Display formatting for terminal output
//!
//! Renders budget summaries as plain or colored text.

pub mod summary;

pub use summary::{format_amount, format_summary, SummaryStyle};
