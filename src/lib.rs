//! budget-pace - track how far through your monthly budget you are
//!
//! Given a budget, the amount spent so far, a period rule and the current
//! date, the calculator derives daily and weekly allowances, how much of the
//! budget should have been used by today, whether spending is ahead of or
//! behind that pace, and what daily allowance would land exactly on budget.
//!
//! # Architecture
//!
//! - `models`: calculator input, period window and summary types
//! - `services`: the pure calculator and the clock abstraction
//! - `storage`: JSON file storage and the sticky key-value store
//! - `config`: path resolution and user settings
//! - `display`: terminal formatting
//! - `cli`: command handlers for the `pace` binary
//! - `error`: custom error types
//!
//! # Example
//!
//! ```
//! use budget_pace::models::{BudgetInput, BudgetStatus};
//! use budget_pace::services::compute_summary;
//! use chrono::NaiveDate;
//!
//! let today = NaiveDate::from_ymd_opt(2024, 2, 15).unwrap();
//! let summary = compute_summary(&BudgetInput::on_date(1000.0, 300.0, today)).unwrap();
//! assert_eq!(summary.status, BudgetStatus::Ahead);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{PaceError, PaceResult};
pub use models::{BudgetInput, BudgetSummary};
pub use services::{compute_summary, BudgetPeriodCalculator};
