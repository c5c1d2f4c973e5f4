//! Core data models for budget-pace
//!
//! The calculator's input, the period window it resolves, and the summary it
//! produces.

pub mod input;
pub mod period;
pub mod summary;

pub use input::BudgetInput;
pub use period::{AnchorDay, PeriodMode, PeriodWindow, Rounding};
pub use summary::{BudgetStatus, BudgetSummary, PaceAdvice, PaceAllowance, StatusThresholds};
