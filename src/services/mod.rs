//! Business logic layer for budget-pace
//!
//! The calculator that derives summary figures and the clock abstraction the
//! front end uses to supply "now".

pub mod calculator;
pub mod clock;

pub use calculator::{compute_summary, BudgetPeriodCalculator, CalculatorConfig};
pub use clock::{Clock, FixedClock, SystemClock};
