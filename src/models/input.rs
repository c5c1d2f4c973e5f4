//! Calculator input
//!
//! A `BudgetInput` is everything the calculator needs for one computation,
//! including the reference instant.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use super::period::PeriodMode;

/// Caller-supplied figures for a single summary computation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BudgetInput {
    /// Total allowance for the period
    pub budget: f64,

    /// Cumulative amount spent so far
    pub total_spend: f64,

    /// Part of `total_spend` that does not count against the budget
    #[serde(default)]
    pub excluded_spend: f64,

    #[serde(default)]
    pub period_mode: PeriodMode,

    /// Reset day for [`PeriodMode::CustomAnchored`]; validated at compute time
    #[serde(default = "default_anchor_day")]
    pub anchor_day: u32,

    /// Reference instant
    pub now: NaiveDateTime,
}

fn default_anchor_day() -> u32 {
    1
}

impl BudgetInput {
    /// Create an input for a calendar-month period with no excluded spend
    pub fn new(budget: f64, total_spend: f64, now: NaiveDateTime) -> Self {
        Self {
            budget,
            total_spend,
            excluded_spend: 0.0,
            period_mode: PeriodMode::CalendarMonth,
            anchor_day: default_anchor_day(),
            now,
        }
    }

    /// Create an input referenced to midnight of `date`
    pub fn on_date(budget: f64, total_spend: f64, date: NaiveDate) -> Self {
        Self::new(budget, total_spend, date.and_time(NaiveTime::MIN))
    }

    /// Set the excluded spend
    pub fn with_excluded(mut self, excluded_spend: f64) -> Self {
        self.excluded_spend = excluded_spend;
        self
    }

    /// Switch to a custom period resetting on `anchor_day`
    pub fn anchored_on(mut self, anchor_day: u32) -> Self {
        self.period_mode = PeriodMode::CustomAnchored;
        self.anchor_day = anchor_day;
        self
    }

    /// Spend that counts against the budget; negative when exclusions exceed the total
    pub fn actual_spend(&self) -> f64 {
        self.total_spend - self.excluded_spend
    }
}
