//! Persisted budget inputs
//!
//! The raw figures the user last entered, read from the sticky store with
//! defaults for anything never set.

use chrono::NaiveDateTime;
use serde::Serialize;

use super::sticky::StickyStore;
use crate::error::PaceResult;
use crate::models::{BudgetInput, PeriodMode};

pub const BUDGET_KEY: &str = "budget";
pub const SPEND_KEY: &str = "spend";
pub const EXCLUDED_KEY: &str = "excludedFromBudget";
pub const CUSTOM_PERIOD_KEY: &str = "customPeriod";
pub const RESET_DAY_KEY: &str = "monthResetDate";

pub const DEFAULT_BUDGET: f64 = 1000.0;
pub const DEFAULT_RESET_DAY: u32 = 27;

/// One persisted input field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateField {
    Budget,
    Spend,
    Excluded,
    CustomPeriod,
    ResetDay,
}

impl StateField {
    pub const ALL: [StateField; 5] = [
        Self::Budget,
        Self::Spend,
        Self::Excluded,
        Self::CustomPeriod,
        Self::ResetDay,
    ];

    /// Key under which the field is stored
    pub fn key(&self) -> &'static str {
        match self {
            Self::Budget => BUDGET_KEY,
            Self::Spend => SPEND_KEY,
            Self::Excluded => EXCLUDED_KEY,
            Self::CustomPeriod => CUSTOM_PERIOD_KEY,
            Self::ResetDay => RESET_DAY_KEY,
        }
    }
}

/// Snapshot of the persisted inputs
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BudgetState {
    pub budget: f64,
    pub spend: f64,
    pub excluded_from_budget: f64,
    pub custom_period: bool,
    /// Stored unvalidated; the calculator rejects out-of-range values
    pub month_reset_date: u32,
}

impl Default for BudgetState {
    fn default() -> Self {
        Self {
            budget: DEFAULT_BUDGET,
            spend: 0.0,
            excluded_from_budget: 0.0,
            custom_period: false,
            month_reset_date: DEFAULT_RESET_DAY,
        }
    }
}

impl BudgetState {
    /// Read every field, falling back to defaults
    pub fn load(store: &StickyStore) -> Self {
        let defaults = Self::default();
        Self {
            budget: store.get(BUDGET_KEY, defaults.budget),
            spend: store.get(SPEND_KEY, defaults.spend),
            excluded_from_budget: store.get(EXCLUDED_KEY, defaults.excluded_from_budget),
            custom_period: store.get(CUSTOM_PERIOD_KEY, defaults.custom_period),
            month_reset_date: store.get(RESET_DAY_KEY, defaults.month_reset_date),
        }
    }

    /// Write every field
    pub fn save(&self, store: &mut StickyStore) -> PaceResult<()> {
        store.set(BUDGET_KEY, Some(self.budget))?;
        store.set(SPEND_KEY, Some(self.spend))?;
        store.set(EXCLUDED_KEY, Some(self.excluded_from_budget))?;
        store.set(CUSTOM_PERIOD_KEY, Some(self.custom_period))?;
        store.set(RESET_DAY_KEY, Some(self.month_reset_date))
    }

    pub fn period_mode(&self) -> PeriodMode {
        if self.custom_period {
            PeriodMode::CustomAnchored
        } else {
            PeriodMode::CalendarMonth
        }
    }

    /// Calculator input for the reference instant `now`
    pub fn to_input(&self, now: NaiveDateTime) -> BudgetInput {
        BudgetInput {
            budget: self.budget,
            total_spend: self.spend,
            excluded_spend: self.excluded_from_budget,
            period_mode: self.period_mode(),
            anchor_day: self.month_reset_date,
            now,
        }
    }
}
