//! Derived budget figures
//!
//! `BudgetSummary` is the calculator's output: a flat record of everything
//! the presentation layer shows for one (input, now) pair.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::period::PeriodWindow;

/// Delta within this distance of zero counts as on target
pub const DEFAULT_ON_TARGET_TOLERANCE: f64 = 0.0;

/// Overspend beyond this amount escalates from behind to far behind
pub const DEFAULT_FAR_BEHIND_MARGIN: f64 = 99.0;

/// Qualitative adherence, ordered from worst to best
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetStatus {
    FarBehind,
    Behind,
    OnTarget,
    Ahead,
}

impl BudgetStatus {
    /// Classify a delta (budgeted-to-date minus actual spend)
    ///
    /// A NaN delta has no position on the scale and is reported as the worst band.
    pub fn classify(delta: f64, thresholds: &StatusThresholds) -> Self {
        if delta.is_nan() {
            Self::FarBehind
        } else if delta > thresholds.on_target_tolerance {
            Self::Ahead
        } else if delta >= -thresholds.on_target_tolerance {
            Self::OnTarget
        } else if delta >= -thresholds.far_behind_margin {
            Self::Behind
        } else {
            Self::FarBehind
        }
    }

    /// Phrase completing "You are ... budget"
    pub fn relation(&self) -> &'static str {
        match self {
            Self::Ahead => "ahead of",
            Self::OnTarget => "spot on your",
            Self::Behind | Self::FarBehind => "behind your",
        }
    }
}

impl fmt::Display for BudgetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FarBehind => write!(f, "Far behind"),
            Self::Behind => write!(f, "Behind"),
            Self::OnTarget => write!(f, "On target"),
            Self::Ahead => write!(f, "Ahead"),
        }
    }
}

/// Boundaries between the status bands
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatusThresholds {
    #[serde(default = "default_on_target_tolerance")]
    pub on_target_tolerance: f64,
    #[serde(default = "default_far_behind_margin")]
    pub far_behind_margin: f64,
}

fn default_on_target_tolerance() -> f64 {
    DEFAULT_ON_TARGET_TOLERANCE
}

fn default_far_behind_margin() -> f64 {
    DEFAULT_FAR_BEHIND_MARGIN
}

impl Default for StatusThresholds {
    fn default() -> Self {
        Self {
            on_target_tolerance: DEFAULT_ON_TARGET_TOLERANCE,
            far_behind_margin: DEFAULT_FAR_BEHIND_MARGIN,
        }
    }
}

/// Per-day and per-week spend for the rest of the period
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PaceAllowance {
    pub daily: f64,
    pub weekly: f64,
}

/// Forward-looking hint shown under the figures
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PaceAdvice {
    /// Well under budget: the daily allowance for the rest of the period went up
    CanSpendMore { daily: f64 },
    /// Well over budget: keep under this daily amount to recover
    SpendLess { daily: f64 },
    /// Last day of the period with money left
    LastDay { left: f64 },
}

/// Every figure derived from one budget input
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BudgetSummary {
    pub window: PeriodWindow,
    pub budget: f64,
    pub actual_spend: f64,
    pub daily_allowance: f64,
    pub weekly_allowance: f64,
    pub budgeted_to_date: f64,
    pub percent_spent: f64,
    /// Floored budget-to-date minus actual spend; positive means ahead
    pub delta: f64,
    pub status: BudgetStatus,
    pub remaining_budget: f64,
    /// Actual spend as a fraction of the budget
    pub fraction_spent: f64,
    /// Budget-to-date as a fraction of the budget
    pub fraction_elapsed: f64,
    /// Absent once no days remain
    pub pace_corrected: Option<PaceAllowance>,
    pub period_ended_today: bool,
    pub left_to_spend_today: Option<f64>,
}

impl BudgetSummary {
    /// Advice for the rest of the period, if the delta warrants any
    pub fn advice(&self, margin: f64) -> Option<PaceAdvice> {
        match self.pace_corrected {
            Some(pace) if self.delta > margin => Some(PaceAdvice::CanSpendMore { daily: pace.daily }),
            Some(pace) if self.delta < -margin => Some(PaceAdvice::SpendLess { daily: pace.daily }),
            None if self.period_ended_today && self.delta > 1.0 => Some(PaceAdvice::LastDay {
                left: self.remaining_budget,
            }),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_bands() {
        let t = StatusThresholds::default();
        assert_eq!(BudgetStatus::classify(0.5, &t), BudgetStatus::Ahead);
        assert_eq!(BudgetStatus::classify(0.0, &t), BudgetStatus::OnTarget);
        assert_eq!(BudgetStatus::classify(-0.0, &t), BudgetStatus::OnTarget);
        assert_eq!(BudgetStatus::classify(-1.0, &t), BudgetStatus::Behind);
        assert_eq!(BudgetStatus::classify(-99.0, &t), BudgetStatus::Behind);
        assert_eq!(BudgetStatus::classify(-99.5, &t), BudgetStatus::FarBehind);
    }

    #[test]
    fn test_classify_nan_is_far_behind() {
        let t = StatusThresholds::default();
        assert_eq!(BudgetStatus::classify(f64::NAN, &t), BudgetStatus::FarBehind);
        assert_eq!(BudgetStatus::classify(f64::INFINITY, &t), BudgetStatus::Ahead);
        assert_eq!(BudgetStatus::classify(f64::NEG_INFINITY, &t), BudgetStatus::FarBehind);
    }

    #[test]
    fn test_classify_with_wider_tolerance() {
        let t = StatusThresholds {
            on_target_tolerance: 5.0,
            far_behind_margin: 50.0,
        };
        assert_eq!(BudgetStatus::classify(4.0, &t), BudgetStatus::OnTarget);
        assert_eq!(BudgetStatus::classify(-5.0, &t), BudgetStatus::OnTarget);
        assert_eq!(BudgetStatus::classify(-20.0, &t), BudgetStatus::Behind);
        assert_eq!(BudgetStatus::classify(-51.0, &t), BudgetStatus::FarBehind);
    }

    #[test]
    fn test_status_ordering() {
        assert!(BudgetStatus::FarBehind < BudgetStatus::Behind);
        assert!(BudgetStatus::Behind < BudgetStatus::OnTarget);
        assert!(BudgetStatus::OnTarget < BudgetStatus::Ahead);
    }

    #[test]
    fn test_relation_phrase() {
        assert_eq!(BudgetStatus::Ahead.relation(), "ahead of");
        assert_eq!(BudgetStatus::OnTarget.relation(), "spot on your");
        assert_eq!(BudgetStatus::FarBehind.relation(), "behind your");
    }
}
