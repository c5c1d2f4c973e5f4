//! Budget period calculator
//!
//! Turns a budget, a spend figure, a period rule and a reference instant
//! into the full set of derived figures. Pure: no clock reads, no I/O, and
//! identical output for identical input.

use serde::{Deserialize, Serialize};

use crate::error::{PaceError, PaceResult};
use crate::models::{
    BudgetInput, BudgetStatus, BudgetSummary, PaceAllowance, PeriodWindow, Rounding,
    StatusThresholds,
};

/// Delta beyond which the summary suggests a new daily allowance
pub const DEFAULT_ADVICE_MARGIN: f64 = 20.0;

const DAYS_PER_WEEK: f64 = 7.0;

/// Tunable points where historical variants of the calculation disagreed
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculatorConfig {
    /// Rounding for fractional elapsed days
    #[serde(default)]
    pub rounding: Rounding,

    #[serde(flatten)]
    pub thresholds: StatusThresholds,

    /// Minimum |delta| before pace advice is offered
    #[serde(default = "default_advice_margin")]
    pub advice_margin: f64,

    /// Subtract excluded spend from total spend
    #[serde(default = "default_honor_excluded_spend")]
    pub honor_excluded_spend: bool,
}

fn default_advice_margin() -> f64 {
    DEFAULT_ADVICE_MARGIN
}

fn default_honor_excluded_spend() -> bool {
    true
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            rounding: Rounding::default(),
            thresholds: StatusThresholds::default(),
            advice_margin: DEFAULT_ADVICE_MARGIN,
            honor_excluded_spend: true,
        }
    }
}

/// Derives a [`BudgetSummary`] from a [`BudgetInput`]
#[derive(Debug, Clone, Copy, Default)]
pub struct BudgetPeriodCalculator {
    config: CalculatorConfig,
}

impl BudgetPeriodCalculator {
    /// Create a calculator with the given configuration
    pub fn new(config: CalculatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Compute every derived figure for `input`
    ///
    /// # Errors
    ///
    /// - [`PaceError::Configuration`] when a custom period's anchor day is
    ///   outside 1-28.
    /// - [`PaceError::Validation`] when an amount is NaN or infinite.
    /// - [`PaceError::DivisionByZero`] when the budget is zero.
    pub fn compute_summary(&self, input: &BudgetInput) -> PaceResult<BudgetSummary> {
        let window = PeriodWindow::resolve(
            input.period_mode,
            input.anchor_day,
            input.now,
            self.config.rounding,
        )?;

        require_finite(input.budget, "budget")?;
        require_finite(input.total_spend, "total spend")?;
        require_finite(input.excluded_spend, "excluded spend")?;

        if input.budget == 0.0 {
            return Err(PaceError::DivisionByZero);
        }

        let budget = input.budget;
        let actual_spend = if self.config.honor_excluded_spend {
            input.actual_spend()
        } else {
            input.total_spend
        };

        let daily_allowance = budget / window.period_length_days as f64;
        let weekly_allowance = daily_allowance * DAYS_PER_WEEK;
        let budgeted_to_date = daily_allowance * window.days_elapsed as f64;

        let delta = normalize_zero(budgeted_to_date.floor() - actual_spend);
        let remaining_budget = budget - actual_spend;

        let pace_corrected = (window.days_remaining > 0).then(|| {
            let daily = remaining_budget / window.days_remaining as f64;
            PaceAllowance {
                daily,
                weekly: daily * DAYS_PER_WEEK,
            }
        });

        let period_ended_today = window.days_remaining == 0;
        let left_to_spend_today =
            (period_ended_today && remaining_budget > 0.0).then_some(remaining_budget);

        Ok(BudgetSummary {
            window,
            budget,
            actual_spend,
            daily_allowance,
            weekly_allowance,
            budgeted_to_date,
            percent_spent: normalize_zero((actual_spend / budget * 100.0).round()),
            delta,
            status: BudgetStatus::classify(delta, &self.config.thresholds),
            remaining_budget,
            fraction_spent: actual_spend / budget,
            fraction_elapsed: budgeted_to_date / budget,
            pace_corrected,
            period_ended_today,
            left_to_spend_today,
        })
    }
}

/// Compute a summary with the default configuration
pub fn compute_summary(input: &BudgetInput) -> PaceResult<BudgetSummary> {
    BudgetPeriodCalculator::default().compute_summary(input)
}

fn require_finite(amount: f64, what: &str) -> PaceResult<()> {
    if amount.is_finite() {
        Ok(())
    } else {
        Err(PaceError::Validation(format!(
            "{} must be a finite number, got {}",
            what, amount
        )))
    }
}

// -0.0 would otherwise print as "-0" and read as behind
fn normalize_zero(value: f64) -> f64 {
    if value == 0.0 {
        0.0
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_calendar_month_scenario() {
        let input = BudgetInput::on_date(1000.0, 300.0, date(2024, 2, 15));
        let summary = compute_summary(&input).unwrap();

        assert_eq!(summary.window.start_date, date(2024, 2, 1));
        assert_eq!(summary.window.period_length_days, 29);
        assert_eq!(summary.window.days_elapsed, 14);
        assert_eq!(summary.window.days_remaining, 15);
        assert!((summary.daily_allowance - 34.48).abs() < 0.01);
        assert!((summary.budgeted_to_date - 482.76).abs() < 0.01);
        assert_eq!(summary.delta, 182.0);
        assert_eq!(summary.status, BudgetStatus::Ahead);
        assert_eq!(summary.percent_spent, 30.0);
        assert_eq!(summary.remaining_budget, 700.0);
    }

    #[test]
    fn test_excluded_spend_reduces_actual() {
        let input = BudgetInput::on_date(1000.0, 600.0, date(2024, 2, 15)).with_excluded(200.0);
        let summary = compute_summary(&input).unwrap();
        assert_eq!(summary.actual_spend, 400.0);
        assert_eq!(summary.delta, 82.0);
    }

    #[test]
    fn test_excluded_spend_can_be_ignored() {
        let calculator = BudgetPeriodCalculator::new(CalculatorConfig {
            honor_excluded_spend: false,
            ..CalculatorConfig::default()
        });
        let input = BudgetInput::on_date(1000.0, 600.0, date(2024, 2, 15)).with_excluded(200.0);
        let summary = calculator.compute_summary(&input).unwrap();
        assert_eq!(summary.actual_spend, 600.0);
    }

    #[test]
    fn test_zero_budget_is_division_by_zero() {
        let input = BudgetInput::on_date(0.0, 10.0, date(2024, 2, 15));
        assert_eq!(compute_summary(&input).unwrap_err(), PaceError::DivisionByZero);
    }

    #[test]
    fn test_invalid_anchor_is_configuration_error() {
        let input = BudgetInput::on_date(1000.0, 0.0, date(2024, 2, 15)).anchored_on(30);
        assert!(compute_summary(&input).unwrap_err().is_configuration());
    }

    #[test]
    fn test_on_target_delta_is_positive_zero() {
        // 14 days of 29 at 29/day budgets exactly 406
        let input = BudgetInput::on_date(841.0, 406.0, date(2024, 2, 15));
        let summary = compute_summary(&input).unwrap();
        assert_eq!(summary.delta, 0.0);
        assert!(summary.delta.is_sign_positive());
        assert_eq!(summary.status, BudgetStatus::OnTarget);
    }

    #[test]
    fn test_non_finite_amounts_are_rejected() {
        let day = date(2024, 2, 15);
        let inputs = [
            BudgetInput::on_date(f64::NAN, 300.0, day),
            BudgetInput::on_date(f64::INFINITY, 300.0, day),
            BudgetInput::on_date(1000.0, f64::NAN, day),
            BudgetInput::on_date(1000.0, f64::NEG_INFINITY, day),
            BudgetInput::on_date(1000.0, 300.0, day).with_excluded(f64::NAN),
        ];
        for input in inputs {
            let err = compute_summary(&input).unwrap_err();
            assert!(matches!(err, PaceError::Validation(_)), "{:?} gave {:?}", input, err);
        }
    }

    #[test]
    fn test_far_behind() {
        let input = BudgetInput::on_date(1000.0, 700.0, date(2024, 2, 15));
        let summary = compute_summary(&input).unwrap();
        assert_eq!(summary.delta, -218.0);
        assert_eq!(summary.status, BudgetStatus::FarBehind);
    }

    #[test]
    fn test_first_day_of_period() {
        let input = BudgetInput::on_date(1000.0, 50.0, date(2024, 3, 1));
        let summary = compute_summary(&input).unwrap();
        assert_eq!(summary.window.days_elapsed, 0);
        assert_eq!(summary.budgeted_to_date, 0.0);
        assert_eq!(summary.delta, -50.0);
        assert_eq!(summary.status, BudgetStatus::Behind);
    }

    #[test]
    fn test_pace_correction_identity() {
        let input = BudgetInput::on_date(1000.0, 300.0, date(2024, 2, 15));
        let summary = compute_summary(&input).unwrap();
        let pace = summary.pace_corrected.unwrap();
        let projected = summary.actual_spend + pace.daily * summary.window.days_remaining as f64;
        assert!((projected - 1000.0).abs() < 1e-9);
        assert_eq!(pace.weekly, pace.daily * 7.0);
    }

    #[test]
    fn test_advice() {
        let ahead = compute_summary(&BudgetInput::on_date(1000.0, 300.0, date(2024, 2, 15))).unwrap();
        assert!(matches!(
            ahead.advice(DEFAULT_ADVICE_MARGIN),
            Some(crate::models::PaceAdvice::CanSpendMore { .. })
        ));

        let behind = compute_summary(&BudgetInput::on_date(1000.0, 700.0, date(2024, 2, 15))).unwrap();
        assert!(matches!(
            behind.advice(DEFAULT_ADVICE_MARGIN),
            Some(crate::models::PaceAdvice::SpendLess { .. })
        ));

        let close = compute_summary(&BudgetInput::on_date(1000.0, 470.0, date(2024, 2, 15))).unwrap();
        assert_eq!(close.advice(DEFAULT_ADVICE_MARGIN), None);
    }

    #[test]
    fn test_config_serde_defaults() {
        let config: CalculatorConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, CalculatorConfig::default());

        let config: CalculatorConfig =
            serde_json::from_str(r#"{"rounding":"ceil","far_behind_margin":49}"#).unwrap();
        assert_eq!(config.rounding, Rounding::Ceil);
        assert_eq!(config.thresholds.far_behind_margin, 49.0);
        assert_eq!(config.thresholds.on_target_tolerance, 0.0);
    }
}
