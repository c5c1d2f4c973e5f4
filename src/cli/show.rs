//! Show command
//!
//! Computes the summary for the stored inputs and prints it as text or JSON.

use std::io::IsTerminal;

use chrono::NaiveDate;
use serde::Serialize;

use crate::config::settings::Settings;
use crate::display::{format_summary, SummaryStyle};
use crate::error::{PaceError, PaceResult};
use crate::models::{BudgetInput, BudgetSummary, PaceAdvice};
use crate::services::{BudgetPeriodCalculator, Clock};
use crate::storage::{BudgetState, StickyStore};

const NO_BUDGET_MESSAGE: &str = "Set a budget to see projections: pace budget <AMOUNT>";

#[derive(Serialize)]
struct ShowReport {
    input: BudgetInput,
    /// Null when the budget is zero
    summary: Option<BudgetSummary>,
    advice: Option<PaceAdvice>,
}

/// Parse a `YYYY-MM-DD` date argument
pub fn parse_date(s: &str) -> PaceResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| PaceError::Validation(format!("Invalid date '{}', expected YYYY-MM-DD", s)))
}

/// Compute the summary for the stored inputs, or `None` if there is no budget
pub fn summarize(
    store: &StickyStore,
    settings: &Settings,
    clock: &dyn Clock,
) -> PaceResult<(BudgetInput, Option<BudgetSummary>)> {
    let input = BudgetState::load(store).to_input(clock.now());
    let calculator = BudgetPeriodCalculator::new(settings.calculator);

    match calculator.compute_summary(&input) {
        Ok(summary) => {
            tracing::debug!(
                delta = summary.delta,
                status = %summary.status,
                days_elapsed = summary.window.days_elapsed,
                "computed summary"
            );
            Ok((input, Some(summary)))
        }
        Err(PaceError::DivisionByZero) => Ok((input, None)),
        Err(e) => Err(e),
    }
}

/// Handle the show command
pub fn handle_show(
    store: &StickyStore,
    settings: &Settings,
    clock: &dyn Clock,
    json: bool,
) -> PaceResult<()> {
    let (input, summary) = summarize(store, settings, clock)?;

    if json {
        let report = ShowReport {
            input,
            summary,
            advice: summary.and_then(|s| s.advice(settings.calculator.advice_margin)),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    match summary {
        Some(summary) => {
            let style = SummaryStyle {
                currency_symbol: &settings.currency_symbol,
                advice_margin: settings.calculator.advice_margin,
                color: std::io::stdout().is_terminal(),
            };
            print!("{}", format_summary(&summary, &style));
        }
        None => println!("{}", NO_BUDGET_MESSAGE),
    }

    Ok(())
}
