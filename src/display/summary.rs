//! Summary formatting for terminal output
//!
//! Amounts are floored to whole currency units, matching how the figures were
//! always presented.

use crate::models::{BudgetStatus, BudgetSummary, PaceAdvice};

const BAR_WIDTH: usize = 30;

/// Rendering options for [`format_summary`]
#[derive(Debug, Clone)]
pub struct SummaryStyle<'a> {
    pub currency_symbol: &'a str,
    pub advice_margin: f64,
    /// Emit ANSI color codes
    pub color: bool,
}

/// Format an amount floored to whole units, e.g. `£34` or `-£12`
pub fn format_amount(amount: f64, symbol: &str) -> String {
    // + 0.0 turns -0.0 into 0.0
    let whole = amount.floor() + 0.0;
    if whole < 0.0 {
        format!("-{}{}", symbol, -whole)
    } else {
        format!("{}{}", symbol, whole)
    }
}

fn status_color(status: BudgetStatus) -> &'static str {
    match status {
        BudgetStatus::Ahead | BudgetStatus::OnTarget => "\x1b[32m",
        BudgetStatus::Behind => "\x1b[33m",
        BudgetStatus::FarBehind => "\x1b[31m",
    }
}

fn paint(text: &str, status: BudgetStatus, color: bool) -> String {
    if color {
        format!("{}{}\x1b[0m", status_color(status), text)
    } else {
        text.to_string()
    }
}

/// Progress bar filled to the spent fraction with a marker at budget-to-date
pub fn format_progress_bar(fraction_spent: f64, fraction_elapsed: f64, width: usize) -> String {
    let cells = |fraction: f64| -> usize {
        if fraction.is_finite() && fraction > 0.0 {
            ((fraction * width as f64).round() as usize).min(width)
        } else {
            0
        }
    };

    let filled = cells(fraction_spent);
    let marker = cells(fraction_elapsed).min(width.saturating_sub(1));

    let mut bar: Vec<char> = (0..width)
        .map(|i| if i < filled { '█' } else { '░' })
        .collect();
    if width > 0 {
        bar[marker] = '│';
    }
    format!("[{}]", bar.into_iter().collect::<String>())
}

/// One-line "You are £x ahead of budget" statement
///
/// A gap under one whole unit reads as on target whatever the status band.
pub fn format_status_line(summary: &BudgetSummary, symbol: &str, color: bool) -> String {
    let gap = summary.delta.abs();
    if summary.status == BudgetStatus::OnTarget || gap.floor() == 0.0 {
        return format!("You are {} budget", BudgetStatus::OnTarget.relation());
    }
    let amount = paint(&format_amount(gap, symbol), summary.status, color);
    format!("You are {} {} budget", amount, summary.status.relation())
}

/// Advice line, if any
pub fn format_advice(advice: &PaceAdvice, symbol: &str) -> String {
    match advice {
        PaceAdvice::CanSpendMore { daily } => {
            format!("You can now spend {} a day", format_amount(*daily, symbol))
        }
        PaceAdvice::SpendLess { daily } => {
            format!("Try to spend less than {} a day", format_amount(*daily, symbol))
        }
        PaceAdvice::LastDay { left } => {
            format!("You have {} left to spend today!", format_amount(*left, symbol))
        }
    }
}

/// Full multi-line summary
pub fn format_summary(summary: &BudgetSummary, style: &SummaryStyle<'_>) -> String {
    let symbol = style.currency_symbol;
    let mut output = String::new();

    output.push_str(&format!(
        "You have spent {} so far\n",
        format_amount(summary.actual_spend, symbol)
    ));
    output.push_str(&format_progress_bar(
        summary.fraction_spent,
        summary.fraction_elapsed,
        BAR_WIDTH,
    ));
    output.push('\n');
    output.push_str(&format_status_line(summary, symbol, style.color));
    output.push('\n');
    output.push_str(&format!(
        "You have {} left in your budget\n",
        format_amount(summary.remaining_budget, symbol)
    ));

    output.push_str("\nInitial budget\n");
    output.push_str(&format!(
        "  You can spend {} a day\n",
        format_amount(summary.daily_allowance, symbol)
    ));
    output.push_str(&format!(
        "  You can spend {} a week\n",
        format_amount(summary.weekly_allowance, symbol)
    ));

    let window = &summary.window;
    output.push_str("\nProgress\n");
    output.push_str(&format!(
        "  Period: {} to {}\n",
        window.start_date.format("%Y-%m-%d"),
        window.end_date().format("%Y-%m-%d")
    ));
    output.push_str(&format!(
        "  You are {} days into your budget period\n",
        window.days_elapsed
    ));
    output.push_str(&format!("  You have {} days left\n", window.days_remaining));
    output.push_str(&format!(
        "  You have spent {}% of your budget\n",
        summary.percent_spent
    ));
    output.push_str(&format!(
        "  Your budget up to today is {}\n",
        format_amount(summary.budgeted_to_date, symbol)
    ));

    if let Some(advice) = summary.advice(style.advice_margin) {
        output.push_str("\nFuture\n");
        output.push_str(&format!("  {}\n", format_advice(&advice, symbol)));
    }

    output
}
