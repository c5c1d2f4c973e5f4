//! Input CLI commands
//!
//! Edits the persisted budget inputs: amounts, the period rule, and removal
//! of stored values.

use clap::{Subcommand, ValueEnum};

use crate::error::{PaceError, PaceResult};
use crate::models::AnchorDay;
use crate::storage::state::{
    BUDGET_KEY, CUSTOM_PERIOD_KEY, EXCLUDED_KEY, RESET_DAY_KEY, SPEND_KEY,
};
use crate::storage::{StateField, StickyStore};

/// Period subcommands
#[derive(Subcommand, Debug)]
pub enum PeriodCommands {
    /// Budget from the 1st to the end of each month
    Calendar,

    /// Budget from a reset day to the same day next month
    Custom {
        /// Day of the month the budget resets (1-28)
        #[arg(short, long)]
        day: u32,
    },
}

/// Persisted input that can be forgotten
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldArg {
    Budget,
    Spend,
    Excluded,
    CustomPeriod,
    ResetDay,
}

impl From<FieldArg> for StateField {
    fn from(arg: FieldArg) -> Self {
        match arg {
            FieldArg::Budget => StateField::Budget,
            FieldArg::Spend => StateField::Spend,
            FieldArg::Excluded => StateField::Excluded,
            FieldArg::CustomPeriod => StateField::CustomPeriod,
            FieldArg::ResetDay => StateField::ResetDay,
        }
    }
}

fn finite(amount: f64, what: &str) -> PaceResult<f64> {
    if amount.is_finite() {
        Ok(amount)
    } else {
        Err(PaceError::Validation(format!(
            "{} must be a finite number, got {}",
            what, amount
        )))
    }
}

/// Set the budget for the period
pub fn handle_set_budget(store: &mut StickyStore, amount: f64) -> PaceResult<()> {
    let amount = finite(amount, "budget")?;
    if amount < 0.0 {
        return Err(PaceError::Validation(format!(
            "budget cannot be negative, got {}",
            amount
        )));
    }

    store.set(BUDGET_KEY, Some(amount))?;
    tracing::debug!(amount, "budget updated");
    println!("Budget set to {}", amount);
    Ok(())
}

/// Set the total spend so far; negative values record net refunds
pub fn handle_set_spend(store: &mut StickyStore, amount: f64) -> PaceResult<()> {
    let amount = finite(amount, "spend")?;
    store.set(SPEND_KEY, Some(amount))?;
    tracing::debug!(amount, "spend updated");
    println!("Total spend set to {}", amount);
    Ok(())
}

/// Set the spend that does not count against the budget
pub fn handle_set_excluded(store: &mut StickyStore, amount: f64) -> PaceResult<()> {
    let amount = finite(amount, "excluded spend")?;
    store.set(EXCLUDED_KEY, Some(amount))?;
    tracing::debug!(amount, "excluded spend updated");
    println!("Excluded spend set to {}", amount);
    Ok(())
}

/// Handle period commands
pub fn handle_period_command(store: &mut StickyStore, cmd: PeriodCommands) -> PaceResult<()> {
    match cmd {
        PeriodCommands::Calendar => {
            store.set(CUSTOM_PERIOD_KEY, Some(false))?;
            println!("Budget period follows the calendar month");
        }
        PeriodCommands::Custom { day } => {
            let anchor = AnchorDay::new(day)?;
            store.set(CUSTOM_PERIOD_KEY, Some(true))?;
            store.set(RESET_DAY_KEY, Some(anchor.get()))?;
            println!("Budget period resets on day {} of each month", anchor);
        }
    }
    Ok(())
}

/// Remove one stored input so its default applies again
pub fn handle_forget(store: &mut StickyStore, field: FieldArg) -> PaceResult<()> {
    let key = StateField::from(field).key();
    if store.remove(key)? {
        println!("Forgot {}", key);
    } else {
        println!("Nothing stored for {}", key);
    }
    Ok(())
}

/// Remove every stored input
pub fn handle_reset(store: &mut StickyStore) -> PaceResult<()> {
    store.clear()?;
    tracing::debug!("all stored inputs cleared");
    println!("All stored inputs cleared");
    Ok(())
}
