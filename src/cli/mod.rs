//! CLI command handlers
//!
//! Bridges clap argument parsing with the storage and calculator layers.

pub mod inputs;
pub mod show;

pub use inputs::{
    handle_forget, handle_period_command, handle_reset, handle_set_budget, handle_set_excluded,
    handle_set_spend, FieldArg, PeriodCommands,
};
pub use show::{handle_show, parse_date};
