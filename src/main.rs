use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use budget_pace::cli::{
    handle_forget, handle_period_command, handle_reset, handle_set_budget, handle_set_excluded,
    handle_set_spend, handle_show, parse_date, FieldArg, PeriodCommands,
};
use budget_pace::config::{PacePaths, Settings};
use budget_pace::services::{Clock, FixedClock, SystemClock};
use budget_pace::storage::open_store;

#[derive(Parser)]
#[command(
    name = "pace",
    version,
    about = "Track how far through your budget you are",
    long_about = "pace compares what you have spent against how much of your monthly \
                  budget should be used by today, and tells you what you can still \
                  spend per day to finish on budget."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the budget summary (default)
    Show {
        /// Compute as of this date instead of today (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,
        /// Print machine-readable JSON
        #[arg(long)]
        json: bool,
    },

    /// Set the budget for the period
    Budget { amount: f64 },

    /// Set your total spend so far
    Spend {
        #[arg(allow_hyphen_values = true)]
        amount: f64,
    },

    /// Set spend that should not count against the budget
    Exclude {
        #[arg(allow_hyphen_values = true)]
        amount: f64,
    },

    /// Choose how the budget period is determined
    #[command(subcommand)]
    Period(PeriodCommands),

    /// Forget one stored input so its default applies
    Forget {
        #[arg(value_enum)]
        field: FieldArg,
    },

    /// Forget every stored input
    Reset,

    /// Show current configuration and paths
    Config {
        /// Write the default settings file, replacing any existing one
        #[arg(long)]
        init: bool,
    },
}

fn main() -> Result<()> {
    // Initialize tracing with env filter (e.g., RUST_LOG=debug)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let paths = PacePaths::new()?;

    match cli.command.unwrap_or(Commands::Show {
        date: None,
        json: false,
    }) {
        Commands::Show { date, json } => {
            let clock: Box<dyn Clock> = match date {
                Some(d) => Box::new(FixedClock::on_date(parse_date(&d)?)),
                None => Box::new(SystemClock),
            };
            let settings = Settings::load_or_create(&paths)?;
            handle_show(&open_store(&paths)?, &settings, clock.as_ref(), json)?;
        }
        Commands::Budget { amount } => handle_set_budget(&mut open_store(&paths)?, amount)?,
        Commands::Spend { amount } => handle_set_spend(&mut open_store(&paths)?, amount)?,
        Commands::Exclude { amount } => handle_set_excluded(&mut open_store(&paths)?, amount)?,
        Commands::Period(cmd) => handle_period_command(&mut open_store(&paths)?, cmd)?,
        Commands::Forget { field } => handle_forget(&mut open_store(&paths)?, field)?,
        Commands::Reset => handle_reset(&mut open_store(&paths)?)?,
        Commands::Config { init } => {
            if init {
                Settings::default().save(&paths)?;
                println!("Wrote default settings to {}", paths.settings_file().display());
                return Ok(());
            }

            println!("budget-pace configuration");
            println!("=========================");
            println!("Settings file: {}", paths.settings_file().display());
            println!("State file:    {}", paths.state_file().display());
            println!();
            match Settings::load_or_create(&paths) {
                Ok(settings) => {
                    println!("Settings:");
                    println!("{}", serde_json::to_string_pretty(&settings)?);
                }
                Err(e) => {
                    println!("Settings could not be loaded: {}", e);
                    println!("Run `pace config --init` to restore the defaults.");
                }
            }
        }
    }

    Ok(())
}
