use clap::Parser;
use std::process::ExitCode;
use tabi::args::{Args, Command, ExpenseSubcommand, SpotSubcommand};
use tabi::{commands, Config, Result};
use tracing::{debug, error, trace};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    let log_level = args.common().log_level();
    init_logger(log_level);
    debug!("Log level set to {}", log_level.to_string().to_lowercase());

    match main_inner(args).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Exiting with error: {e}");
            ExitCode::FAILURE
        }
    }
}

pub async fn main_inner(args: Args) -> Result<()> {
    trace!("{args:?}");
    let home = args.common().tabi_home().path();

    // Route to appropriate command handler
    let _: () = match args.command() {
        Command::Expense(expense_args) => {
            let config = Config::load_or_init(home).await?;
            match expense_args.action() {
                ExpenseSubcommand::Add(add_args) => {
                    commands::add_expense(&config, add_args)?.print()
                }
                ExpenseSubcommand::Remove(remove_args) => {
                    commands::remove_expense(&config, remove_args)?.print()
                }
                ExpenseSubcommand::List => commands::list_expenses(&config)?.print(),
                ExpenseSubcommand::Summary => commands::summarize_expenses(&config)?.print(),
                ExpenseSubcommand::Export => commands::export_expenses(&config)?.print(),
                ExpenseSubcommand::Import(import_args) => {
                    commands::import_expenses(&config, import_args)?.print()
                }
            }
        }

        Command::Spot(spot_args) => match spot_args.action() {
            SpotSubcommand::List => commands::list_spots()?.print(),
            SpotSubcommand::Check(check_args) => commands::check_spot(check_args).await?.print(),
        },

        Command::Itinerary(itinerary_args) => commands::itinerary(itinerary_args)?.print(),

        Command::Info => commands::info()?.print(),

        Command::Weather => commands::weather().await?.print(),

        Command::Translate(translate_args) => commands::translate(translate_args)?.print(),

        Command::Phrases => commands::phrases()?.print(),

        Command::Convert(convert_args) => {
            let config = Config::load_or_init(home).await?;
            commands::convert(&config, convert_args)?.print()
        }
    };
    Ok(())
}

/// Initializes the tracing subscriber.
pub fn init_logger(level: LevelFilter) {
    let filter = match std::env::var("RUST_LOG").ok() {
        Some(_) => {
            // RUST_LOG exists; use it.
            EnvFilter::from_default_env()
        }
        None => {
            // RUST_LOG does not exist; use default log level for this crate only.
            EnvFilter::new(format!(
                "{}={},{}={}",
                env!("CARGO_CRATE_NAME"),
                level,
                env!("CARGO_BIN_NAME"),
                level
            ))
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
