use anyhow::Result;
use cambio::core::history::MAX_HISTORY_DAYS;
use cambio::core::log::init_logging;
use clap::{CommandFactory, Parser, Subcommand};

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl From<Commands> for cambio::AppCommand {
    fn from(cmd: Commands) -> cambio::AppCommand {
        match cmd {
            Commands::Convert { amount, from, to } => {
                cambio::AppCommand::Convert { amount, from, to }
            }
            Commands::Status => cambio::AppCommand::Status,
            Commands::Currencies => cambio::AppCommand::Currencies,
            Commands::Rates { base, codes } => cambio::AppCommand::Rates { base, codes },
            Commands::History { base, days, codes } => {
                cambio::AppCommand::History { base, days, codes }
            }
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// Convert an amount between two currencies
    Convert {
        /// Amount to convert
        #[arg(allow_negative_numbers = true)]
        amount: f64,
        /// Source currency code (defaults to the configured default_from)
        #[arg(short, long)]
        from: Option<String>,
        /// Target currency code (defaults to the configured default_to)
        #[arg(short, long)]
        to: Option<String>,
    },
    /// Display account status and monthly quota
    Status,
    /// List supported currencies
    Currencies,
    /// Display latest live rates for a base currency
    Rates {
        /// Base currency code
        #[arg(short, long)]
        base: Option<String>,
        /// Target currency codes, all when omitted
        codes: Vec<String>,
    },
    /// Display the fixed-rate history for a base currency
    History {
        /// Base currency code
        #[arg(short, long)]
        base: Option<String>,
        /// Number of days to show
        #[arg(
            short,
            long,
            value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_HISTORY_DAYS))
        )]
        days: Option<u32>,
        /// Currency codes to include
        codes: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => cambio::cli::setup::setup(),
        Some(cmd) => cambio::run_command(cmd.into(), cli.config_path.as_deref()).await,
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}
