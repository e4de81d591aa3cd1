use anyhow::Result;
use chrono::NaiveDate;
use clap::{Args, CommandFactory, Parser, Subcommand};
use hindsight::cli::show::ShowOptions;
use hindsight::core::log::init_logging;
use std::path::PathBuf;

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

#[derive(Args)]
struct ShowArgs {
    /// Path to the `~` delimited price file
    #[arg(short, long)]
    data: Option<PathBuf>,

    /// Amount spent in USD (minimum 1.0)
    #[arg(short, long)]
    amount: Option<f64>,

    /// Date of purchase, YYYY-MM-DD
    #[arg(long)]
    date: Option<NaiveDate>,

    /// Number of raw records to show
    #[arg(long)]
    tail: Option<usize>,

    /// Print the dashboard as JSON
    #[arg(long)]
    json: bool,
}

impl From<ShowArgs> for ShowOptions {
    fn from(args: ShowArgs) -> Self {
        ShowOptions {
            data_path: args.data,
            amount: args.amount,
            date: args.date,
            tail: args.tail,
            json: args.json,
        }
    }
}

impl From<Commands> for hindsight::AppCommand {
    fn from(cmd: Commands) -> hindsight::AppCommand {
        match cmd {
            Commands::Show(args) => hindsight::AppCommand::Show(args.into()),
            Commands::Interactive { data } => {
                hindsight::AppCommand::Interactive { data_path: data }
            }
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// Display the return on a past purchase
    Show(ShowArgs),
    /// Recalculate for each `<amount> <date>` line read from stdin
    Interactive {
        /// Path to the `~` delimited price file
        #[arg(short, long)]
        data: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => hindsight::cli::setup::setup(),
        Some(cmd) => hindsight::run_command(cmd.into(), cli.config_path.as_deref()),
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
