use anyhow::Result;
use clap::{Parser, Subcommand};

use expense_ledger::cli::{
    handle_add_command, handle_check_command, handle_config_command, handle_init_command,
    handle_list_command, EntryInput,
};
use expense_ledger::config::{LedgerPaths, Settings};
use expense_ledger::logging;
use expense_ledger::parser::EntryParser;
use expense_ledger::storage::CsvLedger;

#[derive(Parser)]
#[command(
    name = "expense",
    version,
    about = "Record free-text expenses in a local ledger",
    long_about = "Parses expense entries, one per line, in the form \
                  '[DD/MM] AMOUNT CATEGORY DESCRIPTION' and appends them to a \
                  CSV ledger. Malformed lines are reported without blocking \
                  the rest of the batch."
)]
struct Cli {
    /// Verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse entries and append them to the ledger
    Add(EntryInput),

    /// Parse entries without saving them
    #[command(alias = "dry-run")]
    Check(EntryInput),

    /// Show the most recent ledger rows
    #[command(alias = "ls")]
    List {
        /// Number of rows to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Create the data directory and default settings
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let paths = LedgerPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let parser = EntryParser::new().with_date_policy(settings.date_policy());
    let ledger = CsvLedger::new(
        paths.ledger_file(&settings.ledger_name),
        settings.timestamp_format.clone(),
    );

    match cli.command {
        Some(Commands::Add(input)) => {
            handle_add_command(&parser, &ledger, &settings, &input)?;
        }
        Some(Commands::Check(input)) => {
            handle_check_command(&parser, &ledger, &settings, &input)?;
        }
        Some(Commands::List { limit }) => {
            handle_list_command(&ledger, &settings, limit)?;
        }
        Some(Commands::Init) => {
            handle_init_command(&paths, &settings)?;
        }
        Some(Commands::Config) => handle_config_command(&paths, &settings),
        None => {
            println!("expense - record free-text expenses");
            println!();
            println!("Run 'expense --help' for usage information.");
            println!("Run 'expense add \"15.50 food lunch\"' to record an expense.");
        }
    }

    Ok(())
}
