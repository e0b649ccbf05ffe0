//! Ledger CLI commands
//!
//! Listing, initialization and configuration display.

use crate::config::{LedgerPaths, Settings};
use crate::display::ledger::format_ledger_table;
use crate::error::LedgerResult;
use crate::storage::CsvLedger;

/// Handle the list command
pub fn handle_list_command(ledger: &CsvLedger, settings: &Settings, limit: usize) -> LedgerResult<()> {
    let rows = ledger.read_rows()?;
    print!(
        "{}",
        format_ledger_table(&rows, limit, &settings.currency_symbol)
    );
    Ok(())
}

/// Handle the init command
pub fn handle_init_command(paths: &LedgerPaths, settings: &Settings) -> LedgerResult<()> {
    println!("Initializing expense-ledger at: {}", paths.base_dir().display());
    paths.ensure_directories()?;
    settings.save(paths)?;
    println!("Initialization complete!");
    println!();
    println!(
        "Ledger file: {}",
        paths.ledger_file(&settings.ledger_name).display()
    );
    println!("Record an expense with: expense add \"15.50 food lunch with friends\"");
    Ok(())
}

/// Handle the config command
pub fn handle_config_command(paths: &LedgerPaths, settings: &Settings) {
    println!("expense-ledger Configuration");
    println!("============================");
    println!("Base directory:   {}", paths.base_dir().display());
    println!("Settings file:    {}", paths.settings_file().display());
    println!(
        "Ledger file:      {}",
        paths.ledger_file(&settings.ledger_name).display()
    );
    println!("Initialized:      {}", paths.is_initialized());
    println!();
    println!("Settings:");
    println!("  Currency symbol:  {}", settings.currency_symbol);
    println!("  Timestamp format: {}", settings.timestamp_format);
    println!("  Invalid dates:    {:?}", settings.date_policy());
}
