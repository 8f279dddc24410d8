use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use pettycash::cli::{
    handle_entry_command, handle_export_command, handle_location_command, handle_log_command,
    handle_report_command,
};
use pettycash::config::{paths::PettyCashPaths, settings::Settings};
use pettycash::storage::Storage;

#[derive(Parser)]
#[command(
    name = "pettycash",
    version,
    about = "Petty-cash ledger with printable two-column reports",
    long_about = "pettycash records petty-cash spending one line at a time (date, \
                  description, amount, location) and prints the list as a compact \
                  two-column A4 statement with a grand total and a location legend."
)]
struct Cli {
    /// Data directory (default: ~/.config/pettycash)
    #[arg(long, global = true, env = "PETTYCASH_DATA_DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Entry(pettycash::cli::EntryCommands),

    /// Write the printable report
    Report(pettycash::cli::ReportArgs),

    /// Export entries as CSV, JSON or YAML
    Export(pettycash::cli::ExportArgs),

    /// Manage suggested locations
    #[command(subcommand, alias = "loc")]
    Location(pettycash::cli::LocationCommands),

    /// Show recent changes from the audit log
    Log(pettycash::cli::LogArgs),

    /// Create the data directory and default settings
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = match cli.data_dir {
        Some(dir) => PettyCashPaths::with_base_dir(dir),
        None => PettyCashPaths::new()?,
    };
    let mut settings = Settings::load_or_create(&paths)?;

    // Initialize storage
    let storage = Storage::new(&paths, &settings)?;

    match cli.command {
        Some(Commands::Entry(cmd)) => {
            handle_entry_command(&storage, &mut settings, cmd)?;
        }
        Some(Commands::Report(args)) => {
            handle_report_command(&storage, &paths, &settings, args)?;
        }
        Some(Commands::Export(args)) => {
            handle_export_command(&storage, args)?;
        }
        Some(Commands::Location(cmd)) => {
            handle_location_command(&storage, &paths, &mut settings, cmd)?;
        }
        Some(Commands::Log(args)) => {
            handle_log_command(&storage, args)?;
        }
        Some(Commands::Init) => {
            if paths.is_initialized() {
                println!(
                    "pettycash is already initialized at: {}",
                    paths.base_dir().display()
                );
                return Ok(());
            }

            println!("Initializing pettycash at: {}", paths.base_dir().display());
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Entries are stored in: {}", storage.entries().describe());
            println!("Run 'pettycash add <description> <amount> -l <location>' to add a line.");
        }
        Some(Commands::Config) => {
            println!("pettycash Configuration");
            println!("=======================");
            println!("Base directory:    {}", paths.base_dir().display());
            println!("Settings file:     {}", paths.settings_file().display());
            println!("Entries:           {}", storage.entries().describe());
            println!("Reports directory: {}", paths.reports_dir().display());
            println!("Audit log:         {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Store backend:     {}", settings.store_backend);
            println!("  Rows per column:   {}", settings.column_capacity);
            println!("  Currency symbol:   {}", settings.currency_symbol);
            println!("  Report title:      {}", settings.report_title);
            if !settings.organization.is_empty() {
                println!("  Organization:      {}", settings.organization);
            }
            println!("  Page margin:       {} mm", settings.page_margin_mm);
            println!(
                "  Suggested places:  {}",
                settings.location_suggestions.len()
            );
        }
        None => {
            println!("pettycash - petty-cash ledger and printable statements");
            println!();
            println!("Run 'pettycash --help' for usage information.");
        }
    }

    Ok(())
}
