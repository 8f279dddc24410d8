//! Entry CLI commands
//!
//! Adding lines to the petty-cash list, reviewing them, and removing them.

use chrono::Local;
use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{
    format_entry_added, format_entry_list, format_ordered_preview, format_total_banner,
};
use crate::error::{PettyCashError, PettyCashResult};
use crate::models::{Amount, NewEntry, SignPolicy};
use crate::services::{
    checked_total, current_year, EntryService, LocationChoice, LocationService,
};
use crate::storage::Storage;

/// Entry subcommands
#[derive(Subcommand, Debug)]
pub enum EntryCommands {
    /// Add an entry to the list
    #[command(allow_negative_numbers = true)]
    Add {
        /// What the money was spent on
        description: String,

        /// Signed amount, e.g. -1200 or 1,500 (omitted means 0)
        amount: Option<String>,

        /// Date as MM/DD (default: today)
        #[arg(short, long)]
        date: Option<String>,

        /// Location name
        #[arg(short, long, conflicts_with = "pick")]
        location: Option<String>,

        /// Use the Nth suggested location (see `location list`)
        #[arg(short, long)]
        pick: Option<usize>,

        /// Record the amount as money spent (always negative)
        #[arg(long, conflicts_with = "income")]
        expense: bool,

        /// Record the amount as money received (always positive)
        #[arg(long)]
        income: bool,
    },

    /// List entries in the order they were added
    List,

    /// Show the running total
    Total,

    /// Remove the most recently added entry
    #[command(alias = "pop")]
    Undo,

    /// Remove every entry
    Clear {
        /// Skip confirmation
        #[arg(short, long)]
        yes: bool,
    },

    /// Show entries in report order with their location codes
    Preview {
        /// Year used to interpret MM/DD dates (default: current year)
        #[arg(long)]
        year: Option<i32>,
    },
}

/// Handle an entry command
pub fn handle_entry_command(
    storage: &Storage,
    settings: &mut Settings,
    cmd: EntryCommands,
) -> PettyCashResult<()> {
    let service = EntryService::new(storage);

    match cmd {
        EntryCommands::Add {
            description,
            amount,
            date,
            location,
            pick,
            expense,
            income,
        } => {
            let amount = amount
                .map(|raw| {
                    Amount::parse(&raw).map_err(|e| {
                        PettyCashError::Validation(format!("Invalid amount '{}': {}", raw, e))
                    })
                })
                .transpose()?;

            let choice = match pick {
                Some(n) => LocationChoice::Pick(n),
                None => LocationChoice::Text(location.unwrap_or_default()),
            };
            let location = LocationService::new(storage, settings).resolve(choice)?;

            let sign = if expense {
                SignPolicy::Expense
            } else if income {
                SignPolicy::Income
            } else {
                SignPolicy::AsEntered
            };

            let entry = service.add(NewEntry {
                date: date.unwrap_or_else(|| Local::now().format("%m/%d").to_string()),
                description,
                amount,
                location,
                sign,
            })?;

            println!("{}", format_entry_added(&entry));
            let count = service.list()?.len();
            println!(
                "{}",
                format_total_banner(service.total()?, count, &settings.currency_symbol)
            );
        }

        EntryCommands::List => {
            let entries = service.list()?;
            print!("{}", format_entry_list(&entries));
            if !entries.is_empty() {
                println!();
                println!(
                    "{}",
                    format_total_banner(
                        checked_total(entries.iter().map(|e| e.amount))?,
                        entries.len(),
                        &settings.currency_symbol
                    )
                );
            }
        }

        EntryCommands::Total => {
            let total = service.total()?;
            println!("{}", total.format_with_symbol(&settings.currency_symbol));
        }

        EntryCommands::Undo => match service.remove_last()? {
            Some(entry) => println!("Removed: {}", entry),
            None => println!("Nothing to undo."),
        },

        EntryCommands::Clear { yes } => {
            if !yes {
                let count = service.list()?.len();
                println!(
                    "This will remove all {} entries. Re-run with --yes to confirm.",
                    count
                );
                return Ok(());
            }

            let removed = service.clear()?;
            println!("Cleared {} entries.", removed);
        }

        EntryCommands::Preview { year } => {
            let ordered = service.ordered(year.unwrap_or_else(current_year))?;
            print!("{}", format_ordered_preview(&ordered));
            if !ordered.is_empty() {
                println!();
                println!(
                    "{}",
                    format_total_banner(
                        ordered.total()?,
                        ordered.len(),
                        &settings.currency_symbol
                    )
                );
            }
        }
    }

    Ok(())
}
