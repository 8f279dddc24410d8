//! Location CLI commands
//!
//! Manages the suggested location list used by `add --pick`.

use clap::Subcommand;

use crate::config::{PettyCashPaths, Settings};
use crate::display::right_align;
use crate::error::PettyCashResult;
use crate::services::LocationService;
use crate::storage::Storage;

/// Location subcommands
#[derive(Subcommand, Debug)]
pub enum LocationCommands {
    /// List suggested locations with their pick numbers
    List,
    /// Add a suggested location
    Add {
        /// Location name
        name: String,
    },
    /// Remove a suggested location
    #[command(alias = "rm")]
    Remove {
        /// Location name or pick number
        location: String,
    },
}

/// Handle a location command
pub fn handle_location_command(
    storage: &Storage,
    paths: &PettyCashPaths,
    settings: &mut Settings,
    cmd: LocationCommands,
) -> PettyCashResult<()> {
    match cmd {
        LocationCommands::List => {
            let service = LocationService::new(storage, settings);
            let locations = service.list();
            if locations.is_empty() {
                println!("No suggested locations. Add one with 'pettycash location add <name>'.");
                return Ok(());
            }

            let width = locations.len().to_string().len();
            for (i, name) in locations.iter().enumerate() {
                println!("{}  {}", right_align(&(i + 1).to_string(), width), name);
            }
        }

        LocationCommands::Add { name } => {
            LocationService::new(storage, settings).add(&name)?;
            settings.save(paths)?;
            println!("Added location: {}", name.trim());
        }

        LocationCommands::Remove { location } => {
            let removed = LocationService::new(storage, settings).remove(&location)?;
            settings.save(paths)?;
            println!("Removed location: {}", removed);
        }
    }

    Ok(())
}
