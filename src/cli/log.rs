//! Audit log CLI command

use clap::{Args, ValueEnum};

use crate::audit::EntityType;
use crate::error::PettyCashResult;
use crate::storage::Storage;

/// What kind of change to show
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogEntity {
    Entry,
    Location,
}

impl From<LogEntity> for EntityType {
    fn from(entity: LogEntity) -> Self {
        match entity {
            LogEntity::Entry => EntityType::Entry,
            LogEntity::Location => EntityType::Location,
        }
    }
}

/// Arguments for `log`
#[derive(Args, Debug)]
pub struct LogArgs {
    /// Number of records to show
    #[arg(short = 'n', long, default_value = "20")]
    pub count: usize,

    /// Only show changes to entries or to suggested locations
    #[arg(short, long, value_enum)]
    pub entity: Option<LogEntity>,
}

/// Print the most recent audit records, oldest first
pub fn handle_log_command(storage: &Storage, args: LogArgs) -> PettyCashResult<()> {
    let Some(logger) = storage.audit() else {
        println!("Audit logging is not enabled for this store.");
        return Ok(());
    };

    let records = logger.read_recent_for(args.entity.map(EntityType::from), args.count)?;
    if records.is_empty() {
        println!("No changes recorded yet.");
        return Ok(());
    }

    for record in &records {
        println!("{}", record.format_human_readable());
    }

    Ok(())
}
