//! CLI command for the printable report
//!
//! Lays the entries out in the two-column page format and writes the result
//! as an A4 HTML document (for printing) or as plain text.

use chrono::Local;
use clap::{Args, ValueEnum};
use std::io::Write;
use std::path::PathBuf;

use crate::config::{PettyCashPaths, Settings};
use crate::display::format_report_text;
use crate::error::{PettyCashError, PettyCashResult};
use crate::export::{default_report_filename, write_html};
use crate::reports::PettyCashReport;
use crate::services::current_year;
use crate::storage::{write_atomic, Storage};

/// Report output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// A4 page document, ready to print from a browser
    Html,
    /// Plain text
    Text,
}

impl ReportFormat {
    fn extension(&self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::Text => "txt",
        }
    }
}

/// Arguments for `report`
#[derive(Args, Debug)]
pub struct ReportArgs {
    /// Output file (default: petty-cash-MMDD.<ext> in the reports directory)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "html")]
    pub format: ReportFormat,

    /// Year used to interpret MM/DD dates (default: current year)
    #[arg(long)]
    pub year: Option<i32>,

    /// Rows per half-page column (overrides the configured value)
    #[arg(long)]
    pub rows: Option<usize>,

    /// Print to the terminal instead of writing a file
    #[arg(long, conflicts_with = "output")]
    pub stdout: bool,
}

/// Handle the report command
pub fn handle_report_command(
    storage: &Storage,
    paths: &PettyCashPaths,
    settings: &Settings,
    args: ReportArgs,
) -> PettyCashResult<()> {
    let today = Local::now().date_naive();

    let mut settings = settings.clone();
    if let Some(rows) = args.rows {
        settings.column_capacity = rows;
        settings.validate()?;
    }

    let year = args.year.unwrap_or_else(current_year);
    let report = PettyCashReport::generate(storage, &settings, year, today)?;

    if args.stdout {
        match args.format {
            ReportFormat::Html => {
                let stdout = std::io::stdout();
                write_html(&report, &mut stdout.lock())?;
            }
            ReportFormat::Text => print!("{}", format_report_text(&report)),
        }
        return Ok(());
    }

    let output = args.output.unwrap_or_else(|| {
        paths
            .reports_dir()
            .join(default_report_filename(today, args.format.extension()))
    });

    write_atomic(&output, |writer| match args.format {
        ReportFormat::Html => write_html(&report, writer),
        ReportFormat::Text => writer
            .write_all(format_report_text(&report).as_bytes())
            .map_err(|e| PettyCashError::Export(format!("Failed to write report: {}", e))),
    })?;

    println!(
        "Report written to: {} ({} entries, {} {})",
        output.display(),
        report.layout.entry_count,
        report.layout.page_count(),
        if report.layout.page_count() == 1 {
            "page"
        } else {
            "pages"
        }
    );
    println!("{}", report.total_line());

    Ok(())
}
