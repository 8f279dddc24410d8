//! Printable petty-cash report
//!
//! Combines the sorted, coded entries with the two-column layout and the
//! header details printed above the grid. The report is rebuilt from the
//! store every time; nothing here is persisted.

pub mod layout;

pub use layout::{LayoutCell, LegendItem, ReportLayout, ReportPage};

use chrono::NaiveDate;

use crate::config::settings::Settings;
use crate::error::PettyCashResult;
use crate::services::EntryService;
use crate::storage::Storage;

/// Text printed above the grid
#[derive(Debug, Clone)]
pub struct ReportHeader {
    pub title: String,
    pub organization: String,
    pub printed_on: NaiveDate,
    pub currency_symbol: String,
    pub page_margin_mm: u32,
}

impl ReportHeader {
    /// Header values taken from settings
    pub fn from_settings(settings: &Settings, printed_on: NaiveDate) -> Self {
        Self {
            title: settings.report_title.clone(),
            organization: settings.organization.clone(),
            printed_on,
            currency_symbol: settings.currency_symbol.clone(),
            page_margin_mm: settings.page_margin_mm,
        }
    }
}

/// A fully laid out report ready to be rendered
#[derive(Debug, Clone)]
pub struct PettyCashReport {
    pub header: ReportHeader,
    pub layout: ReportLayout,
}

impl PettyCashReport {
    /// Build the report from everything currently in storage
    pub fn generate(
        storage: &Storage,
        settings: &Settings,
        year: i32,
        printed_on: NaiveDate,
    ) -> PettyCashResult<Self> {
        let ordered = EntryService::new(storage).ordered(year)?;
        let layout = ReportLayout::build(&ordered, settings.column_capacity)?;

        Ok(Self {
            header: ReportHeader::from_settings(settings, printed_on),
            layout,
        })
    }

    /// The single metadata line under the title
    pub fn metadata_line(&self) -> String {
        let mut parts = Vec::new();
        if !self.header.organization.is_empty() {
            parts.push(self.header.organization.clone());
        }
        parts.push(format!(
            "Printed {}",
            self.header.printed_on.format("%Y-%m-%d")
        ));
        parts.push(format!("Year {}", self.layout.year));
        parts.push(format!("{} entries", self.layout.entry_count));
        if self.layout.page_count() > 1 {
            parts.push(format!("{} pages", self.layout.page_count()));
        }
        parts.join(" | ")
    }

    /// The grand total line
    pub fn total_line(&self) -> String {
        format!(
            "Total: {}",
            self.layout
                .total
                .format_with_symbol(&self.header.currency_symbol)
        )
    }
}
