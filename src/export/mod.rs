//! Export module for pettycash
//!
//! - document: the printable two-column report (HTML, A4)
//! - CSV / JSON / YAML: the entry list in report order with codes and total

pub mod csv;
pub mod document;
pub mod json;
pub mod yaml;

pub use self::csv::export_entries_csv;
pub use document::{render_html, write_html};
pub use json::{export_json, LedgerExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_yaml;

use chrono::NaiveDate;

/// Default file name for a report printed on `today`, e.g.
/// `petty-cash-0131.html`
pub fn default_report_filename(today: NaiveDate, extension: &str) -> String {
    format!("petty-cash-{}.{}", today.format("%m%d"), extension)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_report_filename() {
        let today = NaiveDate::from_ymd_opt(2025, 3, 7).unwrap();
        assert_eq!(default_report_filename(today, "html"), "petty-cash-0307.html");
        assert_eq!(default_report_filename(today, "txt"), "petty-cash-0307.txt");
    }
}
