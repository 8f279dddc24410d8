//! Report formatting for terminal output
//!
//! Renders the two-column layout as plain text, plus the small formatting
//! helpers shared by the other display modules.

use tabled::builder::Builder;
use tabled::settings::Style;

use crate::models::Amount;
use crate::reports::{LayoutCell, PettyCashReport};

/// Format an amount with a color hint for terminal display
pub fn format_amount_colored(amount: Amount, symbol: &str) -> String {
    let text = amount.format_with_symbol(symbol);
    if amount.is_negative() {
        format!("\x1b[31m{}\x1b[0m", text) // Red for net spending
    } else if amount.is_positive() {
        format!("\x1b[34m{}\x1b[0m", text) // Blue for a surplus
    } else {
        text
    }
}

/// Render the whole report as text, one grid per page
pub fn format_report_text(report: &PettyCashReport) -> String {
    let layout = &report.layout;
    let mut output = String::new();

    output.push_str(&report.header.title);
    output.push('\n');
    output.push_str(&report.metadata_line());
    output.push_str("\n\n");

    for page in &layout.pages {
        if layout.page_count() > 1 {
            output.push_str(&format!("Page {}/{}\n", page.number, layout.page_count()));
        }

        let mut builder = Builder::default();
        builder.push_record([
            "Date",
            "Description",
            "Amount",
            "Code",
            "Date",
            "Description",
            "Amount",
            "Code",
        ]);
        for (left, right) in page.rows() {
            let mut record = cell_texts(left);
            record.extend(cell_texts(right));
            builder.push_record(record);
        }

        let mut table = builder.build();
        table.with(Style::ascii());
        output.push_str(&table.to_string());
        output.push('\n');
        if layout.page_count() > 1 {
            output.push_str(&format!(
                "Page subtotal: {}\n",
                page.subtotal.format_with_symbol(&report.header.currency_symbol)
            ));
        }
        output.push('\n');
    }

    output.push_str(&report.total_line());
    output.push('\n');

    if !layout.legend.is_empty() {
        output.push('\n');
        for item in &layout.legend {
            output.push_str(&format!(
                "{}  {}\n",
                right_align(item.code.as_str(), 3),
                item.location
            ));
        }
    }

    output
}

fn cell_texts(cell: Option<&LayoutCell>) -> Vec<String> {
    match cell {
        Some(cell) => vec![
            cell.date.clone().unwrap_or_default(),
            cell.description.clone(),
            cell.amount.format_grouped(),
            cell.code.to_string(),
        ],
        None => vec![String::new(); 4],
    }
}

/// Pad to `width` characters, text on the right
///
/// Counts chars, so it is only meant for ASCII text such as location codes
/// and pick numbers. Free text goes through tabled, which measures display
/// width.
pub fn right_align(s: &str, width: usize) -> String {
    let len = s.chars().count();
    if len >= width {
        s.to_string()
    } else {
        format!("{}{}", " ".repeat(width - len), s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::settings::Settings;
    use crate::models::Entry;
    use crate::reports::{ReportHeader, ReportLayout};
    use crate::services::OrderedEntries;
    use chrono::NaiveDate;

    fn scenario_report(capacity: usize) -> PettyCashReport {
        let ordered = OrderedEntries::prepare(
            &[
                Entry::new("01/05", "Lunch", -100, "Site A"),
                Entry::new("01/03", "Nails", -50, "Site B"),
                Entry::new("01/05", "Lunch", -20, "Site A"),
            ],
            2025,
        );
        PettyCashReport {
            header: ReportHeader::from_settings(
                &Settings::default(),
                NaiveDate::from_ymd_opt(2025, 1, 31).unwrap(),
            ),
            layout: ReportLayout::build(&ordered, capacity).unwrap(),
        }
    }

    #[test]
    fn test_format_amount_colored() {
        assert_eq!(
            format_amount_colored(Amount::new(-5), "NT$"),
            "\x1b[31mNT$ -5\x1b[0m"
        );
        assert_eq!(format_amount_colored(Amount::zero(), "NT$"), "NT$ 0");
    }

    #[test]
    fn test_report_text() {
        let text = format_report_text(&scenario_report(28));

        assert!(text.starts_with("Petty Cash Statement\n"));
        assert!(text.contains("Total: NT$ -170"));
        assert!(text.contains("  A  Site B\n"));
        assert!(text.contains("  B  Site A\n"));
        assert!(!text.contains("Page 1/"));
        assert!(text.find("Nails").unwrap() < text.find("Lunch").unwrap());
    }

    #[test]
    fn test_report_text_paginates() {
        let text = format_report_text(&scenario_report(1));
        assert!(text.contains("Page 1/2"));
        assert!(text.contains("Page 2/2"));
        assert!(text.contains("Page subtotal: NT$ -150\n"));
        assert!(text.contains("Page subtotal: NT$ -20\n"));
    }

    #[test]
    fn test_right_align() {
        assert_eq!(right_align("AB", 3), " AB");
        assert_eq!(right_align("12", 4), "  12");
        assert_eq!(right_align("12345", 4), "12345");
    }
}
