//! Display formatting for terminal output
//!
//! This module provides formatters for displaying entries, previews and
//! reports in the terminal.

pub mod entry;
pub mod report;

pub use entry::{format_entry_added, format_entry_list, format_ordered_preview, format_total_banner};
pub use report::{format_amount_colored, format_report_text, right_align};
