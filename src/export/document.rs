//! Printable report document
//!
//! Renders a [`PettyCashReport`] as a self-contained HTML page sized for A4
//! paper. Each physical page is a fixed grid of `column_capacity` rows with
//! two column groups side by side; the grand total and the location legend
//! follow the last grid.

use std::fmt::Write as _;
use std::io::Write;

use crate::error::{PettyCashError, PettyCashResult};
use crate::reports::{LayoutCell, PettyCashReport, ReportPage};

/// A4 paper in millimetres
pub const PAGE_WIDTH_MM: u32 = 210;
pub const PAGE_HEIGHT_MM: u32 = 297;

/// Write the report as an HTML document
pub fn write_html<W: Write>(report: &PettyCashReport, writer: &mut W) -> PettyCashResult<()> {
    let html = render_html(report);
    writer
        .write_all(html.as_bytes())
        .map_err(|e| PettyCashError::Export(e.to_string()))
}

/// Render the report as an HTML string
pub fn render_html(report: &PettyCashReport) -> String {
    let header = &report.header;
    let layout = &report.layout;
    let page_count = layout.page_count();
    let mut out = String::new();

    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    let _ = writeln!(out, "<title>{}</title>", escape_html(&header.title));
    out.push_str("<style>\n");
    let _ = writeln!(
        out,
        "@page {{ size: A4; margin: {}mm; }}",
        header.page_margin_mm
    );
    // On screen, show each page at its printed width and height
    let _ = writeln!(
        out,
        "@media screen {{ .page {{ width: {}mm; min-height: {}mm; margin: 8mm auto; }} }}",
        PAGE_WIDTH_MM.saturating_sub(2 * header.page_margin_mm),
        PAGE_HEIGHT_MM.saturating_sub(2 * header.page_margin_mm)
    );
    out.push_str(STYLESHEET);
    out.push_str("</style>\n</head>\n<body>\n");

    for page in &layout.pages {
        out.push_str("<section class=\"page\">\n");
        if page.number == 1 {
            let _ = writeln!(out, "<h1>{}</h1>", escape_html(&header.title));
            let _ = writeln!(
                out,
                "<p class=\"meta\">{}</p>",
                escape_html(&report.metadata_line())
            );
        } else {
            let _ = writeln!(
                out,
                "<p class=\"continued\">{} ({}/{})</p>",
                escape_html(&header.title),
                page.number,
                page_count
            );
        }

        render_grid(&mut out, page, layout.column_capacity);
        if page_count > 1 {
            let _ = writeln!(
                out,
                "<p class=\"subtotal\">Page subtotal: {}</p>",
                escape_html(
                    &page.subtotal.format_with_symbol(&header.currency_symbol)
                )
            );
        }

        if page.number == page_count {
            render_footer(&mut out, report);
        }
        out.push_str("</section>\n");
    }

    out.push_str("</body>\n</html>\n");
    out
}

fn render_grid(out: &mut String, page: &ReportPage, capacity: usize) {
    out.push_str("<table class=\"grid\">\n");
    out.push_str(
        "<colgroup><col class=\"date\"><col class=\"desc\"><col class=\"amount\"><col class=\"code\">\
         <col class=\"date\"><col class=\"desc\"><col class=\"amount\"><col class=\"code\"></colgroup>\n",
    );
    out.push_str("<thead><tr>");
    for side in ["", " class=\"split\""] {
        let _ = write!(
            out,
            "<th{}>Date</th><th>Description</th><th>Amount</th><th>Code</th>",
            side
        );
    }
    out.push_str("</tr></thead>\n<tbody>\n");

    for i in 0..capacity {
        out.push_str("<tr>");
        render_cells(out, page.left.get(i), false);
        render_cells(out, page.right.get(i), true);
        out.push_str("</tr>\n");
    }

    out.push_str("</tbody>\n</table>\n");
}

fn render_cells(out: &mut String, cell: Option<&LayoutCell>, split: bool) {
    let date_class = if split { "date split" } else { "date" };
    match cell {
        Some(cell) => {
            let _ = write!(
                out,
                "<td class=\"{}\">{}</td><td class=\"desc\">{}</td><td class=\"amount\">{}</td><td class=\"code\">{}</td>",
                date_class,
                escape_html(cell.date.as_deref().unwrap_or("")),
                escape_html(&cell.description),
                cell.amount.format_grouped(),
                cell.code
            );
        }
        None => {
            let _ = write!(
                out,
                "<td class=\"{}\"></td><td class=\"desc\"></td><td class=\"amount\"></td><td class=\"code\"></td>",
                date_class
            );
        }
    }
}

fn render_footer(out: &mut String, report: &PettyCashReport) {
    let _ = writeln!(
        out,
        "<p class=\"total\">{}</p>",
        escape_html(&report.total_line())
    );

    if report.layout.legend.is_empty() {
        return;
    }

    out.push_str("<table class=\"legend\">\n<tbody>\n");
    for item in &report.layout.legend {
        let _ = writeln!(
            out,
            "<tr><td class=\"code\">{}</td><td>{}</td></tr>",
            item.code,
            escape_html(&item.location)
        );
    }
    out.push_str("</tbody>\n</table>\n");
}

/// Escape text for HTML element content and attribute values
pub fn escape_html(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

const STYLESHEET: &str = "\
body { font-family: \"Noto Sans\", \"Microsoft JhengHei\", sans-serif; font-size: 9.5pt; margin: 0; }
h1 { text-align: center; font-size: 16pt; margin: 0 0 1.5mm; }
.meta, .continued { text-align: center; font-size: 8.5pt; margin: 0 0 2.5mm; }
table.grid { width: 100%; border-collapse: collapse; table-layout: fixed; }
table.grid th, table.grid td { border: 0.5pt solid #000; padding: 0.4mm 1mm; height: 6.5mm; overflow: hidden; white-space: nowrap; }
table.grid th { background: #eee; font-weight: bold; text-align: center; }
col.date { width: 9%; } col.desc { width: 25%; } col.amount { width: 11%; } col.code { width: 5%; }
td.date, td.code { text-align: center; }
td.amount { text-align: right; }
.split { border-left: 1.5pt solid #000 !important; }
.page { page-break-after: always; }
.page:last-of-type { page-break-after: auto; }
.subtotal { text-align: right; font-size: 8.5pt; margin: 1mm 0 0; }
.total { text-align: right; font-size: 11pt; font-weight: bold; margin: 2.5mm 0; }
table.legend { border-collapse: collapse; font-size: 9pt; }
table.legend td { padding: 0.3mm 2mm; }
";
