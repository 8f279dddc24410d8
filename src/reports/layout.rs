//! Two-column page layout
//!
//! A printed page holds two half-page columns of `column_capacity` rows each.
//! Entries fill the left column, then the right column, then continue on the
//! next page. No entry is ever dropped.

use crate::config::settings::MAX_COLUMN_CAPACITY;
use crate::error::{PettyCashError, PettyCashResult};
use crate::models::{Amount, LocationCode};
use crate::services::{checked_total, CodedEntry, OrderedEntries};

/// One filled cell group (date, description, amount, code) in a column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutCell {
    /// `None` when the date repeats the row above in the same column
    pub date: Option<String>,
    pub description: String,
    pub amount: Amount,
    pub code: LocationCode,
}

/// A physical page: left and right columns
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPage {
    /// 1-based page number
    pub number: usize,
    pub left: Vec<LayoutCell>,
    pub right: Vec<LayoutCell>,
    /// Signed sum of the amounts on this page
    pub subtotal: Amount,
}

impl ReportPage {
    /// Rows in printing order; row `i` pairs `left[i]` with `right[i]`
    pub fn rows(
        &self,
    ) -> impl Iterator<Item = (Option<&LayoutCell>, Option<&LayoutCell>)> + '_ {
        let height = self.left.len().max(self.right.len());
        (0..height).map(move |i| (self.left.get(i), self.right.get(i)))
    }

    /// Number of entries on this page
    pub fn entry_count(&self) -> usize {
        self.left.len() + self.right.len()
    }
}

/// One line of the code legend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegendItem {
    pub code: LocationCode,
    pub location: String,
}

/// The complete report grid with footer data
#[derive(Debug, Clone)]
pub struct ReportLayout {
    pub column_capacity: usize,
    pub year: i32,
    pub pages: Vec<ReportPage>,
    pub total: Amount,
    pub legend: Vec<LegendItem>,
    pub entry_count: usize,
}

impl ReportLayout {
    /// Lay ordered entries out into pages
    ///
    /// Always yields at least one page, so an empty ledger still prints an
    /// empty grid.
    pub fn build(ordered: &OrderedEntries, column_capacity: usize) -> PettyCashResult<Self> {
        if !(1..=MAX_COLUMN_CAPACITY).contains(&column_capacity) {
            return Err(PettyCashError::Validation(format!(
                "Column capacity must be between 1 and {}, got {}",
                MAX_COLUMN_CAPACITY, column_capacity
            )));
        }

        let per_page = column_capacity.checked_mul(2).ok_or_else(|| {
            PettyCashError::Validation(format!("Column capacity {} is too large", column_capacity))
        })?;
        let mut pages: Vec<ReportPage> = ordered
            .entries()
            .chunks(per_page)
            .enumerate()
            .map(|(i, chunk)| {
                let split = chunk.len().min(column_capacity);
                let (left, right) = chunk.split_at(split);
                Ok(ReportPage {
                    number: i + 1,
                    left: layout_column(left),
                    right: layout_column(right),
                    subtotal: checked_total(chunk.iter().map(|c| c.entry.amount))?,
                })
            })
            .collect::<PettyCashResult<_>>()?;

        if pages.is_empty() {
            pages.push(ReportPage {
                number: 1,
                left: Vec::new(),
                right: Vec::new(),
                subtotal: Amount::zero(),
            });
        }

        let legend = ordered
            .codes()
            .iter()
            .map(|(location, code)| LegendItem {
                code: code.clone(),
                location: location.to_string(),
            })
            .collect();

        Ok(Self {
            column_capacity,
            year: ordered.year(),
            pages,
            total: ordered.total()?,
            legend,
            entry_count: ordered.len(),
        })
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }
}

/// Build one column, blanking dates that repeat the previous row
fn layout_column(entries: &[CodedEntry]) -> Vec<LayoutCell> {
    let mut previous: Option<&str> = None;

    entries
        .iter()
        .map(|coded| {
            let date = coded.entry.date.as_str();
            let shown = if previous == Some(date) {
                None
            } else {
                Some(date.to_string())
            };
            previous = Some(date);

            LayoutCell {
                date: shown,
                description: coded.entry.description.clone(),
                amount: coded.entry.amount,
                code: coded.code.clone(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Entry;

    fn scenario() -> OrderedEntries {
        OrderedEntries::prepare(
            &[
                Entry::new("01/05", "Lunch", -100, "Site A"),
                Entry::new("01/03", "Nails", -50, "Site B"),
                Entry::new("01/05", "Lunch", -20, "Site A"),
            ],
            2025,
        )
    }

    fn many(count: usize, date: &str) -> OrderedEntries {
        let entries: Vec<Entry> = (0..count)
            .map(|i| Entry::new(date, format!("item {}", i), -10, "Site"))
            .collect();
        OrderedEntries::prepare(&entries, 2025)
    }

    #[test]
    fn test_scenario_layout() {
        let layout = ReportLayout::build(&scenario(), 28).unwrap();

        assert_eq!(layout.page_count(), 1);
        let page = &layout.pages[0];
        assert_eq!(page.left.len(), 3);
        assert!(page.right.is_empty());

        assert_eq!(page.left[0].date.as_deref(), Some("01/03"));
        assert_eq!(page.left[1].date.as_deref(), Some("01/05"));
        assert_eq!(page.left[2].date, None);
        assert_eq!(page.left[2].code.as_str(), "B");

        assert_eq!(layout.total, Amount::new(-170));
        let legend: Vec<_> = layout
            .legend
            .iter()
            .map(|l| (l.code.as_str(), l.location.as_str()))
            .collect();
        assert_eq!(legend, vec![("A", "Site B"), ("B", "Site A")]);
    }

    #[test]
    fn test_columns_split_at_capacity() {
        let layout = ReportLayout::build(&many(5, "02/01"), 3).unwrap();
        let page = &layout.pages[0];

        assert_eq!(page.left.len(), 3);
        assert_eq!(page.right.len(), 2);
        assert_eq!(page.left[0].description, "item 0");
        assert_eq!(page.right[0].description, "item 3");

        let rows: Vec<_> = page.rows().collect();
        assert_eq!(rows.len(), 3);
        assert!(rows[2].1.is_none());
    }

    #[test]
    fn test_first_row_of_each_column_shows_date() {
        let layout = ReportLayout::build(&many(4, "02/01"), 2).unwrap();
        let page = &layout.pages[0];

        assert_eq!(page.left[0].date.as_deref(), Some("02/01"));
        assert_eq!(page.left[1].date, None);
        assert_eq!(page.right[0].date.as_deref(), Some("02/01"));
        assert_eq!(page.right[1].date, None);
    }

    #[test]
    fn test_overflow_paginates_instead_of_dropping() {
        let layout = ReportLayout::build(&many(61, "03/01"), 28).unwrap();

        assert_eq!(layout.page_count(), 2);
        assert_eq!(layout.pages[0].entry_count(), 56);
        assert_eq!(layout.pages[1].entry_count(), 5);
        assert_eq!(layout.pages[1].number, 2);
        assert_eq!(layout.pages[1].left[0].date.as_deref(), Some("03/01"));

        let placed: usize = layout.pages.iter().map(|p| p.entry_count()).sum();
        assert_eq!(placed, 61);
        assert_eq!(layout.total, Amount::new(-610));
        assert_eq!(layout.pages[1].subtotal, Amount::new(-50));
        assert_eq!(layout.pages[0].subtotal, Amount::new(-560));
    }

    #[test]
    fn test_empty_ledger_has_one_blank_page() {
        let layout = ReportLayout::build(&many(0, "01/01"), 28).unwrap();
        assert_eq!(layout.page_count(), 1);
        assert_eq!(layout.pages[0].rows().count(), 0);
        assert!(layout.total.is_zero());
        assert!(layout.legend.is_empty());
    }

    #[test]
    fn test_zero_capacity_rejected() {
        assert!(ReportLayout::build(&scenario(), 0).is_err());
    }

    #[test]
    fn test_oversized_capacity_rejected() {
        let err = ReportLayout::build(&scenario(), usize::MAX).unwrap_err();
        assert!(err.is_validation());

        assert!(ReportLayout::build(&scenario(), MAX_COLUMN_CAPACITY + 1).is_err());
        let layout = ReportLayout::build(&scenario(), MAX_COLUMN_CAPACITY).unwrap();
        assert_eq!(layout.page_count(), 1);
    }

    #[test]
    fn test_out_of_range_total_is_an_error() {
        let huge = Amount::parse("9,000,000,000,000,000,000").unwrap();
        let ordered = OrderedEntries::prepare(
            &[
                Entry::new("01/01", "Deposit", huge, "HQ"),
                Entry::new("01/02", "Deposit", huge, "HQ"),
            ],
            2025,
        );
        assert!(ReportLayout::build(&ordered, 28).unwrap_err().is_validation());
    }
}
