//! Date sorting and location code assignment
//!
//! Turns the insertion-ordered entry list into the order used by previews and
//! printed reports, and derives the location → code mapping from that order.
//! Everything here is a pure function of its input.

use chrono::{Datelike, Local, NaiveDate};

use crate::error::{PettyCashError, PettyCashResult};
use crate::models::{Amount, Entry, LocationCode, LocationCodes};

/// Sum amounts, failing instead of wrapping when the total leaves the `i64` range
pub fn checked_total<I>(amounts: I) -> PettyCashResult<Amount>
where
    I: IntoIterator<Item = Amount>,
{
    Amount::checked_sum(amounts).ok_or_else(|| {
        PettyCashError::Validation("Total of entry amounts is out of range".into())
    })
}

/// Interpret a `MM/DD` entry date in the given year
///
/// Surrounding whitespace is ignored and one- or two-digit components are
/// accepted. Anything else, including dates that don't exist in `year`,
/// yields `None`.
pub fn parse_entry_date(raw: &str, year: i32) -> Option<NaiveDate> {
    let (month, day) = raw.trim().split_once('/')?;
    let month = parse_component(month)?;
    let day = parse_component(day)?;
    NaiveDate::from_ymd_opt(year, month, day)
}

fn parse_component(s: &str) -> Option<u32> {
    let s = s.trim();
    if s.is_empty() || s.len() > 2 || !s.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

/// Sort key for an entry date; unparsable dates sort after everything else
pub fn date_sort_key(raw: &str, year: i32) -> NaiveDate {
    parse_entry_date(raw, year).unwrap_or(NaiveDate::MAX)
}

/// Return the entries ordered by date, keeping insertion order for ties
pub fn sort_by_date(entries: &[Entry], year: i32) -> Vec<Entry> {
    let mut sorted = entries.to_vec();
    // sort_by_cached_key is stable, like sort_by_key
    sorted.sort_by_cached_key(|entry| date_sort_key(&entry.date, year));
    sorted
}

/// Assign codes to locations in order of first appearance
pub fn assign_location_codes(sorted: &[Entry]) -> LocationCodes {
    let mut codes = LocationCodes::new();
    for entry in sorted {
        codes.get_or_assign(&entry.location);
    }
    codes
}

/// The current local year, used when no report year is given
pub fn current_year() -> i32 {
    Local::now().year()
}

/// An entry paired with its location code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodedEntry {
    pub entry: Entry,
    pub code: LocationCode,
}

/// Entries in report order together with their location codes
#[derive(Debug, Clone)]
pub struct OrderedEntries {
    year: i32,
    entries: Vec<CodedEntry>,
    codes: LocationCodes,
}

impl OrderedEntries {
    /// Sort `entries` for `year` and code their locations
    pub fn prepare(entries: &[Entry], year: i32) -> Self {
        let mut codes = LocationCodes::new();
        let entries = sort_by_date(entries, year)
            .into_iter()
            .map(|entry| {
                let code = codes.get_or_assign(&entry.location).clone();
                CodedEntry { entry, code }
            })
            .collect();

        Self {
            year,
            entries,
            codes,
        }
    }

    /// Year the dates were interpreted in
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Entries in report order
    pub fn entries(&self) -> &[CodedEntry] {
        &self.entries
    }

    /// Location codes in discovery order
    pub fn codes(&self) -> &LocationCodes {
        &self.codes
    }

    /// Signed sum of every entry
    pub fn total(&self) -> PettyCashResult<Amount> {
        checked_total(self.entries.iter().map(|c| c.entry.amount))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
