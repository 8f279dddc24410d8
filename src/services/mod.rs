//! Business logic layer for pettycash
//!
//! Services borrow the [`Storage`](crate::storage::Storage) coordinator and
//! implement the operations the CLI exposes.

pub mod entry;
pub mod location;
pub mod ordering;

pub use entry::EntryService;
pub use location::{LocationChoice, LocationService};
pub use ordering::{
    assign_location_codes, checked_total, current_year, parse_entry_date, sort_by_date,
    CodedEntry,
    OrderedEntries,
};
