//! Core data models for pettycash
//!
//! This module contains the data structures of the petty-cash domain:
//! line items, amounts and location codes.

pub mod amount;
pub mod entry;
pub mod location;

pub use amount::{Amount, AmountParseError, SignPolicy};
pub use entry::{Entry, EntryValidationError, NewEntry};
pub use location::{LocationCode, LocationCodes};
