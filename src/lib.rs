//! pettycash - petty-cash ledger with printable two-column reports
//!
//! This library provides the core functionality for the pettycash tool. An
//! operator records spending one line at a time (date, description, signed
//! amount, location). The list is sorted by date, each distinct location gets
//! a short code, and the whole thing is laid out as a two-column A4 statement
//! with a grand total and a location legend.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (entries, amounts, location codes)
//! - `storage`: JSON / CSV table storage layer
//! - `services`: Business logic layer (appending, ordering, locations)
//! - `reports`: Two-column page layout
//! - `export`: Printable document and raw data export
//! - `display`: Terminal formatting
//! - `audit`: Audit logging system
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use pettycash::config::{paths::PettyCashPaths, settings::Settings};
//! use pettycash::storage::Storage;
//!
//! let paths = PettyCashPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let storage = Storage::new(&paths, &settings)?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::PettyCashError;
