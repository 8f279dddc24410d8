//! Configuration module for pettycash
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::PettyCashPaths;
pub use settings::{Settings, StoreBackend};
