//! Configuration system for the poster-type layout engine.
//!
//! This crate provides configuration loading, saving, and default values
//! for poster typesetting. It includes:
//!
//! - Font chain entries per weight class
//! - Heading auto-fit constraints
//! - Track-list column packing constraints
//! - Log level selection

pub mod config;
pub mod defaults;
pub mod error;
mod types;

// Re-export main types for convenience
pub use config::{Config, FontsConfig, HeadingConfig, TrackListConfig};
pub use error::ConfigError;
pub use types::{FontEntry, LogLevel, WeightClass};
