//! Configuration types and enums.
//!
//! - `font`    — Font chain entries and weight classes
//! - `logging` — Log level selection

pub mod font;
pub mod logging;

pub use font::{FontEntry, WeightClass};
pub use logging::LogLevel;
