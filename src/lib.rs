// Library exports for testing and for posters composed from Rust code.
//
// The layout engine itself lives in the workspace crates:
//   - poster-type-config  YAML configuration
//   - poster-type-fonts   font chains, glyph coverage, segmentation
//   - poster-type-layout  measurement, column packing, heading fitting
//
// This crate wires them together for the `poster-type` binary.

/// Application version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod cli;
pub mod debug;
pub mod preview;
pub mod session;

pub use session::{Session, WeightChains};
