//! Default value functions for configuration.
//!
//! Each sub-module groups related default free functions used as
//! `#[serde(default = "crate::defaults::...")]` attributes on config fields.

mod heading;
mod track_list;

// ── Heading ────────────────────────────────────────────────────────────────
pub use heading::{heading_initial_size, heading_max_width};

// ── Track list ─────────────────────────────────────────────────────────────
pub use track_list::{
    track_font_size, track_max_rows, track_max_total_width, track_spacing, track_with_index,
};
