//! Default values for track-list packing settings.

pub fn track_font_size() -> u32 {
    24
}

pub fn track_max_rows() -> usize {
    5
}

pub fn track_spacing() -> u32 {
    40
}

pub fn track_max_total_width() -> u32 {
    1000
}

pub fn track_with_index() -> bool {
    true
}
