//! Default values for heading auto-fit settings.

pub fn heading_initial_size() -> u32 {
    72
}

pub fn heading_max_width() -> u32 {
    1000
}
