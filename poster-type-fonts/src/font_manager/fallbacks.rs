//! Built-in font fallback chain.
//!
//! Used for a weight class whose configured chain is empty.

/// Fallback font families in priority order.
///
/// The order is designed to provide:
/// 1. Latin text in a poster-friendly sans
/// 2. Bengali script
/// 3. CJK (Japanese, Simplified/Traditional Chinese, Korean)
/// 4. Symbols and dingbats
/// 5. General Unicode coverage
pub const FALLBACK_FAMILIES: &[&str] = &[
    // Latin
    "Noto Sans",
    "Inter",
    "Helvetica Neue",
    "Arial",
    "Liberation Sans",
    // Bengali
    "Noto Sans Bengali",
    "Noto Serif Bengali",
    "Vrinda",
    "Kohinoor Bangla",
    // CJK fonts
    "Noto Sans CJK JP",
    "Noto Sans CJK SC",
    "Noto Sans CJK TC",
    "Noto Sans CJK KR",
    "Hiragino Sans",
    "Microsoft YaHei",
    "Malgun Gothic",
    // Symbols
    "Noto Sans Symbols",
    "Noto Sans Symbols 2",
    "Apple Symbols",
    "Segoe UI Symbol",
    // General fallbacks
    "DejaVu Sans",
    "Arial Unicode MS",
];
