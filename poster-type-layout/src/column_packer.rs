//! Column-major packing of track lists under a total width budget.

use poster_type_config::TrackListConfig;
use poster_type_fonts::FontChain;
use serde::Serialize;

use crate::backend::RenderBackend;
use crate::measure::TextMeasurer;

/// Constraints for one packing request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PackOptions {
    /// Items per column; 0 is treated as 1
    pub max_rows: usize,
    /// Horizontal gap between adjacent columns
    pub spacing: u32,
    /// Budget for the sum of column widths and gaps
    pub max_total_width: u32,
    /// Width reserved for the `"{n}. "` prefix in every column
    pub index_width: u32,
    /// Prefix surviving items with their 1-based position
    pub with_index: bool,
    /// Pixel size items are measured at
    pub font_size: f32,
}

impl PackOptions {
    /// Options from the track-list config, with the index width measured by
    /// the caller.
    pub fn from_config(config: &TrackListConfig, index_width: u32) -> Self {
        Self {
            max_rows: config.max_rows,
            spacing: config.spacing,
            max_total_width: config.max_total_width,
            index_width,
            with_index: config.with_index,
            font_size: config.font_size as f32,
        }
    }
}

/// One column of packed items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Column {
    /// Items top to bottom, index prefix included when indexing
    pub items: Vec<String>,
    /// Widest item plus the index width
    pub width: u32,
}

/// Result of a packing request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Layout {
    pub columns: Vec<Column>,
    /// Column widths plus the gaps between columns
    pub total_width: u32,
    /// Input positions removed to make the rest fit, in removal order
    pub dropped: Vec<usize>,
}

impl Layout {
    /// Number of items that survived packing.
    pub fn item_count(&self) -> usize {
        self.columns.iter().map(|column| column.items.len()).sum()
    }

    pub fn column_widths(&self) -> Vec<u32> {
        self.columns.iter().map(|column| column.width).collect()
    }

    /// Items in final order, column by column.
    pub fn items(&self) -> impl Iterator<Item = &str> {
        self.columns
            .iter()
            .flat_map(|column| column.items.iter().map(String::as_str))
    }
}

/// The prefix for the `n`th item (1-based).
pub fn index_prefix(n: usize) -> String {
    format!("{n}. ")
}

/// Width of the widest prefix among items `1..=count`.
pub fn measure_index_width<B: RenderBackend + ?Sized>(
    measurer: &mut TextMeasurer<'_, B>,
    count: usize,
    chain: &FontChain,
    size: f32,
) -> u32 {
    (1..=count)
        .map(|n| measurer.width(&index_prefix(n), chain, size))
        .max()
        .unwrap_or(0)
}

/// Packs strings column-major into columns of at most `max_rows` items.
///
/// When the columns are wider than the budget, the longest item of the
/// widest column is dropped and the list is packed again, until it fits or
/// nothing is left. The result is deterministic for a given measurer.
#[derive(Debug, Clone)]
pub struct ColumnPacker {
    options: PackOptions,
}

impl ColumnPacker {
    pub fn new(options: PackOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &PackOptions {
        &self.options
    }

    /// Pack `items` set in `chain`, returning the layout and its column
    /// widths.
    pub fn pack<B, S>(
        &self,
        measurer: &mut TextMeasurer<'_, B>,
        items: &[S],
        chain: &FontChain,
    ) -> (Layout, Vec<u32>)
    where
        B: RenderBackend + ?Sized,
        S: AsRef<str>,
    {
        let options = &self.options;
        let max_rows = options.max_rows.max(1);
        let index_width = if options.with_index {
            options.index_width
        } else {
            0
        };

        // Widths never change between rounds, so measure each item once.
        let widths: Vec<u32> = items
            .iter()
            .map(|item| measurer.width(item.as_ref(), chain, options.font_size))
            .collect();

        let mut working: Vec<usize> = (0..items.len()).collect();
        let mut dropped = Vec::new();

        let (column_widths, total_width) = loop {
            let column_widths: Vec<u32> = working
                .chunks(max_rows)
                .map(|chunk| {
                    let widest = chunk.iter().map(|&i| widths[i]).max().unwrap_or(0);
                    widest.saturating_add(index_width)
                })
                .collect();
            let total = total_width(&column_widths, options.spacing);
            if total <= options.max_total_width {
                break (column_widths, total);
            }

            let Some(widest) = first_max(column_widths.iter().copied()) else {
                break (column_widths, total);
            };
            let start = widest * max_rows;
            let end = (start + max_rows).min(working.len());
            let chunk = &working[start..end];
            let Some(longest) =
                first_max(chunk.iter().map(|&i| items[i].as_ref().chars().count()))
            else {
                log::warn!("Widest column is empty; returning layout {total}px wide");
                break (column_widths, total);
            };

            let removed = working.remove(start + longest);
            log::debug!(
                "Layout {}px exceeds {}px, dropping item {} ('{}')",
                total,
                options.max_total_width,
                removed,
                items[removed].as_ref()
            );
            dropped.push(removed);
        };

        let columns = working
            .chunks(max_rows)
            .enumerate()
            .zip(&column_widths)
            .map(|((column, chunk), &width)| Column {
                items: chunk
                    .iter()
                    .enumerate()
                    .map(|(row, &i)| {
                        let text = items[i].as_ref();
                        if options.with_index {
                            format!("{}{}", index_prefix(column * max_rows + row + 1), text)
                        } else {
                            text.to_string()
                        }
                    })
                    .collect(),
                width,
            })
            .collect();

        let layout = Layout {
            columns,
            total_width,
            dropped,
        };
        (layout, column_widths)
    }
}

fn total_width(column_widths: &[u32], spacing: u32) -> u32 {
    let gaps = column_widths.len().saturating_sub(1) as u32;
    column_widths
        .iter()
        .fold(spacing.saturating_mul(gaps), |sum, &w| sum.saturating_add(w))
}

/// Position of the first maximum.
fn first_max<T: Ord>(values: impl Iterator<Item = T>) -> Option<usize> {
    let mut best: Option<(usize, T)> = None;
    for (i, value) in values.enumerate() {
        match &best {
            Some((_, current)) if *current >= value => {}
            _ => best = Some((i, value)),
        }
    }
    best.map(|(i, _)| i)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FixedAdvanceBackend, chain, coverage};

    fn options(max_rows: usize, spacing: u32, max_total_width: u32) -> PackOptions {
        PackOptions {
            max_rows,
            spacing,
            max_total_width,
            index_width: 0,
            with_index: false,
            font_size: 10.0,
        }
    }

    fn texts(column: &Column) -> Vec<&str> {
        column.items.iter().map(String::as_str).collect()
    }

    #[test]
    fn test_indexing_single_column() {
        let coverage = coverage();
        let mut backend = FixedAdvanceBackend::default();
        let mut measurer = TextMeasurer::new(&coverage, &mut backend);
        let packer = ColumnPacker::new(PackOptions {
            index_width: 15,
            with_index: true,
            ..options(5, 10, 1000)
        });

        let (layout, widths) =
            packer.pack(&mut measurer, &["Alpha", "Beta", "Gamma"], &chain(&["latin"]));
        assert_eq!(layout.columns.len(), 1);
        assert_eq!(texts(&layout.columns[0]), ["1. Alpha", "2. Beta", "3. Gamma"]);
        // Widest item "Alpha"/"Gamma" is 25px, plus the index.
        assert_eq!(widths, [40]);
        assert_eq!(layout.total_width, 40);
        assert!(layout.dropped.is_empty());
    }

    #[test]
    fn test_numbering_runs_down_then_across() {
        let coverage = coverage();
        let mut backend = FixedAdvanceBackend::default();
        let mut measurer = TextMeasurer::new(&coverage, &mut backend);
        let packer = ColumnPacker::new(PackOptions {
            with_index: true,
            ..options(3, 0, 1000)
        });
        let items = ["a", "b", "c", "d", "e", "f", "g"];

        let (layout, widths) = packer.pack(&mut measurer, &items, &chain(&["latin"]));
        assert_eq!(widths.len(), 3);
        assert_eq!(texts(&layout.columns[0]), ["1. a", "2. b", "3. c"]);
        assert_eq!(texts(&layout.columns[1]), ["4. d", "5. e", "6. f"]);
        assert_eq!(texts(&layout.columns[2]), ["7. g"]);
    }

    #[test]
    fn test_index_width_ignored_without_index() {
        let coverage = coverage();
        let mut backend = FixedAdvanceBackend::default();
        let mut measurer = TextMeasurer::new(&coverage, &mut backend);
        let packer = ColumnPacker::new(PackOptions {
            index_width: 100,
            ..options(5, 0, 1000)
        });

        let (layout, widths) = packer.pack(&mut measurer, &["ab"], &chain(&["latin"]));
        assert_eq!(widths, [10]);
        assert_eq!(texts(&layout.columns[0]), ["ab"]);
    }

    #[test]
    fn test_shrinks_widest_column() {
        let coverage = coverage();
        let mut backend = FixedAdvanceBackend::default();
        let mut measurer = TextMeasurer::new(&coverage, &mut backend);
        let packer = ColumnPacker::new(options(2, 10, 60));
        let items = ["aa", "bbbbbbbbbb", "cc", "dddd"];

        // Columns [aa, bbbbbbbbbb] and [cc, dddd]: 50 + 10 + 20 = 80px.
        let (layout, widths) = packer.pack(&mut measurer, &items, &chain(&["latin"]));
        assert_eq!(layout.dropped, [1]);
        assert_eq!(texts(&layout.columns[0]), ["aa", "cc"]);
        assert_eq!(texts(&layout.columns[1]), ["dddd"]);
        assert_eq!(widths, [10, 20]);
        assert_eq!(layout.total_width, 40);
    }

    #[test]
    fn test_ties_pick_first_column_and_first_string() {
        let coverage = coverage();
        let mut backend = FixedAdvanceBackend::default();
        let mut measurer = TextMeasurer::new(&coverage, &mut backend);
        let packer = ColumnPacker::new(options(2, 0, 30));
        let items = ["abcd", "ab", "wxyz", "w"];

        let (layout, _) = packer.pack(&mut measurer, &items, &chain(&["latin"]));
        assert_eq!(layout.dropped, [0]);
        assert_eq!(layout.items().collect::<Vec<_>>(), ["ab", "wxyz", "w"]);
    }

    #[test]
    fn test_longest_is_by_character_count() {
        let coverage = coverage();
        let mut backend = FixedAdvanceBackend::default();
        let mut measurer = TextMeasurer::new(&coverage, &mut backend);
        let packer = ColumnPacker::new(options(5, 0, 18));

        // "世界" is wider (20px) but "abc" (15px) has more characters.
        let (layout, _) = packer.pack(&mut measurer, &["世界", "abc"], &chain(&["latin", "cjk"]));
        assert_eq!(layout.dropped, [1, 0]);
        assert_eq!(layout.item_count(), 0);
        assert!(layout.columns.is_empty());
        assert_eq!(layout.total_width, 0);
    }

    #[test]
    fn test_duplicates_drop_first_occurrence() {
        let coverage = coverage();
        let mut backend = FixedAdvanceBackend::default();
        let mut measurer = TextMeasurer::new(&coverage, &mut backend);
        let packer = ColumnPacker::new(options(1, 10, 20));

        let (layout, _) = packer.pack(&mut measurer, &["same", "same"], &chain(&["latin"]));
        assert_eq!(layout.dropped, [0]);
        assert_eq!(layout.item_count(), 1);
    }

    #[test]
    fn test_zero_max_rows_is_one_row() {
        let coverage = coverage();
        let mut backend = FixedAdvanceBackend::default();
        let mut measurer = TextMeasurer::new(&coverage, &mut backend);
        let packer = ColumnPacker::new(options(0, 0, 1000));

        let (layout, _) = packer.pack(&mut measurer, &["a", "b"], &chain(&["latin"]));
        assert_eq!(layout.columns.len(), 2);
    }

    #[test]
    fn test_items_measured_once() {
        let coverage = coverage();
        let mut backend = FixedAdvanceBackend::default();
        let mut measurer = TextMeasurer::new(&coverage, &mut backend);
        let packer = ColumnPacker::new(options(1, 0, 15));

        let items = ["aaaa", "bbb", "cc", "d"];
        let (layout, _) = packer.pack(&mut measurer, &items, &chain(&["latin"]));
        assert_eq!(layout.dropped, [0, 1]);
        assert_eq!(measurer.backend().measure_calls, items.len());
    }

    #[test]
    fn test_measure_index_width_uses_widest_prefix() {
        let coverage = coverage();
        let mut backend = FixedAdvanceBackend::default();
        let mut measurer = TextMeasurer::new(&coverage, &mut backend);
        let fonts = chain(&["latin"]);
        // "12. " is 4 characters.
        assert_eq!(measure_index_width(&mut measurer, 12, &fonts, 10.0), 20);
        assert_eq!(measure_index_width(&mut measurer, 0, &fonts, 10.0), 0);
    }

    #[test]
    fn test_first_max_prefers_earliest() {
        assert_eq!(first_max([3, 7, 7, 1].into_iter()), Some(1));
        assert_eq!(first_max(std::iter::empty::<u32>()), None);
    }
}
