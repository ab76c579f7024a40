//! Width measurement over row data.
//!
//! When no width preferences are given up front, a layout can be derived
//! from the data itself: scan rows once, track per-column maxima, then
//! turn the result into a [`FixedWidthSchema`]. Display cells and
//! character counts are tracked separately so wide characters are sized
//! correctly.

use std::collections::HashMap;

use unicode_width::UnicodeWidthStr;

use crate::collection::ColumnCollection;
use crate::layout::FixedWidthSchema;

/// Width of a string in terminal display cells.
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Number of characters in a string.
pub fn char_count(s: &str) -> usize {
    s.chars().count()
}

/// Per-column maxima measured from row data.
///
/// Produced by [`measure_columns`]; finished with [`ColumnWidths::fit`],
/// optionally after [`ColumnWidths::cap`].
#[derive(Clone, Debug, PartialEq)]
pub struct ColumnWidths {
    cols: ColumnCollection,
    tag_to_width: HashMap<u64, usize>,
    tag_to_max_chars: HashMap<u64, usize>,
}

/// Measure per-column display and character maxima over rows.
///
/// Cells pair with columns by position. Short rows leave later columns
/// untouched; cells beyond the schema are ignored. A column no row
/// reaches measures 0 and will be hidden by [`ColumnWidths::fit`].
///
/// # Example
///
/// ```rust
/// use tabfit::{measure_columns, Column, ColumnCollection};
///
/// let cols = ColumnCollection::new(vec![
///     Column::string(0, "id"),
///     Column::string(1, "name"),
/// ]).unwrap();
/// let rows = vec![
///     vec!["1", "ada"],
///     vec!["1024", "grace hopper"],
/// ];
///
/// let layout = measure_columns(&cols, &rows).cap(8).fit();
/// assert_eq!(layout.print_width(0), Some(4));
/// assert_eq!(layout.print_width(1), Some(8));
/// ```
pub fn measure_columns<S: AsRef<str>>(cols: &ColumnCollection, rows: &[Vec<S>]) -> ColumnWidths {
    let mut max_cells = vec![0; cols.len()];
    let mut max_chars = vec![0; cols.len()];

    for row in rows {
        for (i, value) in row.iter().enumerate() {
            if i < max_cells.len() {
                let value = value.as_ref();
                max_cells[i] = max_cells[i].max(display_width(value));
                max_chars[i] = max_chars[i].max(char_count(value));
            }
        }
    }

    let tag_to_width = cols.tags().zip(max_cells).collect();
    let tag_to_max_chars = cols.tags().zip(max_chars).collect();

    ColumnWidths {
        cols: cols.clone(),
        tag_to_width,
        tag_to_max_chars,
    }
}

impl ColumnWidths {
    /// Measured print widths in display cells, keyed by tag.
    pub fn print_widths(&self) -> &HashMap<u64, usize> {
        &self.tag_to_width
    }

    /// Measured character counts, keyed by tag.
    pub fn max_chars(&self) -> &HashMap<u64, usize> {
        &self.tag_to_max_chars
    }

    /// Clamp every measured width and character count to `max`.
    pub fn cap(mut self, max: usize) -> Self {
        for width in self.tag_to_width.values_mut() {
            *width = (*width).min(max);
        }
        for chars in self.tag_to_max_chars.values_mut() {
            *chars = (*chars).min(max);
        }
        self
    }

    /// Finish into a [`FixedWidthSchema`] using the measured maxima.
    pub fn fit(self) -> FixedWidthSchema {
        FixedWidthSchema::with_widths(self.cols, self.tag_to_width, self.tag_to_max_chars)
    }
}
