//! Fixed-width layout derivation.
//!
//! [`FixedWidthSchema`] pairs a [`ColumnCollection`] with per-column print
//! widths and character budgets, precomputing everything a renderer needs
//! to lay rows out: placeholder strings for values that cannot fit, the
//! count of displayed columns, and the total line width for a given
//! separator size.

use std::collections::HashMap;

use crate::collection::ColumnCollection;
use crate::error::{Result, TabfitError};

/// Character used to fill placeholder strings for values that do not fit.
pub const NO_FIT_CHAR: char = '#';

/// A derived fixed-width layout for a string-valued schema.
///
/// Construction is the only mutation point. [`FixedWidthSchema::new`]
/// takes name-keyed width preferences and reports bad names as
/// recoverable errors; [`FixedWidthSchema::with_widths`] takes tag-keyed
/// maps and treats incomplete coverage or non-string columns as
/// programmer errors, panicking with a message naming the offender.
///
/// Widths are display cells, character budgets are scalar values. The
/// name-based constructor feeds one preference map into both roles, which
/// is exact for single-cell characters and a deliberate approximation for
/// wide ones.
///
/// # Example
///
/// ```rust
/// use std::collections::HashMap;
/// use tabfit::{Column, ColumnCollection, FixedWidthSchema};
///
/// let cols = ColumnCollection::new(vec![
///     Column::string(0, "id"),
///     Column::string(1, "name"),
/// ]).unwrap();
///
/// let widths = HashMap::from([("id".to_string(), 4), ("name".to_string(), 10)]);
/// let layout = FixedWidthSchema::new(cols, &widths).unwrap();
///
/// assert_eq!(layout.print_width(0), Some(4));
/// assert_eq!(layout.no_fit_str(1), Some("##########"));
/// assert_eq!(layout.total_width(2), 16);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct FixedWidthSchema {
    cols: ColumnCollection,
    tag_to_width: HashMap<u64, usize>,
    tag_to_max_chars: HashMap<u64, usize>,
    no_fit_strs: HashMap<u64, String>,
    width_sum: usize,
    displayed: usize,
}

impl FixedWidthSchema {
    /// Derive a layout from name-keyed width preferences.
    ///
    /// Columns absent from `name_widths` default to width 0 and are
    /// hidden. Negative widths clamp to 0. A name that matches no column
    /// returns [`TabfitError::UnknownField`]. The resulting per-tag map
    /// serves as both print width and character budget.
    pub fn new(cols: ColumnCollection, name_widths: &HashMap<String, i64>) -> Result<Self> {
        let mut tag_to_width: HashMap<u64, usize> =
            cols.tags().map(|tag| (tag, 0)).collect();

        for (name, width) in name_widths {
            let col = cols
                .by_name(name)
                .ok_or_else(|| TabfitError::UnknownField(name.clone()))?;
            tag_to_width.insert(col.tag(), (*width).max(0) as usize);
        }

        let tag_to_max_chars = tag_to_width.clone();
        Ok(Self::with_widths(cols, tag_to_width, tag_to_max_chars))
    }

    /// Derive a layout from tag-keyed width and character-budget maps.
    ///
    /// # Panics
    ///
    /// Panics when either map does not cover every column exactly, or
    /// when any column is not string-valued. Both conditions are
    /// programmer errors in the calling pipeline, not runtime input.
    pub fn with_widths(
        cols: ColumnCollection,
        tag_to_width: HashMap<u64, usize>,
        tag_to_max_chars: HashMap<u64, usize>,
    ) -> Self {
        assert_eq!(
            tag_to_width.len(),
            cols.len(),
            "print width map must have a value for every column"
        );
        assert_eq!(
            tag_to_max_chars.len(),
            cols.len(),
            "max chars map must have a value for every column"
        );

        for col in cols.iter() {
            assert!(
                tag_to_width.contains_key(&col.tag()),
                "print width map missing column '{}' (tag {})",
                col.name(),
                col.tag()
            );
            assert!(
                tag_to_max_chars.contains_key(&col.tag()),
                "max chars map missing column '{}' (tag {})",
                col.name(),
                col.tag()
            );
            assert!(
                col.kind().is_string(),
                "column '{}' is not string-valued; convert rows to strings upstream",
                col.name()
            );
        }

        let mut no_fit_strs = HashMap::with_capacity(cols.len());
        let mut width_sum = 0;
        let mut displayed = 0;

        for tag in cols.tags() {
            let width = tag_to_width[&tag];
            no_fit_strs.insert(tag, std::iter::repeat(NO_FIT_CHAR).take(width).collect());
            if width > 0 {
                width_sum += width;
                displayed += 1;
            }
        }

        FixedWidthSchema {
            cols,
            tag_to_width,
            tag_to_max_chars,
            no_fit_strs,
            width_sum,
            displayed,
        }
    }

    /// Start a builder for name-keyed width preferences.
    pub fn builder(cols: ColumnCollection) -> FixedWidthBuilder {
        FixedWidthBuilder::new(cols)
    }

    /// The columns this layout describes.
    pub fn columns(&self) -> &ColumnCollection {
        &self.cols
    }

    /// Print width in display cells for a tag, `None` for unknown tags.
    pub fn print_width(&self, tag: u64) -> Option<usize> {
        self.tag_to_width.get(&tag).copied()
    }

    /// Character budget for a tag, `None` for unknown tags.
    pub fn max_chars(&self, tag: u64) -> Option<usize> {
        self.tag_to_max_chars.get(&tag).copied()
    }

    /// Placeholder string for a tag, sized to its print width.
    pub fn no_fit_str(&self, tag: u64) -> Option<&str> {
        self.no_fit_strs.get(&tag).map(String::as_str)
    }

    /// Whether a tag's column occupies any cells in the output.
    pub fn is_displayed(&self, tag: u64) -> bool {
        self.tag_to_width.get(&tag).map_or(false, |&w| w > 0)
    }

    /// Number of columns with a positive print width.
    pub fn displayed_col_count(&self) -> usize {
        self.displayed
    }

    /// Total line width: displayed column widths plus one separator of
    /// `chars_between_fields` cells between each adjacent displayed pair.
    ///
    /// With zero displayed columns this is 0, never a negative-separator
    /// artifact.
    pub fn total_width(&self, chars_between_fields: usize) -> usize {
        self.width_sum + self.displayed.saturating_sub(1) * chars_between_fields
    }
}

/// Fluent construction of a [`FixedWidthSchema`] from named widths.
///
/// ```rust
/// use tabfit::{Column, ColumnCollection, FixedWidthSchema};
///
/// let cols = ColumnCollection::new(vec![
///     Column::string(0, "id"),
///     Column::string(1, "name"),
/// ]).unwrap();
///
/// let layout = FixedWidthSchema::builder(cols)
///     .width("id", 4)
///     .width("name", 10)
///     .build()
///     .unwrap();
///
/// assert_eq!(layout.displayed_col_count(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct FixedWidthBuilder {
    cols: ColumnCollection,
    name_widths: HashMap<String, i64>,
}

impl FixedWidthBuilder {
    fn new(cols: ColumnCollection) -> Self {
        FixedWidthBuilder {
            cols,
            name_widths: HashMap::new(),
        }
    }

    /// Set the width preference for a named column.
    pub fn width(mut self, name: impl Into<String>, width: i64) -> Self {
        self.name_widths.insert(name.into(), width);
        self
    }

    /// Derive the layout, with the same semantics as
    /// [`FixedWidthSchema::new`].
    pub fn build(self) -> Result<FixedWidthSchema> {
        FixedWidthSchema::new(self.cols, &self.name_widths)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::{Column, ValueKind};

    fn three_cols() -> ColumnCollection {
        ColumnCollection::new(vec![
            Column::string(0, "id"),
            Column::string(1, "name"),
            Column::string(2, "note"),
        ])
        .unwrap()
    }

    fn widths(pairs: &[(&str, i64)]) -> HashMap<String, i64> {
        pairs
            .iter()
            .map(|&(name, w)| (name.to_string(), w))
            .collect()
    }

    #[test]
    fn named_widths_apply_to_both_roles() {
        let layout =
            FixedWidthSchema::new(three_cols(), &widths(&[("id", 4), ("name", 10)])).unwrap();

        assert_eq!(layout.print_width(0), Some(4));
        assert_eq!(layout.max_chars(0), Some(4));
        assert_eq!(layout.print_width(1), Some(10));
        assert_eq!(layout.max_chars(1), Some(10));
    }

    #[test]
    fn unnamed_columns_default_to_hidden() {
        let layout =
            FixedWidthSchema::new(three_cols(), &widths(&[("id", 4), ("name", 10)])).unwrap();

        assert_eq!(layout.print_width(2), Some(0));
        assert_eq!(layout.no_fit_str(2), Some(""));
        assert!(!layout.is_displayed(2));
        assert_eq!(layout.displayed_col_count(), 2);
    }

    #[test]
    fn negative_widths_clamp_to_zero() {
        let layout = FixedWidthSchema::new(three_cols(), &widths(&[("id", -7)])).unwrap();

        assert_eq!(layout.print_width(0), Some(0));
        assert_eq!(layout.max_chars(0), Some(0));
        assert!(!layout.is_displayed(0));
    }

    #[test]
    fn unknown_name_is_a_recoverable_error() {
        let err = FixedWidthSchema::new(three_cols(), &widths(&[("missing", 5)])).unwrap_err();
        assert_eq!(err, TabfitError::UnknownField("missing".to_string()));
    }

    #[test]
    fn builder_matches_map_construction() {
        let from_map =
            FixedWidthSchema::new(three_cols(), &widths(&[("id", 4), ("name", 10)])).unwrap();
        let from_builder = FixedWidthSchema::builder(three_cols())
            .width("id", 4)
            .width("name", 10)
            .build()
            .unwrap();

        assert_eq!(from_builder, from_map);
    }

    #[test]
    fn no_fit_strs_match_print_widths() {
        let layout =
            FixedWidthSchema::new(three_cols(), &widths(&[("id", 4), ("name", 10), ("note", 1)]))
                .unwrap();

        assert_eq!(layout.no_fit_str(0), Some("####"));
        assert_eq!(layout.no_fit_str(1), Some("##########"));
        assert_eq!(layout.no_fit_str(2), Some("#"));
    }

    #[test]
    fn total_width_counts_separators_between_displayed_columns() {
        let layout =
            FixedWidthSchema::new(three_cols(), &widths(&[("id", 4), ("name", 10)])).unwrap();

        assert_eq!(layout.total_width(0), 14);
        assert_eq!(layout.total_width(1), 15);
        assert_eq!(layout.total_width(2), 16);
    }

    #[test]
    fn total_width_with_single_displayed_column_has_no_separator() {
        let layout = FixedWidthSchema::new(three_cols(), &widths(&[("name", 10)])).unwrap();
        assert_eq!(layout.displayed_col_count(), 1);
        assert_eq!(layout.total_width(100), 10);
    }

    #[test]
    fn total_width_with_all_columns_hidden_is_zero() {
        let layout = FixedWidthSchema::new(three_cols(), &HashMap::new()).unwrap();
        assert_eq!(layout.displayed_col_count(), 0);
        assert_eq!(layout.total_width(2), 0);
    }

    #[test]
    fn hidden_columns_do_not_widen_the_line() {
        let shown = FixedWidthSchema::new(three_cols(), &widths(&[("id", 4)])).unwrap();
        let with_hidden =
            FixedWidthSchema::new(three_cols(), &widths(&[("id", 4), ("note", 0)])).unwrap();
        assert_eq!(shown.total_width(3), with_hidden.total_width(3));
    }

    #[test]
    fn unknown_tags_query_as_none() {
        let layout = FixedWidthSchema::new(three_cols(), &widths(&[("id", 4)])).unwrap();
        assert_eq!(layout.print_width(99), None);
        assert_eq!(layout.max_chars(99), None);
        assert_eq!(layout.no_fit_str(99), None);
        assert!(!layout.is_displayed(99));
    }

    #[test]
    fn with_widths_accepts_exact_coverage() {
        let tag_widths = HashMap::from([(0, 4), (1, 10), (2, 0)]);
        let tag_chars = HashMap::from([(0, 3), (1, 8), (2, 0)]);
        let layout = FixedWidthSchema::with_widths(three_cols(), tag_widths, tag_chars);

        assert_eq!(layout.print_width(0), Some(4));
        assert_eq!(layout.max_chars(0), Some(3));
        assert_eq!(layout.displayed_col_count(), 2);
    }

    #[test]
    #[should_panic(expected = "print width map must have a value for every column")]
    fn with_widths_panics_on_short_width_map() {
        let tag_widths = HashMap::from([(0, 4), (1, 10)]);
        let tag_chars = HashMap::from([(0, 4), (1, 10), (2, 0)]);
        FixedWidthSchema::with_widths(three_cols(), tag_widths, tag_chars);
    }

    #[test]
    #[should_panic(expected = "print width map missing column 'note' (tag 2)")]
    fn with_widths_panics_on_stray_tag() {
        let tag_widths = HashMap::from([(0, 4), (1, 10), (77, 5)]);
        let tag_chars = HashMap::from([(0, 4), (1, 10), (2, 0)]);
        FixedWidthSchema::with_widths(three_cols(), tag_widths, tag_chars);
    }

    #[test]
    #[should_panic(expected = "max chars map must have a value for every column")]
    fn with_widths_panics_on_short_max_chars_map() {
        let tag_widths = HashMap::from([(0, 4), (1, 10), (2, 0)]);
        let tag_chars = HashMap::from([(0, 4)]);
        FixedWidthSchema::with_widths(three_cols(), tag_widths, tag_chars);
    }

    #[test]
    #[should_panic(expected = "column 'count' is not string-valued")]
    fn with_widths_panics_on_non_string_column() {
        let cols = ColumnCollection::new(vec![
            Column::string(0, "id"),
            Column::new(1, "count", ValueKind::Int),
        ])
        .unwrap();
        let tag_widths = HashMap::from([(0, 4), (1, 10)]);
        let tag_chars = tag_widths.clone();
        FixedWidthSchema::with_widths(cols, tag_widths, tag_chars);
    }

    #[test]
    fn construction_is_deterministic() {
        let prefs = widths(&[("id", 4), ("name", 10)]);
        let a = FixedWidthSchema::new(three_cols(), &prefs).unwrap();
        let b = FixedWidthSchema::new(three_cols(), &prefs).unwrap();
        assert_eq!(a, b);
    }
}
