//! Tabfit - Fixed-width column layout derivation for string-valued schemas.
//!
//! Tabfit computes the layout a fixed-width table renderer needs before it
//! touches a single row. Given a column schema and width preferences it
//! derives an immutable [`FixedWidthSchema`] holding:
//!
//! - Per-column print widths in terminal display cells
//! - Per-column character budgets for truncation decisions
//! - Ready-made `#` placeholder strings for values that cannot fit
//! - The displayed-column count and total line width for any separator size
//!
//! Rendering itself is out of scope: this crate decides how wide things
//! are, not what gets drawn.
//!
//! # Quick Start
//!
//! ```rust
//! use std::collections::HashMap;
//! use tabfit::{Column, ColumnCollection, FixedWidthSchema};
//!
//! // Describe the columns rows will arrive in.
//! let cols = ColumnCollection::new(vec![
//!     Column::string(0, "id"),
//!     Column::string(1, "name"),
//!     Column::string(2, "note"),
//! ]).unwrap();
//!
//! // Give widths by name; unnamed columns stay hidden.
//! let widths = HashMap::from([
//!     ("id".to_string(), 4),
//!     ("name".to_string(), 10),
//! ]);
//! let layout = FixedWidthSchema::new(cols, &widths).unwrap();
//!
//! assert_eq!(layout.print_width(0), Some(4));
//! assert_eq!(layout.no_fit_str(1), Some("##########"));
//! assert!(!layout.is_displayed(2));
//!
//! // 4 + 10 plus one 2-cell separator between the displayed pair.
//! assert_eq!(layout.total_width(2), 16);
//! ```
//!
//! # Width Semantics
//!
//! Every column carries two measures with different units:
//!
//! | Measure | Unit | Used for |
//! |---------|------|----------|
//! | Print width | Display cells | Padding, alignment, line width |
//! | Max chars | Characters | Truncation budgets |
//!
//! The two coincide for single-cell text and diverge for wide characters,
//! where one character can occupy two cells. Layouts measured from data
//! with [`measure_columns`] keep the measures exact; name-based
//! construction applies one preference to both.
//!
//! A width of 0 hides a column: it contributes nothing to the total
//! width, is skipped when counting separators, and its placeholder is the
//! empty string. Negative preferences clamp to 0 rather than erroring.
//!
//! # Measuring From Data
//!
//! When no preferences exist up front, derive widths from the rows
//! themselves:
//!
//! ```rust
//! use tabfit::{measure_columns, Column, ColumnCollection};
//!
//! let cols = ColumnCollection::new(vec![
//!     Column::string(0, "id"),
//!     Column::string(1, "name"),
//! ]).unwrap();
//! let rows = vec![
//!     vec!["1", "ada"],
//!     vec!["1024", "grace hopper"],
//! ];
//!
//! let layout = measure_columns(&cols, &rows).cap(8).fit();
//! assert_eq!(layout.print_width(1), Some(8));
//! assert_eq!(layout.total_width(1), 13);
//! ```

mod column;
mod collection;
mod error;
mod layout;
mod measure;

// Re-export public API
pub use column::{Column, ValueKind};
pub use collection::ColumnCollection;
pub use error::{Result, TabfitError};
pub use layout::{FixedWidthBuilder, FixedWidthSchema, NO_FIT_CHAR};
pub use measure::{char_count, display_width, measure_columns, ColumnWidths};
