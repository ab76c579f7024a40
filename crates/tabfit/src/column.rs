//! Schema columns and their value kinds.
//!
//! A [`Column`] is the unit a schema is made of: a stable numeric tag, a
//! display name, and the kind of value the column holds. Tags are the
//! identity used throughout layout derivation; names exist for lookup
//! convenience and must be unique within a collection.

use serde::{Deserialize, Serialize};

/// The kind of value a column holds.
///
/// Fixed-width layout derivation only accepts [`ValueKind::String`]
/// columns; every other kind must be converted to strings by an upstream
/// row converter before a layout can be built.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    /// String-valued column (the only kind the layout core accepts).
    #[default]
    String,
    /// Signed integer column.
    Int,
    /// Floating point column.
    Float,
    /// Boolean column.
    Bool,
    /// Timestamp column.
    Timestamp,
}

impl ValueKind {
    /// Returns `true` for [`ValueKind::String`].
    pub fn is_string(self) -> bool {
        matches!(self, ValueKind::String)
    }
}

/// A single schema column: tag, name, and value kind.
///
/// Columns are read-only once constructed. The tag is the stable identity
/// a renderer keys its lookups on; the name is the key callers use when
/// supplying width preferences.
///
/// # Example
///
/// ```rust
/// use tabfit::{Column, ValueKind};
///
/// let col = Column::new(3, "author", ValueKind::String);
/// assert_eq!(col.tag(), 3);
/// assert_eq!(col.name(), "author");
/// assert!(col.kind().is_string());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    tag: u64,
    name: String,
    kind: ValueKind,
}

impl Column {
    /// Create a new column.
    pub fn new(tag: u64, name: impl Into<String>, kind: ValueKind) -> Self {
        Column {
            tag,
            name: name.into(),
            kind,
        }
    }

    /// Create a string-valued column (shorthand for the common case).
    pub fn string(tag: u64, name: impl Into<String>) -> Self {
        Column::new(tag, name, ValueKind::String)
    }

    /// The column's stable numeric tag.
    pub fn tag(&self) -> u64 {
        self.tag
    }

    /// The column's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The kind of value this column holds.
    pub fn kind(&self) -> ValueKind {
        self.kind
    }
}
