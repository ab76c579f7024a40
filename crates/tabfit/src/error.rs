//! Error types for the tabfit crate.

use thiserror::Error;

/// Errors that can occur when building schemas or deriving layouts.
///
/// These are the recoverable failures: the caller handed over data (a
/// column list, a name-to-width map) that turned out to be malformed.
/// Inconsistent *programmatic* inputs to the strict layout constructor
/// are not represented here; those panic. See
/// [`FixedWidthSchema::with_widths`](crate::FixedWidthSchema::with_widths).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TabfitError {
    /// A width preference names a column the schema does not contain.
    #[error("unknown field '{0}'")]
    UnknownField(String),

    /// Two columns in a schema share the same name.
    #[error("duplicate column name '{0}'")]
    DuplicateName(String),

    /// Two columns in a schema share the same tag.
    #[error("duplicate column tag {0}")]
    DuplicateTag(u64),
}

/// Result type for tabfit operations.
pub type Result<T> = std::result::Result<T, TabfitError>;
