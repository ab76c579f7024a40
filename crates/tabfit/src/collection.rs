//! Ordered column collections.
//!
//! A [`ColumnCollection`] is the schema a fixed-width layout describes: an
//! ordered list of columns with unique tags and unique names, supporting
//! lookup by either key plus iteration in schema order.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::column::Column;
use crate::error::{Result, TabfitError};

/// An ordered collection of schema columns.
///
/// Uniqueness of tags and names is validated at construction; the
/// collection is read-only afterwards. Serde support round-trips through a
/// plain column list, so deserialized collections are validated the same
/// way as programmatically built ones.
///
/// # Example
///
/// ```rust
/// use tabfit::{Column, ColumnCollection};
///
/// let cols = ColumnCollection::new(vec![
///     Column::string(0, "id"),
///     Column::string(1, "name"),
/// ]).unwrap();
///
/// assert_eq!(cols.len(), 2);
/// assert_eq!(cols.by_name("name").map(|c| c.tag()), Some(1));
/// assert_eq!(cols.by_tag(0).map(|c| c.name()), Some("id"));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Column>", into = "Vec<Column>")]
pub struct ColumnCollection {
    cols: Vec<Column>,
    name_index: HashMap<String, usize>,
    tag_index: HashMap<u64, usize>,
}

impl ColumnCollection {
    /// Build a collection from columns in schema order.
    ///
    /// Returns [`TabfitError::DuplicateName`] or
    /// [`TabfitError::DuplicateTag`] when two columns collide on either
    /// key.
    pub fn new(cols: Vec<Column>) -> Result<Self> {
        let mut name_index = HashMap::with_capacity(cols.len());
        let mut tag_index = HashMap::with_capacity(cols.len());

        for (idx, col) in cols.iter().enumerate() {
            if name_index.insert(col.name().to_string(), idx).is_some() {
                return Err(TabfitError::DuplicateName(col.name().to_string()));
            }
            if tag_index.insert(col.tag(), idx).is_some() {
                return Err(TabfitError::DuplicateTag(col.tag()));
            }
        }

        Ok(ColumnCollection {
            cols,
            name_index,
            tag_index,
        })
    }

    /// Number of columns in the collection.
    pub fn len(&self) -> usize {
        self.cols.len()
    }

    /// Whether the collection has no columns.
    pub fn is_empty(&self) -> bool {
        self.cols.is_empty()
    }

    /// Look a column up by name.
    pub fn by_name(&self, name: &str) -> Option<&Column> {
        self.name_index.get(name).map(|&idx| &self.cols[idx])
    }

    /// Look a column up by tag.
    pub fn by_tag(&self, tag: u64) -> Option<&Column> {
        self.tag_index.get(&tag).map(|&idx| &self.cols[idx])
    }

    /// Iterate over columns in schema order.
    pub fn iter(&self) -> std::slice::Iter<'_, Column> {
        self.cols.iter()
    }

    /// Iterate over column tags in schema order.
    pub fn tags(&self) -> impl Iterator<Item = u64> + '_ {
        self.cols.iter().map(Column::tag)
    }
}

impl TryFrom<Vec<Column>> for ColumnCollection {
    type Error = TabfitError;

    fn try_from(cols: Vec<Column>) -> Result<Self> {
        ColumnCollection::new(cols)
    }
}

impl From<ColumnCollection> for Vec<Column> {
    fn from(collection: ColumnCollection) -> Self {
        collection.cols
    }
}
