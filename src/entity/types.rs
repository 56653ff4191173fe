//! Core entity abstractions
//!
//! List endpoints respond with `{ "meta": {...}, "rows": [...] }`. The
//! raw page is deserialized into [`PageResponse`], its rows converted
//! into the caller's entity type, and successive pages merged into one
//! [`EntityList`].

use crate::error::{Error, Result};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

// ============================================================================
// Metadata
// ============================================================================

/// Metadata envelope attached to a single object
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meta {
    /// Canonical URL of the object
    #[serde(default)]
    pub href: Option<String>,
    /// Entity type name
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    /// Response media type
    #[serde(default)]
    pub media_type: Option<String>,
}

/// Metadata envelope of a collection response.
///
/// `size` is the total number of matching rows on the server, not the
/// number of rows in this page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListMeta {
    /// Canonical URL of the collection
    #[serde(default)]
    pub href: Option<String>,
    /// Entity type name
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    /// Total matching rows on the server
    #[serde(default)]
    pub size: u64,
    /// Page size the server applied
    #[serde(default)]
    pub limit: Option<u32>,
    /// Offset of this page
    #[serde(default)]
    pub offset: Option<u32>,
}

/// Raw server response for one page, consumed immediately into typed
/// entities
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct PageResponse {
    pub meta: ListMeta,
    #[serde(default)]
    pub rows: Vec<Value>,
}

// ============================================================================
// Entity trait
// ============================================================================

/// A typed domain object returned by the API.
///
/// Deserialization doubles as the row-to-entity constructor: any type
/// implementing [`serde::Deserialize`] and naming its endpoint can be
/// fetched through [`crate::ListQuery`].
pub trait Entity: DeserializeOwned {
    /// Logical entity name, as used in the endpoint path
    const NAME: &'static str;
}

/// Convert raw page rows into typed entities, failing on the first row
/// that does not match the entity shape
pub(crate) fn rows_into_entities<T: Entity>(rows: Vec<Value>) -> Result<Vec<T>> {
    rows.into_iter()
        .map(|row| serde_json::from_value(row).map_err(|e| Error::decode(T::NAME, e.to_string())))
        .collect()
}

// ============================================================================
// EntityList
// ============================================================================

/// Ordered collection of typed entities accumulated across fetched
/// pages.
///
/// The metadata is taken from the first fetched page, so `meta().size`
/// reports the server-side total even when fewer rows were retrieved.
#[derive(Debug, Clone, Default)]
pub struct EntityList<T> {
    rows: Vec<T>,
    meta: ListMeta,
}

impl<T> EntityList<T> {
    /// Create a collection from rows and collection metadata
    pub fn new(rows: Vec<T>, meta: ListMeta) -> Self {
        Self { rows, meta }
    }

    /// Number of rows actually fetched
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether no rows were fetched
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Fetched rows, in server order
    pub fn rows(&self) -> &[T] {
        &self.rows
    }

    /// Collection metadata from the first fetched page
    pub fn meta(&self) -> &ListMeta {
        &self.meta
    }

    /// Iterate over the fetched rows
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.rows.iter()
    }

    /// Consume the collection, yielding its rows
    pub fn into_rows(self) -> Vec<T> {
        self.rows
    }

    /// Append a later page's rows after the existing ones.
    ///
    /// Keeps this collection's metadata; rows arrive in fetch order so
    /// concatenation preserves server order.
    pub fn merge(&mut self, later: EntityList<T>) {
        self.rows.extend(later.rows);
    }
}

impl<T> IntoIterator for EntityList<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a EntityList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

// ============================================================================
// Timestamp format
// ============================================================================

/// The platform's "moment" timestamp format, `2026-03-05 12:30:45.123`
/// (milliseconds optional), with no timezone designator
pub(crate) mod moment {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer};

    const FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f";

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        match raw {
            None => Ok(None),
            Some(s) => NaiveDateTime::parse_from_str(&s, FORMAT)
                .map(Some)
                .map_err(serde::de::Error::custom),
        }
    }
}
