//! Pagination window for one page request

use super::expand::Expand;
use crate::types::StringMap;

/// Fixed offset increment between pages.
///
/// Offset advancement always steps by this constant, not by the current
/// limit. It is also the largest page size the server accepts.
pub const MAX_LIST_LIMIT: u32 = 100;

/// Page size the server applies when the caller does not set one
pub const DEFAULT_LIST_LIMIT: u32 = 25;

/// Pagination and expansion parameters governing one page request.
///
/// A fresh spec is derived for every follow-up page via [`next_page`]
/// (offset advanced, everything else carried over).
///
/// [`next_page`]: QuerySpec::next_page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuerySpec {
    /// Row offset of the requested window
    pub offset: u32,
    /// Requested page size, at most [`MAX_LIST_LIMIT`]
    pub limit: u32,
    /// Cap on total rows fetched across pages, 0 = unbounded.
    ///
    /// The cap counts whole requests (`requests * limit`), so the final
    /// page may overshoot it by up to `limit - 1` rows.
    pub max_results: u32,
    /// Relations to inline in every response row
    pub expand: Option<Expand>,
}

impl Default for QuerySpec {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: DEFAULT_LIST_LIMIT,
            max_results: 0,
            expand: None,
        }
    }
}

impl QuerySpec {
    /// Create a spec with default fields
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the starting offset
    #[must_use]
    pub fn with_offset(mut self, offset: u32) -> Self {
        self.offset = offset;
        self
    }

    /// Set the page size, clamped to [`MAX_LIST_LIMIT`]
    #[must_use]
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit.min(MAX_LIST_LIMIT);
        self
    }

    /// Set the total-row cap, 0 for unbounded
    #[must_use]
    pub fn with_max_results(mut self, max_results: u32) -> Self {
        self.max_results = max_results;
        self
    }

    /// Set the expand directive
    #[must_use]
    pub fn with_expand(mut self, expand: Expand) -> Self {
        self.expand = Some(expand);
        self
    }

    /// Derive the spec for the page after this one.
    ///
    /// The offset steps by [`MAX_LIST_LIMIT`] regardless of the current
    /// limit; limit, cap and expand carry over unchanged.
    #[must_use]
    pub fn next_page(&self) -> Self {
        Self {
            offset: self.offset + MAX_LIST_LIMIT,
            limit: self.limit,
            max_results: self.max_results,
            expand: self.expand.clone(),
        }
    }

    /// Render the spec as query parameters
    pub fn to_params(&self) -> StringMap {
        let mut params = StringMap::new();
        params.insert("limit".to_string(), self.limit.to_string());
        params.insert("offset".to_string(), self.offset.to_string());
        if let Some(ref expand) = self.expand {
            params.insert("expand".to_string(), expand.to_param());
        }
        params
    }
}
