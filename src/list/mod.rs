//! Paginated list retrieval
//!
//! [`ListQuery`] fetches a collection endpoint page by page, merging
//! filter/search parameters into each request and following
//! offset-based pages until the server total is covered or the spec's
//! cap is reached. Pages are fetched strictly one after another; any
//! transport or decode failure aborts the whole call and no partial
//! collection is returned.

use crate::endpoint::entity_list_path;
use crate::entity::{rows_into_entities, Entity, EntityList, PageResponse};
use crate::error::Result;
use crate::http::{HttpClient, RequestConfig};
use crate::query::{Expand, FilterQuery, QuerySpec};
use crate::types::OptionStringExt;
use std::marker::PhantomData;
use std::sync::Arc;
use tracing::debug;
use url::Url;


/// Typed handle for fetching one entity's collection endpoint.
///
/// Obtained from [`crate::Stockbook::query`]. Holds no state between
/// calls beyond the caller-configured expand and an optional custom
/// endpoint URL.
pub struct ListQuery<T> {
    http: Arc<HttpClient>,
    expand: Option<Expand>,
    custom_query_url: Option<String>,
    _entity: PhantomData<fn() -> T>,
}

impl<T: Entity> ListQuery<T> {
    /// Create a handle over a shared transport
    pub fn new(http: Arc<HttpClient>) -> Self {
        Self {
            http,
            expand: None,
            custom_query_url: None,
            _entity: PhantomData,
        }
    }

    /// Attach an expand directive to every request from this handle
    #[must_use]
    pub fn with_expand(mut self, expand: Expand) -> Self {
        self.expand = Some(expand);
        self
    }

    /// Override the computed endpoint URL for all requests from this
    /// handle. Must be an absolute URL; an empty string clears the
    /// override.
    pub fn set_custom_query_url(&mut self, url: impl Into<String>) -> Result<()> {
        match url.into().none_if_empty() {
            Some(url) => {
                Url::parse(&url)?;
                self.custom_query_url = Some(url);
            }
            None => self.custom_query_url = None,
        }
        Ok(())
    }

    /// Fetch all entities at the endpoint with no filter.
    ///
    /// Equivalent to `filter(None, spec)`.
    pub async fn get(&self, spec: Option<QuerySpec>) -> Result<EntityList<T>> {
        self.filter(None, spec).await
    }

    /// Fetch entities matching a free-text search term
    pub async fn search(&self, text: &str, spec: Option<QuerySpec>) -> Result<EntityList<T>> {
        self.fetch_pages(spec, Some(("search", text.to_string())))
            .await
    }

    /// Fetch entities matching a structured filter
    pub async fn filter(
        &self,
        filter: Option<&FilterQuery>,
        spec: Option<QuerySpec>,
    ) -> Result<EntityList<T>> {
        let extra = filter.map(|f| ("filter", f.raw()));
        self.fetch_pages(spec, extra).await
    }

    /// Bounded offset pagination with an accumulator.
    ///
    /// Continues to another page iff the server total exceeds the
    /// window just fetched (`size > offset + limit`) and the cap allows
    /// another request (`max_results == 0` or `max_results >
    /// request_counter * limit`). The cap counts whole requests, so a
    /// final page may overshoot it by up to `limit - 1` rows.
    async fn fetch_pages(
        &self,
        spec: Option<QuerySpec>,
        extra: Option<(&str, String)>,
    ) -> Result<EntityList<T>> {
        let mut spec = self.attach_expand(spec.unwrap_or_default());
        let url = self.query_url();

        let mut request_counter: u32 = 1;
        let mut collected: Option<EntityList<T>> = None;

        loop {
            let mut params = spec.to_params();
            if let Some((key, value)) = &extra {
                params.insert((*key).to_string(), value.clone());
            }

            let page: PageResponse = self
                .http
                .get_json_with_config(&url, RequestConfig::new().query_params(params))
                .await?;

            debug!(
                entity = T::NAME,
                offset = spec.offset,
                rows = page.rows.len(),
                total = page.meta.size,
                "fetched page"
            );

            let size = page.meta.size;
            let fragment = EntityList::new(rows_into_entities::<T>(page.rows)?, page.meta);
            match collected.as_mut() {
                Some(list) => list.merge(fragment),
                None => collected = Some(fragment),
            }

            // Both checks run against the spec of the page just fetched
            let more_remain = size > u64::from(spec.offset) + u64::from(spec.limit);
            let under_cap = spec.max_results == 0
                || u64::from(spec.max_results) > u64::from(request_counter) * u64::from(spec.limit);
            if !(more_remain && under_cap) {
                break;
            }

            spec = spec.next_page();
            request_counter += 1;
        }

        // The loop always runs at least once
        Ok(collected.expect("pagination fetched no page"))
    }

    /// Overwrite the spec's expand with this handle's, mirroring the
    /// instance-level directive onto every request
    fn attach_expand(&self, mut spec: QuerySpec) -> QuerySpec {
        spec.expand.clone_from(&self.expand);
        spec
    }

    /// Endpoint URL: the custom override when set, otherwise the
    /// entity-name-derived list path
    fn query_url(&self) -> String {
        self.custom_query_url
            .clone()
            .unwrap_or_else(|| entity_list_path(T::NAME))
    }
}

impl<T> std::fmt::Debug for ListQuery<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListQuery")
            .field("expand", &self.expand)
            .field("custom_query_url", &self.custom_query_url)
            .finish_non_exhaustive()
    }
}
