//! SDK entry point
//!
//! [`Stockbook`] owns the configured transport and hands out typed
//! [`ListQuery`] handles that borrow it.

use crate::auth::Credentials;
use crate::entity::Entity;
use crate::http::{HttpClient, HttpClientConfig};
use crate::list::ListQuery;
use std::sync::Arc;

/// Handle to one Stockbook account
#[derive(Debug, Clone)]
pub struct Stockbook {
    http: Arc<HttpClient>,
}

impl Stockbook {
    /// Connect to the hosted platform with default transport settings
    pub fn new(credentials: Credentials) -> Self {
        Self::with_config(HttpClientConfig::default(), credentials)
    }

    /// Connect with custom transport settings
    pub fn with_config(config: HttpClientConfig, credentials: Credentials) -> Self {
        Self {
            http: Arc::new(HttpClient::with_credentials(config, credentials)),
        }
    }

    /// The shared transport
    pub fn http(&self) -> &HttpClient {
        &self.http
    }

    /// Typed list-query handle for an entity's collection endpoint
    pub fn query<T: Entity>(&self) -> ListQuery<T> {
        ListQuery::new(Arc::clone(&self.http))
    }
}
