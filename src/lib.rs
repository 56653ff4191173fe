//! # Stockbook Rust SDK
//!
//! Client SDK for the Stockbook accounting & inventory platform REST API.
//!
//! ## Features
//!
//! - **Typed entities**: list endpoints deserialize straight into your
//!   domain types via [`Entity`]
//! - **Auto-pagination**: [`ListQuery`] follows offset-based pages until
//!   the server total is covered or a caller cap is reached
//! - **Filter & search**: structured [`FilterQuery`] expressions and
//!   free-text search merged into query parameters
//! - **Resilient transport**: retries with backoff and client-side rate
//!   limiting in [`HttpClient`]
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use stockbook::{Credentials, Product, QuerySpec, Stockbook};
//!
//! #[tokio::main]
//! async fn main() -> stockbook::Result<()> {
//!     let sklad = Stockbook::new(Credentials::basic("admin@acme", "secret"));
//!
//!     // Every product, all pages merged in order
//!     let products = sklad.query::<Product>().get(None).await?;
//!
//!     // At most ~500 matching rows
//!     let spec = QuerySpec::default().with_max_results(500);
//!     let hits = sklad.query::<Product>().search("widget", Some(spec)).await?;
//!     println!("{} of {} total", hits.len(), hits.meta().size);
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                      Stockbook                           │
//! │            query::<T>() → ListQuery<T>                   │
//! └──────────────────────────────────────────────────────────┘
//!                            │
//! ┌──────────┬───────────────┴──────────┬───────────────────┐
//! │  Query   │          List            │       Http        │
//! ├──────────┼──────────────────────────┼───────────────────┤
//! │ Spec     │ get / search / filter    │ GET / Retry       │
//! │ Filter   │ offset auto-pagination   │ Backoff           │
//! │ Expand   │ EntityList accumulation  │ Rate limit / Auth │
//! └──────────┴──────────────────────────┴───────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::cast_lossless)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the SDK
pub mod error;

/// Common types and type aliases
pub mod types;

/// Request credentials
pub mod auth;

/// HTTP transport with retry and rate limiting
pub mod http;

/// Query parameter model: specs, filters, expand directives
pub mod query;

/// Entity model and result collections
pub mod entity;

/// Endpoint URL resolution
pub mod endpoint;

/// Paginated list retrieval
pub mod list;

/// SDK entry point
pub mod client;

// ============================================================================
// Re-exports
// ============================================================================

pub use auth::Credentials;
pub use client::Stockbook;
pub use entity::{Counterparty, CustomerOrder, Entity, EntityList, ListMeta, Meta, Product, Store};
pub use error::{Error, Result};
pub use http::{HttpClient, HttpClientConfig};
pub use list::ListQuery;
pub use query::{Expand, FilterQuery, QuerySpec, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
