//! HTTP transport
//!
//! A reqwest-based client shared by every query handle. Handles retries
//! with configurable backoff, client-side rate limiting against the
//! platform's burst throttling, and credential application. Callers
//! above this layer (the list fetcher in particular) never retry.

mod client;
mod rate_limit;

pub use client::{
    HttpClient, HttpClientConfig, HttpClientConfigBuilder, RequestConfig, DEFAULT_BASE_URL,
};
pub use rate_limit::{RateLimit, RateLimitConfig};
