//! Client-side rate limiting
//!
//! The platform throttles accounts that burst too many requests in a
//! short window, so the transport meters itself with a token bucket
//! (the governor crate) before anything goes on the wire.

use governor::clock::DefaultClock;
use governor::middleware::NoOpMiddleware;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter};
use std::num::NonZeroU32;
use std::sync::Arc;

/// Configuration for the transport rate limiter
#[derive(Debug, Clone)]
pub struct RateLimitConfig {
    /// Maximum sustained requests per second
    pub requests_per_second: u32,
    /// Burst size (max tokens in bucket)
    pub burst: u32,
}

impl Default for RateLimitConfig {
    /// Matches the platform's documented account limit of 45 requests
    /// per 15-second window
    fn default() -> Self {
        Self {
            requests_per_second: 3,
            burst: 45,
        }
    }
}

impl RateLimitConfig {
    /// Create a rate limit config
    pub fn new(requests_per_second: u32, burst: u32) -> Self {
        Self {
            requests_per_second,
            burst,
        }
    }
}

/// Token bucket limiter wrapping governor
#[derive(Clone)]
pub struct RateLimit {
    limiter: Arc<RateLimiter<NotKeyed, InMemoryState, DefaultClock, NoOpMiddleware>>,
}

impl RateLimit {
    /// Create a limiter with the given config
    pub fn new(config: &RateLimitConfig) -> Self {
        let one = NonZeroU32::MIN;
        let quota = Quota::per_second(NonZeroU32::new(config.requests_per_second).unwrap_or(one))
            .allow_burst(NonZeroU32::new(config.burst).unwrap_or(one));

        Self {
            limiter: Arc::new(RateLimiter::direct(quota)),
        }
    }

    /// Wait until a request can be made
    pub async fn acquire(&self) {
        self.limiter.until_ready().await;
    }

    /// Check if a request can be made immediately
    pub fn try_acquire(&self) -> bool {
        self.limiter.check().is_ok()
    }
}

impl std::fmt::Debug for RateLimit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RateLimit").finish()
    }
}

#[cfg(test)]
mod rate_limit_tests {
    use super::*;

    #[test]
    fn test_rate_limit_config_default() {
        let config = RateLimitConfig::default();
        assert_eq!(config.requests_per_second, 3);
        assert_eq!(config.burst, 45);
    }

    #[test]
    fn test_rate_limit_config_new() {
        let config = RateLimitConfig::new(50, 25);
        assert_eq!(config.requests_per_second, 50);
        assert_eq!(config.burst, 25);
    }

    #[test]
    fn test_rate_limit_allows_burst() {
        let limiter = RateLimit::new(&RateLimitConfig::new(10, 5));

        for _ in 0..5 {
            assert!(limiter.try_acquire());
        }
    }

    #[test]
    fn test_rate_limit_zero_config_still_valid() {
        // Zero rates clamp to one token per second rather than panicking
        let limiter = RateLimit::new(&RateLimitConfig::new(0, 0));
        assert!(limiter.try_acquire());
    }

    #[tokio::test]
    async fn test_rate_limit_acquire_within_burst() {
        let limiter = RateLimit::new(&RateLimitConfig::new(100, 10));
        limiter.acquire().await;
    }
}
