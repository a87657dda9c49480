//! HTTP transport
//!
//! A thin wrapper over reqwest that owns everything the extraction engine
//! should not think about: timeouts, retries with backoff, 429 handling,
//! and client-side rate limiting.

mod client;
mod rate_limit;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder, RequestConfig};
pub use rate_limit::{RateLimiter, RateLimiterConfig};

#[cfg(test)]
mod tests;
