//! HTTP Client Factory
//!
//! Provides a factory function for building reqwest clients with the
//! configured request timeout.

use std::time::Duration;

/// Build a `reqwest::Client` with a bounded request timeout.
///
/// Every call through the client is subject to the timeout; an elapsed
/// timeout surfaces as a network error, not a hang.
pub fn build_http_client(timeout: Duration) -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .expect("failed to build reqwest client")
}
