//! Injectable admission store trait.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Rate-limit state reported alongside responses.
///
/// Maps onto the `X-RateLimit-Limit` / `X-RateLimit-Remaining` /
/// `X-RateLimit-Reset` header triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RateLimitHeaders {
    /// Maximum requests allowed in the window
    pub limit: u32,
    /// Requests remaining in the current window
    pub remaining: u32,
    /// Window reset time as Unix milliseconds
    pub reset_at_ms: i64,
}

impl RateLimitHeaders {
    /// Render as the conventional header name/value pairs.
    pub fn to_headers(&self) -> [(&'static str, String); 3] {
        [
            ("X-RateLimit-Limit", self.limit.to_string()),
            ("X-RateLimit-Remaining", self.remaining.to_string()),
            ("X-RateLimit-Reset", self.reset_at_ms.to_string()),
        ]
    }
}

/// Per-identifier admission controller for generation sequences.
///
/// The store is shared, mutable, process-wide state; admissions for the
/// same identifier must serialize so two concurrent requests cannot both
/// slip under the limit. Implementations can back this with an in-process
/// map (single instance) or an external shared store (multi-instance
/// deployments) without changing call sites.
pub trait RateStore: Send + Sync {
    /// Check and record one admission for `identifier`.
    ///
    /// Starts a fresh window (count 1) when none exists or the previous
    /// one expired; otherwise increments only while the count stays
    /// within `max_requests`. Returns `false` without incrementing past
    /// the limit when the window is full.
    fn admit(&self, identifier: &str, max_requests: u32, window: Duration) -> bool;

    /// Report current state for `identifier` without mutating it.
    fn headers_for(&self, identifier: &str, max_requests: u32, window: Duration)
    -> RateLimitHeaders;
}
