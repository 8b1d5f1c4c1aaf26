//! In-memory window store.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};
use vignette_error::{RateLimitError, RateLimitErrorKind};
use vignette_interface::{RateLimitHeaders, RateStore};

/// Sweep expired windows on every Nth admission check.
const SWEEP_INTERVAL: u64 = 64;

/// One identifier's window state.
#[derive(Debug, Clone, Copy)]
struct RateWindow {
    count: u32,
    reset_at: Instant,
}

#[derive(Debug, Default)]
struct Inner {
    windows: HashMap<String, RateWindow>,
    admit_calls: u64,
}

/// In-process [`RateStore`] backed by a mutex-guarded window map.
///
/// All admission checks serialize behind the mutex, so two concurrent
/// requests for the same identifier can never both slip under the limit.
/// Expired windows are swept on every [`SWEEP_INTERVAL`]th check; a stale
/// entry surviving slightly past expiry is harmless, but the sweep keeps
/// the map bounded.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use vignette_interface::RateStore;
/// use vignette_rate_limit::MemoryRateStore;
///
/// let store = MemoryRateStore::new();
/// assert!(store.admit("user-1", 10, Duration::from_secs(60)));
/// ```
#[derive(Debug, Default)]
pub struct MemoryRateStore {
    inner: Mutex<Inner>,
}

impl MemoryRateStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Admit or return the denial as a typed error.
    ///
    /// # Errors
    ///
    /// Returns [`RateLimitErrorKind::Denied`] with the retry delay when
    /// the identifier's window is full.
    pub fn check(
        &self,
        identifier: &str,
        max_requests: u32,
        window: Duration,
    ) -> Result<(), RateLimitError> {
        if self.admit(identifier, max_requests, window) {
            return Ok(());
        }
        let headers = self.headers_for(identifier, max_requests, window);
        let retry_after_ms =
            (headers.reset_at_ms - chrono::Utc::now().timestamp_millis()).max(0) as u64;
        Err(RateLimitError::new(RateLimitErrorKind::Denied {
            identifier: identifier.to_string(),
            limit: max_requests,
            retry_after_ms,
        }))
    }

    /// Number of identifiers currently holding a window entry.
    ///
    /// Counts every stored entry, expired or not; the periodic sweep is
    /// what keeps this bounded.
    pub fn tracked_identifiers(&self) -> usize {
        self.lock().windows.len()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        self.inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Wall-clock milliseconds at which `reset_at` will be reached.
fn reset_at_ms(now: Instant, reset_at: Instant) -> i64 {
    let remaining = reset_at.saturating_duration_since(now);
    chrono::Utc::now().timestamp_millis() + remaining.as_millis() as i64
}

impl RateStore for MemoryRateStore {
    #[tracing::instrument(skip(self, window))]
    fn admit(&self, identifier: &str, max_requests: u32, window: Duration) -> bool {
        let now = Instant::now();
        let mut inner = self.lock();

        inner.admit_calls += 1;
        if inner.admit_calls % SWEEP_INTERVAL == 0 {
            let before = inner.windows.len();
            inner.windows.retain(|_, w| w.reset_at > now);
            tracing::debug!(
                swept = before - inner.windows.len(),
                remaining = inner.windows.len(),
                "Swept expired rate windows"
            );
        }

        match inner.windows.get_mut(identifier) {
            Some(w) if w.reset_at > now => {
                if w.count >= max_requests {
                    tracing::warn!(count = w.count, max_requests, "Admission denied");
                    false
                } else {
                    w.count += 1;
                    true
                }
            }
            _ => {
                // A zero limit admits nothing, not even a fresh window.
                if max_requests == 0 {
                    return false;
                }
                inner.windows.insert(
                    identifier.to_string(),
                    RateWindow {
                        count: 1,
                        reset_at: now + window,
                    },
                );
                true
            }
        }
    }

    fn headers_for(
        &self,
        identifier: &str,
        max_requests: u32,
        window: Duration,
    ) -> RateLimitHeaders {
        let now = Instant::now();
        let inner = self.lock();

        match inner.windows.get(identifier) {
            Some(w) if w.reset_at > now => RateLimitHeaders {
                limit: max_requests,
                remaining: max_requests.saturating_sub(w.count),
                reset_at_ms: reset_at_ms(now, w.reset_at),
            },
            _ => RateLimitHeaders {
                limit: max_requests,
                remaining: max_requests,
                reset_at_ms: reset_at_ms(now, now + window),
            },
        }
    }
}
