//! File-backed window store for short-lived processes.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;
use vignette_error::{RateLimitError, RateLimitErrorKind};
use vignette_interface::{RateLimitHeaders, RateStore};

/// One identifier's persisted window state.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct PersistedWindow {
    count: u32,
    reset_at_ms: i64,
}

/// [`RateStore`] persisting window state to a JSON file, so admissions
/// accumulate across separate process invocations.
///
/// Windows are kept on wall-clock time. Expired entries are pruned on
/// every state write, which bounds the file to one entry per identifier
/// active in the current window. Admissions within one process serialize
/// behind a mutex; state writes go through a temp file and rename so a
/// crash never leaves a half-written file. An unreadable state file is
/// treated as empty (and logged) rather than blocking generation.
///
/// # Examples
///
/// ```no_run
/// use std::time::Duration;
/// use vignette_interface::RateStore;
/// use vignette_rate_limit::FileRateStore;
///
/// let store = FileRateStore::open_default().unwrap();
/// let admitted = store.admit("cli", 10, Duration::from_secs(60));
/// ```
#[derive(Debug)]
pub struct FileRateStore {
    path: PathBuf,
    guard: Mutex<()>,
}

impl FileRateStore {
    /// Open a store backed by the given state file.
    ///
    /// The file is created on first admission; a missing file means an
    /// empty store.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            guard: Mutex::new(()),
        }
    }

    /// Open a store at the default location,
    /// `<config dir>/vignette/rate_windows.json`.
    ///
    /// # Errors
    ///
    /// Returns an error if no user configuration directory exists.
    pub fn open_default() -> Result<Self, RateLimitError> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            RateLimitErrorKind::Config("no user configuration directory".to_string())
        })?;
        Ok(Self::open(
            config_dir.join("vignette").join("rate_windows.json"),
        ))
    }

    /// Path of the backing state file.
    pub fn path(&self) -> &Path {
        &self.path
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

    fn lock(&self) -> std::sync::MutexGuard<'_, ()> {
        self.guard
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn read_windows(&self) -> HashMap<String, PersistedWindow> {
        match std::fs::read(&self.path) {
            Ok(bytes) => serde_json::from_slice(&bytes).unwrap_or_else(|e| {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Discarding unreadable rate window state"
                );
                HashMap::new()
            }),
            Err(_) => HashMap::new(),
        }
    }

    fn write_windows(&self, windows: &HashMap<String, PersistedWindow>) {
        let result = (|| -> std::io::Result<()> {
            if let Some(parent) = self.path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let bytes = serde_json::to_vec(windows)?;
            let tmp = self.path.with_extension("json.tmp");
            std::fs::write(&tmp, bytes)?;
            std::fs::rename(&tmp, &self.path)
        })();
        if let Err(e) = result {
            tracing::warn!(
                path = %self.path.display(),
                error = %e,
                "Failed to persist rate window state"
            );
        }
    }
}

impl RateStore for FileRateStore {
    #[tracing::instrument(skip(self, window))]
    fn admit(&self, identifier: &str, max_requests: u32, window: Duration) -> bool {
        let _guard = self.lock();
        let now_ms = chrono::Utc::now().timestamp_millis();

        let mut windows = self.read_windows();
        windows.retain(|_, w| w.reset_at_ms > now_ms);

        let admitted = match windows.get_mut(identifier) {
            Some(w) => {
                if w.count >= max_requests {
                    tracing::warn!(count = w.count, max_requests, "Admission denied");
                    false
                } else {
                    w.count += 1;
                    true
                }
            }
            None => {
                if max_requests == 0 {
                    false
                } else {
                    windows.insert(
                        identifier.to_string(),
                        PersistedWindow {
                            count: 1,
                            reset_at_ms: now_ms + window.as_millis() as i64,
                        },
                    );
                    true
                }
            }
        };

        self.write_windows(&windows);
        admitted
    }

    fn headers_for(
        &self,
        identifier: &str,
        max_requests: u32,
        window: Duration,
    ) -> RateLimitHeaders {
        let _guard = self.lock();
        let now_ms = chrono::Utc::now().timestamp_millis();

        match self.read_windows().get(identifier) {
            Some(w) if w.reset_at_ms > now_ms => RateLimitHeaders {
                limit: max_requests,
                remaining: max_requests.saturating_sub(w.count),
                reset_at_ms: w.reset_at_ms,
            },
            _ => RateLimitHeaders {
                limit: max_requests,
                remaining: max_requests,
                reset_at_ms: now_ms + window.as_millis() as i64,
            },
        }
    }
}
