//! Tests for the in-memory rate governor.

use std::time::Duration;
use vignette_interface::RateStore;
use vignette_rate_limit::{FileRateStore, GovernorConfig, MemoryRateStore};

#[test]
fn admits_up_to_limit_then_denies() {
    let store = MemoryRateStore::new();
    let window = Duration::from_secs(60);

    for i in 0..10 {
        assert!(store.admit("caller", 10, window), "admit {} should pass", i + 1);
    }
    assert!(!store.admit("caller", 10, window), "11th admit should be denied");
    // Denials do not consume budget past the limit.
    assert!(!store.admit("caller", 10, window));
}

#[test]
fn window_expiry_resets_the_counter() {
    let store = MemoryRateStore::new();
    let window = Duration::from_millis(50);

    assert!(store.admit("caller", 1, window));
    assert!(!store.admit("caller", 1, window));

    std::thread::sleep(Duration::from_millis(60));
    assert!(store.admit("caller", 1, window), "fresh window should admit");
}

#[test]
fn identifiers_are_independent() {
    let store = MemoryRateStore::new();
    let window = Duration::from_secs(60);

    assert!(store.admit("alice", 1, window));
    assert!(!store.admit("alice", 1, window));
    assert!(store.admit("bob", 1, window));
}

#[test]
fn headers_report_without_mutating() {
    let store = MemoryRateStore::new();
    let window = Duration::from_secs(60);

    let fresh = store.headers_for("caller", 10, window);
    assert_eq!(fresh.limit, 10);
    assert_eq!(fresh.remaining, 10);

    assert!(store.admit("caller", 10, window));
    assert!(store.admit("caller", 10, window));

    let headers = store.headers_for("caller", 10, window);
    assert_eq!(headers.remaining, 8);
    // Reading headers twice changes nothing.
    let again = store.headers_for("caller", 10, window);
    assert_eq!(again.remaining, 8);
    assert!(headers.reset_at_ms > chrono::Utc::now().timestamp_millis() - 1000);

    let pairs = headers.to_headers();
    assert_eq!(pairs[0].0, "X-RateLimit-Limit");
    assert_eq!(pairs[1], ("X-RateLimit-Remaining", "8".to_string()));
    assert_eq!(pairs[2].0, "X-RateLimit-Reset");
}

#[test]
fn concurrent_admissions_never_overshoot() {
    use std::sync::Arc;

    let store = Arc::new(MemoryRateStore::new());
    let window = Duration::from_secs(60);

    let handles: Vec<_> = (0..32)
        .map(|_| {
            let store = Arc::clone(&store);
            std::thread::spawn(move || store.admit("shared", 10, window))
        })
        .collect();

    let admitted = handles
        .into_iter()
        .map(|h| h.join().expect("admit thread panicked"))
        .filter(|admitted| *admitted)
        .count();
    assert_eq!(admitted, 10, "exactly the window limit should be admitted");
}

#[test]
fn zero_limit_never_admits() {
    let store = MemoryRateStore::new();
    // Even a brand-new window must deny when the limit is zero.
    assert!(!store.admit("caller", 0, Duration::from_secs(60)));
}

#[test]
fn sweep_evicts_expired_windows() {
    let store = MemoryRateStore::new();
    let short = Duration::from_millis(10);
    let long = Duration::from_secs(60);

    for i in 0..40 {
        assert!(store.admit(&format!("burst-{i}"), 10, short));
    }
    assert_eq!(store.tracked_identifiers(), 40);

    std::thread::sleep(Duration::from_millis(30));

    // Calls 41..=63: expired entries linger until the sweep runs.
    for _ in 0..23 {
        assert!(store.admit("steady", 100, long));
    }
    assert_eq!(store.tracked_identifiers(), 41);

    // Call 64 triggers the sweep; only the live window survives.
    assert!(store.admit("steady", 100, long));
    assert_eq!(store.tracked_identifiers(), 1);
}

#[test]
fn file_store_accumulates_across_instances() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rate_windows.json");
    let window = Duration::from_secs(60);

    // Separate store instances over the same file stand in for separate
    // process invocations.
    assert!(FileRateStore::open(&path).admit("cli", 2, window));
    assert!(FileRateStore::open(&path).admit("cli", 2, window));

    let third = FileRateStore::open(&path);
    assert!(!third.admit("cli", 2, window));

    let err = third.check("cli", 2, window).unwrap_err();
    assert!(format!("{}", err).contains("Rate limit exceeded"));

    let headers = third.headers_for("cli", 2, window);
    assert_eq!(headers.limit, 2);
    assert_eq!(headers.remaining, 0);

    // Other identifiers keep their own budget.
    assert!(third.admit("other", 2, window));
}

#[test]
fn file_store_windows_expire_and_prune() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rate_windows.json");
    let window = Duration::from_millis(50);

    let store = FileRateStore::open(&path);
    assert!(store.admit("caller", 1, window));
    assert!(!store.admit("caller", 1, window));

    std::thread::sleep(Duration::from_millis(60));
    assert!(store.admit("caller", 1, window), "fresh window should admit");

    // Expired entries are pruned from the state file on write.
    let state = std::fs::read_to_string(&path).unwrap();
    assert_eq!(state.matches("caller").count(), 1);
}

#[test]
fn file_store_treats_corrupt_state_as_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rate_windows.json");
    std::fs::write(&path, "not json at all").unwrap();

    let store = FileRateStore::open(&path);
    assert!(store.admit("caller", 1, Duration::from_secs(60)));
}

#[test]
fn check_returns_typed_denial() {
    let store = MemoryRateStore::new();
    let window = Duration::from_secs(60);

    assert!(store.check("caller", 1, window).is_ok());
    let err = store.check("caller", 1, window).unwrap_err();
    assert!(format!("{}", err).contains("Rate limit exceeded"));
}

#[test]
fn config_defaults_and_window() {
    let config = GovernorConfig::default();
    assert_eq!(config.max_requests, 10);
    assert_eq!(config.window_secs, 60);
    assert_eq!(config.window(), Duration::from_secs(60));
}

#[test]
fn config_loads_from_file() {
    use std::io::Write;

    let mut file = tempfile::NamedTempFile::with_suffix(".toml").unwrap();
    writeln!(file, "max_requests = 3\nwindow_secs = 5").unwrap();

    let config = GovernorConfig::from_file(file.path()).unwrap();
    assert_eq!(config.max_requests, 3);
    assert_eq!(config.window_secs, 5);
}
