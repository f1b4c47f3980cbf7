//! Tests for the process-wide instance
//!
//! Every test here shares the one instance of this test binary, so they all
//! initialize it through `shared()` with the same fixture.

use osrelease_release::*;
use std::sync::OnceLock;
use std::thread;
use tempfile::TempDir;

static FIXTURE: OnceLock<TempDir> = OnceLock::new();

fn fixture() -> &'static TempDir {
    FIXTURE.get_or_init(|| {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        std::fs::write(
            temp_dir.path().join(OS_RELEASE_FILE),
            "ID=\"ubuntu\"\nVERSION_ID=20.04\n",
        )
        .expect("Failed to write os-release");
        temp_dir
    })
}

fn shared() -> &'static OsRelease {
    OsRelease::init(Config::new().with_search_path([fixture().path().display().to_string()]))
}

#[test]
fn test_same_instance_every_call() {
    let first = shared();
    let second = OsRelease::instance();
    let third = OsRelease::init(Config::new().with_search_path(["/nonexistent_12345"]));

    assert!(std::ptr::eq(first, second));
    assert!(std::ptr::eq(first, third));
    assert_eq!(instance_state(), InstanceState::Ready);
}

#[test]
fn test_later_config_ignored() {
    let release = shared();
    let again = OsRelease::init(Config::new().with_search_path(["/nonexistent_12345"]));

    assert_eq!(again.id(), Some("ubuntu"));
    assert_eq!(again.version_id(), Some("20.04"));
    assert_eq!(
        release.osrelease_path(),
        Some(fixture().path().join(OS_RELEASE_FILE).as_path())
    );
}

#[test]
fn test_concurrent_first_requests_share_instance() {
    let handles: Vec<_> = (0..8)
        .map(|_| thread::spawn(|| shared() as *const OsRelease as usize))
        .collect();

    let addrs: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(addrs.windows(2).all(|w| w[0] == w[1]));
    assert!(OsRelease::try_instance().is_some());
}

#[test]
fn test_shared_config_writes_visible() {
    let release = shared();
    release.set_config("instance_test_key", "value").unwrap();
    assert_eq!(
        OsRelease::instance().config("instance_test_key"),
        Some(ConfigValue::from("value"))
    );
}
