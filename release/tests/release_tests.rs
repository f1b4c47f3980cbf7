//! Tests for loading os-release files from a search path

use osrelease_release::*;
use tempfile::TempDir;

/// Create a directory holding an os-release file with `content`
fn create_release_dir(content: &str) -> TempDir {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    std::fs::write(temp_dir.path().join(OS_RELEASE_FILE), content)
        .expect("Failed to write os-release");
    temp_dir
}

fn search_path(dirs: &[&TempDir]) -> Config {
    Config::new().with_search_path(dirs.iter().map(|d| d.path().display().to_string()))
}

#[test]
fn test_load_ubuntu() {
    let dir = create_release_dir("ID=\"ubuntu\"\nVERSION_ID=20.04\n");
    let release = OsRelease::load(search_path(&[&dir]));

    assert!(release.is_found());
    assert_eq!(release.id(), Some("ubuntu"));
    assert_eq!(release.version_id(), Some("20.04"));
    assert_eq!(release.sysext_level(), None);
}

#[test]
fn test_load_respects_search_order() {
    let preferred = create_release_dir("ID=override\n");
    let fallback = create_release_dir("ID=vendor\n");

    let release = OsRelease::load(search_path(&[&preferred, &fallback]));
    assert_eq!(release.id(), Some("override"));

    let release = OsRelease::load(search_path(&[&fallback, &preferred]));
    assert_eq!(release.id(), Some("vendor"));
}

#[test]
fn test_load_falls_through_missing_directories() {
    let empty = TempDir::new().unwrap();
    let dir = create_release_dir("ID=alpine\n");

    let release = OsRelease::load(search_path(&[&empty, &dir]));
    assert_eq!(
        release.osrelease_path(),
        Some(dir.path().join(OS_RELEASE_FILE).as_path())
    );
    assert_eq!(
        release.config(OSR_PATH_KEY).and_then(|v| v.as_text().map(String::from)),
        Some(dir.path().join(OS_RELEASE_FILE).display().to_string())
    );
}

#[test]
fn test_no_file_found() {
    let empty = TempDir::new().unwrap();
    let release = OsRelease::load(search_path(&[&empty]));

    assert!(!release.is_found());
    for name in STANDARD_ATTRS {
        assert_eq!(release.get(name), None);
    }
    assert_eq!(release.pretty_name(), None);
    assert!(release.warnings().is_empty());
}

#[test]
fn test_comments_and_malformed_lines() {
    let dir = create_release_dir(
        "# comment\n\nNAME=\"Fedora Linux\"\nnot a valid line\nVERSION_ID=39\n",
    );
    let release = OsRelease::load(search_path(&[&dir]));

    assert_eq!(release.found_attrs().count(), 2);
    assert_eq!(release.name(), Some("Fedora Linux"));
    assert_eq!(release.version_id(), Some("39"));
    assert_eq!(release.warnings().len(), 1);
}

#[test]
fn test_full_file() {
    let dir = create_release_dir(
        r#"NAME="Debian GNU/Linux"
VERSION_ID='12'
VERSION="12 (bookworm)"
VERSION_CODENAME=bookworm
ID=debian
HOME_URL="https://www.debian.org/"
SUPPORT_URL="https://www.debian.org/support"
BUG_REPORT_URL="https://bugs.debian.org/"
"#,
    );
    let release = OsRelease::load(search_path(&[&dir]));

    assert_eq!(release.name(), Some("Debian GNU/Linux"));
    assert_eq!(release.version_id(), Some("12"));
    assert_eq!(release.version(), Some("12 (bookworm)"));
    assert_eq!(release.version_codename(), Some("bookworm"));
    assert_eq!(release.home_url(), Some("https://www.debian.org/"));
    assert_eq!(release.bug_report_url(), Some("https://bugs.debian.org/"));
    assert_eq!(release.platform(), Some("debian"));
}

#[test]
fn test_custom_config_kept() {
    let dir = create_release_dir("ID=arch\n");
    let config = search_path(&[&dir]).with("caller", "installer").unwrap();
    let release = OsRelease::load(config);

    assert_eq!(release.config("caller"), Some(ConfigValue::from("installer")));
    assert_eq!(
        release.config(SEARCH_PATH_KEY),
        Some(ConfigValue::List(vec![dir.path().display().to_string()]))
    );
}

#[test]
fn test_attrs_map() {
    let release = OsRelease::parse_str("ID=void\n");
    let attrs = release.attrs();
    assert_eq!(attrs.get("id").map(String::as_str), Some("void"));
}
