//! os-release file location
//!
//! The file is searched for in an ordered list of directories and the first
//! directory holding a readable `os-release` wins.

use std::fs::File;
use std::path::{Path, PathBuf};

/// File name looked up inside each search directory
pub const OS_RELEASE_FILE: &str = "os-release";

/// Default search directories (in search order)
pub const DEFAULT_SEARCH_PATH: &[&str] = &[
    "/etc",      // Administrator override
    "/usr/lib",  // Vendor default
    "/run/host", // Host file exposed to a container or sandbox
];

/// Find the first readable os-release file in `search_path`.
///
/// Returns the absolute path to the file, or `None` if no directory has
/// one. Relative directories are taken against the current directory;
/// symlinks are left as they are.
pub fn resolve<S: AsRef<str>>(search_path: &[S]) -> Option<PathBuf> {
    for dir in search_path {
        let candidate = Path::new(dir.as_ref()).join(OS_RELEASE_FILE);
        tracing::trace!("Probing {}", candidate.display());
        if is_readable_file(&candidate) {
            return Some(std::path::absolute(&candidate).unwrap_or(candidate));
        }
    }

    None
}

/// Whether `path` is a regular file we are allowed to open
fn is_readable_file(path: &Path) -> bool {
    path.is_file() && File::open(path).is_ok()
}
