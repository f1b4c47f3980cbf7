//! os-release Access
//!
//! This crate locates, parses and exposes the FreeDesktop.Org
//! [os-release](https://www.freedesktop.org/software/systemd/man/os-release.html)
//! file.
//!
//! # Overview
//!
//! - [`paths`]: Search path and file location
//! - [`parser`]: Line grammar (`KEY="VALUE"`, `KEY='VALUE'`, `KEY=VALUE`)
//! - [`store`]: Attribute storage built from a file
//! - [`attrs`]: Standardized attribute names and case folding
//! - [`config`]: Instance configuration
//! - [`release`]: The [`OsRelease`] query surface
//! - [`instance`]: The process-wide instance
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use osrelease_release::OsRelease;
//!
//! let release = OsRelease::instance();
//! println!("ID: {:?}", release.id());
//! println!("VERSION_ID: {:?}", release.version_id());
//! ```
//!
//! # Custom Search Path
//!
//! ```rust,no_run
//! use osrelease_release::{Config, OsRelease};
//!
//! // Only honored by the first request in the process
//! let release = OsRelease::init(Config::new().with_search_path(["/mnt/target/etc"]));
//! println!("Found: {}", release.is_found());
//! ```
//!
//! # Parsing Content Directly
//!
//! ```rust
//! use osrelease_release::OsRelease;
//!
//! let release = OsRelease::parse_str("ID=\"ubuntu\"\nVERSION_ID=20.04\n");
//! assert_eq!(release.id(), Some("ubuntu"));
//! assert_eq!(release.version_id(), Some("20.04"));
//! assert_eq!(release.sysext_level(), None);
//! ```

pub mod attrs;
pub mod config;
pub mod error;
pub mod instance;
pub mod parser;
pub mod paths;
pub mod release;
pub mod store;

pub use attrs::{fold_case, is_standard, STANDARD_ATTRS};
pub use config::{Config, ConfigValue, OSR_PATH_KEY, SEARCH_PATH_KEY};
pub use error::{OsReleaseError, Result};
pub use instance::{instance_state, InstanceState};
pub use parser::{parse_line, ParsedLine};
pub use paths::{resolve, DEFAULT_SEARCH_PATH, OS_RELEASE_FILE};
pub use release::OsRelease;
pub use store::{AttributeSet, AttributeStore};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{Config, ConfigValue, OsRelease, OsReleaseError, Result};
}
