//! Process-wide os-release instance
//!
//! The first call to [`OsRelease::init`] or [`OsRelease::instance`] locates
//! and reads the file; every later call, from any thread, returns that same
//! instance and ignores the configuration it was given.

use crate::config::Config;
use crate::release::OsRelease;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::OnceLock;

static INSTANCE: OnceLock<OsRelease> = OnceLock::new();
static STATE: AtomicU8 = AtomicU8::new(InstanceState::Uninitialized as u8);

/// Lifecycle of the process-wide instance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum InstanceState {
    /// Nothing requested yet
    Uninitialized = 0,
    /// First request is reading the file
    Initializing = 1,
    /// Instance available; terminal
    Ready = 2,
}

impl InstanceState {
    fn from_u8(raw: u8) -> Self {
        match raw {
            0 => InstanceState::Uninitialized,
            1 => InstanceState::Initializing,
            _ => InstanceState::Ready,
        }
    }
}

/// Current lifecycle state of the process-wide instance
pub fn instance_state() -> InstanceState {
    InstanceState::from_u8(STATE.load(Ordering::Acquire))
}

impl OsRelease {
    /// Process-wide instance with the default configuration
    pub fn instance() -> &'static OsRelease {
        Self::init(Config::default())
    }

    /// Process-wide instance, built from `config` if this is the first
    /// request.
    ///
    /// Concurrent first requests block until a single build finishes.
    pub fn init(config: Config) -> &'static OsRelease {
        let mut built = false;
        let instance = INSTANCE.get_or_init(|| {
            STATE.store(InstanceState::Initializing as u8, Ordering::Release);
            built = true;
            OsRelease::load(config)
        });
        STATE.store(InstanceState::Ready as u8, Ordering::Release);

        if !built {
            tracing::debug!("os-release already loaded; ignoring configuration");
        }

        instance
    }

    /// Process-wide instance if it has been built
    pub fn try_instance() -> Option<&'static OsRelease> {
        INSTANCE.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_from_u8() {
        assert_eq!(InstanceState::from_u8(0), InstanceState::Uninitialized);
        assert_eq!(InstanceState::from_u8(1), InstanceState::Initializing);
        assert_eq!(InstanceState::from_u8(2), InstanceState::Ready);
    }
}
