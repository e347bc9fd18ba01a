//! Release gate
//!
//! Decides whether a synthesized version string is a release version and
//! which publish channel it is eligible for. Release versions are exactly
//! three dot-separated numeric components with no prefix or qualifier;
//! everything else is a snapshot.

use std::fmt;

/// Returns true iff `version` is a strict `MAJOR.MINOR.PATCH` release
/// version. Any prefix, suffix, or pre-release qualifier disqualifies it.
pub fn is_release(version: &str) -> bool {
    if let Ok(re) = regex::Regex::new(r"^\d+\.\d+\.\d+$") {
        re.is_match(version)
    } else {
        false
    }
}

/// Publish channel a build artifact is eligible for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublishChannel {
    /// Permanent production repository; release builds only
    Production,
    /// Staging repository for pre-release builds
    Snapshot,
}

impl PublishChannel {
    /// Select the channel for a synthesized version string.
    pub fn for_version(version: &str) -> Self {
        if is_release(version) {
            PublishChannel::Production
        } else {
            PublishChannel::Snapshot
        }
    }
}

impl fmt::Display for PublishChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PublishChannel::Production => write!(f, "production"),
            PublishChannel::Snapshot => write!(f, "snapshot"),
        }
    }
}
