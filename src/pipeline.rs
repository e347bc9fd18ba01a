//! Version resolution pipeline
//!
//! The single linear pass invoked once per build:
//! branch name -> classification -> version string -> release decision.
//! Inputs are explicit parameters so the pipeline stays unit-testable
//! without a git repository or process environment; the binary is
//! responsible for sourcing them. A failure at any stage is fatal and
//! propagates unchanged, never retried or defaulted.

use crate::config::Config;
use crate::domain::branch::classify_with_trunk;
use crate::domain::release::{is_release, PublishChannel};
use crate::domain::version::synthesize;
use crate::error::Result;

/// Result of a version resolution pass, consumed by downstream
/// packaging and publishing tooling.
#[derive(Debug, Clone, PartialEq)]
pub struct ReleasePlan {
    /// The computed version string, used verbatim as the artifact version
    pub version: String,

    /// Whether the version is a strict `MAJOR.MINOR.PATCH` release
    pub is_release: bool,

    /// Channel the artifact is eligible for
    pub channel: PublishChannel,

    /// Configured name of the selected channel's repository
    pub channel_name: String,

    /// Whether artifact signing is activated; release builds only
    pub sign: bool,

    /// Whether the publish step runs as a no-op; snapshot builds only
    pub dry_run: bool,
}

/// Run the full resolution pass.
///
/// `branch_name` is the current branch as reported by git (the literal
/// `HEAD` for a detached checkout); `external_ref` is the CI-provided
/// reference, required only for detached checkouts.
pub fn resolve(branch_name: &str, external_ref: Option<&str>, config: &Config) -> Result<ReleasePlan> {
    let classification = classify_with_trunk(branch_name, &config.trunk_branch);
    let version = synthesize(&classification, external_ref)?;

    let release = is_release(&version);
    let channel = PublishChannel::for_version(&version);
    let channel_name = match channel {
        PublishChannel::Production => config.channels.production.clone(),
        PublishChannel::Snapshot => config.channels.snapshot.clone(),
    };

    Ok(ReleasePlan {
        version,
        is_release: release,
        channel,
        channel_name,
        sign: release,
        dry_run: !release,
    })
}
