//! Version synthesis
//!
//! Turns a branch classification into a deterministic version string.
//! Every branch-driven build gets a `-SNAPSHOT` suffix; only a detached
//! checkout with an authoritative external reference (a CI-provided tag
//! name) can produce an unqualified release version. This forces release
//! publication to happen from a tagged state, never from a long-lived
//! branch.

use crate::domain::branch::{BranchClassification, TRUNK_BRANCH};
use crate::error::{Result, VersionGateError};

/// Suffix appended to every branch-driven version
pub const SNAPSHOT_SUFFIX: &str = "-SNAPSHOT";

/// Topic branch kinds whose details already encode the target version,
/// so the kind token is dropped from the synthesized version
pub const VERSION_BRANCH_KINDS: [&str; 2] = ["release", "hotfix"];

/// Synthesize a version string from a branch classification.
///
/// `external_ref` is only consulted for the `Detached` case; a detached
/// checkout without a non-empty reference is a fatal input error.
/// `Malformed` is a required-precondition violation and fails rather
/// than guessing a version.
pub fn synthesize(
    classification: &BranchClassification,
    external_ref: Option<&str>,
) -> Result<String> {
    match classification {
        BranchClassification::Detached => match external_ref {
            Some(reference) if !reference.is_empty() => Ok(reference.to_string()),
            _ => Err(VersionGateError::MissingReference),
        },
        BranchClassification::Trunk => Ok(format!("{}{}", TRUNK_BRANCH, SNAPSHOT_SUFFIX)),
        BranchClassification::Topic { kind, details } => {
            if VERSION_BRANCH_KINDS.contains(&kind.as_str()) {
                Ok(format!("{}{}", details, SNAPSHOT_SUFFIX))
            } else {
                Ok(format!("{}-{}{}", kind, details, SNAPSHOT_SUFFIX))
            }
        }
        BranchClassification::Malformed { name } => {
            Err(VersionGateError::pattern_mismatch(name.clone()))
        }
    }
}
