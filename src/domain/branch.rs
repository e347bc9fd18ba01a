//! Branch classification
//!
//! Sorts a branch name into one of four shapes: the detached sentinel,
//! the trunk branch, a conventional `type/details` topic branch, or
//! malformed. Classification is total; a name that fits no shape is
//! `Malformed`, never an error.

/// Branch name reported by git when HEAD is detached
pub const DETACHED_HEAD: &str = "HEAD";

/// Default trunk branch name, overridable via configuration
pub const TRUNK_BRANCH: &str = "main";

/// The shape of the current branch name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BranchClassification {
    /// Detached checkout; the version must come from an external reference
    Detached,
    /// The trunk branch
    Trunk,
    /// A `type/details` topic branch
    Topic { kind: String, details: String },
    /// Anything that fits none of the shapes above; carries the
    /// offending name for the eventual error message
    Malformed { name: String },
}

/// Classify a branch name against the default trunk branch.
pub fn classify(branch_name: &str) -> BranchClassification {
    classify_with_trunk(branch_name, TRUNK_BRANCH)
}

/// Classify a branch name against an explicit trunk branch name.
///
/// Topic branches must match `type/details` where `type` is one or more
/// word characters and `details` is non-empty. A trailing slash with no
/// details (e.g. `release/`) is malformed.
pub fn classify_with_trunk(branch_name: &str, trunk_branch: &str) -> BranchClassification {
    if branch_name == DETACHED_HEAD {
        return BranchClassification::Detached;
    }

    if branch_name == trunk_branch {
        return BranchClassification::Trunk;
    }

    if let Ok(re) = regex::Regex::new(r"^(?P<type>\w+)/(?P<details>.+)?$") {
        if let Some(captures) = re.captures(branch_name) {
            if let (Some(kind), Some(details)) = (captures.name("type"), captures.name("details")) {
                return BranchClassification::Topic {
                    kind: kind.as_str().to_string(),
                    details: details.as_str().to_string(),
                };
            }
        }
    }

    BranchClassification::Malformed {
        name: branch_name.to_string(),
    }
}
