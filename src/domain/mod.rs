//! Domain logic - pure version computation rules independent of git operations

pub mod branch;
pub mod release;
pub mod version;

pub use branch::BranchClassification;
pub use release::PublishChannel;
