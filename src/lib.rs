pub mod config;
pub mod domain;
pub mod error;
pub mod git_ops;
pub mod pipeline;
pub mod ui;

pub use error::{Result, VersionGateError};
