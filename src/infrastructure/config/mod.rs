//! Configuration infrastructure
//!
//! Hierarchical configuration loading: programmatic defaults, project YAML,
//! then environment variables.

pub mod loader;

pub use loader::{ConfigError, ConfigLoader};
