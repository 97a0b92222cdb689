//! Infrastructure layer: configuration, credentials, and vector machinery.

pub mod config;
pub mod credentials;
pub mod vector;
