// src/config/mod.rs
mod descriptor;
mod models;

pub use descriptor::{parse_descriptor, parse_descriptors, DescriptorError};
pub use models::*;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("probe timeout must be greater than zero")]
    ZeroTimeout,

    #[error("probe concurrency must be at least 1")]
    ZeroConcurrency,
}
