use thiserror::Error;

/// Errors surfaced by the configuration and persistence layers.
///
/// The clustering core itself does not fail; broken invariants there panic.
#[derive(Debug, Error)]
pub enum Error {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Config(#[from] serde_yaml::Error),

    /// A configuration value outside its valid range.
    #[error("invalid config {name}: {message}")]
    InvalidConfig {
        name: &'static str,
        message: String,
    },

    #[error("failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

pub type Result<T> = std::result::Result<T, Error>;
