use std::io::Error as IoError;
use std::result::Result as StdResult;
use thiserror::Error;
use toml::de::Error as TomlError;

/// Result type for configuration operations.
pub type Result<T> = StdResult<T, RoutingError>;

/// Errors raised while loading or validating router configuration.
///
/// Routing itself never fails; these only surface at the configuration edge.
#[derive(Debug, Error)]
pub enum RoutingError {
    /// The configuration file could not be read.
    #[error("IO error: {0}")]
    Io(#[from] IoError),

    /// The configuration file is not valid TOML for [`crate::RouterConfig`].
    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] TomlError),

    /// A weight, ceiling or threshold is out of range.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
