use thiserror::Error;

/// Result type for sun_card operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the configuration and table-building layers.
///
/// Resolving a location and classifying a timestamp never fail.
#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("invalid clock time {0:?}, expected HH:MM AM|PM")]
    InvalidTime(String),

    #[error("location {0:?} is already defined")]
    DuplicateLocation(String),

    #[error("location name must not be empty")]
    EmptyLocationName,

    #[error("no tokio runtime available to drive the day progress ticker")]
    NoRuntime,
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}
