use thiserror::Error;

/// Errors of the configuration and reporting layer. Event generation itself
/// runs under preconditions and does not fail.
#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    RunCard(#[from] serde_yaml::Error),

    #[error("invalid run card: {0}")]
    InvalidRunCard(String),

    #[error("invalid value {value:?} for --{option}")]
    InvalidArgument { option: &'static str, value: String },

    #[error("invalid histogram binning: {0}")]
    InvalidBinning(String),

    #[error("no events have been analysed")]
    NoEvents,
}

pub type Result<T> = std::result::Result<T, Error>;
