#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("A global logger is already installed")]
    AlreadyInitialized(#[from] log::SetLoggerError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Unknown level: {0}")]
    UnknownLevel(String),

    #[error("Unknown color '{0}' (expected a palette name or an escape sequence)")]
    UnknownColor(String),
}

pub type Result<T> = std::result::Result<T, Error>;
