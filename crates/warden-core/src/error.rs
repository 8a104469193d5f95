use thiserror::Error;

#[derive(Debug, Error)]
pub enum WardenError {
    #[error("image error: {0}")]
    Image(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type WardenResult<T> = Result<T, WardenError>;
