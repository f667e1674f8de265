use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Malformed configuration: {0}")]
    MalformedConfig(#[from] serde_json::Error),
}
