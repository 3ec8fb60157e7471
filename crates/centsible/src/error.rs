use engine::EngineError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("split error: {0}")]
    Split(#[from] EngineError),
}

impl AppError {
    /// Process exit status: 2 when the split itself was rejected, 1 otherwise.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Split(_) => 2,
            Self::Config(_) | Self::Io(_) | Self::Json(_) => 1,
        }
    }
}
