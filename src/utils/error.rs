use thiserror::Error;

#[derive(Error, Debug)]
pub enum BoardError {
    #[error("Sheet request failed: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("Sheet request returned HTTP {status}")]
    FetchStatus { status: reqwest::StatusCode },

    #[error("CSV decode error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Sheet schema error: {message}")]
    Schema { message: String },

    #[error("Invalid configuration value for {field} ({value}): {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config file parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl BoardError {
    pub fn schema(message: impl Into<String>) -> Self {
        BoardError::Schema {
            message: message.into(),
        }
    }

    /// True for the failures the snapshot boundary expects from the transport side.
    pub fn is_fetch(&self) -> bool {
        matches!(self, BoardError::Fetch(_) | BoardError::FetchStatus { .. })
    }
}

pub type Result<T> = std::result::Result<T, BoardError>;
