use thiserror::Error;

#[derive(Error, Debug)]
pub enum LinkError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration parse error: {message}")]
    ConfigParseError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Link rendering error: {message}")]
    RenderError { message: String },
}

impl LinkError {
    /// Whether the error came from the configuration document rather than from rendering.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            LinkError::IoError(_)
                | LinkError::ConfigParseError { .. }
                | LinkError::InvalidConfigValueError { .. }
                | LinkError::MissingConfigError { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, LinkError>;
