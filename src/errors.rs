use thiserror::Error;

use crate::models::Action;

/// Failure reported by the model-call collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("API error: {0}")]
    Api(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Model returned an empty response")]
    EmptyResponse,

    #[error("Invalid model request: {0}")]
    InvalidRequest(String),
}

impl From<async_openai::error::OpenAIError> for ModelError {
    fn from(err: async_openai::error::OpenAIError) -> Self {
        use async_openai::error::OpenAIError;

        match err {
            OpenAIError::ApiError(api_err) => ModelError::Api(api_err.message),
            OpenAIError::Reqwest(e) => ModelError::Transport(e.to_string()),
            OpenAIError::JSONDeserialize(e, _) => {
                ModelError::Api(format!("malformed response: {}", e))
            }
            OpenAIError::InvalidArgument(msg) => ModelError::InvalidRequest(msg),
            other => ModelError::Transport(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("Generation error ({action}): {source}")]
    GenerationError {
        action: Action,
        #[source]
        source: ModelError,
    },

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("Source read error: {0}")]
    SourceReadError(String),
}

impl AppError {
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::ValidationError(_) => "VALIDATION_ERROR",
            AppError::ConfigurationError(_) => "CONFIGURATION_ERROR",
            AppError::GenerationError { .. } => "GENERATION_ERROR",
            AppError::UnsupportedFormat(_) => "UNSUPPORTED_FORMAT",
            AppError::SourceReadError(_) => "SOURCE_READ_ERROR",
        }
    }

    pub fn generation(action: Action, source: ModelError) -> Self {
        AppError::GenerationError { action, source }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::ValidationError(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::SourceReadError(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
