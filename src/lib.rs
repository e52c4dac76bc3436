pub mod app_state;
pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod services;

#[cfg(test)]
pub mod test_utils;

pub use app_state::AppState;
pub use config::{Config, PromptLanguage};
pub use errors::{AppError, AppResult, ModelError};
pub use models::{
    Action, ActivityRequest, Audience, GenerationRequest, GenerationResult, Length, QuizSet,
    TextRequest,
};
pub use services::{GenerationService, SourceReader, TextGenerator};
