use std::env;

use secrecy::{ExposeSecret, SecretString};

use crate::errors::{AppError, AppResult};

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/openai";

/// Wording used for the instruction prompts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PromptLanguage {
    #[default]
    Portuguese,
    English,
}

impl std::str::FromStr for PromptLanguage {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "pt" | "pt-br" | "portuguese" => Ok(PromptLanguage::Portuguese),
            "en" | "en-us" | "english" => Ok(PromptLanguage::English),
            other => Err(AppError::ConfigurationError(format!(
                "Unknown prompt language '{}'",
                other
            ))),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub api_key: SecretString,
    pub api_base: String,
    pub default_model: String,
    pub prompt_language: PromptLanguage,
}

impl Config {
    /// Builds a config around an explicitly provisioned key.
    pub fn new(api_key: impl Into<String>) -> AppResult<Self> {
        let api_key: String = api_key.into();
        if api_key.trim().is_empty() {
            return Err(AppError::ConfigurationError(
                "API key must not be empty".to_string(),
            ));
        }

        Ok(Self {
            api_key: SecretString::from(api_key),
            api_base: DEFAULT_API_BASE.to_string(),
            default_model: DEFAULT_MODEL.to_string(),
            prompt_language: PromptLanguage::default(),
        })
    }

    /// Reads configuration from the environment, loading `.env` first when present.
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();

        let api_key = env::var("GEMINI_API_KEY").map_err(|_| {
            AppError::ConfigurationError(
                "The environment variable GEMINI_API_KEY must be set".to_string(),
            )
        })?;

        let mut config = Self::new(api_key)?;
        if let Ok(base) = env::var("GENERATION_API_BASE") {
            config.api_base = base;
        }
        if let Ok(model) = env::var("GENERATION_MODEL") {
            config.default_model = model;
        }
        if let Ok(language) = env::var("PROMPT_LANGUAGE") {
            config.prompt_language = language.parse()?;
        }

        Ok(config)
    }

    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    pub fn with_default_model(mut self, model: impl Into<String>) -> Self {
        self.default_model = model.into();
        self
    }

    pub fn with_prompt_language(mut self, language: PromptLanguage) -> Self {
        self.prompt_language = language;
        self
    }

    pub(crate) fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            api_key: SecretString::from("test_api_key".to_string()),
            api_base: "http://127.0.0.1:9/v1".to_string(),
            default_model: "test-model".to_string(),
            prompt_language: PromptLanguage::Portuguese,
        }
    }
}
