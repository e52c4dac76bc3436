use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::errors::{AppError, AppResult};

/// The transformation requested from the model.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Explain,
    Summarize,
    Activity,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Explain => "explain",
            Action::Summarize => "summarize",
            Action::Activity => "activity",
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Length {
    Short,
    #[default]
    Medium,
    Long,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Audience {
    Beginner,
    #[default]
    Intermediate,
    Advanced,
}

/// Configuration shared by explain and summarize requests.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, Validate)]
pub struct TextRequest {
    pub source_text: String,
    pub model_name: Option<String>,
    pub length: Length,
    pub audience: Audience,
}

impl TextRequest {
    pub fn new(source_text: impl Into<String>) -> Self {
        Self {
            source_text: source_text.into(),
            model_name: None,
            length: Length::default(),
            audience: Audience::default(),
        }
    }

    pub fn with_length(mut self, length: Length) -> Self {
        self.length = length;
        self
    }

    pub fn with_audience(mut self, audience: Audience) -> Self {
        self.audience = audience;
        self
    }

    pub fn with_model(mut self, model_name: impl Into<String>) -> Self {
        self.model_name = Some(model_name.into());
        self
    }
}

/// Configuration for quiz generation.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, Validate)]
pub struct ActivityRequest {
    pub source_text: String,
    pub model_name: Option<String>,
    pub audience: Audience,
    #[validate(range(min = 1, message = "question count must be at least 1"))]
    pub question_count: i32,
}

impl ActivityRequest {
    pub fn new(source_text: impl Into<String>, question_count: i32) -> Self {
        Self {
            source_text: source_text.into(),
            model_name: None,
            audience: Audience::default(),
            question_count,
        }
    }

    pub fn with_audience(mut self, audience: Audience) -> Self {
        self.audience = audience;
        self
    }

    pub fn with_model(mut self, model_name: impl Into<String>) -> Self {
        self.model_name = Some(model_name.into());
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum GenerationRequest {
    Explain(TextRequest),
    Summarize(TextRequest),
    Activity(ActivityRequest),
}

impl GenerationRequest {
    pub fn action(&self) -> Action {
        match self {
            GenerationRequest::Explain(_) => Action::Explain,
            GenerationRequest::Summarize(_) => Action::Summarize,
            GenerationRequest::Activity(_) => Action::Activity,
        }
    }

    pub fn source_text(&self) -> &str {
        match self {
            GenerationRequest::Explain(r) | GenerationRequest::Summarize(r) => &r.source_text,
            GenerationRequest::Activity(r) => &r.source_text,
        }
    }

    pub fn model_name(&self) -> Option<&str> {
        match self {
            GenerationRequest::Explain(r) | GenerationRequest::Summarize(r) => {
                r.model_name.as_deref()
            }
            GenerationRequest::Activity(r) => r.model_name.as_deref(),
        }
    }

    pub fn validate(&self) -> AppResult<()> {
        match self {
            GenerationRequest::Explain(r) | GenerationRequest::Summarize(r) => r.validate()?,
            GenerationRequest::Activity(r) => r.validate()?,
        }
        Ok(())
    }

    /// Decodes the external configuration object:
    /// `{"action", "input", "model"?, "config"?: {"length"?, "targetAudience"?}, "questionAmount"?}`.
    pub fn from_json(raw: &str) -> AppResult<Self> {
        let wire: WireRequest = serde_json::from_str(raw)
            .map_err(|e| AppError::ValidationError(format!("Invalid request: {}", e)))?;
        Self::try_from(wire)
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireRequest {
    action: String,
    input: String,
    model: Option<String>,
    #[serde(default)]
    config: WireConfig,
    question_amount: Option<i32>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireConfig {
    length: Option<Length>,
    target_audience: Option<Audience>,
}

impl TryFrom<WireRequest> for GenerationRequest {
    type Error = AppError;

    fn try_from(wire: WireRequest) -> Result<Self, Self::Error> {
        let action = match wire.action.trim().to_lowercase().as_str() {
            "explain" => Action::Explain,
            "summarize" => Action::Summarize,
            "activity" => Action::Activity,
            other => {
                return Err(AppError::ValidationError(format!(
                    "Unknown action '{}'",
                    other
                )))
            }
        };
        let audience = wire.config.target_audience.unwrap_or_default();

        if action == Action::Activity {
            let question_count = wire.question_amount.ok_or_else(|| {
                AppError::ValidationError("questionAmount is required for activity".to_string())
            })?;
            return Ok(GenerationRequest::Activity(ActivityRequest {
                source_text: wire.input,
                model_name: wire.model,
                audience,
                question_count,
            }));
        }

        let text = TextRequest {
            source_text: wire.input,
            model_name: wire.model,
            length: wire.config.length.unwrap_or_default(),
            audience,
        };
        Ok(match action {
            Action::Explain => GenerationRequest::Explain(text),
            _ => GenerationRequest::Summarize(text),
        })
    }
}
