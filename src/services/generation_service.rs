use std::sync::Arc;

use crate::{
    config::Config,
    errors::{AppError, AppResult},
    models::{
        Action, ActivityRequest, GenerationRequest, GenerationResult, QuizSet, TextRequest,
    },
    services::{
        model_service::TextGenerator,
        prompt_builder::PromptBuilder,
        response_extractor::{extract_quiz, extract_text},
    },
};

const MAX_REPORTED_GAPS: usize = 10;

/// Stages a single generation call passes through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchState {
    Idle,
    Validating,
    Prompting,
    AwaitingModel,
    Extracting,
    Done,
    Failed,
}

impl DispatchState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, DispatchState::Done | DispatchState::Failed)
    }
}

impl std::fmt::Display for DispatchState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DispatchState::Idle => write!(f, "idle"),
            DispatchState::Validating => write!(f, "validating"),
            DispatchState::Prompting => write!(f, "prompting"),
            DispatchState::AwaitingModel => write!(f, "awaiting_model"),
            DispatchState::Extracting => write!(f, "extracting"),
            DispatchState::Done => write!(f, "done"),
            DispatchState::Failed => write!(f, "failed"),
        }
    }
}

/// Per-call state tracker; lives on the stack of one `generate` call.
struct Dispatch {
    action: Action,
    state: DispatchState,
}

impl Dispatch {
    fn start(action: Action) -> Self {
        Self {
            action,
            state: DispatchState::Idle,
        }
    }

    fn advance(&mut self, next: DispatchState) {
        log::debug!("{}: {} -> {}", self.action, self.state, next);
        self.state = next;
    }

    fn fail(&mut self, err: AppError) -> AppError {
        self.advance(DispatchState::Failed);
        err
    }
}

/// Builds the prompt, calls the model and shapes the reply for one request.
pub struct GenerationService {
    generator: Arc<dyn TextGenerator>,
    prompt_builder: PromptBuilder,
    default_model: String,
}

impl GenerationService {
    pub fn new(
        generator: Arc<dyn TextGenerator>,
        prompt_builder: PromptBuilder,
        default_model: impl Into<String>,
    ) -> Self {
        Self {
            generator,
            prompt_builder,
            default_model: default_model.into(),
        }
    }

    pub fn from_config(generator: Arc<dyn TextGenerator>, config: &Config) -> Self {
        Self::new(
            generator,
            PromptBuilder::new(config.prompt_language),
            config.default_model.clone(),
        )
    }

    pub fn default_model(&self) -> &str {
        &self.default_model
    }

    pub async fn generate(&self, request: GenerationRequest) -> AppResult<GenerationResult> {
        let action = request.action();
        let mut dispatch = Dispatch::start(action);
        log::info!("Starting {} generation", action);

        dispatch.advance(DispatchState::Validating);
        request.validate().map_err(|e| dispatch.fail(e))?;

        dispatch.advance(DispatchState::Prompting);
        let prompt = self
            .prompt_builder
            .build(&request)
            .map_err(|e| dispatch.fail(e))?;
        let model = self.resolve_model(&request);

        dispatch.advance(DispatchState::AwaitingModel);
        let reply = self
            .generator
            .generate_text(&prompt, model)
            .await
            .map_err(|source| dispatch.fail(AppError::generation(action, source)))?;

        dispatch.advance(DispatchState::Extracting);
        let result = match &request {
            GenerationRequest::Activity(activity) => {
                let quiz = extract_quiz(&reply, activity.question_count)
                    .map_err(|e| dispatch.fail(e))?;
                let expected = activity.question_count as u32;
                if !quiz.is_complete(expected) {
                    log::warn!(
                        "Quiz reply is incomplete: {} questions and {} answers of {}, first gaps {:?}",
                        quiz.questions.len(),
                        quiz.answers.len(),
                        expected,
                        quiz.missing_indices(expected)
                            .take(MAX_REPORTED_GAPS)
                            .collect::<Vec<_>>()
                    );
                }
                GenerationResult::Quiz(quiz)
            }
            GenerationRequest::Explain(_) | GenerationRequest::Summarize(_) => {
                GenerationResult::Text(extract_text(&reply))
            }
        };

        dispatch.advance(DispatchState::Done);
        log::info!("Finished {} generation with model '{}'", action, model);
        Ok(result)
    }

    pub async fn explain(&self, request: TextRequest) -> AppResult<String> {
        self.generate_text_result(GenerationRequest::Explain(request))
            .await
    }

    pub async fn summarize(&self, request: TextRequest) -> AppResult<String> {
        self.generate_text_result(GenerationRequest::Summarize(request))
            .await
    }

    pub async fn activity(&self, request: ActivityRequest) -> AppResult<QuizSet> {
        match self.generate(GenerationRequest::Activity(request)).await? {
            GenerationResult::Quiz(quiz) => Ok(quiz),
            GenerationResult::Text(_) => Err(AppError::ValidationError(
                "activity produced a text result".to_string(),
            )),
        }
    }

    async fn generate_text_result(&self, request: GenerationRequest) -> AppResult<String> {
        match self.generate(request).await? {
            GenerationResult::Text(text) => Ok(text),
            GenerationResult::Quiz(_) => Err(AppError::ValidationError(
                "text action produced a quiz result".to_string(),
            )),
        }
    }

    fn resolve_model<'a>(&'a self, request: &'a GenerationRequest) -> &'a str {
        request
            .model_name()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(&self.default_model)
    }
}
