use std::sync::Arc;

use crate::{
    config::Config,
    errors::AppResult,
    services::{
        generation_service::GenerationService,
        model_service::{OpenAiModelService, TextGenerator},
        source_reader::SourceReader,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub generation_service: Arc<GenerationService>,
    pub source_reader: Arc<SourceReader>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> AppResult<Self> {
        let model_service: Arc<dyn TextGenerator> = Arc::new(OpenAiModelService::new(&config));
        let source_reader = SourceReader::from_current_dir()?;

        Ok(Self::with_parts(config, model_service, source_reader))
    }

    /// Wires the services around a caller-supplied model collaborator.
    pub fn with_parts(
        config: Config,
        model_service: Arc<dyn TextGenerator>,
        source_reader: SourceReader,
    ) -> Self {
        let generation_service = Arc::new(GenerationService::from_config(model_service, &config));

        Self {
            generation_service,
            source_reader: Arc::new(source_reader),
            config: Arc::new(config),
        }
    }
}
