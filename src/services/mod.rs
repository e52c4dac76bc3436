pub mod generation_service;
pub mod model_service;
pub mod prompt_builder;
pub mod response_extractor;
pub mod source_reader;

pub use generation_service::{DispatchState, GenerationService};
pub use model_service::{OpenAiModelService, TextGenerator};
pub use prompt_builder::PromptBuilder;
pub use response_extractor::{extract_quiz, extract_text};
pub use source_reader::{SourceFormat, SourceReader};
