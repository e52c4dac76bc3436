use async_openai::{
    config::OpenAIConfig,
    types::chat::{
        ChatCompletionRequestMessage, ChatCompletionRequestUserMessage,
        ChatCompletionRequestUserMessageContent, CreateChatCompletionRequest,
    },
    Client,
};
use async_trait::async_trait;

use crate::{config::Config, errors::ModelError};

/// Sends a prompt to a generative model and returns its raw text reply.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate_text(&self, prompt: &str, model_name: &str) -> Result<String, ModelError>;
}

/// Chat-completions client for any OpenAI-compatible endpoint (Gemini by default).
///
/// Does not derive `Debug`: the inner client holds the API key.
pub struct OpenAiModelService {
    client: Client<OpenAIConfig>,
}

impl OpenAiModelService {
    pub fn new(config: &Config) -> Self {
        let openai_config = OpenAIConfig::new()
            .with_api_key(config.api_key())
            .with_api_base(&config.api_base);

        Self {
            client: Client::with_config(openai_config),
        }
    }

    fn build_request(prompt: &str, model_name: &str) -> CreateChatCompletionRequest {
        let message = ChatCompletionRequestMessage::User(ChatCompletionRequestUserMessage {
            content: ChatCompletionRequestUserMessageContent::Text(prompt.to_string()),
            name: None,
        });

        CreateChatCompletionRequest {
            model: model_name.to_string(),
            messages: vec![message],
            ..Default::default()
        }
    }
}

#[async_trait]
impl TextGenerator for OpenAiModelService {
    async fn generate_text(&self, prompt: &str, model_name: &str) -> Result<String, ModelError> {
        log::debug!(
            "Requesting completion from model '{}' ({} prompt bytes)",
            model_name,
            prompt.len()
        );

        let response = self
            .client
            .chat()
            .create(Self::build_request(prompt, model_name))
            .await?;

        response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or(ModelError::EmptyResponse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_request_sends_single_user_message() {
        let request = OpenAiModelService::build_request("Resuma isto", "gemini-2.5-flash");

        assert_eq!(request.model, "gemini-2.5-flash");
        assert_eq!(request.messages.len(), 1);
        match &request.messages[0] {
            ChatCompletionRequestMessage::User(message) => match &message.content {
                ChatCompletionRequestUserMessageContent::Text(text) => {
                    assert_eq!(text, "Resuma isto")
                }
                other => panic!("unexpected content {:?}", other),
            },
            other => panic!("unexpected message {:?}", other),
        }
    }

    #[test]
    fn test_service_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<OpenAiModelService>();
    }
}
