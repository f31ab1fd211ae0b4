use base64::{engine::general_purpose, Engine as _};
use serde::Deserialize;

const OPENAI_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";
const DEFAULT_MODEL: &str = "gpt-4-vision-preview";
const API_KEY_VAR: &str = "OPENAI_API_KEY";
const PROMPT: &str =
    "Describe the following image from a PowerPoint slide in one or two sentences.";

/// Errors raised by an [`ImageDescriber`].
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("{0} environment variable is not set")]
    MissingCredential(&'static str),

    #[error("image description request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("description service returned no choices")]
    MalformedResponse,
}

/// Capability of turning raw image bytes into a short natural-language
/// description.
///
/// The slide extractor depends only on this trait, never on transport
/// details, so a test double returning a fixed string is a full substitute.
pub trait ImageDescriber {
    fn describe(&self, image: &[u8]) -> Result<String, ServiceError>;
}

/// [`ImageDescriber`] backed by an OpenAI-compatible chat-completions
/// endpoint.
///
/// The credential is read from the `OPENAI_API_KEY` environment variable on
/// each call, not at construction; decks without pictures never need a key.
pub struct OpenAiDescriber {
    client: reqwest::blocking::Client,
    endpoint: String,
    model: String,
}

impl OpenAiDescriber {
    pub fn new() -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            endpoint: OPENAI_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    /// Overrides the model name sent with each request.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Overrides the chat-completions endpoint.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }
}

impl Default for OpenAiDescriber {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: String,
}

impl ImageDescriber for OpenAiDescriber {
    fn describe(&self, image: &[u8]) -> Result<String, ServiceError> {
        let api_key = std::env::var(API_KEY_VAR)
            .map_err(|_| ServiceError::MissingCredential(API_KEY_VAR))?;

        let encoded = general_purpose::STANDARD.encode(image);
        let body = serde_json::json!({
            "model": self.model,
            "messages": [{
                "role": "user",
                "content": [
                    { "type": "text", "text": PROMPT },
                    {
                        "type": "image_url",
                        "image_url": { "url": format!("data:image/png;base64,{encoded}") },
                    },
                ],
            }],
            "max_tokens": 60,
        });

        log::debug!("requesting description for {} image bytes", image.len());

        let response: ChatResponse = self
            .client
            .post(&self.endpoint)
            .bearer_auth(api_key)
            .json(&body)
            .send()?
            .error_for_status()?
            .json()?;

        let choice = response
            .choices
            .into_iter()
            .next()
            .ok_or(ServiceError::MalformedResponse)?;

        Ok(choice.message.content.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_credential_is_reported_before_any_request() {
        std::env::remove_var(API_KEY_VAR);

        // Unroutable endpoint: a request attempt would fail differently.
        let describer = OpenAiDescriber::new().with_endpoint("http://127.0.0.1:9/v1/chat/completions");

        match describer.describe(&[0u8; 4]) {
            Err(ServiceError::MissingCredential(var)) => assert_eq!(var, "OPENAI_API_KEY"),
            other => panic!("expected MissingCredential, got {other:?}"),
        }
    }
}
