//! HTTP client for an OpenAI-compatible chat-completions endpoint.

use reqwest::Client;
use serde::Deserialize;
use serde_json::json;

use super::{system_prompt, ChatMessage};
use crate::error::ChatError;
use crate::storage::ChatConfig;

pub struct ChatClient {
    http: Client,
    endpoint: String,
    model: String,
    temperature: f64,
    max_tokens: u32,
    api_key: String,
}

#[derive(Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: Option<ChoiceMessage>,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

impl ChatClient {
    pub fn new(config: &ChatConfig, api_key: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            endpoint: config.endpoint.clone(),
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
            api_key: api_key.into(),
        }
    }

    /// Build a client reading the key from `config.api_key_env`.
    ///
    /// # Errors
    /// Returns [`ChatError::MissingApiKey`] if the variable is unset or empty.
    pub fn from_env(config: &ChatConfig) -> Result<Self, ChatError> {
        let api_key = std::env::var(&config.api_key_env)
            .ok()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| ChatError::MissingApiKey {
                env_var: config.api_key_env.clone(),
            })?;
        Ok(Self::new(config, api_key))
    }

    fn request_body(&self, history: &[ChatMessage], summary: &str) -> serde_json::Value {
        let mut messages = vec![json!({ "role": "system", "content": system_prompt(summary) })];
        messages.extend(
            history
                .iter()
                .map(|m| json!({ "role": m.role, "content": m.content })),
        );
        json!({
            "model": self.model,
            "messages": messages,
            "temperature": self.temperature,
            "max_tokens": self.max_tokens,
        })
    }

    /// Send the conversation and return the assistant's reply.
    ///
    /// # Errors
    /// Returns an error on transport failure, a non-success status, or a body
    /// without a first choice message.
    pub async fn reply(&self, history: &[ChatMessage], summary: &str) -> Result<String, ChatError> {
        let body = self.request_body(history, summary);
        tracing::debug!(
            endpoint = %self.endpoint,
            model = %self.model,
            turns = history.len(),
            "sending chat completion"
        );

        let resp = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            tracing::error!(status = status.as_u16(), body = %body, "completion API error");
            return Err(ChatError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let text = resp.text().await?;
        let parsed: CompletionResponse = serde_json::from_str(&text)
            .map_err(|e| ChatError::InvalidResponse(e.to_string()))?;

        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message)
            .and_then(|m| m.content)
            .ok_or_else(|| {
                tracing::error!(body = %text, "completion response had no message");
                ChatError::InvalidResponse("missing choices[0].message.content".into())
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;

    fn client_for(server: &mockito::ServerGuard) -> ChatClient {
        let config = ChatConfig {
            endpoint: format!("{}/v1/chat/completions", server.url()),
            ..ChatConfig::default()
        };
        ChatClient::new(&config, "test-key")
    }

    #[test]
    fn body_puts_system_prompt_before_history() {
        let config = ChatConfig::default();
        let client = ChatClient::new(&config, "k");
        let history = [
            ChatMessage::assistant("Hi! How are you?"),
            ChatMessage::user("Struggling today"),
        ];
        let body = client.request_body(&history, "- Beer 🍺: 2 days clean, saved R$ 0.00");

        let messages = body["messages"].as_array().unwrap();
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[0]["role"], "system");
        assert!(messages[0]["content"]
            .as_str()
            .unwrap()
            .contains("- Beer 🍺: 2 days clean"));
        assert_eq!(messages[2]["role"], "user");
        assert_eq!(messages[2]["content"], "Struggling today");
        assert_eq!(body["temperature"], 0.7);
    }

    #[tokio::test]
    async fn reply_returns_first_choice() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/v1/chat/completions")
            .match_header("authorization", "Bearer test-key")
            .match_body(Matcher::PartialJson(json!({
                "model": "gpt-4o",
                "max_tokens": 300,
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                json!({
                    "choices": [{
                        "message": { "role": "assistant", "content": "Breathe in for 4 seconds." }
                    }]
                })
                .to_string(),
            )
            .create_async()
            .await;

        let client = client_for(&server);
        let reply = client
            .reply(&[ChatMessage::user("I feel a craving")], "- Beer 🍺: 2 days clean")
            .await
            .unwrap();

        assert_eq!(reply, "Breathe in for 4 seconds.");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn non_success_status_is_surfaced() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/v1/chat/completions")
            .with_status(429)
            .with_body("rate limited")
            .create_async()
            .await;

        let err = client_for(&server)
            .reply(&[ChatMessage::user("hello")], "")
            .await
            .unwrap_err();
        match err {
            ChatError::Status { status, body } => {
                assert_eq!(status, 429);
                assert_eq!(body, "rate limited");
            }
            other => panic!("expected status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn empty_choices_is_invalid() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/v1/chat/completions")
            .with_status(200)
            .with_body(r#"{"choices":[]}"#)
            .create_async()
            .await;

        let err = client_for(&server)
            .reply(&[ChatMessage::user("hello")], "")
            .await
            .unwrap_err();
        assert!(matches!(err, ChatError::InvalidResponse(_)));
    }

    #[test]
    fn missing_key_is_reported() {
        let config = ChatConfig {
            api_key_env: "CLEANSLATE_TEST_KEY_THAT_IS_NEVER_SET".into(),
            ..ChatConfig::default()
        };
        let err = ChatClient::from_env(&config).err().unwrap();
        assert!(matches!(err, ChatError::MissingApiKey { .. }));
    }
}
