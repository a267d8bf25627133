//! Chat-completions client with local fallback.

use super::fallback::fallback_reply;
use super::snapshot::catalog_snapshot;
use crate::config::AssistantConfig;
use crate::logging::sanitize_message;
use crate::model::catalog_item::CatalogItem;
use log::{info, warn};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::time::Instant;

const PERSONA: &str = "You are the catalog assistant for an independent bookshop. \
Answer questions about the titles listed below: availability, prices, authors and \
recommendations. Point out low stock when it matters. Keep answers short and only \
refer to titles that appear in the catalog.";
const MAX_REASON_CHARS: usize = 120;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    System,
    User,
    Assistant,
}

/// One message of the conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: ChatRole,
    pub content: String,
}

impl ChatTurn {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            content: content.into(),
        }
    }
}

/// Where a reply came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplySource {
    Remote,
    Fallback,
}

impl ReplySource {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Remote => "remote",
            Self::Fallback => "fallback",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssistantReply {
    pub text: String,
    pub source: ReplySource,
}

/// Why the remote call was skipped or failed. Never surfaced to callers.
#[derive(Debug)]
enum AssistantError {
    MissingKey,
    ClientUnavailable,
    Transport(String),
    Status(u16),
    Decode(String),
}

impl Display for AssistantError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingKey => write!(f, "missing_key"),
            Self::ClientUnavailable => write!(f, "client_unavailable"),
            Self::Transport(reason) => write!(f, "transport:{reason}"),
            Self::Status(status) => write!(f, "status:{status}"),
            Self::Decode(reason) => write!(f, "decode:{reason}"),
        }
    }
}

#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatTurn>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<CompletionChoice>,
}

#[derive(Deserialize)]
struct CompletionChoice {
    message: CompletionMessage,
}

#[derive(Deserialize)]
struct CompletionMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Answers catalog questions, remotely when possible.
pub struct CatalogAssistant {
    config: AssistantConfig,
    client: Option<Client>,
}

impl CatalogAssistant {
    pub fn new(config: AssistantConfig) -> Self {
        let client = match Client::builder().timeout(config.timeout()).build() {
            Ok(client) => Some(client),
            Err(err) => {
                warn!(
                    "event=assistant_init module=assistant status=error reason={}",
                    sanitize_message(&err.to_string(), MAX_REASON_CHARS)
                );
                None
            }
        };
        Self { config, client }
    }

    pub fn has_credential(&self) -> bool {
        self.config.api_key.is_some()
    }

    /// Replies to `input` given the prior `history` and current `items`.
    ///
    /// Falls back to the local responder on any remote failure.
    pub async fn reply(
        &self,
        history: &[ChatTurn],
        input: &str,
        items: &[CatalogItem],
    ) -> AssistantReply {
        let started_at = Instant::now();
        let reply = match self.request_remote(history, input, items).await {
            Ok(text) => AssistantReply {
                text,
                source: ReplySource::Remote,
            },
            Err(failure) => {
                warn!(
                    "event=assistant_remote module=assistant status=fallback reason={}",
                    sanitize_message(&failure.to_string(), MAX_REASON_CHARS)
                );
                let mut rng = rand::thread_rng();
                AssistantReply {
                    text: fallback_reply(input, items, &mut rng),
                    source: ReplySource::Fallback,
                }
            }
        };
        info!(
            "event=assistant_reply module=assistant status=ok source={} history_len={} item_count={} duration_ms={}",
            reply.source.as_str(),
            history.len(),
            items.len(),
            started_at.elapsed().as_millis()
        );
        reply
    }

    async fn request_remote(
        &self,
        history: &[ChatTurn],
        input: &str,
        items: &[CatalogItem],
    ) -> Result<String, AssistantError> {
        let key = self.config.api_key.as_ref().ok_or(AssistantError::MissingKey)?;
        let client = self.client.as_ref().ok_or(AssistantError::ClientUnavailable)?;

        let body = CompletionRequest {
            model: &self.config.model,
            messages: build_messages(history, input, items),
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
        };

        let response = client
            .post(&self.config.endpoint)
            .bearer_auth(key.expose())
            .json(&body)
            .send()
            .await
            .map_err(|err| AssistantError::Transport(err.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            return Err(AssistantError::Status(status.as_u16()));
        }

        let payload = response
            .json::<CompletionResponse>()
            .await
            .map_err(|err| AssistantError::Decode(err.to_string()))?;
        payload
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .map(|content| content.trim().to_string())
            .filter(|content| !content.is_empty())
            .ok_or_else(|| AssistantError::Decode("empty completion".to_string()))
    }
}

/// System prompt with catalog snapshot, then prior turns, then `input`.
pub fn build_messages(history: &[ChatTurn], input: &str, items: &[CatalogItem]) -> Vec<ChatTurn> {
    let mut messages = Vec::with_capacity(history.len() + 2);
    messages.push(ChatTurn {
        role: ChatRole::System,
        content: format!("{PERSONA}\n\nCurrent catalog:\n{}", catalog_snapshot(items)),
    });
    messages.extend(
        history
            .iter()
            .filter(|turn| turn.role != ChatRole::System)
            .cloned(),
    );
    messages.push(ChatTurn::user(input));
    messages
}

#[cfg(test)]
mod tests {
    use super::{build_messages, ChatRole, ChatTurn};

    #[test]
    fn messages_start_with_system_prompt_and_end_with_input() {
        let history = vec![
            ChatTurn::user("hi"),
            ChatTurn::assistant("hello"),
            ChatTurn {
                role: ChatRole::System,
                content: "ignored".to_string(),
            },
        ];
        let messages = build_messages(&history, "any Tolkien?", &[]);
        assert_eq!(messages.len(), 4);
        assert_eq!(messages[0].role, ChatRole::System);
        assert!(messages[0].content.contains("Current catalog:"));
        assert_eq!(messages[1], ChatTurn::user("hi"));
        assert_eq!(messages[3], ChatTurn::user("any Tolkien?"));
    }
}
