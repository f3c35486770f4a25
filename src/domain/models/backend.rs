use anyhow::Result;
use async_trait::async_trait;
use serde_derive::Deserialize;
use serde_derive::Serialize;

/// Outbound request payload. Serialized as-is into the JSON body sent to the
/// backend, carrying the session's conversation id as a correlation key.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatPrompt {
    pub conversation_id: String,
    pub message: String,
}

impl ChatPrompt {
    pub fn new(conversation_id: &str, message: &str) -> ChatPrompt {
        return ChatPrompt {
            conversation_id: conversation_id.to_string(),
            message: message.to_string(),
        };
    }
}

#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct ChatReply {
    pub text: String,
    pub sources: Vec<String>,
}

#[async_trait]
pub trait Backend {
    /// Used at startup to verify the backend is reachable before the session
    /// begins.
    async fn health_check(&self) -> Result<()>;

    /// Sends one user message to the backend and returns the assistant
    /// reply, including any cited sources.
    async fn ask(&self, prompt: &ChatPrompt) -> Result<ChatReply>;
}

pub type BackendBox = Box<dyn Backend + Send + Sync>;
