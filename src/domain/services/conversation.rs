#[cfg(test)]
#[path = "conversation_test.rs"]
mod tests;

use anyhow::Result;
use tokio::sync::mpsc;

use super::Identity;
use crate::domain::models::Action;
use crate::domain::models::Author;
use crate::domain::models::ChatPrompt;
use crate::domain::models::ChatReply;
use crate::domain::models::Message;
use crate::domain::models::MessageType;

pub const GREETING_TEXT: &str = "Hi! I'm your EV battery assistant. Do you have any questions about battery health, SOH, or charging?";

/// Every transport, status, and decode failure collapses to this one reply.
pub const BACKEND_ERROR_TEXT: &str =
    "⚠️ Sorry, I couldn't reach the backend. Please make sure it is running and ask again.";

/// The session controller. Owns the transcript, the in-progress draft, and
/// the single-flight waiting flag. The UI loop is the only mutator: it calls
/// `update_draft`/`submit` on keystrokes, and `handle_reply`/`handle_failure`
/// when the dispatch worker reports an outcome.
pub struct Conversation {
    pub conversation_id: String,
    pub messages: Vec<Message>,
    pub draft: String,
    pub waiting_for_backend: bool,
}

impl Default for Conversation {
    fn default() -> Conversation {
        return Conversation::new();
    }
}

impl Conversation {
    pub fn new() -> Conversation {
        return Conversation {
            conversation_id: Identity::generate(),
            messages: vec![Message::new(Author::Bot, GREETING_TEXT)],
            draft: "".to_string(),
            waiting_for_backend: false,
        };
    }

    pub fn update_draft(&mut self, text: &str) {
        self.draft = text.to_string();
    }

    /// Dispatches the current draft to the backend. Whitespace-only drafts
    /// and calls made while a request is already in flight are no-ops. The
    /// user message is appended before the request resolves and stays in the
    /// transcript even if the request later fails.
    ///
    /// Returns whether a request was dispatched.
    pub fn submit(&mut self, tx: &mpsc::UnboundedSender<Action>) -> Result<bool> {
        let input = self.draft.trim().to_string();
        if input.is_empty() || self.waiting_for_backend {
            return Ok(false);
        }

        self.draft = "".to_string();
        self.messages.push(Message::new(Author::User, &input));
        self.waiting_for_backend = true;

        tx.send(Action::ChatRequest(ChatPrompt::new(
            &self.conversation_id,
            &input,
        )))?;

        return Ok(true);
    }

    pub fn handle_reply(&mut self, reply: ChatReply) {
        self.messages.push(Message::new_with_sources(
            Author::Bot,
            &reply.text,
            reply.sources,
        ));
        self.waiting_for_backend = false;
    }

    pub fn handle_failure(&mut self) {
        self.messages.push(Message::new_with_type(
            Author::Bot,
            MessageType::Error,
            BACKEND_ERROR_TEXT,
        ));
        self.waiting_for_backend = false;
    }
}
