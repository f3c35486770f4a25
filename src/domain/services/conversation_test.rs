use anyhow::Result;
use tokio::sync::mpsc;

use super::Conversation;
use super::BACKEND_ERROR_TEXT;
use super::GREETING_TEXT;
use crate::domain::models::Action;
use crate::domain::models::Author;
use crate::domain::models::ChatPrompt;
use crate::domain::models::ChatReply;
use crate::domain::models::MessageType;

fn to_prompt(action: Option<Action>) -> ChatPrompt {
    match action.unwrap() {
        Action::ChatRequest(prompt) => return prompt,
    }
}

#[test]
fn it_seeds_the_greeting() {
    let conversation = Conversation::new();

    assert_eq!(conversation.messages.len(), 1);
    assert_eq!(conversation.messages[0].author, Author::Bot);
    assert_eq!(conversation.messages[0].text, GREETING_TEXT);
    assert!(conversation.draft.is_empty());
    assert!(!conversation.waiting_for_backend);
}

#[test]
fn it_ignores_whitespace_drafts() -> Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel::<Action>();
    let mut conversation = Conversation::new();

    conversation.update_draft("   \t  ");
    let dispatched = conversation.submit(&tx)?;

    assert!(!dispatched);
    assert_eq!(conversation.messages.len(), 1);
    assert!(!conversation.waiting_for_backend);
    assert!(rx.try_recv().is_err());

    return Ok(());
}

#[test]
fn it_dispatches_user_messages() -> Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel::<Action>();
    let mut conversation = Conversation::new();

    conversation.update_draft("  How healthy is my battery?  ");
    let dispatched = conversation.submit(&tx)?;

    assert!(dispatched);
    assert_eq!(conversation.messages.len(), 2);
    assert_eq!(conversation.messages[1].author, Author::User);
    assert_eq!(conversation.messages[1].text, "How healthy is my battery?");
    assert!(conversation.draft.is_empty());
    assert!(conversation.waiting_for_backend);

    let prompt = to_prompt(rx.try_recv().ok());
    assert_eq!(prompt.conversation_id, conversation.conversation_id);
    assert_eq!(prompt.message, "How healthy is my battery?");

    return Ok(());
}

#[test]
fn it_rejects_sends_while_waiting() -> Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel::<Action>();
    let mut conversation = Conversation::new();

    conversation.update_draft("What is SOH?");
    assert!(conversation.submit(&tx)?);

    conversation.update_draft("Are you still there?");
    let dispatched = conversation.submit(&tx)?;

    assert!(!dispatched);
    assert_eq!(conversation.messages.len(), 2);
    assert_eq!(conversation.draft, "Are you still there?");
    assert!(conversation.waiting_for_backend);

    assert!(rx.try_recv().is_ok());
    assert!(rx.try_recv().is_err());

    return Ok(());
}

#[test]
fn it_appends_replies_with_sources() -> Result<()> {
    let (tx, _rx) = mpsc::unbounded_channel::<Action>();
    let mut conversation = Conversation::new();

    conversation.update_draft("How should I charge?");
    assert!(conversation.submit(&tx)?);

    conversation.handle_reply(ChatReply {
        text: "Keep your charge between 20% and 80%.".to_string(),
        sources: vec!["doc1".to_string(), "doc2".to_string()],
    });

    assert_eq!(conversation.messages.len(), 3);
    assert_eq!(conversation.messages[2].author, Author::Bot);
    assert_eq!(
        conversation.messages[2].text,
        "Keep your charge between 20% and 80%."
    );
    assert_eq!(
        conversation.messages[2].sources,
        Some(vec!["doc1".to_string(), "doc2".to_string()])
    );
    assert!(!conversation.waiting_for_backend);

    return Ok(());
}

#[test]
fn it_appends_replies_without_sources() -> Result<()> {
    let (tx, _rx) = mpsc::unbounded_channel::<Action>();
    let mut conversation = Conversation::new();

    conversation.update_draft("Hello?");
    assert!(conversation.submit(&tx)?);

    conversation.handle_reply(ChatReply {
        text: "Hello!".to_string(),
        sources: vec![],
    });

    assert_eq!(conversation.messages.len(), 3);
    assert_eq!(conversation.messages[2].sources, None);
    assert!(!conversation.waiting_for_backend);

    return Ok(());
}

#[test]
fn it_converts_failures_to_error_replies() -> Result<()> {
    let (tx, _rx) = mpsc::unbounded_channel::<Action>();
    let mut conversation = Conversation::new();

    conversation.update_draft("What is SOH?");
    assert!(conversation.submit(&tx)?);

    conversation.handle_failure();

    assert_eq!(conversation.messages.len(), 3);
    assert_eq!(conversation.messages[1].author, Author::User);
    assert_eq!(conversation.messages[1].text, "What is SOH?");
    assert_eq!(conversation.messages[2].author, Author::Bot);
    assert_eq!(conversation.messages[2].text, BACKEND_ERROR_TEXT);
    assert_eq!(
        conversation.messages[2].message_type(),
        MessageType::Error
    );
    assert!(!conversation.waiting_for_backend);

    return Ok(());
}

#[test]
fn it_stays_usable_after_a_failure() -> Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel::<Action>();
    let mut conversation = Conversation::new();

    conversation.update_draft("First question");
    assert!(conversation.submit(&tx)?);
    conversation.handle_failure();

    conversation.update_draft("Second question");
    assert!(conversation.submit(&tx)?);

    assert_eq!(conversation.messages.len(), 4);
    assert!(conversation.waiting_for_backend);

    let first = to_prompt(rx.try_recv().ok());
    let second = to_prompt(rx.try_recv().ok());
    assert_eq!(first.conversation_id, second.conversation_id);
    assert_eq!(second.message, "Second question");

    return Ok(());
}

#[test]
fn it_leaves_state_untouched_by_draft_updates() {
    let (_tx, mut rx) = mpsc::unbounded_channel::<Action>();
    let mut conversation = Conversation::new();

    conversation.update_draft("typing");
    conversation.update_draft("typing");
    conversation.update_draft("typing");

    assert_eq!(conversation.draft, "typing");
    assert_eq!(conversation.messages.len(), 1);
    assert!(!conversation.waiting_for_backend);
    assert!(rx.try_recv().is_err());
}
