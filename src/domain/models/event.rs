use super::ChatReply;

pub enum Event {
    ChatReply(ChatReply),
    ChatFailure(),
}
