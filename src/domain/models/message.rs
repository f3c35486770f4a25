#[cfg(test)]
#[path = "message_test.rs"]
mod tests;

use serde_derive::Deserialize;
use serde_derive::Serialize;

use super::Author;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageType {
    Normal,
    Error,
}

/// One transcript entry. The transcript is append-only; a message is never
/// edited or withdrawn once pushed, including the user message that triggered
/// a failed request.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Message {
    pub author: Author,
    pub text: String,
    pub sources: Option<Vec<String>>,
    mtype: MessageType,
}

impl Message {
    pub fn new(author: Author, text: &str) -> Message {
        return Message {
            author,
            text: text.to_string().replace('\t', "  "),
            sources: None,
            mtype: MessageType::Normal,
        };
    }

    pub fn new_with_type(author: Author, mtype: MessageType, text: &str) -> Message {
        return Message {
            author,
            text: text.to_string().replace('\t', "  "),
            sources: None,
            mtype,
        };
    }

    /// An empty sources list is treated the same as an absent one; the
    /// renderer only draws a footer when citations exist.
    pub fn new_with_sources(author: Author, text: &str, sources: Vec<String>) -> Message {
        let mut msg = Message::new(author, text);
        if !sources.is_empty() {
            msg.sources = Some(sources);
        }

        return msg;
    }

    pub fn message_type(&self) -> MessageType {
        return self.mtype;
    }

    pub fn sources_line(&self) -> Option<String> {
        if let Some(sources) = &self.sources {
            return Some(format!("Sources: {}", sources.join(", ")));
        }

        return None;
    }

    pub fn as_string_lines(&self, line_max_width: usize) -> Vec<String> {
        let mut lines: Vec<String> = Vec::new();

        for full_line in self.text.split('\n') {
            if full_line.trim().is_empty() {
                lines.push(" ".to_string());
                continue;
            }

            let mut char_count = 0;
            let mut current_lines: Vec<&str> = vec![];

            for word in full_line.split(' ') {
                if word.len() + char_count + 1 > line_max_width {
                    lines.push(current_lines.join(" ").trim_end().to_string());
                    current_lines = vec![word];
                    char_count = word.len() + 1;
                } else {
                    current_lines.push(word);
                    char_count += word.len() + 1;
                }
            }
            if !current_lines.is_empty() {
                lines.push(current_lines.join(" ").trim_end().to_string());
            }
        }

        return lines;
    }
}
