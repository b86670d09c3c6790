//! Prompt assembly for the tutor relay.

use crate::backend::Message;

/// Answer returned when the completion carries no usable content.
pub const NO_ANSWER: &str = "❌ No answer.";

/// Build the two-message prompt: the system instruction, then the user's
/// query followed by whatever the knowledge lookup produced (possibly nothing).
pub fn build_messages(system_prompt: &str, query: &str, enrichment: &str) -> Vec<Message> {
    vec![
        Message::system(system_prompt),
        Message::user(format!("Query: {query}\nWolfram Output:\n{enrichment}")),
    ]
}

/// Fall back to [`NO_ANSWER`] when the completion had no content.
pub fn answer_or_placeholder(content: Option<String>) -> String {
    content.unwrap_or_else(|| NO_ANSWER.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_layout() {
        let msgs = build_messages("be helpful", "What is 2+2?", "4");
        assert_eq!(msgs.len(), 2);
        assert_eq!(msgs[0], Message::system("be helpful"));
        assert_eq!(msgs[1].role, "user");
        assert_eq!(msgs[1].content, "Query: What is 2+2?\nWolfram Output:\n4");
    }

    #[test]
    fn test_empty_enrichment_leaves_section_blank() {
        let msgs = build_messages("sys", "hello", "");
        assert_eq!(msgs[1].content, "Query: hello\nWolfram Output:\n");
    }

    #[test]
    fn test_placeholder() {
        assert_eq!(answer_or_placeholder(None), NO_ANSWER);
        assert_eq!(answer_or_placeholder(Some("42".into())), "42");
    }
}
