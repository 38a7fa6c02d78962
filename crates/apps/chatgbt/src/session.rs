//! Chat transcript state: one pending reply at a time, always the same answer.

use std::time::Duration;

use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const GREETING: &str = "Hello! I'm ChatGBT, how can I help you today?";
pub const CANNED_REPLY: &str = "I don't know what the fuck you are talking about";

const MIN_REPLY_DELAY_MS: f64 = 2000.0;
const REPLY_DELAY_SPREAD_MS: f64 = 1500.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    User,
    Bot,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: u64,
    pub role: Role,
    pub content: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("message is blank")]
    Blank,
    #[error("a reply is still being typed")]
    ReplyPending,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatSession {
    messages: Vec<ChatMessage>,
    typing: bool,
    next_id: u64,
}

impl Default for ChatSession {
    fn default() -> Self {
        let mut session = Self {
            messages: Vec::new(),
            typing: false,
            next_id: 1,
        };
        session.push(Role::Bot, GREETING.to_string());
        session
    }
}

impl ChatSession {
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn is_typing(&self) -> bool {
        self.typing
    }

    /// Appends the trimmed user message and starts "typing" the reply.
    pub fn submit(&mut self, input: &str) -> Result<(), SubmitError> {
        if self.typing {
            return Err(SubmitError::ReplyPending);
        }
        let content = input.trim();
        if content.is_empty() {
            return Err(SubmitError::Blank);
        }
        self.push(Role::User, content.to_string());
        self.typing = true;
        Ok(())
    }

    /// Delivers the pending reply. Does nothing when no reply is pending.
    pub fn resolve_reply(&mut self) {
        if !self.typing {
            return;
        }
        self.typing = false;
        self.push(Role::Bot, CANNED_REPLY.to_string());
    }

    fn push(&mut self, role: Role, content: String) {
        let id = self.next_id;
        self.next_id += 1;
        self.messages.push(ChatMessage { id, role, content });
    }
}

/// Random "typing" delay between 2.0 and 3.5 seconds.
pub fn reply_delay<R: Rng + ?Sized>(rng: &mut R) -> Duration {
    let millis = MIN_REPLY_DELAY_MS + rng.gen::<f64>() * REPLY_DELAY_SPREAD_MS;
    Duration::from_millis(millis as u64)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rand::{rngs::SmallRng, SeedableRng};

    use super::*;

    #[test]
    fn starts_with_the_greeting() {
        let session = ChatSession::default();
        assert_eq!(
            session.messages(),
            &[ChatMessage {
                id: 1,
                role: Role::Bot,
                content: GREETING.to_string(),
            }]
        );
        assert!(!session.is_typing());
    }

    #[test]
    fn submit_then_resolve_appends_both_sides() {
        let mut session = ChatSession::default();
        session.submit("  what is rust?  ").unwrap();
        assert!(session.is_typing());

        session.resolve_reply();

        let transcript: Vec<(Role, &str)> = session
            .messages()
            .iter()
            .map(|message| (message.role, message.content.as_str()))
            .collect();
        assert_eq!(
            transcript,
            vec![
                (Role::Bot, GREETING),
                (Role::User, "what is rust?"),
                (Role::Bot, CANNED_REPLY),
            ]
        );
        assert!(!session.is_typing());
    }

    #[test]
    fn blank_input_is_rejected() {
        let mut session = ChatSession::default();
        assert_eq!(session.submit("   "), Err(SubmitError::Blank));
        assert_eq!(session.messages().len(), 1);
    }

    #[test]
    fn second_submit_while_typing_is_rejected() {
        let mut session = ChatSession::default();
        session.submit("hi").unwrap();
        assert_eq!(session.submit("hello?"), Err(SubmitError::ReplyPending));
        assert_eq!(session.messages().len(), 2);
    }

    #[test]
    fn stray_resolve_does_not_add_a_reply() {
        let mut session = ChatSession::default();
        session.resolve_reply();
        assert_eq!(session.messages().len(), 1);
    }

    #[test]
    fn reply_delay_stays_in_range() {
        let mut rng = SmallRng::seed_from_u64(5);
        for _ in 0..500 {
            let delay = reply_delay(&mut rng);
            assert!(delay >= Duration::from_millis(2000), "{delay:?}");
            assert!(delay <= Duration::from_millis(3500), "{delay:?}");
        }
    }
}
