//! Mock implementation of [`relay_bot::Bot`].
//!
//! Records every outbound call in order so tests can assert on sends, replies, typing actions and
//! edits without hitting Telegram.

use async_trait::async_trait;
use relay_bot::{Bot, BotError, Chat, EditOutcome, Message, Result, SentMessage};
use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::Mutex;

/// One recorded outbound call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BotCall {
    Send { chat_id: i64, text: String },
    Reply { chat_id: i64, reply_to: i32, text: String },
    Typing { chat_id: i64 },
    Edit { chat_id: i64, message_id: i32, text: String, markdown: bool },
}

/// How the mock answers `edit_message_text`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditMode {
    /// Returns the edited message (normal chat messages).
    ReturnMessage,
    /// Returns bare success (like `true` from the Bot API).
    ReturnTrue,
    /// Fails every edit.
    Fail,
}

pub struct MockBot {
    username: Option<String>,
    edit_mode: EditMode,
    next_message_id: AtomicI32,
    calls: Mutex<Vec<BotCall>>,
}

impl MockBot {
    pub fn new(username: Option<&str>) -> Self {
        Self::with_edit_mode(username, EditMode::ReturnMessage)
    }

    pub fn with_edit_mode(username: Option<&str>, edit_mode: EditMode) -> Self {
        Self {
            username: username.map(str::to_string),
            edit_mode,
            next_message_id: AtomicI32::new(1000),
            calls: Mutex::new(Vec::new()),
        }
    }

    fn record(&self, call: BotCall) {
        self.calls.lock().unwrap().push(call);
    }

    fn sent(&self, chat_id: i64, text: &str) -> SentMessage {
        SentMessage {
            chat_id,
            message_id: self.next_message_id.fetch_add(1, Ordering::SeqCst),
            text: Some(text.to_string()),
        }
    }

    pub fn calls(&self) -> Vec<BotCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Texts of all edits, in order.
    pub fn edits(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                BotCall::Edit { text, .. } => Some(text),
                _ => None,
            })
            .collect()
    }

    /// Texts of plain sends (not replies), in order.
    pub fn sends(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                BotCall::Send { text, .. } => Some(text),
                _ => None,
            })
            .collect()
    }

    pub fn replies(&self) -> Vec<BotCall> {
        self.calls()
            .into_iter()
            .filter(|c| matches!(c, BotCall::Reply { .. }))
            .collect()
    }

    pub fn typing_count(&self) -> usize {
        self.calls()
            .iter()
            .filter(|c| matches!(c, BotCall::Typing { .. }))
            .count()
    }
}

#[async_trait]
impl Bot for MockBot {
    async fn username(&self) -> Result<Option<String>> {
        Ok(self.username.clone())
    }

    async fn send_message(&self, chat: &Chat, text: &str) -> Result<SentMessage> {
        self.record(BotCall::Send {
            chat_id: chat.id,
            text: text.to_string(),
        });
        Ok(self.sent(chat.id, text))
    }

    async fn reply_to(&self, message: &Message, text: &str) -> Result<SentMessage> {
        self.record(BotCall::Reply {
            chat_id: message.chat.id,
            reply_to: message.id,
            text: text.to_string(),
        });
        Ok(self.sent(message.chat.id, text))
    }

    async fn send_typing(&self, chat: &Chat) -> Result<()> {
        self.record(BotCall::Typing { chat_id: chat.id });
        Ok(())
    }

    async fn edit_message_text(
        &self,
        message: &SentMessage,
        text: &str,
        markdown: bool,
    ) -> Result<EditOutcome> {
        self.record(BotCall::Edit {
            chat_id: message.chat_id,
            message_id: message.message_id,
            text: text.to_string(),
            markdown,
        });
        match self.edit_mode {
            EditMode::ReturnMessage => Ok(EditOutcome::Updated(SentMessage {
                text: Some(text.to_string()),
                ..message.clone()
            })),
            EditMode::ReturnTrue => Ok(EditOutcome::Unchanged),
            EditMode::Fail => Err(BotError::Transport(
                "Bad Request: message can't be edited".to_string(),
            )),
        }
    }
}
