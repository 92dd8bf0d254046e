use serde::{Deserialize, Serialize};

use crate::models::Message;
use crate::time;

// -- Contact form --

/// Raw `POST /contact` body. Missing fields deserialize to empty strings so
/// they fail the non-empty check instead of the form extractor.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}

/// A contact submission that passed validation, with every field trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    /// Trims every field and returns the name of the first one left empty.
    pub fn validate(&self) -> Result<NewMessage, &'static str> {
        let name = self.name.trim();
        let email = self.email.trim();
        let message = self.message.trim();

        if name.is_empty() {
            return Err("name");
        }
        if email.is_empty() {
            return Err("email");
        }
        if message.is_empty() {
            return Err("message");
        }

        Ok(NewMessage {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        })
    }
}

// -- Messages --

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageView {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub message: String,
    pub created_at: String,
    pub formatted_date: String,
}

impl From<&Message> for MessageView {
    fn from(msg: &Message) -> Self {
        Self {
            id: msg.id,
            name: msg.name.clone(),
            email: msg.email.clone(),
            message: msg.message.clone(),
            created_at: time::iso(&msg.created_at),
            formatted_date: time::human(&msg.created_at),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessagesResponse {
    pub messages: Vec<MessageView>,
    pub total: usize,
}

impl MessagesResponse {
    pub fn new(messages: &[Message]) -> Self {
        let messages: Vec<MessageView> = messages.iter().map(MessageView::from).collect();
        Self {
            total: messages.len(),
            messages,
        }
    }
}
