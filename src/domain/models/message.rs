#[cfg(test)]
#[path = "message_test.rs"]
mod tests;

use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;

use chrono::Utc;
use serde_derive::Deserialize;
use serde_derive::Serialize;

use super::Author;
use super::Payload;
use super::ResponseSpec;

static MESSAGE_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn next_message_id() -> String {
    let counter = MESSAGE_COUNTER.fetch_add(1, Ordering::Relaxed);
    return format!("{}-{counter}", Utc::now().timestamp_millis());
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageType {
    Normal,
    Error,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageKind {
    Text,
    Image,
    JourneySuggestions,
    Rating,
    Carousel,
    DatePicker,
    FileUpload,
    Form,
    QuickReplies,
}

#[derive(Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub author: Author,
    pub kind: MessageKind,
    pub text: String,
    pub payload: Option<Payload>,
    mtype: MessageType,
}

impl Message {
    pub fn new(author: Author, text: &str) -> Message {
        return Message {
            id: next_message_id(),
            author,
            kind: MessageKind::Text,
            text: text.to_string().replace('\t', "  "),
            payload: None,
            mtype: MessageType::Normal,
        };
    }

    pub fn new_with_type(author: Author, mtype: MessageType, text: &str) -> Message {
        return Message {
            id: next_message_id(),
            author,
            kind: MessageKind::Text,
            text: text.to_string().replace('\t', "  "),
            payload: None,
            mtype,
        };
    }

    pub fn from_response(author: Author, response: ResponseSpec) -> Message {
        return Message {
            id: next_message_id(),
            author,
            kind: response.kind,
            text: response.text.replace('\t', "  "),
            payload: response.payload,
            mtype: MessageType::Normal,
        };
    }

    pub fn message_type(&self) -> MessageType {
        return self.mtype;
    }
}
