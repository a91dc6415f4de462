use serde_derive::Deserialize;
use serde_derive::Serialize;

use super::JourneyName;
use super::MessageKind;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImagePayload {
    pub url: String,
    pub alt_text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarouselItem {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarouselPayload {
    pub items: Vec<CarouselItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormField {
    pub id: String,
    pub label: String,
    pub input_type: String,
    pub placeholder: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormPayload {
    pub fields: Vec<FormField>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickReply {
    pub id: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickRepliesPayload {
    pub options: Vec<QuickReply>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JourneyCard {
    pub name: JourneyName,
    pub title: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JourneySuggestionsPayload {
    pub journeys: Vec<JourneyCard>,
}

/// Kind-specific structured data. Rating, date picker and file upload
/// responses carry none; their widgets are presentation constants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Payload {
    Image(ImagePayload),
    Carousel(CarouselPayload),
    Form(FormPayload),
    QuickReplies(QuickRepliesPayload),
    JourneySuggestions(JourneySuggestionsPayload),
}

/// Classifier output, consumed immediately to build an assistant message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseSpec {
    pub kind: MessageKind,
    pub text: String,
    pub payload: Option<Payload>,
}

impl ResponseSpec {
    pub fn new(kind: MessageKind, text: &str) -> ResponseSpec {
        return ResponseSpec {
            kind,
            text: text.to_string(),
            payload: None,
        };
    }

    pub fn new_with_payload(kind: MessageKind, text: &str, payload: Payload) -> ResponseSpec {
        return ResponseSpec {
            kind,
            text: text.to_string(),
            payload: Some(payload),
        };
    }
}
