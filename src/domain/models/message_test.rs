use super::Author;
use super::Message;
use super::MessageKind;
use super::MessageType;
use crate::domain::models::CarouselItem;
use crate::domain::models::CarouselPayload;
use crate::domain::models::Payload;
use crate::domain::models::ResponseSpec;

#[test]
fn it_executes_new() {
    let msg = Message::new(Author::Sojourn, "Hi there!");
    assert_eq!(msg.author, Author::Sojourn);
    assert_eq!(msg.author.to_string(), "Sojourn");
    assert_eq!(msg.text, "Hi there!".to_string());
    assert_eq!(msg.kind, MessageKind::Text);
    assert!(msg.payload.is_none());
    assert_eq!(msg.mtype, MessageType::Normal);
}

#[test]
fn it_executes_new_replacing_tabs() {
    let msg = Message::new(Author::Sojourn, "\t\tHi there!");
    assert_eq!(msg.text, "    Hi there!".to_string());
}

#[test]
fn it_executes_new_with_type() {
    let msg = Message::new_with_type(Author::Sojourn, MessageType::Error, "It broke!");
    assert_eq!(msg.author, Author::Sojourn);
    assert_eq!(msg.text, "It broke!".to_string());
    assert_eq!(msg.message_type(), MessageType::Error);
}

#[test]
fn it_executes_from_response() {
    let response = ResponseSpec::new_with_payload(
        MessageKind::Carousel,
        "Here's a carousel view of options:",
        Payload::Carousel(CarouselPayload {
            items: vec![CarouselItem {
                id: "1".to_string(),
                title: "Option 1".to_string(),
                description: "Description for option 1".to_string(),
                image_url: "https://picsum.photos/seed/carousel1/200/150".to_string(),
            }],
        }),
    );

    let msg = Message::from_response(Author::Assistant, response);
    assert_eq!(msg.kind, MessageKind::Carousel);
    assert_eq!(msg.text, "Here's a carousel view of options:");
    assert!(msg.payload.is_some());
    assert_eq!(msg.message_type(), MessageType::Normal);
}

#[test]
fn it_assigns_unique_ids() {
    let first = Message::new(Author::Sojourn, "one");
    let second = Message::new(Author::Sojourn, "two");
    assert_ne!(first.id, second.id);
}
