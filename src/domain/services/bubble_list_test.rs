use super::BubbleList;
use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::Author;
use crate::domain::models::Message;

fn messages() -> Vec<Message> {
    Config::set(ConfigKey::Username, "testuser");
    Config::set(ConfigKey::Journey, "productivity");

    return vec![
        Message::new(Author::Assistant, "Hi there!"),
        Message::new(Author::User, "show me a form"),
    ];
}

#[test]
fn it_counts_lines_across_bubbles() {
    let mut bubble_list = BubbleList::new();
    bubble_list.set_messages(&messages(), 100);

    // Two bubbles, three lines each.
    assert_eq!(bubble_list.len(), 6);
}

#[test]
fn it_reuses_the_cache_for_a_stable_width() {
    let msgs = messages();
    let mut bubble_list = BubbleList::new();

    bubble_list.set_messages(&msgs, 100);
    let first_len = bubble_list.len();

    bubble_list.set_messages(&msgs, 100);
    assert_eq!(bubble_list.len(), first_len);
}

#[test]
fn it_rebuilds_when_the_width_changes() {
    let long_message = vec![Message::new(
        Author::Assistant,
        "This line is long enough that a narrow window has to wrap it over several rows.",
    )];

    let mut bubble_list = BubbleList::new();
    bubble_list.set_messages(&long_message, 120);
    let wide_len = bubble_list.len();

    bubble_list.set_messages(&long_message, 40);
    assert!(bubble_list.len() > wide_len);
}
