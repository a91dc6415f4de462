pub fn long_message_fixture() -> &'static str {
    return "Hi there! This is a really long line that pushes the boundaries of 50 characters across the screen, resulting in a bubble where the line is wrapped to the next line. Cool right?";
}

pub fn multi_paragraph_fixture() -> &'static str {
    return r#"
First paragraph.

Second paragraph, a little longer than the one before it.

Third paragraph.
"#
    .trim();
}
