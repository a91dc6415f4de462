#[cfg(test)]
#[path = "bubble_test.rs"]
mod tests;

use ratatui::style::Color;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::text::Span;

use crate::domain::models::Author;
use crate::domain::models::Message;
use crate::domain::models::MessageKind;
use crate::domain::models::MessageType;
use crate::domain::models::Payload;

#[derive(PartialEq, Eq)]
pub enum BubbleAlignment {
    Left,
    Right,
}

pub struct Bubble<'a> {
    alignment: BubbleAlignment,
    message: &'a Message,
    window_max_width: usize,
}

pub struct BubbleConfig {
    pub bubble_padding: usize,
    pub border_elements_length: usize,
    pub outer_padding_percentage: f32,
}

fn repeat_from_subtractions(text: &str, subtractions: Vec<usize>) -> String {
    let count = subtractions
        .into_iter()
        .map(|e| {
            return i32::try_from(e).unwrap();
        })
        .reduce(|a, b| {
            return a - b;
        })
        .unwrap();

    if count <= 0 {
        return "".to_string();
    }

    return [text].repeat(count.try_into().unwrap()).join("");
}

fn wrap_text_line(line: &str, line_max_width: usize) -> Vec<String> {
    if line.trim().is_empty() {
        return vec![" ".to_string()];
    }

    if line.len() <= line_max_width {
        return vec![line.trim_end().to_string()];
    }

    let mut lines: Vec<String> = vec![];
    let mut word_set: Vec<&str> = vec![];
    let mut char_count = 0;

    for word in line.split(' ') {
        if word.len() + char_count > line_max_width {
            lines.push(word_set.join(" ").trim_end().to_string());
            word_set = vec![];
            char_count = 0;
        }

        word_set.push(word);
        char_count += word.len() + 1;
    }

    lines.push(word_set.join(" ").trim_end().to_string());

    return lines;
}

/// Widget bodies render as plain text lines below the message text. Kinds
/// without a dedicated arm, or whose payload does not match, fall back to
/// text-only rendering.
fn widget_lines(message: &Message) -> Vec<String> {
    let mut lines: Vec<String> = vec![];

    match (message.kind, &message.payload) {
        (MessageKind::Rating, _) => {
            lines.push("".to_string());
            lines.push("[1] [2] [3] [4] [5]".to_string());
            lines.push("Reply with a number from 1 to 5.".to_string());
        }
        (MessageKind::DatePicker, _) => {
            lines.push("".to_string());
            lines.push("Date: YYYY-MM-DD".to_string());
            lines.push("Time: HH:MM".to_string());
            lines.push("Reply with a date and time to confirm.".to_string());
        }
        (MessageKind::FileUpload, _) => {
            lines.push("".to_string());
            lines.push("Reply with a file path to attach it.".to_string());
        }
        (MessageKind::Image, Some(Payload::Image(payload))) => {
            lines.push("".to_string());
            lines.push(format!("[image] {}", payload.url));
            lines.push(format!("({})", payload.alt_text));
        }
        (MessageKind::Carousel, Some(Payload::Carousel(payload))) => {
            lines.push("".to_string());
            for item in &payload.items {
                lines.push(format!("({}) {}: {}", item.id, item.title, item.description));
                lines.push(format!("    [image] {}", item.image_url));
            }
        }
        (MessageKind::Form, Some(Payload::Form(payload))) => {
            lines.push("".to_string());
            for field in &payload.fields {
                lines.push(format!("- {}: {}", field.label, field.placeholder));
            }
            lines.push("Reply with your details to submit.".to_string());
        }
        (MessageKind::QuickReplies, Some(Payload::QuickReplies(payload))) => {
            lines.push("".to_string());
            for option in &payload.options {
                lines.push(format!("({}) {}", option.id, option.text));
            }
        }
        (MessageKind::JourneySuggestions, Some(Payload::JourneySuggestions(payload))) => {
            lines.push("".to_string());
            for journey in &payload.journeys {
                lines.push(format!("{} {}", journey.icon, journey.title));
            }
        }
        _ => (),
    }

    return lines;
}

impl<'a> Bubble<'_> {
    pub fn new(message: &'a Message, alignment: BubbleAlignment, window_max_width: usize) -> Bubble {
        return Bubble {
            alignment,
            message,
            window_max_width,
        };
    }

    pub fn style_config() -> BubbleConfig {
        return BubbleConfig {
            // Unicode character border + padding.
            bubble_padding: 8,
            // left border + left padding + (text, not counted) + right padding + right border +
            // scrollbar.
            border_elements_length: 5,
            outer_padding_percentage: 0.04,
        };
    }

    pub fn as_lines(&self) -> Vec<Line<'a>> {
        let mut body = self
            .message
            .text
            .split('\n')
            .map(|line| {
                return line.to_string();
            })
            .collect::<Vec<String>>();
        body.extend(widget_lines(self.message));

        let max_line_length = self.get_max_line_length(&body);

        let mut lines: Vec<Line> = vec![];
        for full_line in &body {
            for wrapped in wrap_text_line(full_line, max_line_length) {
                lines.push(self.format_body_line(wrapped, max_line_length));
            }
        }

        return self.wrap_lines_in_bubble(lines, max_line_length);
    }

    fn format_body_line(&self, text: String, max_line_length: usize) -> Line<'a> {
        let fill = repeat_from_subtractions(" ", vec![max_line_length, text.len()]);
        let formatted_line_length =
            text.len() + fill.len() + Bubble::style_config().bubble_padding;

        let mut spans = vec![self.highlight_span("│ ".to_string())];
        spans.push(self.body_span(text));
        spans.push(self.highlight_span(format!("{fill} │")));

        let outer_bubble_padding =
            repeat_from_subtractions(" ", vec![self.window_max_width, formatted_line_length]);

        if self.alignment == BubbleAlignment::Left {
            spans.push(Span::from(outer_bubble_padding));
            return Line::from(spans);
        }

        let mut line_spans = vec![Span::from(outer_bubble_padding)];
        line_spans.extend(spans);

        return Line::from(line_spans);
    }

    fn get_max_line_length(&self, body: &[String]) -> usize {
        let style_config = Bubble::style_config();
        // Add a minimum 4% of padding on the side.
        let min_bubble_padding_length = ((self.window_max_width as f32
            * style_config.outer_padding_percentage)
            .ceil()) as usize;

        // Border elements + minimum bubble padding.
        let line_border_width = style_config.border_elements_length + min_bubble_padding_length;

        let mut max_line_length = body
            .iter()
            .map(|line| {
                return line.len();
            })
            .max()
            .unwrap();

        if max_line_length > (self.window_max_width - line_border_width) {
            max_line_length = self.window_max_width - line_border_width;
        }

        let username = &self.message.author.to_string();
        if max_line_length < username.len() {
            max_line_length = username.len();
        }

        return max_line_length;
    }

    fn wrap_lines_in_bubble(&self, lines: Vec<Line<'a>>, max_line_length: usize) -> Vec<Line<'a>> {
        // Add 2 for the vertical bars.
        let inner_bar = ["─"].repeat(max_line_length + 2).join("");
        let top_left_border = "╭";
        let mut top_bar = format!("{top_left_border}{inner_bar}╮");
        let bottom_bar = format!("╰{inner_bar}╯");
        let bar_bubble_padding = repeat_from_subtractions(
            " ",
            vec![
                self.window_max_width,
                max_line_length,
                Bubble::style_config().bubble_padding,
            ],
        );

        let username = &self.message.author.to_string();
        let top_replace = ["─"].repeat(username.len()).join("");
        top_bar = top_bar.replace(
            format!("{top_left_border}{top_replace}").as_str(),
            format!("{top_left_border}{username}").as_str(),
        );

        if self.alignment == BubbleAlignment::Left {
            let mut res = vec![self.highlight_line(format!("{top_bar}{bar_bubble_padding}"))];
            res.extend(lines);
            res.push(self.highlight_line(format!("{bottom_bar}{bar_bubble_padding}")));
            return res;
        }

        let mut res = vec![self.highlight_line(format!("{bar_bubble_padding}{top_bar}"))];
        res.extend(lines);
        res.push(self.highlight_line(format!("{bar_bubble_padding}{bottom_bar}")));
        return res;
    }

    fn body_span(&self, text: String) -> Span<'a> {
        if self.message.message_type() == MessageType::Error {
            return Span::styled(
                text,
                Style {
                    fg: Some(Color::Red),
                    ..Style::default()
                },
            );
        }

        return Span::from(text);
    }

    fn highlight_span(&self, text: String) -> Span<'a> {
        if self.message.message_type() == MessageType::Error {
            return Span::styled(
                text,
                Style {
                    fg: Some(Color::Red),
                    ..Style::default()
                },
            );
        } else if self.message.author == Author::Sojourn {
            return Span::styled(
                text,
                Style {
                    fg: Some(Color::Magenta),
                    ..Style::default()
                },
            );
        }

        return Span::from(text);
    }

    fn highlight_line(&self, text: String) -> Line<'a> {
        return Line::from(self.highlight_span(text));
    }
}
