#[cfg(test)]
#[path = "classifier_test.rs"]
mod tests;

use crate::domain::models::CarouselItem;
use crate::domain::models::CarouselPayload;
use crate::domain::models::FormField;
use crate::domain::models::FormPayload;
use crate::domain::models::ImagePayload;
use crate::domain::models::JourneyCard;
use crate::domain::models::JourneyCatalog;
use crate::domain::models::JourneySuggestionsPayload;
use crate::domain::models::MessageKind;
use crate::domain::models::Payload;
use crate::domain::models::QuickRepliesPayload;
use crate::domain::models::QuickReply;
use crate::domain::models::ResponseSpec;

struct ResponseRule {
    keywords: &'static [&'static str],
    build: fn() -> ResponseSpec,
}

fn date_picker() -> ResponseSpec {
    return ResponseSpec::new(MessageKind::DatePicker, "Please select a date and time:");
}

fn file_upload() -> ResponseSpec {
    return ResponseSpec::new(MessageKind::FileUpload, "Upload a file to continue:");
}

fn rating() -> ResponseSpec {
    return ResponseSpec::new(MessageKind::Rating, "How would you rate your experience?");
}

fn form() -> ResponseSpec {
    let fields = vec![
        FormField {
            id: "name".to_string(),
            label: "Name".to_string(),
            input_type: "text".to_string(),
            placeholder: "Your name".to_string(),
        },
        FormField {
            id: "email".to_string(),
            label: "Email".to_string(),
            input_type: "email".to_string(),
            placeholder: "Your email".to_string(),
        },
        FormField {
            id: "message".to_string(),
            label: "Message".to_string(),
            input_type: "textarea".to_string(),
            placeholder: "Your message".to_string(),
        },
    ];

    return ResponseSpec::new_with_payload(
        MessageKind::Form,
        "Please fill out this quick form:",
        Payload::Form(FormPayload { fields }),
    );
}

fn quick_replies() -> ResponseSpec {
    let options = ["Yes, please", "No, thank you", "Tell me more", "I need help"]
        .iter()
        .enumerate()
        .map(|(idx, text)| {
            return QuickReply {
                id: (idx + 1).to_string(),
                text: text.to_string(),
            };
        })
        .collect::<Vec<QuickReply>>();

    return ResponseSpec::new_with_payload(
        MessageKind::QuickReplies,
        "Choose a quick response:",
        Payload::QuickReplies(QuickRepliesPayload { options }),
    );
}

fn carousel() -> ResponseSpec {
    let items = (1..=3)
        .map(|n| {
            return CarouselItem {
                id: n.to_string(),
                title: format!("Option {n}"),
                description: format!("Description for option {n}"),
                image_url: format!("https://picsum.photos/seed/carousel{n}/200/150"),
            };
        })
        .collect::<Vec<CarouselItem>>();

    return ResponseSpec::new_with_payload(
        MessageKind::Carousel,
        "Here's a carousel view of options:",
        Payload::Carousel(CarouselPayload { items }),
    );
}

fn image() -> ResponseSpec {
    return ResponseSpec::new_with_payload(
        MessageKind::Image,
        "Here's the image you requested:",
        Payload::Image(ImagePayload {
            url: "https://picsum.photos/seed/requested/400/300".to_string(),
            alt_text: "Generated image based on user request".to_string(),
        }),
    );
}

fn journey_suggestions() -> ResponseSpec {
    let journeys = JourneyCatalog::all()
        .iter()
        .map(|journey| {
            return JourneyCard {
                name: journey.name,
                title: journey.title.to_string(),
                icon: journey.icon.to_string(),
            };
        })
        .collect::<Vec<JourneyCard>>();

    return ResponseSpec::new_with_payload(
        MessageKind::JourneySuggestions,
        "Here are some journey suggestions that might interest you:",
        Payload::JourneySuggestions(JourneySuggestionsPayload { journeys }),
    );
}

/// Rule order is the tie-break policy. An input containing keywords from
/// several groups resolves to the earliest group listed here, e.g. "rating"
/// wins over "form".
fn rules() -> Vec<ResponseRule> {
    return vec![
        ResponseRule {
            keywords: &["datepicker", "date picker"],
            build: date_picker,
        },
        ResponseRule {
            keywords: &["fileupload", "file upload"],
            build: file_upload,
        },
        ResponseRule {
            keywords: &["rating", "feedback"],
            build: rating,
        },
        ResponseRule {
            keywords: &["form"],
            build: form,
        },
        ResponseRule {
            keywords: &["quickreplies", "quick replies"],
            build: quick_replies,
        },
        ResponseRule {
            keywords: &["carousel"],
            build: carousel,
        },
        ResponseRule {
            keywords: &["image"],
            build: image,
        },
        ResponseRule {
            keywords: &["journey", "suggestion"],
            build: journey_suggestions,
        },
    ];
}

pub struct Classifier {}

impl Classifier {
    /// Maps free text to a response. Pure and total: unmatched input falls
    /// through to a text echo of the original input.
    pub fn classify(input: &str) -> ResponseSpec {
        let lower = input.to_lowercase();

        for rule in rules() {
            let matched = rule.keywords.iter().any(|keyword| {
                return lower.contains(keyword);
            });

            if matched {
                tracing::debug!(input, keyword_group = rule.keywords[0], "classified input");
                return (rule.build)();
            }
        }

        tracing::debug!(input, "no keyword match, echoing input");
        return ResponseSpec::new(
            MessageKind::Text,
            &format!("I understand you're asking about {input}. How can I help you further with this?"),
        );
    }
}
