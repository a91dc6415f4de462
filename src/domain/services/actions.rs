#[cfg(test)]
#[path = "actions_test.rs"]
mod tests;

use std::time::Duration;

use anyhow::anyhow;
use anyhow::Result;
use rand::Rng;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time;

use super::clipboard::ClipboardService;
use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::Action;
use crate::domain::models::Author;
use crate::domain::models::Event;
use crate::domain::models::Message;
use crate::domain::models::MessageType;
use crate::domain::models::VoicePhrases;
use crate::infrastructure::responders::ResponderManager;

pub fn help_text() -> String {
    let text = r#"
COMMANDS:
- /copy (/c) - Copies the entire chat history to your clipboard.
- /quit /exit (/q) - Exit Sojourn.
- /help (/h) - Provides this help menu.

HOTKEYS:
- Up arrow - Scroll up
- Down arrow - Scroll down
- CTRL+U - Page up
- CTRL+D - Page down
- CTRL+V - Toggle voice mode. In voice mode, Enter starts a capture and ESC cancels it.
- CTRL+C - Exit Sojourn.

WIDGET TRIGGERS:
The assistant is a scripted demo. Mention one of the following in a message and the matching widget comes back: date picker, file upload, rating, form, quick replies, carousel, image, journey.
        "#;

    return text.trim().to_string();
}

fn copy_messages(messages: Vec<Message>, tx: &mpsc::UnboundedSender<Event>) -> Result<()> {
    if messages.len() == 1 {
        ClipboardService::set(messages[0].text.to_string())?;
    } else {
        let formatted = messages
            .iter()
            .map(|message| {
                return format!("{}: {}", message.author.to_string(), message.text);
            })
            .collect::<Vec<String>>()
            .join("\n\n");

        ClipboardService::set(formatted)?;
    }

    tx.send(Event::SojournMessage(Message::new(
        Author::Sojourn,
        "Copied chat log to clipboard.",
    )))?;

    return Ok(());
}

fn worker_error(err: anyhow::Error, tx: &mpsc::UnboundedSender<Event>) -> Result<()> {
    tx.send(Event::SojournMessage(Message::new_with_type(
        Author::Sojourn,
        MessageType::Error,
        &format!("The assistant failed with the following error: {:?}", err),
    )))?;

    return Ok(());
}

fn help(tx: &mpsc::UnboundedSender<Event>) -> Result<()> {
    tx.send(Event::SojournMessage(Message::new(
        Author::Sojourn,
        &help_text(),
    )))?;

    return Ok(());
}

/// Simulates a voice capture. Sleeps through the capture window, transcribes
/// to one of the canned phrases, then asks the UI to submit it after a short
/// extra delay. Cancelling a capture aborts this task before it produces
/// anything.
async fn voice_capture(
    capture: Duration,
    submit_delay: Duration,
    tx: mpsc::UnboundedSender<Event>,
) -> Result<()> {
    time::sleep(capture).await;

    let idx = rand::thread_rng().gen_range(0..VoicePhrases::all().len());
    let phrase = VoicePhrases::choose(idx);
    tracing::debug!(phrase, "voice transcription");
    tx.send(Event::VoiceTranscription(phrase.to_string()))?;

    time::sleep(submit_delay).await;
    tx.send(Event::VoiceSubmit())?;

    return Ok(());
}

pub struct ActionsService {}

impl ActionsService {
    pub async fn start(
        tx: mpsc::UnboundedSender<Event>,
        rx: &mut mpsc::UnboundedReceiver<Action>,
    ) -> Result<()> {
        // Lazy default.
        let mut voice_worker: JoinHandle<Result<()>> = tokio::spawn(async {
            return Ok(());
        });

        loop {
            let event = rx.recv().await;
            if event.is_none() {
                continue;
            }

            let worker_tx = tx.clone();
            match event.unwrap() {
                Action::AssistantRequest(prompt) => {
                    // An in-flight reply cannot be cancelled; the delay always
                    // completes.
                    tokio::spawn(async move {
                        let res = ResponderManager::get().reply(prompt, &worker_tx).await;
                        if let Err(err) = res {
                            worker_error(err, &worker_tx)?;
                        }

                        return Ok::<(), anyhow::Error>(());
                    });
                }
                Action::CopyMessages(messages) => {
                    copy_messages(messages, &tx)?;
                }
                Action::Help() => {
                    help(&tx)?;
                }
                Action::VoiceCaptureBegin() => {
                    let capture_res = Config::get(ConfigKey::VoiceCaptureMs).parse::<u64>();
                    let submit_res = Config::get(ConfigKey::VoiceSubmitDelayMs).parse::<u64>();

                    match (capture_res, submit_res) {
                        (Ok(capture_ms), Ok(submit_ms)) => {
                            voice_worker = tokio::spawn(async move {
                                let res = voice_capture(
                                    Duration::from_millis(capture_ms),
                                    Duration::from_millis(submit_ms),
                                    worker_tx.clone(),
                                )
                                .await;

                                if let Err(err) = res {
                                    worker_error(err, &worker_tx)?;
                                }

                                return Ok(());
                            });
                        }
                        _ => {
                            worker_error(
                                anyhow!("voice capture delays must be integer milliseconds"),
                                &tx,
                            )?;
                        }
                    }
                }
                Action::VoiceCaptureCancel() => {
                    voice_worker.abort();
                }
            }
        }
    }
}
