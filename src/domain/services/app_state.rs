#[cfg(test)]
#[path = "app_state_test.rs"]
mod tests;

use anyhow::Result;
use ratatui::prelude::Rect;
use tokio::sync::mpsc;

use super::BubbleList;
use super::Scroll;
use crate::domain::models::Action;
use crate::domain::models::Author;
use crate::domain::models::Journey;
use crate::domain::models::JourneyCatalog;
use crate::domain::models::JourneyName;
use crate::domain::models::JourneyProgress;
use crate::domain::models::Message;
use crate::domain::models::ResponderPrompt;
use crate::domain::models::ResponseSpec;
use crate::domain::models::SlashCommand;
use crate::domain::models::VoiceState;

pub struct AppState<'a> {
    pub journey: &'static Journey,
    pub bubble_list: BubbleList<'a>,
    pub messages: Vec<Message>,
    pub progress: JourneyProgress,
    pub scroll: Scroll,
    pub voice: VoiceState,
    pub waiting_for_reply: bool,
    pub last_known_width: u16,
    pub last_known_height: u16,
}

impl<'a> AppState<'a> {
    pub fn new(journey_name: JourneyName) -> AppState<'a> {
        let journey = JourneyCatalog::get(journey_name);

        let mut app_state = AppState {
            journey,
            bubble_list: BubbleList::new(),
            messages: vec![],
            progress: JourneyProgress::new(journey),
            scroll: Scroll::default(),
            voice: VoiceState::default(),
            waiting_for_reply: false,
            last_known_width: 0,
            last_known_height: 0,
        };

        app_state
            .messages
            .push(Message::new(Author::Assistant, journey.welcome_message));

        return app_state;
    }

    pub fn handle_slash_commands(
        &mut self,
        input: &str,
        tx: &mpsc::UnboundedSender<Action>,
    ) -> Result<(bool, bool)> {
        if let Some(command) = SlashCommand::parse(input) {
            if command.is_quit() {
                return Ok((true, false));
            }

            if command.is_help() {
                tx.send(Action::Help())?;
                return Ok((false, true));
            }

            if command.is_copy_chat() {
                tx.send(Action::CopyMessages(self.messages.clone()))?;
                self.waiting_for_reply = true;
                return Ok((false, true));
            }
        }

        return Ok((false, false));
    }

    /// Empty and whitespace-only submissions are silently ignored.
    pub fn submit_text(&mut self, input: &str, tx: &mpsc::UnboundedSender<Action>) -> Result<bool> {
        if input.trim().is_empty() {
            return Ok(false);
        }

        self.add_message(Message::new(Author::User, input));
        self.waiting_for_reply = true;
        tx.send(Action::AssistantRequest(ResponderPrompt::new(
            input.to_string(),
        )))?;

        return Ok(true);
    }

    /// The roll decides step advancement and is injected so the caller owns
    /// the randomness source.
    pub fn handle_assistant_reply(&mut self, response: ResponseSpec, roll: f64) {
        self.add_message(Message::from_response(Author::Assistant, response));
        self.waiting_for_reply = false;

        if self.progress.maybe_advance(roll) {
            tracing::debug!(
                step = self.progress.current_step(),
                label = self.progress.step_label(),
                "journey advanced"
            );
        }
    }

    pub fn toggle_voice(&mut self, tx: &mpsc::UnboundedSender<Action>) -> Result<()> {
        match self.voice {
            VoiceState::Off => {
                self.voice = VoiceState::Idle;
            }
            VoiceState::Idle => {
                self.voice = VoiceState::Off;
            }
            VoiceState::Recording => {
                tx.send(Action::VoiceCaptureCancel())?;
                self.voice = VoiceState::Off;
            }
        }

        return Ok(());
    }

    pub fn begin_voice_capture(&mut self, tx: &mpsc::UnboundedSender<Action>) -> Result<()> {
        if self.voice == VoiceState::Idle {
            self.voice = VoiceState::Recording;
            tx.send(Action::VoiceCaptureBegin())?;
        }

        return Ok(());
    }

    pub fn cancel_voice_capture(&mut self, tx: &mpsc::UnboundedSender<Action>) -> Result<()> {
        if self.voice.is_recording() {
            tx.send(Action::VoiceCaptureCancel())?;
            self.voice = VoiceState::Idle;
        }

        return Ok(());
    }

    pub fn finish_voice_capture(&mut self) {
        self.voice = VoiceState::Idle;
    }

    pub fn set_rect(&mut self, rect: Rect) {
        self.last_known_width = rect.width;
        self.last_known_height = rect.height;
        self.sync_dependants();
    }

    pub fn add_message(&mut self, message: Message) {
        self.messages.push(message);
        self.sync_dependants();
        self.scroll.last();
    }

    fn sync_dependants(&mut self) {
        self.bubble_list
            .set_messages(&self.messages, self.last_known_width);

        self.scroll
            .set_state(self.bubble_list.len() as u16, self.last_known_height);

        if self.waiting_for_reply {
            self.scroll.last();
        }
    }
}
