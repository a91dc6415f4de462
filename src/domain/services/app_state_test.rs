use anyhow::bail;
use anyhow::Result;
use tokio::sync::mpsc;

use super::AppState;
use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::Action;
use crate::domain::models::Author;
use crate::domain::models::JourneyName;
use crate::domain::models::MessageKind;
use crate::domain::models::ResponseSpec;
use crate::domain::models::VoiceState;

impl Default for AppState<'static> {
    fn default() -> AppState<'static> {
        Config::set(ConfigKey::Username, "testuser");
        Config::set(ConfigKey::Journey, "productivity");

        let mut app_state = AppState::new(JourneyName::Productivity);
        app_state.last_known_width = 100;
        app_state.last_known_height = 300;

        return app_state;
    }
}

mod submit_text {
    use super::*;

    #[test]
    fn it_starts_with_the_welcome_message() {
        let app_state = AppState::default();
        assert_eq!(app_state.messages.len(), 1);
        assert_eq!(app_state.messages[0].author, Author::Assistant);
        assert_eq!(
            app_state.messages[0].text,
            "Hi there! I'm your Productivity Assistant. How can I help you today?"
        );
    }

    #[test]
    fn it_ignores_empty_submissions() -> Result<()> {
        let (tx, mut rx) = mpsc::unbounded_channel::<Action>();
        let mut app_state = AppState::default();

        assert!(!app_state.submit_text("", &tx)?);
        assert!(!app_state.submit_text("   \n  ", &tx)?);

        assert_eq!(app_state.messages.len(), 1);
        assert!(!app_state.waiting_for_reply);
        assert!(rx.try_recv().is_err());

        return Ok(());
    }

    #[test]
    fn it_appends_user_message_and_requests_a_reply() -> Result<()> {
        let (tx, mut rx) = mpsc::unbounded_channel::<Action>();
        let mut app_state = AppState::default();

        assert!(app_state.submit_text("show me a form", &tx)?);

        assert_eq!(app_state.messages.len(), 2);
        assert_eq!(app_state.messages[1].author, Author::User);
        assert!(app_state.waiting_for_reply);

        match rx.blocking_recv().unwrap() {
            Action::AssistantRequest(prompt) => {
                assert_eq!(prompt.text, "show me a form");
            }
            _ => bail!("Wrong enum"),
        }

        return Ok(());
    }
}

mod assistant_replies {
    use super::*;

    #[test]
    fn it_appends_the_reply_and_clears_waiting() {
        let mut app_state = AppState::default();
        app_state.waiting_for_reply = true;

        app_state.handle_assistant_reply(ResponseSpec::new(MessageKind::Text, "Hello!"), 0.0);

        assert_eq!(app_state.messages.len(), 2);
        assert_eq!(app_state.messages[1].author, Author::Assistant);
        assert!(!app_state.waiting_for_reply);
    }

    #[test]
    fn it_advances_progress_on_a_high_roll() {
        let mut app_state = AppState::default();
        app_state.handle_assistant_reply(ResponseSpec::new(MessageKind::Text, "Hello!"), 0.9);
        assert_eq!(app_state.progress.current_step(), 1);
    }

    #[test]
    fn it_holds_progress_on_a_low_roll() {
        let mut app_state = AppState::default();
        app_state.handle_assistant_reply(ResponseSpec::new(MessageKind::Text, "Hello!"), 0.2);
        assert_eq!(app_state.progress.current_step(), 0);
    }
}

mod handle_slash_commands {
    use super::*;

    #[test]
    fn it_breaks_on_quit() -> Result<()> {
        let (tx, _rx) = mpsc::unbounded_channel::<Action>();
        let mut app_state = AppState::default();
        let (should_break, handled) = app_state.handle_slash_commands("/q", &tx)?;

        assert!(should_break);
        assert!(!handled);
        assert!(!app_state.waiting_for_reply);

        return Ok(());
    }

    #[test]
    fn it_requests_help() -> Result<()> {
        let (tx, mut rx) = mpsc::unbounded_channel::<Action>();
        let mut app_state = AppState::default();
        let (should_break, handled) = app_state.handle_slash_commands("/help", &tx)?;

        assert!(!should_break);
        assert!(handled);
        assert!(matches!(rx.blocking_recv().unwrap(), Action::Help()));

        return Ok(());
    }

    #[test]
    fn it_copies_chat() -> Result<()> {
        let (tx, mut rx) = mpsc::unbounded_channel::<Action>();
        let mut app_state = AppState::default();
        let (should_break, handled) = app_state.handle_slash_commands("/copy", &tx)?;

        assert!(!should_break);
        assert!(handled);
        assert!(app_state.waiting_for_reply);

        match rx.blocking_recv().unwrap() {
            Action::CopyMessages(messages) => {
                assert_eq!(messages.len(), 1);
            }
            _ => bail!("Wrong enum"),
        }

        return Ok(());
    }

    #[test]
    fn it_passes_through_plain_text() -> Result<()> {
        let (tx, _rx) = mpsc::unbounded_channel::<Action>();
        let mut app_state = AppState::default();
        let (should_break, handled) = app_state.handle_slash_commands("show me a form", &tx)?;

        assert!(!should_break);
        assert!(!handled);

        return Ok(());
    }
}

mod voice {
    use super::*;

    #[test]
    fn it_toggles_voice_mode_on_and_off() -> Result<()> {
        let (tx, _rx) = mpsc::unbounded_channel::<Action>();
        let mut app_state = AppState::default();

        app_state.toggle_voice(&tx)?;
        assert_eq!(app_state.voice, VoiceState::Idle);

        app_state.toggle_voice(&tx)?;
        assert_eq!(app_state.voice, VoiceState::Off);

        return Ok(());
    }

    #[test]
    fn it_begins_a_capture_from_idle() -> Result<()> {
        let (tx, mut rx) = mpsc::unbounded_channel::<Action>();
        let mut app_state = AppState::default();

        app_state.toggle_voice(&tx)?;
        app_state.begin_voice_capture(&tx)?;

        assert!(app_state.voice.is_recording());
        assert!(matches!(
            rx.blocking_recv().unwrap(),
            Action::VoiceCaptureBegin()
        ));

        return Ok(());
    }

    #[test]
    fn it_does_not_begin_a_capture_when_off() -> Result<()> {
        let (tx, mut rx) = mpsc::unbounded_channel::<Action>();
        let mut app_state = AppState::default();

        app_state.begin_voice_capture(&tx)?;

        assert!(app_state.voice.is_off());
        assert!(rx.try_recv().is_err());

        return Ok(());
    }

    #[test]
    fn it_cancels_a_recording_back_to_idle_without_messages() -> Result<()> {
        let (tx, mut rx) = mpsc::unbounded_channel::<Action>();
        let mut app_state = AppState::default();

        app_state.toggle_voice(&tx)?;
        app_state.begin_voice_capture(&tx)?;
        rx.blocking_recv().unwrap();

        app_state.cancel_voice_capture(&tx)?;

        assert_eq!(app_state.voice, VoiceState::Idle);
        assert!(matches!(
            rx.blocking_recv().unwrap(),
            Action::VoiceCaptureCancel()
        ));
        assert_eq!(app_state.messages.len(), 1);

        return Ok(());
    }

    #[test]
    fn it_cancels_a_recording_when_toggled_off() -> Result<()> {
        let (tx, mut rx) = mpsc::unbounded_channel::<Action>();
        let mut app_state = AppState::default();

        app_state.toggle_voice(&tx)?;
        app_state.begin_voice_capture(&tx)?;
        rx.blocking_recv().unwrap();

        app_state.toggle_voice(&tx)?;

        assert!(app_state.voice.is_off());
        assert!(matches!(
            rx.blocking_recv().unwrap(),
            Action::VoiceCaptureCancel()
        ));

        return Ok(());
    }

    #[test]
    fn it_returns_to_idle_when_a_capture_finishes() {
        let mut app_state = AppState::default();
        app_state.voice = VoiceState::Recording;

        app_state.finish_voice_capture();

        assert_eq!(app_state.voice, VoiceState::Idle);
    }
}
