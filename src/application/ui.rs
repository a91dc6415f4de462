use std::io;

use anyhow::Result;
use crossterm::cursor;
use crossterm::event::DisableMouseCapture;
use crossterm::event::EnableMouseCapture;
use crossterm::terminal::disable_raw_mode;
use crossterm::terminal::enable_raw_mode;
use crossterm::terminal::EnterAlternateScreen;
use crossterm::terminal::LeaveAlternateScreen;
use rand::Rng;
use ratatui::backend::CrosstermBackend;
use ratatui::prelude::*;
use ratatui::widgets::Block;
use ratatui::widgets::BorderType;
use ratatui::widgets::Borders;
use ratatui::widgets::Padding;
use ratatui::widgets::Paragraph;
use ratatui::widgets::Scrollbar;
use ratatui::widgets::ScrollbarOrientation;
use ratatui::Terminal;
use tokio::sync::mpsc;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::Action;
use crate::domain::models::Event;
use crate::domain::models::JourneyName;
use crate::domain::models::Loading;
use crate::domain::models::TextArea;
use crate::domain::services::events::EventsService;
use crate::domain::services::AppState;

fn render_status_line<B: Backend>(frame: &mut Frame<B>, rect: Rect, app_state: &AppState<'_>) {
    let status = format!(
        "{} {}  Step {}/{}: {}  Try: carousel, rating, form, image, quick replies, date picker, file upload, journey",
        app_state.journey.icon,
        app_state.journey.title,
        app_state.progress.current_step() + 1,
        app_state.progress.total_steps(),
        app_state.progress.step_label(),
    );

    frame.render_widget(
        Paragraph::new(status).style(Style {
            fg: Some(Color::DarkGray),
            ..Style::default()
        }),
        rect,
    );
}

fn render_voice_overlay<B: Backend>(frame: &mut Frame<B>, rect: Rect, app_state: &AppState<'_>) {
    let mut status = "Press Enter to start speaking";
    let mut hint = "Your voice will be transcribed and sent as a message. CTRL+V leaves voice mode.";
    if app_state.voice.is_recording() {
        status = "Listening...";
        hint = "Your message will be sent automatically when the capture completes. ESC cancels.";
    }

    let lines = vec![
        Line::from(""),
        Line::from(format!(
            "{} {}",
            app_state.journey.icon, app_state.journey.title
        )),
        Line::from(""),
        Line::from(status),
        Line::from(""),
        Line::from(hint),
    ];

    frame.render_widget(
        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .title("Voice mode")
                    .padding(Padding::new(1, 1, 0, 0)),
            )
            .alignment(Alignment::Center),
        rect,
    );
}

fn submit(
    app_state: &mut AppState<'_>,
    textarea: &mut tui_textarea::TextArea<'_>,
    tx: &mpsc::UnboundedSender<Action>,
) -> Result<bool> {
    let input_str = textarea.lines().join("\n");
    if input_str.trim().is_empty() {
        return Ok(false);
    }

    let (should_break, handled) = app_state.handle_slash_commands(&input_str, tx)?;
    if should_break {
        return Ok(true);
    }

    if !handled && !app_state.submit_text(&input_str, tx)? {
        return Ok(false);
    }

    *textarea = TextArea::default();
    return Ok(false);
}

async fn start_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app_state: &mut AppState<'_>,
    tx: mpsc::UnboundedSender<Action>,
    events: &mut EventsService,
) -> Result<()> {
    let mut textarea = TextArea::default();
    let loading = Loading::default();

    #[cfg(feature = "dev")]
    {
        let test_str = "Show me a carousel of options";
        for char in test_str.chars() {
            textarea.input(tui_textarea::Input {
                key: tui_textarea::Key::Char(char),
                ctrl: false,
                alt: false,
            });
        }
    }

    loop {
        terminal.draw(|frame| {
            let layout = Layout::default()
                .direction(Direction::Vertical)
                .constraints(vec![
                    Constraint::Min(1),
                    Constraint::Max(1),
                    Constraint::Max(4),
                ])
                .split(frame.size());

            if layout[0].width != app_state.last_known_width
                || layout[0].height != app_state.last_known_height
            {
                app_state.set_rect(layout[0]);
            }

            if app_state.voice.is_off() {
                app_state
                    .bubble_list
                    .render(frame, layout[0], app_state.scroll.position);
                frame.render_stateful_widget(
                    Scrollbar::new(ScrollbarOrientation::VerticalRight),
                    layout[0].inner(&Margin {
                        vertical: 1,
                        horizontal: 0,
                    }),
                    &mut app_state.scroll.scrollbar_state,
                );
            } else {
                render_voice_overlay(frame, layout[0], app_state);
            }

            render_status_line(frame, layout[1], app_state);

            if app_state.waiting_for_reply {
                loading.render(frame, layout[2]);
            } else {
                frame.render_widget(textarea.widget(), layout[2]);
            }
        })?;

        match events.next().await? {
            Event::AssistantReply(response) => {
                let roll = rand::thread_rng().gen::<f64>();
                app_state.handle_assistant_reply(response, roll);
            }
            Event::SojournMessage(message) => {
                app_state.add_message(message);
                app_state.waiting_for_reply = false;
            }
            Event::VoiceTranscription(phrase) => {
                app_state.finish_voice_capture();
                textarea = TextArea::default();
                textarea.insert_str(&phrase);
            }
            Event::VoiceSubmit() => {
                if !app_state.voice.is_off() {
                    app_state.toggle_voice(&tx)?;
                    if !app_state.waiting_for_reply && submit(app_state, &mut textarea, &tx)? {
                        break;
                    }
                }
            }
            Event::KeyboardCTRLC() => {
                break;
            }
            Event::KeyboardCTRLV() => {
                app_state.toggle_voice(&tx)?;
            }
            Event::KeyboardEsc() => {
                if app_state.voice.is_recording() {
                    app_state.cancel_voice_capture(&tx)?;
                } else if !app_state.voice.is_off() {
                    app_state.toggle_voice(&tx)?;
                }
            }
            Event::KeyboardEnter() => {
                if !app_state.voice.is_off() {
                    app_state.begin_voice_capture(&tx)?;
                } else if !app_state.waiting_for_reply && submit(app_state, &mut textarea, &tx)? {
                    break;
                }
            }
            Event::KeyboardCharInput(input) => {
                if app_state.voice.is_off() && !app_state.waiting_for_reply {
                    textarea.input(input);
                }
            }
            Event::KeyboardPaste(text) => {
                if app_state.voice.is_off() && !app_state.waiting_for_reply {
                    textarea.insert_str(&text.replace('\r', "\n"));
                }
            }
            Event::UIScrollDown() => {
                app_state.scroll.down();
            }
            Event::UIScrollUp() => {
                app_state.scroll.up();
            }
            Event::UIScrollPageDown() => {
                app_state.scroll.down_page();
            }
            Event::UIScrollPageUp() => {
                app_state.scroll.up_page();
            }
            Event::UITick() => (),
        }
    }

    return Ok(());
}

pub fn destruct_terminal_for_panic() {
    disable_raw_mode().unwrap();
    crossterm::execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture).unwrap();
    crossterm::execute!(io::stdout(), cursor::Show).unwrap();
}

pub async fn start(
    tx: mpsc::UnboundedSender<Action>,
    rx: mpsc::UnboundedReceiver<Event>,
) -> Result<()> {
    let journey_name = JourneyName::parse(&Config::get(ConfigKey::Journey))?;

    let stdout = io::stdout();
    let mut stdout = stdout.lock();

    enable_raw_mode()?;
    crossterm::execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let term_backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(term_backend)?;

    let mut app_state = AppState::new(journey_name);
    let mut events = EventsService::new(rx);

    start_loop(&mut terminal, &mut app_state, tx, &mut events).await?;

    disable_raw_mode()?;
    crossterm::execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    return Ok(());
}
