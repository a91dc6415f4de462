use tui_textarea::Input;

use super::Message;
use super::ResponseSpec;

pub enum Event {
    AssistantReply(ResponseSpec),
    SojournMessage(Message),
    VoiceTranscription(String),
    VoiceSubmit(),
    KeyboardCharInput(Input),
    KeyboardCTRLC(),
    KeyboardCTRLV(),
    KeyboardEnter(),
    KeyboardEsc(),
    KeyboardPaste(String),
    UIScrollDown(),
    UIScrollUp(),
    UIScrollPageDown(),
    UIScrollPageUp(),
    UITick(),
}
