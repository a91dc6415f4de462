use super::Message;
use super::ResponderPrompt;

pub enum Action {
    AssistantRequest(ResponderPrompt),
    CopyMessages(Vec<Message>),
    Help(),
    VoiceCaptureBegin(),
    VoiceCaptureCancel(),
}
