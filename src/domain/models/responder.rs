use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::mpsc;

use super::Event;

pub struct ResponderPrompt {
    pub text: String,
}

impl ResponderPrompt {
    pub fn new(text: String) -> ResponderPrompt {
        return ResponderPrompt { text };
    }
}

#[async_trait]
pub trait Responder {
    /// Produces the assistant reply for a prompt. The reply is sent through
    /// the channel once the simulated latency elapses, never returned
    /// directly.
    async fn reply<'a>(
        &self,
        prompt: ResponderPrompt,
        tx: &'a mpsc::UnboundedSender<Event>,
    ) -> Result<()>;
}

pub type ResponderBox = Box<dyn Responder + Send + Sync>;
