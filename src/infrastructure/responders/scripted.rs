#[cfg(test)]
#[path = "scripted_test.rs"]
mod tests;

use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::mpsc;
use tokio::time;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::Event;
use crate::domain::models::Responder;
use crate::domain::models::ResponderPrompt;
use crate::domain::services::Classifier;

/// The demo assistant. All intelligence is the keyword classifier; the delay
/// simulates network latency before the reply lands.
pub struct Scripted {
    reply_delay: String,
}

impl Default for Scripted {
    fn default() -> Scripted {
        return Scripted {
            reply_delay: Config::get(ConfigKey::ReplyDelayMs),
        };
    }
}

#[async_trait]
impl Responder for Scripted {
    #[allow(clippy::implicit_return)]
    async fn reply<'a>(
        &self,
        prompt: ResponderPrompt,
        tx: &'a mpsc::UnboundedSender<Event>,
    ) -> Result<()> {
        time::sleep(Duration::from_millis(self.reply_delay.parse::<u64>()?)).await;

        let response = Classifier::classify(&prompt.text);
        tracing::debug!(kind = ?response.kind, "scripted reply");
        tx.send(Event::AssistantReply(response))?;

        return Ok(());
    }
}
