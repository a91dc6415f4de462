use anyhow::bail;
use anyhow::Result;
use tokio::sync::mpsc;

use super::Scripted;
use crate::domain::models::Event;
use crate::domain::models::MessageKind;
use crate::domain::models::Payload;
use crate::domain::models::Responder;
use crate::domain::models::ResponderPrompt;
use crate::domain::models::ResponseSpec;

impl Scripted {
    fn with_delay(reply_delay: &str) -> Scripted {
        return Scripted {
            reply_delay: reply_delay.to_string(),
        };
    }
}

fn to_res(event: Option<Event>) -> Result<ResponseSpec> {
    let res = match event.unwrap() {
        Event::AssistantReply(res) => res,
        _ => bail!("Wrong type from recv"),
    };

    return Ok(res);
}

#[tokio::test]
async fn it_replies_with_a_classified_widget() -> Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel::<Event>();

    let responder = Scripted::with_delay("0");
    responder
        .reply(ResponderPrompt::new("show me a form".to_string()), &tx)
        .await?;

    let res = to_res(rx.recv().await)?;
    assert_eq!(res.kind, MessageKind::Form);
    assert!(matches!(res.payload, Some(Payload::Form(_))));

    return Ok(());
}

#[tokio::test]
async fn it_replies_with_a_text_echo() -> Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel::<Event>();

    let responder = Scripted::with_delay("0");
    responder
        .reply(ResponderPrompt::new("hello there".to_string()), &tx)
        .await?;

    let res = to_res(rx.recv().await)?;
    assert_eq!(res.kind, MessageKind::Text);
    assert_eq!(
        res.text,
        "I understand you're asking about hello there. How can I help you further with this?"
    );

    return Ok(());
}

#[tokio::test]
async fn it_fails_on_unparsable_delay() {
    let (tx, _rx) = mpsc::unbounded_channel::<Event>();

    let responder = Scripted::with_delay("not-a-number");
    let res = responder
        .reply(ResponderPrompt::new("hi".to_string()), &tx)
        .await;

    assert!(res.is_err());
}
