use anyhow::Result;

use super::Config;
use super::ConfigKey;
use crate::application::cli;

#[test]
fn it_serializes_to_valid_toml() {
    let res = Config::serialize_default(cli::build());
    let toml_res = res.parse::<toml_edit::Document>();
    assert!(toml_res.is_ok());

    assert!(res.contains("# journey = \"\""));
    assert!(res.contains("reply-delay-ms = 1000"));
    assert!(res.contains("voice-capture-ms = 3000"));
    assert!(res.contains("voice-submit-delay-ms = 500"));
}

#[test]
fn it_has_simulation_defaults() {
    assert_eq!(Config::default(ConfigKey::ReplyDelayMs), "1000");
    assert_eq!(Config::default(ConfigKey::VoiceCaptureMs), "3000");
    assert_eq!(Config::default(ConfigKey::VoiceSubmitDelayMs), "500");
    assert_eq!(Config::default(ConfigKey::Journey), "");
}

#[tokio::test]
async fn it_loads_config_from_file() -> Result<()> {
    let matches = cli::build().try_get_matches_from(vec!["sojourn", "-c", "./config.example.toml"])?;
    Config::load(cli::build(), vec![&matches]).await?;

    return Ok(());
}

#[tokio::test]
async fn it_fails_to_loads_config_from_file() -> Result<()> {
    let matches =
        cli::build().try_get_matches_from(vec!["sojourn", "-c", "./test/bad-config.toml"])?;
    let res = Config::load(cli::build(), vec![&matches]).await;
    assert!(res.is_err());
    return Ok(());
}

#[tokio::test]
async fn it_fails_on_non_integer_delays() -> Result<()> {
    let matches = cli::build().try_get_matches_from(vec![
        "sojourn",
        "--reply-delay-ms",
        "about-a-second",
    ])?;
    let res = Config::load(cli::build(), vec![&matches]).await;
    assert!(res.is_err());
    return Ok(());
}
