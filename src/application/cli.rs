use std::io;
use std::path;

use anyhow::bail;
use anyhow::Result;
use clap::builder::PossibleValuesParser;
use clap::value_parser;
use clap::Arg;
use clap::ArgAction;
use clap::Command;
use clap_complete::generate;
use clap_complete::Generator;
use clap_complete::Shell;
use dialoguer::theme::ColorfulTheme;
use dialoguer::Select;
use strum::VariantNames;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use yansi::Paint;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::Journey;
use crate::domain::models::JourneyCatalog;
use crate::domain::models::JourneyName;
use crate::domain::services::actions::help_text;

fn print_completions<G: Generator>(gen: G, cmd: &mut Command) {
    generate(gen, cmd, cmd.get_name().to_string(), &mut io::stdout());
    std::process::exit(0);
}

fn format_journey(journey: &Journey) -> String {
    return format!(
        "{} {} ({}) - {}",
        journey.icon, journey.title, journey.name, journey.description
    );
}

fn print_journeys_list(as_json: bool) -> Result<()> {
    if as_json {
        println!("{}", serde_json::to_string_pretty(JourneyCatalog::all())?);
        return Ok(());
    }

    let journeys = JourneyCatalog::all()
        .iter()
        .map(|journey| {
            return format!(
                "- {}, steps: {}",
                format_journey(journey),
                journey.steps.join(" > ")
            );
        })
        .collect::<Vec<String>>();

    println!("{}", journeys.join("\n"));
    return Ok(());
}

async fn create_config_file() -> Result<()> {
    let config_file_path_str = Config::default(ConfigKey::ConfigFile);
    let config_file_path = path::PathBuf::from(&config_file_path_str);
    if config_file_path.exists() {
        bail!(format!(
            "Config file already exists at {config_file_path_str}"
        ));
    }

    if !config_file_path.parent().unwrap().exists() {
        fs::create_dir_all(config_file_path.parent().unwrap()).await?;
    }

    let mut file = fs::File::create(config_file_path.clone()).await?;
    file.write_all(Config::serialize_default(build()).as_bytes())
        .await?;

    let config_path_display = config_file_path.as_os_str().to_str().unwrap();
    println!("Created default config file at {config_path_display}");
    return Ok(());
}

fn select_journey_interactive() -> Result<()> {
    let journey_options = JourneyCatalog::all()
        .iter()
        .map(|journey| {
            return format_journey(journey);
        })
        .collect::<Vec<String>>();

    let idx_res = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Which journey would you like to start?")
        .default(0)
        .items(&journey_options)
        .interact_opt()?;

    if let Some(idx) = idx_res {
        let name = JourneyCatalog::all()[idx].name.to_string();
        Config::set(ConfigKey::Journey, &name);
        return Ok(());
    }

    bail!("No journey selected.")
}

fn subcommand_completions() -> Command {
    return Command::new("completions")
        .about("Generates shell completions.")
        .arg(
            clap::Arg::new("shell")
                .short('s')
                .long("shell")
                .help("Which shell to generate completions for.")
                .action(ArgAction::Set)
                .value_parser(value_parser!(Shell))
                .required(true),
        );
}

fn subcommand_config() -> Command {
    return Command::new("config")
        .about("Configuration file options.")
        .subcommand(
            Command::new("create").about("Saves the default config file to the configuration file path. This command will fail if the file exists already.")
        )
        .subcommand(
            Command::new("default").about("Outputs the default configuration file to stdout.")
        )
        .subcommand(
            Command::new("path").about("Returns the default path for the configuration file.")
        );
}

fn arg_journey() -> Arg {
    return Arg::new(ConfigKey::Journey.to_string())
        .short('j')
        .long(ConfigKey::Journey.to_string())
        .env("SOJOURN_JOURNEY")
        .num_args(1)
        .help("The journey persona to chat with. Omit to pick one interactively.")
        .value_parser(PossibleValuesParser::new(JourneyName::VARIANTS));
}

fn arg_username() -> Arg {
    return Arg::new(ConfigKey::Username.to_string())
        .short('u')
        .long(ConfigKey::Username.to_string())
        .env("SOJOURN_USERNAME")
        .num_args(1)
        .help("Your user name displayed in all chat bubbles.");
}

fn arg_reply_delay_ms() -> Arg {
    return Arg::new(ConfigKey::ReplyDelayMs.to_string())
        .long(ConfigKey::ReplyDelayMs.to_string())
        .env("SOJOURN_REPLY_DELAY_MS")
        .num_args(1)
        .help(format!(
            "Time to wait in milliseconds before the assistant reply lands. [default: {}]",
            Config::default(ConfigKey::ReplyDelayMs)
        ));
}

fn arg_voice_capture_ms() -> Arg {
    return Arg::new(ConfigKey::VoiceCaptureMs.to_string())
        .long(ConfigKey::VoiceCaptureMs.to_string())
        .env("SOJOURN_VOICE_CAPTURE_MS")
        .num_args(1)
        .help(format!(
            "How long a simulated voice capture records for, in milliseconds. [default: {}]",
            Config::default(ConfigKey::VoiceCaptureMs)
        ));
}

fn arg_voice_submit_delay_ms() -> Arg {
    return Arg::new(ConfigKey::VoiceSubmitDelayMs.to_string())
        .long(ConfigKey::VoiceSubmitDelayMs.to_string())
        .env("SOJOURN_VOICE_SUBMIT_DELAY_MS")
        .num_args(1)
        .help(format!(
            "Pause in milliseconds between a voice transcription and its submission. [default: {}]",
            Config::default(ConfigKey::VoiceSubmitDelayMs)
        ));
}

pub fn build() -> Command {
    let commands_text = help_text()
        .split('\n')
        .map(|line| {
            if line.starts_with('-') {
                return format!("  {line}");
            }
            if line.starts_with("COMMANDS:")
                || line.starts_with("HOTKEYS:")
                || line.starts_with("WIDGET TRIGGERS:")
            {
                return Paint::new(format!("CHAT {line}"))
                    .underline()
                    .bold()
                    .to_string();
            }
            return line.to_string();
        })
        .collect::<Vec<String>>()
        .join("\n");

    let about = format!(
        "{}\n\nVersion: {}\nCommit: {}",
        env!("CARGO_PKG_DESCRIPTION"),
        env!("CARGO_PKG_VERSION"),
        env!("VERGEN_GIT_DESCRIBE")
    );

    return Command::new("sojourn")
        .about(about)
        .version(env!("CARGO_PKG_VERSION"))
        .after_help(commands_text)
        .arg_required_else_help(false)
        .subcommand(subcommand_completions())
        .subcommand(subcommand_config())
        .subcommand(
            Command::new("journeys")
                .about("Lists all journey personas with their progress steps.")
                .arg(
                    clap::Arg::new("json")
                        .long("json")
                        .help("Output the journey catalog as JSON.")
                        .num_args(0),
                ),
        )
        .subcommand(Command::new("manpages").about("Generates manpages and outputs to stdout."))
        .arg(arg_journey())
        .arg(arg_username())
        .arg(arg_reply_delay_ms())
        .arg(arg_voice_capture_ms())
        .arg(arg_voice_submit_delay_ms())
        .arg(
            Arg::new(ConfigKey::ConfigFile.to_string())
                .short('c')
                .long(ConfigKey::ConfigFile.to_string())
                .env("SOJOURN_CONFIG_FILE")
                .num_args(1)
                .help(format!(
                    "Path to configuration file [default: {}]",
                    Config::default(ConfigKey::ConfigFile)
                ))
                .global(true),
        );
}

pub async fn parse() -> Result<bool> {
    let matches = build().get_matches();

    match matches.subcommand() {
        Some(("completions", subcmd_matches)) => {
            if let Some(completions) = subcmd_matches.get_one::<Shell>("shell").copied() {
                let mut app = build();
                print_completions(completions, &mut app);
            }
        }
        Some(("config", subcmd_matches)) => match subcmd_matches.subcommand() {
            Some(("create", _)) => {
                create_config_file().await?;
                return Ok(false);
            }
            Some(("default", _)) => {
                println!("{}", Config::serialize_default(build()));
                return Ok(false);
            }
            Some(("path", _)) => {
                println!("{}", Config::default(ConfigKey::ConfigFile));
                return Ok(false);
            }
            _ => {
                subcommand_config().print_long_help()?;
                return Ok(false);
            }
        },
        Some(("journeys", subcmd_matches)) => {
            print_journeys_list(subcmd_matches.get_one::<bool>("json").is_some())?;
            return Ok(false);
        }
        Some(("manpages", _)) => {
            clap_mangen::Man::new(build()).render(&mut io::stdout())?;
            return Ok(false);
        }
        _ => {
            Config::load(build(), vec![&matches]).await?;

            if Config::get(ConfigKey::Journey).is_empty() {
                select_journey_interactive()?;
            }

            // Unknown journey identifiers are a hard error rather than a
            // blank-field fallback.
            JourneyName::parse(&Config::get(ConfigKey::Journey))?;
        }
    }

    return Ok(true);
}
