use serde_derive::Deserialize;
use serde_derive::Serialize;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::JourneyCatalog;
use crate::domain::models::JourneyName;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Author {
    User,
    Sojourn,
    Assistant,
}

impl ToString for Author {
    fn to_string(&self) -> String {
        match self {
            Author::User => return Config::get(ConfigKey::Username),
            Author::Sojourn => return String::from("Sojourn"),
            Author::Assistant => {
                if let Ok(name) = JourneyName::parse(&Config::get(ConfigKey::Journey)) {
                    return JourneyCatalog::get(name).title.to_string();
                }

                return String::from("Assistant");
            }
        }
    }
}
