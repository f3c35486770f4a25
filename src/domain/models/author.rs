use serde_derive::Deserialize;
use serde_derive::Serialize;

use crate::configuration::Config;
use crate::configuration::ConfigKey;

/// Display name for the assistant, static presentation configuration rather
/// than session state.
pub const BOT_NAME: &str = "BatteryBot";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Author {
    User,
    Bot,
}

impl ToString for Author {
    fn to_string(&self) -> String {
        match self {
            Author::User => return Config::get(ConfigKey::Username),
            Author::Bot => return String::from(BOT_NAME),
        }
    }
}
