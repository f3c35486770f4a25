#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

use std::env;

use anyhow::Result;
use clap::ArgMatches;
use dashmap::DashMap;
use once_cell::sync::Lazy;
use strum::EnumIter;
use strum::IntoEnumIterator;

static CONFIG: Lazy<DashMap<String, String>> = Lazy::new(DashMap::new);

#[derive(Clone, Copy, Eq, PartialEq, EnumIter, strum::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum ConfigKey {
    BackendHealthCheckTimeout,
    BackendURL,
    Username,
}

pub struct Config {}

impl Config {
    pub fn get(key: ConfigKey) -> String {
        if let Some(val) = CONFIG.get(&key.to_string()) {
            return val.to_string();
        }

        return "".to_string();
    }

    pub fn set(key: ConfigKey, value: &str) {
        CONFIG.insert(key.to_string(), value.to_string());
    }

    pub fn default(key: ConfigKey) -> String {
        if key == ConfigKey::Username {
            let mut user = env::var("USER").unwrap_or_else(|_| return "".to_string());
            if user.is_empty() {
                user = "User".to_string();
            }

            return user;
        }

        let res = match key {
            ConfigKey::BackendHealthCheckTimeout => "1000",
            ConfigKey::BackendURL => "http://127.0.0.1:8000",
            ConfigKey::Username => "",
        };

        return res.to_string();
    }

    pub fn load(matches: &ArgMatches) -> Result<()> {
        for key in ConfigKey::iter() {
            Config::set(key, &Config::default(key));
        }

        for key in ConfigKey::iter() {
            if let Some(val) = matches.get_one::<String>(&key.to_string()) {
                if !val.is_empty() {
                    Config::set(key, val);
                }
            }
        }

        return Ok(());
    }
}
