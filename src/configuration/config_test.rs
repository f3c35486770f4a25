use anyhow::Result;

use super::Config;
use super::ConfigKey;
use crate::application::cli;

#[test]
fn it_serializes_keys_to_kebab_case() {
    assert_eq!(ConfigKey::BackendURL.to_string(), "backend-url");
    assert_eq!(
        ConfigKey::BackendHealthCheckTimeout.to_string(),
        "backend-health-check-timeout"
    );
    assert_eq!(ConfigKey::Username.to_string(), "username");
}

#[test]
fn it_returns_defaults() {
    assert_eq!(
        Config::default(ConfigKey::BackendURL),
        "http://127.0.0.1:8000"
    );
    assert_eq!(Config::default(ConfigKey::BackendHealthCheckTimeout), "1000");
    assert!(!Config::default(ConfigKey::Username).is_empty());
}

// Config is backed by a process-wide map, so defaults, overrides, and reads
// are exercised in a single test.
#[test]
fn it_loads_defaults_and_overrides() -> Result<()> {
    let matches = cli::build().get_matches_from(vec![
        "voltchat",
        "--backend-url",
        "http://localhost:9999",
    ]);
    Config::load(&matches)?;

    assert_eq!(Config::get(ConfigKey::BackendURL), "http://localhost:9999");
    assert_eq!(Config::get(ConfigKey::BackendHealthCheckTimeout), "1000");

    Config::set(ConfigKey::BackendURL, "http://localhost:8888");
    assert_eq!(Config::get(ConfigKey::BackendURL), "http://localhost:8888");

    return Ok(());
}
