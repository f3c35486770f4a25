use anyhow::Result;
use clap::Arg;
use clap::Command;

use crate::configuration::Config;
use crate::configuration::ConfigKey;

pub fn build() -> Command {
    return Command::new("voltchat")
        .about("Terminal UI to chat with an EV battery question-answering backend")
        .version(env!("CARGO_PKG_VERSION"))
        .arg(
            Arg::new("backend-url")
                .long("backend-url")
                .env("VOLTCHAT_BACKEND_URL")
                .num_args(1)
                .help(format!(
                    "The base URL of the battery question-answering backend. [default: {}]",
                    Config::default(ConfigKey::BackendURL)
                )),
        )
        .arg(
            Arg::new("backend-health-check-timeout")
                .long("backend-health-check-timeout")
                .env("VOLTCHAT_BACKEND_HEALTH_CHECK_TIMEOUT")
                .num_args(1)
                .help(format!(
                    "Time in milliseconds to wait for the startup health check. [default: {}]",
                    Config::default(ConfigKey::BackendHealthCheckTimeout)
                )),
        )
        .arg(
            Arg::new("username")
                .long("username")
                .env("VOLTCHAT_USERNAME")
                .num_args(1)
                .help("The name displayed for your messages in the transcript. [default: $USER]"),
        );
}

pub fn parse() -> Result<()> {
    let matches = build().get_matches();
    Config::load(&matches)?;

    return Ok(());
}
