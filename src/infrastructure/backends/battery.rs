#[cfg(test)]
#[path = "battery_test.rs"]
mod tests;

use std::time::Duration;

use anyhow::bail;
use anyhow::Result;
use async_trait::async_trait;
use serde_derive::Deserialize;
use serde_derive::Serialize;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::Backend;
use crate::domain::models::ChatPrompt;
use crate::domain::models::ChatReply;

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct ChatInputResponse {
    pub response: String,
    pub sources: Option<Vec<String>>,
}

pub struct BatteryQa {
    url: String,
    timeout: String,
}

impl Default for BatteryQa {
    fn default() -> BatteryQa {
        return BatteryQa {
            url: Config::get(ConfigKey::BackendURL),
            timeout: Config::get(ConfigKey::BackendHealthCheckTimeout),
        };
    }
}

#[async_trait]
impl Backend for BatteryQa {
    #[allow(clippy::implicit_return)]
    async fn health_check(&self) -> Result<()> {
        let res = reqwest::Client::new()
            .get(&self.url)
            .timeout(Duration::from_millis(self.timeout.parse::<u64>()?))
            .send()
            .await;

        if res.is_err() {
            tracing::error!(error = ?res.unwrap_err(), "Battery backend is not running");
            bail!("Battery backend is not running");
        }

        let res = res.unwrap();
        if res.status() != 200 {
            tracing::error!(
                status = res.status().as_u16(),
                "Battery backend health check failed"
            );
            bail!("Battery backend health check failed");
        }

        return Ok(());
    }

    #[allow(clippy::implicit_return)]
    async fn ask(&self, prompt: &ChatPrompt) -> Result<ChatReply> {
        let res = reqwest::Client::new()
            .post(format!("{url}/chat-input", url = self.url))
            .json(prompt)
            .send()
            .await?;

        if !res.status().is_success() {
            tracing::error!(
                status = res.status().as_u16(),
                "Failed to make chat request to the battery backend"
            );
            bail!("Failed to make chat request to the battery backend");
        }

        let body = res.json::<ChatInputResponse>().await?;
        tracing::debug!(body = ?body, "Chat response");

        return Ok(ChatReply {
            text: body.response,
            sources: body.sources.unwrap_or_default(),
        });
    }
}
