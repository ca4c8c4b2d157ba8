#[cfg(test)]
#[path = "openai_test.rs"]
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
use crate::domain::models::BackendName;

pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo-instruct";
const OFFICIAL_URL: &str = "https://api.openai.com";

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
struct CompletionRequest {
    model: String,
    prompt: String,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct CompletionChoiceResponse {
    text: String,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct CompletionResponse {
    choices: Vec<CompletionChoiceResponse>,
}

pub struct OpenAI {
    url: String,
    token: String,
    model: String,
    timeout: String,
}

impl Default for OpenAI {
    fn default() -> OpenAI {
        let mut model = Config::get(ConfigKey::Model);
        if model.is_empty() {
            model = DEFAULT_MODEL.to_string();
        }

        return OpenAI {
            url: Config::get_url(ConfigKey::OpenAiURL),
            token: Config::get(ConfigKey::OpenAiToken),
            model,
            timeout: Config::get(ConfigKey::BackendHealthCheckTimeout),
        };
    }
}

#[async_trait]
impl Backend for OpenAI {
    fn name(&self) -> BackendName {
        return BackendName::OpenAI;
    }

    #[allow(clippy::implicit_return)]
    async fn health_check(&self) -> Result<()> {
        if self.url.is_empty() {
            bail!("OpenAI URL is not defined");
        }
        if self.token.is_empty() {
            bail!("OpenAI token is not defined, set it with --openai-token or OPENAI_API_KEY");
        }

        // The official API answers its index with a 404 or a 418, so only
        // proxies get probed.
        if self.url == OFFICIAL_URL {
            return Ok(());
        }

        let res = reqwest::Client::new()
            .get(&self.url)
            .timeout(Duration::from_millis(self.timeout.parse::<u64>()?))
            .send()
            .await;

        let res = match res {
            Ok(res) => res,
            Err(err) => {
                tracing::error!(error = ?err, "OpenAI is not reachable");
                bail!("OpenAI is not reachable");
            }
        };

        let status = res.status().as_u16();
        if status >= 400 && status != 404 && status != 418 {
            tracing::error!(status = status, "OpenAI health check failed");
            bail!("OpenAI health check failed");
        }

        return Ok(());
    }

    #[allow(clippy::implicit_return)]
    async fn get_completion(&self, prompt: &str) -> Result<String> {
        let req = CompletionRequest {
            model: self.model.to_string(),
            prompt: prompt.to_string(),
            max_tokens: 256,
            temperature: 0.7,
        };

        let res = reqwest::Client::new()
            .post(format!("{url}/v1/completions", url = self.url))
            .header("Authorization", format!("Bearer {}", self.token))
            .json(&req)
            .send()
            .await?;

        if !res.status().is_success() {
            tracing::error!(
                status = res.status().as_u16(),
                "Failed to make completion request to OpenAI"
            );
            bail!(format!(
                "Failed to make completion request to OpenAI, status {}",
                res.status().as_u16()
            ));
        }

        let ores = res.json::<CompletionResponse>().await?;
        tracing::debug!(body = ?ores, "Completion response");

        if let Some(choice) = ores.choices.first() {
            return Ok(choice.text.trim().to_string());
        }

        bail!("OpenAI returned no completion choices");
    }
}
