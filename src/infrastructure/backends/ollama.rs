#[cfg(test)]
#[path = "ollama_test.rs"]
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

pub const DEFAULT_MODEL: &str = "llama2";

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct CompletionRequest {
    model: String,
    prompt: String,
    stream: bool,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct CompletionResponse {
    pub response: String,
    pub done: bool,
}

pub struct Ollama {
    url: String,
    model: String,
    timeout: String,
}

impl Default for Ollama {
    fn default() -> Ollama {
        let mut model = Config::get(ConfigKey::Model);
        if model.is_empty() {
            model = DEFAULT_MODEL.to_string();
        }

        return Ollama {
            url: Config::get_url(ConfigKey::OllamaURL),
            model,
            timeout: Config::get(ConfigKey::BackendHealthCheckTimeout),
        };
    }
}

#[async_trait]
impl Backend for Ollama {
    fn name(&self) -> BackendName {
        return BackendName::Ollama;
    }

    #[allow(clippy::implicit_return)]
    async fn health_check(&self) -> Result<()> {
        let res = reqwest::Client::new()
            .get(&self.url)
            .timeout(Duration::from_millis(self.timeout.parse::<u64>()?))
            .send()
            .await;

        let res = match res {
            Ok(res) => res,
            Err(err) => {
                tracing::error!(error = ?err, "Ollama is not running");
                bail!("Ollama is not running");
            }
        };

        if res.status() != 200 {
            tracing::error!(status = res.status().as_u16(), "Ollama health check failed");
            bail!("Ollama health check failed");
        }

        return Ok(());
    }

    #[allow(clippy::implicit_return)]
    async fn get_completion(&self, prompt: &str) -> Result<String> {
        let req = CompletionRequest {
            model: self.model.to_string(),
            prompt: prompt.to_string(),
            stream: false,
        };

        let res = reqwest::Client::new()
            .post(format!("{url}/api/generate", url = self.url))
            .json(&req)
            .send()
            .await?;

        if !res.status().is_success() {
            tracing::error!(
                status = res.status().as_u16(),
                "Failed to make completion request to Ollama"
            );
            bail!(format!(
                "Failed to make completion request to Ollama, status {}",
                res.status().as_u16()
            ));
        }

        let ores = res.json::<CompletionResponse>().await?;
        tracing::debug!(body = ?ores, "Completion response");

        if !ores.done {
            bail!("Ollama returned an unfinished completion");
        }

        return Ok(ores.response.trim().to_string());
    }
}
