#[cfg(test)]
#[path = "google_test.rs"]
mod tests;

use anyhow::bail;
use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::Language;
use crate::domain::models::Translator;

/// Client for the public Google Translate web endpoint.
pub struct GoogleTranslate {
    url: String,
}

impl Default for GoogleTranslate {
    fn default() -> GoogleTranslate {
        return GoogleTranslate {
            url: Config::get_url(ConfigKey::TranslateURL),
        };
    }
}

/// The reply is a nested array, the first entry lists translated segments
/// and each segment starts with its translated text.
fn parse_segments(body: &Value) -> Option<String> {
    let segments = body.get(0)?.as_array()?;
    let text = segments
        .iter()
        .filter_map(|segment| return segment.get(0)?.as_str())
        .collect::<Vec<&str>>()
        .join("");

    if text.is_empty() {
        return None;
    }

    return Some(text);
}

#[async_trait]
impl Translator for GoogleTranslate {
    #[allow(clippy::implicit_return)]
    async fn translate(&self, text: &str, destination: Language) -> Result<String> {
        if text.trim().is_empty() {
            return Ok(text.to_string());
        }

        let destination_code = destination.to_string();
        let res = reqwest::Client::new()
            .get(format!("{url}/translate_a/single", url = self.url))
            .query(&[
                ("client", "gtx"),
                ("sl", "auto"),
                ("tl", destination_code.as_str()),
                ("dt", "t"),
                ("q", text),
            ])
            .send()
            .await?;

        if !res.status().is_success() {
            tracing::error!(
                status = res.status().as_u16(),
                destination = %destination,
                "Failed to make translation request"
            );
            bail!(format!(
                "Failed to translate to {}, status {}",
                destination.display_name(),
                res.status().as_u16()
            ));
        }

        let body = res.json::<Value>().await?;
        tracing::debug!(body = ?body, "Translation response");

        if let Some(translated) = parse_segments(&body) {
            return Ok(translated);
        }

        bail!("Translation response did not contain any text");
    }
}
