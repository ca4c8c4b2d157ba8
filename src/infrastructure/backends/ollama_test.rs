use anyhow::Result;
use mockito::Matcher;

use super::CompletionResponse;
use super::Ollama;
use crate::domain::models::Backend;

impl Ollama {
    fn with_url(url: String) -> Ollama {
        return Ollama {
            url,
            model: "llama2".to_string(),
            timeout: "200".to_string(),
        };
    }
}

#[tokio::test]
async fn it_successfully_health_checks() {
    let mut server = mockito::Server::new();
    let mock = server.mock("GET", "/").with_status(200).create();

    let backend = Ollama::with_url(server.url());
    let res = backend.health_check().await;

    assert!(res.is_ok());
    mock.assert();
}

#[tokio::test]
async fn it_fails_health_checks() {
    let mut server = mockito::Server::new();
    let mock = server.mock("GET", "/").with_status(500).create();

    let backend = Ollama::with_url(server.url());
    let res = backend.health_check().await;

    assert!(res.is_err());
    mock.assert();
}

#[tokio::test]
async fn it_gets_completions() -> Result<()> {
    let body = serde_json::to_string(&CompletionResponse {
        response: " Hello World ".to_string(),
        done: true,
    })?;

    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/api/generate")
        .match_body(Matcher::Json(serde_json::json!({
            "model": "llama2",
            "prompt": "Say hi to the world",
            "stream": false,
        })))
        .with_status(200)
        .with_body(body)
        .create();

    let backend = Ollama::with_url(server.url());
    let res = backend.get_completion("Say hi to the world").await?;

    mock.assert();
    assert_eq!(res, "Hello World");

    return Ok(());
}

#[tokio::test]
async fn it_fails_completions_on_error_status() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/api/generate")
        .with_status(404)
        .with_body(r#"{"error":"model 'llama2' not found"}"#)
        .create();

    let backend = Ollama::with_url(server.url());
    let res = backend.get_completion("Hello").await;

    mock.assert();
    assert!(res.is_err());
}
