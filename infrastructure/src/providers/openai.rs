//! OpenAI-compatible chat completions gateway
//!
//! Works against any server exposing `POST {base_url}/chat/completions`
//! (OpenAI, Ollama, llama.cpp, vLLM...). Every call is a single user message;
//! the first choice's message content is returned.
//!
//! - Bearer auth only when an API key is configured
//! - Connect errors, timeouts and HTTP 429/502/503/504 are retried with
//!   exponential backoff (1s, 2s, 4s...) up to `max_attempts`
//! - Other 4xx/5xx and malformed bodies fail immediately

use crate::config::FileProviderConfig;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use taskmate_application::{GatewayError, LlmGateway};
use tracing::{debug, warn};

const DEFAULT_INITIAL_BACKOFF: Duration = Duration::from_secs(1);

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Gateway speaking the OpenAI chat completions protocol
pub struct OpenAiCompatibleGateway {
    client: reqwest::Client,
    endpoint: String,
    model: String,
    api_key: Option<String>,
    max_attempts: u32,
    initial_backoff: Duration,
}

impl OpenAiCompatibleGateway {
    pub fn new(
        base_url: &str,
        model: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| GatewayError::NotConfigured(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: format!("{}/chat/completions", base_url.trim_end_matches('/')),
            model: model.into(),
            api_key: None,
            max_attempts: 3,
            initial_backoff: DEFAULT_INITIAL_BACKOFF,
        })
    }

    /// Build from the `[provider]` config section.
    pub fn from_config(config: &FileProviderConfig) -> Result<Self, GatewayError> {
        if config.model.trim().is_empty() {
            return Err(GatewayError::NotConfigured("provider.model is empty".into()));
        }

        let mut gateway = Self::new(
            &config.base_url,
            config.model.clone(),
            Duration::from_secs(config.effective_timeout_secs()),
        )?
        .with_max_attempts(config.effective_max_attempts());

        if let Some(key) = config.resolve_api_key() {
            gateway = gateway.with_api_key(key);
        }
        Ok(gateway)
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Attempts per request, including the first. Zero is treated as one.
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    pub fn with_initial_backoff(mut self, backoff: Duration) -> Self {
        self.initial_backoff = backoff;
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn send_once(&self, prompt: &str, max_tokens: u32) -> Result<String, GatewayError> {
        let body = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            max_tokens,
            temperature: 0.0,
        };

        let mut request = self.client.post(&self.endpoint).json(&body);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await.map_err(classify)?;
        let status = response.status();
        let text = response.text().await.map_err(classify)?;

        if !status.is_success() {
            return Err(GatewayError::Http {
                status: status.as_u16(),
                message: text.chars().take(500).collect(),
            });
        }

        let parsed: ChatResponse = serde_json::from_str(&text)
            .map_err(|e| GatewayError::InvalidResponse(e.to_string()))?;

        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .map(|content| content.trim().to_string())
            .ok_or_else(|| GatewayError::InvalidResponse("no choices in response".into()))
    }
}

fn classify(error: reqwest::Error) -> GatewayError {
    if error.is_timeout() {
        GatewayError::Timeout
    } else {
        GatewayError::ConnectionError(error.to_string())
    }
}

#[async_trait]
impl LlmGateway for OpenAiCompatibleGateway {
    async fn complete(&self, prompt: &str, max_tokens: u32) -> Result<String, GatewayError> {
        let mut backoff = self.initial_backoff;
        let mut attempt = 1;

        loop {
            debug!(model = %self.model, attempt, "Sending completion request");
            match self.send_once(prompt, max_tokens).await {
                Ok(text) => return Ok(text),
                Err(e) if e.is_transient() && attempt < self.max_attempts => {
                    warn!(
                        "Completion attempt {}/{} failed ({}), retrying in {:?}",
                        attempt, self.max_attempts, e, backoff
                    );
                    tokio::time::sleep(backoff).await;
                    backoff *= 2;
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }

    fn model(&self) -> &str {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Read one HTTP request (headers plus Content-Length body).
    async fn read_request(socket: &mut tokio::net::TcpStream) -> String {
        let mut buf = Vec::new();
        let mut chunk = [0u8; 4096];
        loop {
            let n = socket.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);
            let text = String::from_utf8_lossy(&buf).to_string();
            if let Some(header_end) = text.find("\r\n\r\n") {
                let content_length = text[..header_end]
                    .lines()
                    .find_map(|line| {
                        let (name, value) = line.split_once(':')?;
                        name.eq_ignore_ascii_case("content-length")
                            .then(|| value.trim().parse::<usize>().ok())
                            .flatten()
                    })
                    .unwrap_or(0);
                if buf.len() >= header_end + 4 + content_length {
                    return text;
                }
            }
        }
        String::from_utf8_lossy(&buf).to_string()
    }

    /// Serve the given (status, body) pairs in order, one per connection.
    async fn serve(
        responses: Vec<(u16, &'static str)>,
    ) -> (String, Arc<AtomicUsize>, tokio::task::JoinHandle<Vec<String>>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}/v1", listener.local_addr().unwrap());
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = hits.clone();

        let handle = tokio::spawn(async move {
            let mut requests = Vec::new();
            for (status, body) in responses {
                let (mut socket, _) = listener.accept().await.unwrap();
                requests.push(read_request(&mut socket).await);
                counter.fetch_add(1, Ordering::SeqCst);
                let reply = format!(
                    "HTTP/1.1 {} X\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status,
                    body.len(),
                    body
                );
                socket.write_all(reply.as_bytes()).await.unwrap();
                socket.shutdown().await.ok();
            }
            requests
        });

        (base_url, hits, handle)
    }

    const OK_BODY: &str =
        r#"{"choices":[{"index":0,"message":{"role":"assistant","content":"{\"plugin\":\"Tasks\"}"}}]}"#;

    fn gateway(base_url: &str) -> OpenAiCompatibleGateway {
        OpenAiCompatibleGateway::new(base_url, "test-model", Duration::from_secs(5))
            .unwrap()
            .with_initial_backoff(Duration::from_millis(10))
    }

    #[tokio::test]
    async fn test_complete_returns_first_choice() {
        let (base_url, _, handle) = serve(vec![(200, OK_BODY)]).await;
        let gateway = gateway(&base_url).with_api_key("sk-test");

        let text = gateway.complete("route this", 200).await.unwrap();
        assert_eq!(text, r#"{"plugin":"Tasks"}"#);

        let requests = handle.await.unwrap();
        let request = &requests[0];
        assert!(request.starts_with("POST /v1/chat/completions"));
        assert!(request.to_lowercase().contains("authorization: bearer sk-test"));
        assert!(request.contains(r#""model":"test-model""#));
        assert!(request.contains(r#""content":"route this""#));
        assert!(request.contains(r#""max_tokens":200"#));
    }

    #[tokio::test]
    async fn test_completion_text_is_trimmed() {
        let (base_url, _, _) = serve(vec![(
            200,
            r#"{"choices":[{"message":{"role":"assistant","content":"\n  {\"plugin\":\"Notes\"}  \n"}}]}"#,
        )])
        .await;

        let text = gateway(&base_url).complete("hi", 10).await.unwrap();
        assert_eq!(text, r#"{"plugin":"Notes"}"#);
    }

    #[tokio::test]
    async fn test_no_auth_header_without_key() {
        let (base_url, _, handle) = serve(vec![(200, OK_BODY)]).await;
        gateway(&base_url).complete("hi", 10).await.unwrap();
        let requests = handle.await.unwrap();
        assert!(!requests[0].to_lowercase().contains("authorization:"));
    }

    #[tokio::test]
    async fn test_retries_transient_status() {
        let (base_url, hits, _) = serve(vec![
            (503, r#"{"error":"loading model"}"#),
            (429, r#"{"error":"slow down"}"#),
            (200, OK_BODY),
        ])
        .await;

        let text = gateway(&base_url).complete("hi", 10).await.unwrap();
        assert_eq!(text, r#"{"plugin":"Tasks"}"#);
        assert_eq!(hits.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_gives_up_after_max_attempts() {
        let (base_url, hits, _) = serve(vec![(503, "{}"), (503, "{}")]).await;

        let err = gateway(&base_url)
            .with_max_attempts(2)
            .complete("hi", 10)
            .await
            .unwrap_err();
        assert!(matches!(err, GatewayError::Http { status: 503, .. }));
        assert_eq!(hits.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_client_error_is_not_retried() {
        let (base_url, hits, _) = serve(vec![(401, r#"{"error":"bad key"}"#)]).await;

        let err = gateway(&base_url).complete("hi", 10).await.unwrap_err();
        match err {
            GatewayError::Http { status, message } => {
                assert_eq!(status, 401);
                assert!(message.contains("bad key"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_malformed_body_is_invalid_response() {
        let (base_url, _, _) = serve(vec![(200, r#"{"choices":[]}"#)]).await;
        let err = gateway(&base_url).complete("hi", 10).await.unwrap_err();
        assert!(matches!(err, GatewayError::InvalidResponse(_)));
    }

    #[tokio::test]
    async fn test_connection_refused() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}/v1", listener.local_addr().unwrap());
        drop(listener);

        let err = gateway(&base_url)
            .with_max_attempts(1)
            .complete("hi", 10)
            .await
            .unwrap_err();
        assert!(matches!(err, GatewayError::ConnectionError(_)));
    }

    #[test]
    fn test_from_config() {
        let config = FileProviderConfig {
            base_url: "http://localhost:11434/v1/".to_string(),
            api_key_env: "TASKMATE_TEST_UNSET_KEY_VAR".to_string(),
            ..Default::default()
        };
        let gateway = OpenAiCompatibleGateway::from_config(&config).unwrap();
        assert_eq!(gateway.endpoint(), "http://localhost:11434/v1/chat/completions");
        assert_eq!(gateway.model(), "llama3.1:8b");
        assert!(gateway.api_key.is_none());
        assert_eq!(gateway.max_attempts, 3);

        let config = FileProviderConfig {
            max_attempts: 0,
            timeout_secs: 0,
            api_key_env: "TASKMATE_TEST_UNSET_KEY_VAR".to_string(),
            ..Default::default()
        };
        let gateway = OpenAiCompatibleGateway::from_config(&config).unwrap();
        assert_eq!(gateway.max_attempts, 3);

        let config = FileProviderConfig {
            model: String::new(),
            ..Default::default()
        };
        assert!(matches!(
            OpenAiCompatibleGateway::from_config(&config),
            Err(GatewayError::NotConfigured(_))
        ));
    }
}
