use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::Client;
use serde_json::{json, Value};
use std::time::Duration;

use crate::core::config::Settings;

static FENCE_JSON_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)```json").expect("static regex"));
static GLUED_OBJECTS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\}\s*\{").expect("static regex"));

#[derive(Debug, Clone)]
pub(crate) struct GeminiService {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
    max_retries: u32,
}

impl GeminiService {
    pub(crate) fn from_settings(settings: &Settings) -> Result<Self> {
        let timeout = Duration::from_secs(settings.gemini().request_timeout_seconds);
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(20))
            .timeout(timeout)
            .build()
            .context("Failed to build Gemini HTTP client")?;

        Ok(Self {
            client,
            api_key: settings.gemini().api_key.clone(),
            base_url: settings.gemini().base_url.trim_end_matches('/').to_string(),
            model: settings.gemini().model.clone(),
            max_retries: settings.gemini().max_retries,
        })
    }

    /// Send a prompt and decode the reply into a JSON value.
    ///
    /// Malformed-but-present text degrades to a `Value::String` via
    /// [`normalize_model_output`]; a response with no text content at all is
    /// an error.
    pub(crate) async fn generate_questions(&self, prompt: &str) -> Result<Value> {
        if self.api_key.is_empty() {
            anyhow::bail!("GOOGLE_API_KEY is not configured");
        }

        let url = format!("{}/models/{}:generateContent", self.base_url, self.model);
        let payload = json!({
            "contents": [
                { "parts": [ { "text": prompt } ] }
            ]
        });

        let mut last_error = None;
        let mut body = Value::Null;

        for attempt in 0..=self.max_retries {
            let response = self
                .client
                .post(&url)
                .header("x-goog-api-key", &self.api_key)
                .json(&payload)
                .send()
                .await;

            match response {
                Ok(resp) => {
                    let status = resp.status();
                    let raw_body =
                        resp.text().await.context("Failed to read Gemini response body")?;

                    if status.is_success() {
                        body = serde_json::from_str(&raw_body).map_err(|err| {
                            anyhow::anyhow!(
                                "Gemini returned non-JSON body (status {}): {}",
                                status,
                                err
                            )
                        })?;
                        last_error = None;
                        break;
                    }

                    let snippet: String = raw_body.chars().take(200).collect();
                    last_error =
                        Some(anyhow::anyhow!("Gemini API failed ({}): {}", status, snippet));

                    // Client errors are not transient; do not retry them.
                    if status.is_client_error() {
                        break;
                    }
                }
                Err(err) => {
                    last_error = Some(anyhow::anyhow!(err).context("Failed to call Gemini API"));
                }
            }

            if attempt < self.max_retries {
                tokio::time::sleep(Duration::from_secs(2_u64.pow(attempt))).await;
            }
        }

        if let Some(err) = last_error {
            return Err(err);
        }

        let text = extract_response_text(&body)
            .context("Gemini response contained no usable text content")?;

        Ok(normalize_model_output(&text))
    }
}

/// Locate the reply text inside the known response-envelope shapes.
/// First non-null wins; `None` is the fatal "no usable content" condition.
pub(crate) fn extract_response_text(body: &Value) -> Option<String> {
    body.pointer("/candidates/0/content/parts/0/text")
        .and_then(Value::as_str)
        .or_else(|| body.pointer("/candidates/0/output_text").and_then(Value::as_str))
        .or_else(|| body.get("text").and_then(Value::as_str))
        .or_else(|| body.pointer("/response/text").and_then(Value::as_str))
        .map(ToString::to_string)
}

/// Best-effort decoder for a reply that is supposed to be pure JSON but may
/// carry markdown fences or bare objects glued together without separators.
///
/// Never fails: unrecoverable input comes back as the cleaned raw string so
/// the caller can store it as-is.
pub(crate) fn normalize_model_output(raw: &str) -> Value {
    let cleaned = strip_code_fences(raw);

    if let Ok(value) = serde_json::from_str::<Value>(&cleaned) {
        return value;
    }

    // Single repair heuristic: comma between adjacent `}{` pairs, then force
    // array shape. Anything beyond that is out of scope for this decoder.
    let repaired = format!("[{}]", GLUED_OBJECTS_RE.replace_all(&cleaned, "},{"));
    if let Ok(value) = serde_json::from_str::<Value>(&repaired) {
        return value;
    }

    Value::String(cleaned)
}

fn strip_code_fences(raw: &str) -> String {
    FENCE_JSON_RE.replace_all(raw, "").replace("```", "").trim().to_string()
}
