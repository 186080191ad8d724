//! Gemini `generateContent` client
//!
//! One request per turn, no streaming, no retry. The client maps the
//! transcript onto Gemini's `user`/`model` roles and returns the
//! concatenated text parts of the first candidate.

use super::{AssistantError, ChatTurn, GenerationRequest, Role, TextGenerator};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com";

// ─────────────────────────────────────────────────────────────────────────────
// Wire types
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Part {
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

impl Content {
    fn text(role: Option<&str>, text: &str) -> Self {
        Self {
            role: role.map(str::to_string),
            parts: vec![Part {
                text: Some(text.to_string()),
            }],
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub temperature: f32,
}

/// Request body for `models/{model}:generateContent`
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub system_instruction: Content,
    pub contents: Vec<Content>,
    pub generation_config: GenerationConfig,
}

#[derive(Debug, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: Option<Content>,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate, if any
    pub fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect();
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

/// Gemini's name for a transcript role
fn wire_role(role: Role) -> &'static str {
    match role {
        Role::User => "user",
        Role::Assistant => "model",
    }
}

fn to_contents(turns: &[ChatTurn]) -> Vec<Content> {
    turns
        .iter()
        .map(|t| Content::text(Some(wire_role(t.role)), &t.text))
        .collect()
}

impl From<&GenerationRequest> for GenerateContentRequest {
    fn from(req: &GenerationRequest) -> Self {
        Self {
            system_instruction: Content::text(None, &req.system_instruction),
            contents: to_contents(&req.turns),
            generation_config: GenerationConfig {
                temperature: req.temperature,
            },
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Client
// ─────────────────────────────────────────────────────────────────────────────

pub struct GeminiClient {
    client: Client,
    api_base: String,
    api_key: String,
}

impl GeminiClient {
    pub fn new(api_base: impl Into<String>, api_key: impl Into<String>) -> Result<Self, AssistantError> {
        let client = Client::builder()
            .build()
            .map_err(|e| AssistantError::Network(format!("Failed to create HTTP client: {}", e)))?;

        let api_base = api_base.into();
        tracing::info!("Initialized Gemini client: {}", api_base);

        Ok(Self {
            client,
            api_base,
            api_key: api_key.into(),
        })
    }

    /// Endpoint URL for a model
    pub fn endpoint(&self, model: &str) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.api_base.trim_end_matches('/'),
            model
        )
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, request: &GenerationRequest) -> Result<String, AssistantError> {
        let url = self.endpoint(&request.model);
        let body = GenerateContentRequest::from(request);

        tracing::debug!(
            "Sending {} turns to {} (temperature {})",
            body.contents.len(),
            request.model,
            request.temperature
        );

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| AssistantError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AssistantError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| AssistantError::InvalidResponse(e.to_string()))?;

        parsed.text().ok_or(AssistantError::EmptyResponse)
    }

    fn name(&self) -> &'static str {
        "gemini"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assistant::{ChatTurn, GREETING};

    fn request() -> GenerationRequest {
        GenerationRequest {
            model: "gemini-2.5-flash".into(),
            system_instruction: "be a cat".into(),
            temperature: 0.7,
            turns: vec![ChatTurn::assistant(GREETING), ChatTurn::user("calm cat?")],
        }
    }

    #[test]
    fn request_body_shape() {
        let body = GenerateContentRequest::from(&request());
        let json = serde_json::to_value(&body).unwrap();

        assert_eq!(json["systemInstruction"]["parts"][0]["text"], "be a cat");
        assert!(json["systemInstruction"].get("role").is_none());
        assert_eq!(json["contents"][0]["role"], "model");
        assert_eq!(json["contents"][1]["role"], "user");
        assert_eq!(json["contents"][1]["parts"][0]["text"], "calm cat?");
        let temp = json["generationConfig"]["temperature"].as_f64().unwrap();
        assert!((temp - 0.7).abs() < 1e-6);
    }

    #[test]
    fn response_text_joins_parts() {
        let json = r#"{"candidates":[{"content":{"role":"model","parts":[{"text":"Meet "},{"text":"Simba!"}]}}]}"#;
        let parsed: GenerateContentResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.text().as_deref(), Some("Meet Simba!"));
    }

    #[test]
    fn response_without_text_is_none() {
        for json in [
            r#"{}"#,
            r#"{"candidates":[]}"#,
            r#"{"candidates":[{"finishReason":"SAFETY"}]}"#,
            r#"{"candidates":[{"content":{"parts":[{}]}}]}"#,
        ] {
            let parsed: GenerateContentResponse = serde_json::from_str(json).unwrap();
            assert_eq!(parsed.text(), None, "{}", json);
        }
    }

    #[test]
    fn endpoint_trims_trailing_slash() {
        let client = GeminiClient::new("https://example.test/", "k").unwrap();
        assert_eq!(
            client.endpoint("gemini-2.5-flash"),
            "https://example.test/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }

    #[tokio::test]
    async fn unreachable_service_is_reported_as_error() {
        // Bypass any HTTP(S)_PROXY so the connection really goes to port 9
        let client = GeminiClient {
            client: Client::builder().no_proxy().build().unwrap(),
            api_base: "http://127.0.0.1:9".to_string(),
            api_key: "k".to_string(),
        };
        let err = client.generate(&request()).await.unwrap_err();
        assert!(
            !matches!(err, AssistantError::EmptyResponse | AssistantError::NotConfigured),
            "{}",
            err
        );
    }
}
