use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{AppError, Result};

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/";
pub const DEFAULT_MODEL: &str = "gemini-1.5-pro";
pub const API_KEY_VAR: &str = "GOOGLE_GENERATIVE_AI_API_KEY";

/// A prompt plus the schema the returned object must follow.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub prompt: String,
    pub schema: Value,
    pub temperature: f32,
}

/// Anything that turns a prompt and a schema into a JSON object.
///
/// `Ok(None)` means the provider answered without producing an object.
#[async_trait]
pub trait StructuredGenerator: Send + Sync {
    async fn generate_object(&self, request: &GenerationRequest) -> Result<Option<Value>>;
}

#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
}

impl GeminiConfig {
    /// Reads `GOOGLE_GENERATIVE_AI_API_KEY` (required), `GEMINI_BASE_URL` and
    /// `GEMINI_MODEL`.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var(API_KEY_VAR)
            .map_err(|_| AppError::Config(format!("Missing {API_KEY_VAR}")))?;
        let base_url =
            std::env::var("GEMINI_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let model = std::env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        Ok(Self::new(api_key, base_url, model))
    }

    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>, model: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        let model = model.into();
        let model = model.strip_prefix("models/").unwrap_or(&model).to_string();
        Self { api_key: api_key.into(), base_url, model }
    }

    fn endpoint(&self) -> String {
        format!("{}models/{}:generateContent", self.base_url, self.model)
    }
}

pub struct GeminiClient {
    config: GeminiConfig,
    http: reqwest::Client,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Self {
        Self { config, http: reqwest::Client::new() }
    }

    pub fn from_env() -> Result<Self> {
        Ok(Self::new(GeminiConfig::from_env()?))
    }
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<RequestContent<'a>>,
    generation_config: GenerationConfig<'a>,
}

#[derive(Serialize, Debug)]
struct RequestContent<'a> {
    role: &'static str,
    parts: Vec<RequestPart<'a>>,
}

#[derive(Serialize, Debug)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig<'a> {
    temperature: f32,
    response_mime_type: &'static str,
    response_schema: &'a Value,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(default)]
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Deserialize, Debug)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Deserialize, Debug)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize, Debug)]
struct CandidatePart {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    #[serde(default)]
    block_reason: Option<String>,
}

#[derive(Deserialize, Debug)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Deserialize, Debug)]
struct ApiErrorDetail {
    message: String,
}

impl GenerateContentResponse {
    fn first_text(self) -> Option<String> {
        self.candidates
            .into_iter()
            .next()?
            .content?
            .parts
            .into_iter()
            .find_map(|p| p.text)
    }
}

#[async_trait]
impl StructuredGenerator for GeminiClient {
    async fn generate_object(&self, request: &GenerationRequest) -> Result<Option<Value>> {
        let body = GenerateContentRequest {
            contents: vec![RequestContent {
                role: "user",
                parts: vec![RequestPart { text: &request.prompt }],
            }],
            generation_config: GenerationConfig {
                temperature: request.temperature,
                response_mime_type: "application/json",
                response_schema: &request.schema,
            },
        };

        tracing::debug!(model = %self.config.model, "calling Gemini generateContent");

        let response = self
            .http
            .post(self.config.endpoint())
            .header("x-goog-api-key", &self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::Generation(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| AppError::Generation(e.to_string()))?;

        tracing::debug!(status = status.as_u16(), "Gemini responded");

        if !status.is_success() {
            let message = serde_json::from_str::<ApiErrorBody>(&text)
                .map(|b| b.error.message)
                .unwrap_or(text);
            return Err(AppError::Generation(format!(
                "Gemini returned {}: {message}",
                status.as_u16()
            )));
        }

        let parsed: GenerateContentResponse = serde_json::from_str(&text)
            .map_err(|e| AppError::Generation(format!("unreadable Gemini response: {e}")))?;

        if let Some(reason) = parsed
            .prompt_feedback
            .as_ref()
            .and_then(|f| f.block_reason.as_deref())
        {
            return Err(AppError::Generation(format!("prompt blocked: {reason}")));
        }

        match parsed.first_text() {
            Some(output) => serde_json::from_str(&output)
                .map(Some)
                .map_err(|e| AppError::Generation(format!("model output is not JSON: {e}"))),
            None => Ok(None),
        }
    }
}
