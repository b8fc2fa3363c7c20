//! Gemini `generateContent` client

use crate::error::PlaygroundError;
use crate::provider::{
    build_provider_http_client, map_http_error, map_status, GenerationParams, GenerationProvider,
    NO_CONTENT_FALLBACK,
};
use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use tracing::debug;

const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";

pub struct GeminiClient {
    client: Client,
    api_key: Option<SecretString>,
    base_url: String,
}

impl GeminiClient {
    pub fn new(api_key: Option<SecretString>) -> Result<Self, PlaygroundError> {
        Ok(Self {
            client: build_provider_http_client()?,
            api_key,
            base_url: GEMINI_BASE_URL.to_string(),
        })
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn api_key(&self) -> Result<&SecretString, PlaygroundError> {
        self.api_key.as_ref().ok_or_else(|| {
            PlaygroundError::MissingCredential(
                "Gemini API key not found. Set GEMINI_API_KEY or provider.api_key.".to_string(),
            )
        })
    }

    fn generate_url(&self, model: &str) -> String {
        let model = model.trim();
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            model.strip_prefix("models/").unwrap_or(model)
        )
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<RequestContent<'a>>,
    generation_config: RequestGenerationConfig<'a>,
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RequestGenerationConfig<'a> {
    temperature: f64,
    max_output_tokens: u32,
    stop_sequences: &'a [String],
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<ResponseContent>,
}

#[derive(Debug, Deserialize)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

impl GenerateContentResponse {
    fn first_text(self) -> Option<String> {
        self.candidates?
            .into_iter()
            .next()?
            .content?
            .parts
            .into_iter()
            .next()?
            .text
            .filter(|text| !text.is_empty())
    }
}

#[async_trait]
impl GenerationProvider for GeminiClient {
    fn check_credentials(&self) -> Result<(), PlaygroundError> {
        self.api_key().map(|_| ())
    }

    async fn generate(
        &self,
        prompt: &str,
        params: &GenerationParams,
    ) -> Result<String, PlaygroundError> {
        let api_key = self.api_key()?.expose_secret().as_str();

        let request = GenerateContentRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: prompt }],
            }],
            generation_config: RequestGenerationConfig {
                temperature: params.temperature,
                max_output_tokens: params.max_output_tokens,
                stop_sequences: &params.stop_sequences,
            },
        };

        let url = self.generate_url(&params.model);
        debug!(model = %params.model, prompt_len = prompt.len(), "Sending generateContent request");

        let response = self
            .client
            .post(&url)
            .query(&[("key", api_key)])
            .json(&request)
            .send()
            .await
            .map_err(map_http_error)?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(map_status(status.as_u16(), &error_text));
        }

        let body: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| PlaygroundError::ProviderError(format!("Failed to parse response: {}", e)))?;

        Ok(body
            .first_text()
            .unwrap_or_else(|| NO_CONTENT_FALLBACK.to_string()))
    }

    fn provider_name(&self) -> &str {
        "gemini"
    }
}
