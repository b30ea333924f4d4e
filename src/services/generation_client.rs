use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use serde_json::json;

use crate::{
    config::Config,
    errors::{AppError, AppResult},
    models::domain::{GenerationResult, Source},
};

pub const MISSING_API_KEY_MESSAGE: &str =
    "API Key is missing. Please configure the environment variable.";
pub const GENERATION_FAILED_MESSAGE: &str = "Failed to generate content. Please try again.";
pub const EMPTY_TEXT_PLACEHOLDER: &str = "No content generated.";

const USER_AGENT: &str = concat!("study-companion-server/", env!("CARGO_PKG_VERSION"));

/// Seam between the orchestrator and the hosted model.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> AppResult<GenerationResult>;
}

// Subset of the generateContent response that we read.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub content: Option<Content>,
    pub grounding_metadata: Option<GroundingMetadata>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Content {
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Part {
    pub text: Option<String>,
    #[serde(default)]
    pub thought: bool,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroundingMetadata {
    #[serde(default)]
    pub grounding_chunks: Vec<GroundingChunk>,
}

#[derive(Debug, Default, Deserialize)]
pub struct GroundingChunk {
    pub web: Option<WebChunk>,
}

#[derive(Debug, Default, Deserialize)]
pub struct WebChunk {
    pub uri: Option<String>,
    pub title: Option<String>,
}

/// Text of the first candidate plus its citations that carry both a uri and a title.
pub fn normalize_response(response: GenerateContentResponse) -> GenerationResult {
    let Some(candidate) = response.candidates.into_iter().next() else {
        return GenerationResult {
            text: EMPTY_TEXT_PLACEHOLDER.to_string(),
            sources: Vec::new(),
        };
    };

    let text: String = candidate
        .content
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter(|part| !part.thought)
                .filter_map(|part| part.text)
                .collect()
        })
        .unwrap_or_default();

    let sources = candidate
        .grounding_metadata
        .map(|metadata| {
            metadata
                .grounding_chunks
                .into_iter()
                .filter_map(|chunk| chunk.web)
                .filter_map(|web| match (web.uri, web.title) {
                    (Some(uri), Some(title)) if !uri.is_empty() && !title.is_empty() => {
                        Some(Source { uri, title })
                    }
                    _ => None,
                })
                .collect()
        })
        .unwrap_or_default();

    GenerationResult {
        text: if text.is_empty() {
            EMPTY_TEXT_PLACEHOLDER.to_string()
        } else {
            text
        },
        sources,
    }
}

/// Gemini `generateContent` client with Google Search grounding enabled.
pub struct GeminiClient {
    http: Client,
    api_key: Option<SecretString>,
    model: String,
    base_url: String,
}

impl GeminiClient {
    pub fn new(
        api_key: Option<SecretString>,
        model: &str,
        base_url: &str,
        timeout: Duration,
    ) -> AppResult<Self> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::InternalError(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            api_key,
            model: model.to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &Config) -> AppResult<Self> {
        Self::new(
            config.gemini_api_key.clone(),
            &config.gemini_model,
            &config.gemini_base_url,
            config.generation_timeout(),
        )
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }

    async fn call(&self, api_key: &str, prompt: &str) -> Result<GenerateContentResponse, String> {
        let body = json!({
            "contents": [{ "role": "user", "parts": [{ "text": prompt }] }],
            "tools": [{ "google_search": {} }],
        });

        let response = self
            .http
            .post(self.endpoint())
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| format!("request failed: {}", e))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response
                .text()
                .await
                .unwrap_or_else(|_| "Could not read response body".to_string());
            return Err(format!("service returned {}: {}", status, detail));
        }

        response
            .json::<GenerateContentResponse>()
            .await
            .map_err(|e| format!("failed to decode response: {}", e))
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> AppResult<GenerationResult> {
        let api_key = self
            .api_key
            .as_ref()
            .ok_or_else(|| AppError::ConfigurationError(MISSING_API_KEY_MESSAGE.to_string()))?;

        log::debug!("Sending {} character prompt to {}", prompt.len(), self.model);

        match self.call(api_key.expose_secret(), prompt).await {
            Ok(response) => {
                let result = normalize_response(response);
                log::info!(
                    "Generated {} characters with {} sources",
                    result.text.len(),
                    result.sources.len()
                );
                Ok(result)
            }
            Err(e) => {
                log::error!("Gemini API error: {}", e);
                Err(AppError::GenerationError(
                    GENERATION_FAILED_MESSAGE.to_string(),
                ))
            }
        }
    }
}
