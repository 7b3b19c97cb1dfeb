// ABOUTME: OpenAI-compatible chat completions client used for meal extraction
// ABOUTME: Sends bearer-authenticated requests and maps error bodies to readable AppErrors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # `OpenAI`-Compatible Provider
//!
//! Works with any endpoint implementing the `OpenAI` chat completions API.
//! The API key is supplied per call because the user may change it at any
//! time through the session configuration.

use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, error, instrument};

use super::{ChatMessage, ChatRequest, ChatResponse};
use crate::config::ServiceConfig;
use crate::errors::{AppError, AppResult, ErrorCode};
use food_logger_core::constants::service_names;

/// Fallback message when the LLM call fails without a readable cause
const GENERIC_FAILURE: &str =
    "Failed to parse meal description with LLM. Please check your API key and try again.";

#[derive(Debug, Serialize)]
struct OpenAiRequest<'a> {
    model: &'a str,
    messages: Vec<OpenAiMessage<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

#[derive(Debug, Serialize)]
struct OpenAiMessage<'a> {
    role: &'static str,
    content: &'a str,
}

impl<'a> From<&'a ChatMessage> for OpenAiMessage<'a> {
    fn from(msg: &'a ChatMessage) -> Self {
        Self {
            role: msg.role.as_str(),
            content: &msg.content,
        }
    }
}

#[derive(Debug, Deserialize)]
struct OpenAiResponse {
    choices: Vec<OpenAiChoice>,
    #[serde(default)]
    model: String,
}

#[derive(Debug, Deserialize)]
struct OpenAiChoice {
    message: OpenAiResponseMessage,
}

#[derive(Debug, Deserialize)]
struct OpenAiResponseMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OpenAiErrorResponse {
    error: OpenAiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct OpenAiErrorDetail {
    message: String,
}

/// Configuration for the `OpenAI`-compatible provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenAiCompatibleConfig {
    /// Base URL for the API (e.g., <https://api.openai.com/v1>)
    pub base_url: String,
    /// Default model to use
    pub default_model: String,
    /// TCP connect timeout
    pub connect_timeout: Duration,
    /// Whole-request timeout
    pub request_timeout: Duration,
}

impl From<&ServiceConfig> for OpenAiCompatibleConfig {
    fn from(service: &ServiceConfig) -> Self {
        Self {
            base_url: service.llm_base_url.clone(),
            default_model: service.llm_model.clone(),
            connect_timeout: service.connect_timeout,
            request_timeout: service.request_timeout,
        }
    }
}

impl Default for OpenAiCompatibleConfig {
    fn default() -> Self {
        Self::from(&ServiceConfig::default())
    }
}

/// Generic `OpenAI`-compatible LLM provider
pub struct OpenAiCompatibleProvider {
    client: Client,
    config: OpenAiCompatibleConfig,
}

impl OpenAiCompatibleProvider {
    /// Create a new provider with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: OpenAiCompatibleConfig) -> AppResult<Self> {
        let client = Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| AppError::internal(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { client, config })
    }

    /// Model used when the request does not name one
    #[must_use]
    pub fn default_model(&self) -> &str {
        &self.config.default_model
    }

    fn api_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            endpoint
        )
    }

    /// Perform a chat completion
    ///
    /// # Errors
    ///
    /// Returns `ProviderUnavailable` if the endpoint cannot be reached, answers
    /// with a non-success status, or returns a body without any choice.
    #[instrument(skip(self, request, api_key), fields(model = %request.model.as_deref().unwrap_or(&self.config.default_model)))]
    pub async fn complete(&self, request: &ChatRequest, api_key: &str) -> AppResult<ChatResponse> {
        let model = request
            .model
            .as_deref()
            .unwrap_or(&self.config.default_model);

        let body = OpenAiRequest {
            model,
            messages: request.messages.iter().map(OpenAiMessage::from).collect(),
            temperature: request.temperature,
        };
        debug!(messages = body.messages.len(), "Sending chat completion request");

        let response = self
            .client
            .post(self.api_url("chat/completions"))
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                error!("Failed to send request to {}: {}", self.config.base_url, e);
                AppError::new(ErrorCode::ProviderUnavailable, GENERIC_FAILURE).with_source(e)
            })?;

        let status = response.status();
        let text = response.text().await.map_err(|e| {
            error!("Failed to read LLM response: {}", e);
            AppError::new(ErrorCode::ProviderUnavailable, GENERIC_FAILURE).with_source(e)
        })?;

        interpret_completion(status, &text)
    }
}

/// Turn an HTTP status and body into a completion or an error
///
/// # Errors
///
/// Returns `ProviderUnavailable` for non-success statuses and bodies without
/// a usable choice.
pub fn interpret_completion(status: StatusCode, body: &str) -> AppResult<ChatResponse> {
    if !status.is_success() {
        return Err(parse_error_response(status, body));
    }

    let parsed: OpenAiResponse = serde_json::from_str(body).map_err(|e| {
        error!(
            "Failed to parse LLM response: {} - body: {}",
            e,
            body.chars().take(500).collect::<String>()
        );
        AppError::new(ErrorCode::ProviderUnavailable, GENERIC_FAILURE).with_source(e)
    })?;

    let choice = parsed.choices.into_iter().next().ok_or_else(|| {
        AppError::new(
            ErrorCode::ProviderUnavailable,
            "Invalid response from LLM. Please try again.",
        )
    })?;

    Ok(ChatResponse {
        content: choice.message.content.unwrap_or_default(),
        model: parsed.model,
    })
}

/// Map an error status and body to a readable `ProviderUnavailable` error
fn parse_error_response(status: StatusCode, body: &str) -> AppError {
    let detail = serde_json::from_str::<OpenAiErrorResponse>(body)
        .ok()
        .map(|r| r.error.message);

    let message = match (status.as_u16(), detail) {
        (401, Some(detail)) => format!("LLM authentication failed: {detail}"),
        (401, None) => "LLM authentication failed. Please check your API key.".to_owned(),
        (429, Some(detail)) => rate_limit_message(&detail),
        (429, None) => rate_limit_message(""),
        (_, Some(detail)) => format!("LLM Error: {detail}"),
        (_, None) => {
            debug!(
                service = service_names::LLM,
                %status,
                "Non-JSON error body from LLM endpoint"
            );
            GENERIC_FAILURE.to_owned()
        }
    };
    AppError::new(ErrorCode::ProviderUnavailable, message)
}

/// Extract a user-friendly rate limit message, keeping any retry hint
fn rate_limit_message(message: &str) -> String {
    let lower = message.to_lowercase();
    if let Some(retry_pos) = lower.find("try again in ") {
        let after_prefix = &lower[retry_pos + "try again in ".len()..];
        let number: String = after_prefix
            .chars()
            .take_while(|c| c.is_ascii_digit() || *c == '.')
            .collect();
        if let Ok(seconds) = number.parse::<f64>() {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let seconds_int = seconds.ceil() as u64;
            return format!("LLM rate limit reached. Please try again in {seconds_int} seconds.");
        }
    }
    "LLM rate limit reached. Please wait a moment and try again.".to_owned()
}
