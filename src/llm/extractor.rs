// ABOUTME: LLM-backed extraction collaborator for free-text meal descriptions
// ABOUTME: Sends the extraction prompt at temperature zero and validates the returned item list
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use async_trait::async_trait;
use tracing::{info, instrument};

use super::{get_meal_extraction_prompt, ChatMessage, ChatRequest, OpenAiCompatibleProvider};
use crate::errors::{AppError, AppResult};
use crate::extraction::{parse_extraction_output, ExtractionCollaborator};
use crate::models::ParsedItem;

/// Extraction collaborator backed by an `OpenAI`-compatible chat endpoint
pub struct OpenAiExtractor {
    provider: OpenAiCompatibleProvider,
}

impl OpenAiExtractor {
    /// Wrap a provider
    #[must_use]
    pub const fn new(provider: OpenAiCompatibleProvider) -> Self {
        Self { provider }
    }

    /// Request sent for a description
    #[must_use]
    pub fn build_request(&self, description: &str) -> ChatRequest {
        ChatRequest::new(vec![
            ChatMessage::system(get_meal_extraction_prompt()),
            ChatMessage::user(description),
        ])
        .with_model(self.provider.default_model())
        .with_temperature(0.0)
    }
}

#[async_trait]
impl ExtractionCollaborator for OpenAiExtractor {
    #[instrument(skip_all, fields(description_len = description.len()))]
    async fn extract(&self, description: &str, llm_api_key: &str) -> AppResult<Vec<ParsedItem>> {
        let key = llm_api_key.trim();
        if key.is_empty() {
            return Err(AppError::missing_credentials("LLM API Key is required."));
        }

        let response = self
            .provider
            .complete(&self.build_request(description), key)
            .await?;
        let items = parse_extraction_output(&response.content)?;

        info!(items = items.len(), model = %response.model, "Meal description extracted");
        Ok(items)
    }
}
