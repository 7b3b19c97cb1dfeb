// ABOUTME: Environment configuration for session credentials and external service endpoints
// ABOUTME: Loads SessionConfig (secrets, provider) and ServiceConfig (URLs, model, timeouts) from env vars
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration
//!
//! Configuration is environment-only and lives in memory for the lifetime of
//! the process. Credentials can additionally be edited at runtime through the
//! workflow's `SetConfig` event.

use super::types::{ConfigField, NutritionProvider};
use crate::errors::{AppError, AppResult};
use food_logger_core::constants::{defaults, env_config};
use serde::Serialize;
use std::env;
use std::fmt;
use std::time::Duration;
use tracing::{info, warn};

/// Credentials and provider selection held by the workflow session
#[derive(Clone, Default, PartialEq, Eq)]
pub struct SessionConfig {
    /// API key for the extraction LLM
    pub llm_api_key: String,
    /// `CalorieNinjas` API key
    pub nutrition_api_key: String,
    /// Selected nutrition provider
    pub nutrition_provider: NutritionProvider,
    /// `Nutritionix` application id
    pub nutritionix_app_id: String,
    /// `Nutritionix` application key
    pub nutritionix_app_key: String,
}

impl SessionConfig {
    /// Load credentials from environment variables
    ///
    /// The LLM key is read from `FOOD_LOGGER_LLM_API_KEY`, falling back to
    /// `OPENAI_API_KEY`. Unset variables leave the field empty.
    #[must_use]
    pub fn from_env() -> Self {
        let llm_api_key = non_empty_var(env_config::LLM_API_KEY)
            .or_else(|| non_empty_var(env_config::OPENAI_API_KEY))
            .unwrap_or_default();

        let config = Self {
            llm_api_key,
            nutrition_api_key: non_empty_var(env_config::CALORIENINJAS_API_KEY)
                .unwrap_or_default(),
            nutrition_provider: NutritionProvider::from_env(),
            nutritionix_app_id: non_empty_var(env_config::NUTRITIONIX_APP_ID).unwrap_or_default(),
            nutritionix_app_key: non_empty_var(env_config::NUTRITIONIX_APP_KEY)
                .unwrap_or_default(),
        };

        info!(
            provider = %config.nutrition_provider,
            llm_key_set = !config.llm_api_key.is_empty(),
            "Loaded session configuration from environment"
        );
        config
    }

    /// Update a single field
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the field is the provider and the value is
    /// not a known provider name. The configuration is left unchanged.
    pub fn apply(&mut self, field: ConfigField, value: &str) -> AppResult<()> {
        match field {
            ConfigField::LlmApiKey => value.clone_into(&mut self.llm_api_key),
            ConfigField::NutritionApiKey => value.clone_into(&mut self.nutrition_api_key),
            ConfigField::NutritionProvider => {
                self.nutrition_provider = NutritionProvider::parse(value)?;
            }
            ConfigField::NutritionixAppId => value.clone_into(&mut self.nutritionix_app_id),
            ConfigField::NutritionixAppKey => value.clone_into(&mut self.nutritionix_app_key),
        }
        Ok(())
    }

    /// The LLM key, or `MissingCredentials` when unset
    pub fn require_llm_api_key(&self) -> AppResult<&str> {
        let key = self.llm_api_key.trim();
        if key.is_empty() {
            return Err(AppError::missing_credentials("LLM API Key is required."));
        }
        Ok(key)
    }

    /// Projection with secrets reduced to "is set" flags
    #[must_use]
    pub fn redacted(&self) -> ConfigSnapshot {
        ConfigSnapshot {
            nutrition_provider: self.nutrition_provider,
            llm_api_key_set: !self.llm_api_key.trim().is_empty(),
            nutrition_api_key_set: !self.nutrition_api_key.trim().is_empty(),
            nutritionix_app_id: self.nutritionix_app_id.clone(),
            nutritionix_app_key_set: !self.nutritionix_app_key.trim().is_empty(),
        }
    }
}

impl fmt::Debug for SessionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionConfig")
            .field("llm_api_key", &redact(&self.llm_api_key))
            .field("nutrition_api_key", &redact(&self.nutrition_api_key))
            .field("nutrition_provider", &self.nutrition_provider)
            .field("nutritionix_app_id", &self.nutritionix_app_id)
            .field("nutritionix_app_key", &redact(&self.nutritionix_app_key))
            .finish()
    }
}

/// Read-only view of the session configuration safe for display and logs
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigSnapshot {
    /// Selected nutrition provider
    pub nutrition_provider: NutritionProvider,
    /// Whether an LLM key is configured
    pub llm_api_key_set: bool,
    /// Whether a `CalorieNinjas` key is configured
    pub nutrition_api_key_set: bool,
    /// `Nutritionix` application id (not a secret)
    pub nutritionix_app_id: String,
    /// Whether a `Nutritionix` application key is configured
    pub nutritionix_app_key_set: bool,
}

/// External endpoints and transport settings for the HTTP collaborators
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    /// OpenAI-compatible base URL for meal extraction
    pub llm_base_url: String,
    /// Model used for meal extraction
    pub llm_model: String,
    /// `CalorieNinjas` API base URL
    pub calorieninjas_base_url: String,
    /// `Nutritionix` API base URL
    pub nutritionix_base_url: String,
    /// TCP connect timeout
    pub connect_timeout: Duration,
    /// Whole-request timeout
    pub request_timeout: Duration,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            llm_base_url: defaults::LLM_BASE_URL.to_owned(),
            llm_model: defaults::LLM_MODEL.to_owned(),
            calorieninjas_base_url: defaults::CALORIENINJAS_BASE_URL.to_owned(),
            nutritionix_base_url: defaults::NUTRITIONIX_BASE_URL.to_owned(),
            connect_timeout: Duration::from_secs(defaults::HTTP_CONNECT_TIMEOUT_SECS),
            request_timeout: Duration::from_secs(defaults::HTTP_REQUEST_TIMEOUT_SECS),
        }
    }
}

impl ServiceConfig {
    /// Load service endpoints from environment variables, using defaults for unset values
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` if a timeout variable is set but is not a
    /// positive integer number of seconds.
    pub fn from_env() -> AppResult<Self> {
        let base = Self::default();
        let config = Self {
            llm_base_url: non_empty_var(env_config::LLM_BASE_URL).unwrap_or(base.llm_base_url),
            llm_model: non_empty_var(env_config::LLM_MODEL).unwrap_or(base.llm_model),
            calorieninjas_base_url: non_empty_var(env_config::CALORIENINJAS_BASE_URL)
                .unwrap_or(base.calorieninjas_base_url),
            nutritionix_base_url: non_empty_var(env_config::NUTRITIONIX_BASE_URL)
                .unwrap_or(base.nutritionix_base_url),
            connect_timeout: duration_var(env_config::HTTP_CONNECT_TIMEOUT_SECS)?
                .unwrap_or(base.connect_timeout),
            request_timeout: duration_var(env_config::HTTP_REQUEST_TIMEOUT_SECS)?
                .unwrap_or(base.request_timeout),
        };

        info!(
            llm_base_url = %config.llm_base_url,
            llm_model = %config.llm_model,
            "Loaded service configuration"
        );
        Ok(config)
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
}

fn duration_var(name: &str) -> AppResult<Option<Duration>> {
    let Some(raw) = non_empty_var(name) else {
        return Ok(None);
    };
    match raw.parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Some(Duration::from_secs(secs))),
        _ => {
            warn!("Invalid value for {name}: {raw}");
            Err(AppError::config(format!(
                "{name} must be a positive number of seconds, got '{raw}'"
            )))
        }
    }
}

fn redact(secret: &str) -> &'static str {
    if secret.is_empty() {
        "<unset>"
    } else {
        "<redacted>"
    }
}
