// ABOUTME: Strongly typed configuration enums for provider selection and editable session fields
// ABOUTME: NutritionProvider parsing from environment and ConfigField names for runtime edits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{AppError, AppResult};
use food_logger_core::constants::{env_config, service_names};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::str::FromStr;

/// Nutrition provider selection
///
/// Each variant has its own wire format and credential shape; the adapter
/// dispatches explicitly on this tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NutritionProvider {
    /// `CalorieNinjas` - single API key (default)
    #[default]
    CalorieNinjas,
    /// `Nutritionix` - application id and application key pair
    Nutritionix,
}

impl NutritionProvider {
    /// Environment variable name for nutrition provider selection
    pub const ENV_VAR: &'static str = env_config::NUTRITION_PROVIDER;

    /// Parse from string with fallback to default
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        Self::parse(s).unwrap_or_default()
    }

    /// Parse a provider name, rejecting unknown values
    pub fn parse(s: &str) -> AppResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "calorieninjas" | "calorie_ninjas" | "calorie-ninjas" => Ok(Self::CalorieNinjas),
            "nutritionix" => Ok(Self::Nutritionix),
            other => Err(AppError::invalid_input(format!(
                "Unknown nutrition provider '{other}' (expected 'calorieninjas' or 'nutritionix')"
            ))),
        }
    }

    /// Load from environment variable
    #[must_use]
    pub fn from_env() -> Self {
        env::var(Self::ENV_VAR)
            .map(|s| Self::from_str_or_default(&s))
            .unwrap_or_default()
    }

    /// Lowercase identifier, matching the serialized form
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::CalorieNinjas => "calorieninjas",
            Self::Nutritionix => "nutritionix",
        }
    }

    /// Human-readable provider name
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::CalorieNinjas => service_names::CALORIENINJAS,
            Self::Nutritionix => service_names::NUTRITIONIX,
        }
    }
}

impl fmt::Display for NutritionProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single editable field of the session configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfigField {
    /// API key for the extraction LLM
    LlmApiKey,
    /// `CalorieNinjas` API key
    NutritionApiKey,
    /// Selected nutrition provider
    NutritionProvider,
    /// `Nutritionix` application id
    NutritionixAppId,
    /// `Nutritionix` application key
    NutritionixAppKey,
}

impl ConfigField {
    /// All editable fields, in display order
    pub const ALL: [Self; 5] = [
        Self::LlmApiKey,
        Self::NutritionApiKey,
        Self::NutritionProvider,
        Self::NutritionixAppId,
        Self::NutritionixAppKey,
    ];

    /// `snake_case` field name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::LlmApiKey => "llm_api_key",
            Self::NutritionApiKey => "nutrition_api_key",
            Self::NutritionProvider => "nutrition_provider",
            Self::NutritionixAppId => "nutritionix_app_id",
            Self::NutritionixAppKey => "nutritionix_app_key",
        }
    }

    /// Whether values of this field are secrets and must never be echoed
    #[must_use]
    pub const fn is_secret(&self) -> bool {
        !matches!(self, Self::NutritionProvider | Self::NutritionixAppId)
    }
}

impl fmt::Display for ConfigField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConfigField {
    type Err = AppError;

    /// Accepts `snake_case` names and the camelCase names used by web clients
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "llm_api_key" | "llmApiKey" => Ok(Self::LlmApiKey),
            "nutrition_api_key" | "nutritionApiKey" => Ok(Self::NutritionApiKey),
            "nutrition_provider" | "nutritionProvider" | "provider" => Ok(Self::NutritionProvider),
            "nutritionix_app_id" | "nutritionixAppId" | "app_id" => Ok(Self::NutritionixAppId),
            "nutritionix_app_key" | "nutritionixAppKey" | "app_key" => Ok(Self::NutritionixAppKey),
            other => Err(AppError::invalid_input(format!(
                "Unknown configuration field '{other}'"
            ))),
        }
    }
}
