// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Environment variable names, service names, and default endpoints for the food logger
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single
//! flat list, mirroring how they are consumed by the configuration layer.

/// Environment variable names read by the configuration layer
pub mod env_config {
    /// API key for the OpenAI-compatible extraction endpoint
    pub const LLM_API_KEY: &str = "FOOD_LOGGER_LLM_API_KEY";
    /// Fallback API key variable understood by most OpenAI tooling
    pub const OPENAI_API_KEY: &str = "OPENAI_API_KEY";
    /// Base URL of the OpenAI-compatible extraction endpoint
    pub const LLM_BASE_URL: &str = "FOOD_LOGGER_LLM_BASE_URL";
    /// Model used for meal extraction
    pub const LLM_MODEL: &str = "FOOD_LOGGER_LLM_MODEL";
    /// Nutrition provider selection (`calorieninjas` or `nutritionix`)
    pub const NUTRITION_PROVIDER: &str = "FOOD_LOGGER_NUTRITION_PROVIDER";
    /// `CalorieNinjas` API key
    pub const CALORIENINJAS_API_KEY: &str = "CALORIENINJAS_API_KEY";
    /// `CalorieNinjas` base URL override
    pub const CALORIENINJAS_BASE_URL: &str = "CALORIENINJAS_BASE_URL";
    /// `Nutritionix` application id
    pub const NUTRITIONIX_APP_ID: &str = "NUTRITIONIX_APP_ID";
    /// `Nutritionix` application key
    pub const NUTRITIONIX_APP_KEY: &str = "NUTRITIONIX_APP_KEY";
    /// `Nutritionix` base URL override
    pub const NUTRITIONIX_BASE_URL: &str = "NUTRITIONIX_BASE_URL";
    /// HTTP connect timeout in seconds
    pub const HTTP_CONNECT_TIMEOUT_SECS: &str = "FOOD_LOGGER_HTTP_CONNECT_TIMEOUT_SECS";
    /// HTTP request timeout in seconds
    pub const HTTP_REQUEST_TIMEOUT_SECS: &str = "FOOD_LOGGER_HTTP_REQUEST_TIMEOUT_SECS";
}

/// Default external endpoints and transport settings
pub mod defaults {
    /// `OpenAI` chat completions base URL
    pub const LLM_BASE_URL: &str = "https://api.openai.com/v1";
    /// Default extraction model
    pub const LLM_MODEL: &str = "gpt-3.5-turbo";
    /// `CalorieNinjas` API base URL
    pub const CALORIENINJAS_BASE_URL: &str = "https://api.calorieninjas.com/v1";
    /// `Nutritionix` API base URL
    pub const NUTRITIONIX_BASE_URL: &str = "https://trackapi.nutritionix.com/v2";
    /// HTTP connect timeout
    pub const HTTP_CONNECT_TIMEOUT_SECS: u64 = 10;
    /// HTTP request timeout
    pub const HTTP_REQUEST_TIMEOUT_SECS: u64 = 60;
}

/// Service names used in error messages and structured logs
pub mod service_names {
    /// This application
    pub const FOOD_LOGGER: &str = "food_logger";
    /// LLM extraction service
    pub const LLM: &str = "LLM";
    /// `CalorieNinjas` nutrition service
    pub const CALORIENINJAS: &str = "CalorieNinjas";
    /// `Nutritionix` nutrition service
    pub const NUTRITIONIX: &str = "Nutritionix";
}
