// ABOUTME: Shared test utilities for food logger integration tests
// ABOUTME: Quiet logging, scripted in-memory collaborators, and session configuration fixtures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `food_logger`
//!
//! The scripted collaborators never touch the network. The nutrition script
//! feeds canned HTTP status/body pairs through the real per-provider response
//! interpretation, so adapter semantics are exercised end to end.

use async_trait::async_trait;
use food_logger::config::{NutritionProvider, SessionConfig};
use food_logger::errors::{AppError, AppResult, ErrorCode};
use food_logger::extraction::{parse_extraction_output, ExtractionCollaborator};
use food_logger::models::{ParsedItem, ResolvedFoodItem};
use food_logger::nutrition::{
    build_query, calorieninjas, nutritionix, NutritionCollaborator, NutritionCredentials,
};
use reqwest::StatusCode;
use std::env;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, Once};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Tolerance check for rounded totals
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

// ============================================================================
// Configuration fixtures
// ============================================================================

pub fn calorieninjas_config() -> SessionConfig {
    SessionConfig {
        llm_api_key: "sk-test".into(),
        nutrition_api_key: "cn-test".into(),
        nutrition_provider: NutritionProvider::CalorieNinjas,
        ..SessionConfig::default()
    }
}

pub fn nutritionix_config() -> SessionConfig {
    SessionConfig {
        llm_api_key: "sk-test".into(),
        nutrition_provider: NutritionProvider::Nutritionix,
        nutritionix_app_id: "app-id".into(),
        nutritionix_app_key: "app-key".into(),
        ..SessionConfig::default()
    }
}

pub fn egg_and_coffee() -> Vec<ParsedItem> {
    vec![ParsedItem::new("egg", "2"), ParsedItem::new("coffee", "1 cup")]
}

pub fn found_item(name: &str, calories: f64, protein: f64, fat: f64, carbs: f64) -> ResolvedFoodItem {
    ResolvedFoodItem {
        name: name.into(),
        found: true,
        calories: Some(calories),
        protein_g: Some(protein),
        fat_total_g: Some(fat),
        carbohydrates_total_g: Some(carbs),
        ..ResolvedFoodItem::default()
    }
}

/// `CalorieNinjas` body returning both egg and coffee
pub const CALORIENINJAS_EGG_COFFEE: &str = r#"{
  "items": [
    {"name": "egg", "calories": 147.0, "serving_size_g": 100.0, "fat_total_g": 9.8,
     "protein_g": 12.6, "sodium_mg": 142.0, "potassium_mg": 198.0, "cholesterol_mg": 371.0,
     "carbohydrates_total_g": 0.8, "fiber_g": 0.0, "sugar_g": 0.4},
    {"name": "coffee", "calories": 2.4, "serving_size_g": 237.0, "fat_total_g": 0.1,
     "protein_g": 0.3, "sodium_mg": 5.0, "potassium_mg": 116.0, "cholesterol_mg": 0.0,
     "carbohydrates_total_g": 0.0, "fiber_g": 0.0, "sugar_g": 0.0}
  ]
}"#;

// ============================================================================
// Scripted extraction collaborator
// ============================================================================

/// What the scripted extractor answers with
#[derive(Debug, Clone)]
pub enum ExtractionScript {
    /// Raw model output, run through the real validator
    RawOutput(String),
    /// A failure with this code and message
    Failure(ErrorCode, String),
}

/// Extraction collaborator with a canned answer and a call counter
pub struct ScriptedExtractor {
    script: ExtractionScript,
    calls: Arc<AtomicUsize>,
    last_description: Arc<Mutex<Option<String>>>,
}

impl ScriptedExtractor {
    pub fn new(script: ExtractionScript) -> Self {
        Self {
            script,
            calls: Arc::new(AtomicUsize::new(0)),
            last_description: Arc::new(Mutex::new(None)),
        }
    }

    /// Answer with a JSON document as the model would
    pub fn raw(output: impl Into<String>) -> Self {
        Self::new(ExtractionScript::RawOutput(output.into()))
    }

    /// Answer with a well-formed list of the given items
    pub fn items(items: &[ParsedItem]) -> Self {
        Self::raw(serde_json::to_string(items).unwrap())
    }

    pub fn failing(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::new(ExtractionScript::Failure(code, message.into()))
    }

    /// Shared counter of `extract` calls
    pub fn call_counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }

    /// Shared slot holding the last description received
    pub fn description_seen(&self) -> Arc<Mutex<Option<String>>> {
        Arc::clone(&self.last_description)
    }
}

#[async_trait]
impl ExtractionCollaborator for ScriptedExtractor {
    async fn extract(&self, description: &str, _llm_api_key: &str) -> AppResult<Vec<ParsedItem>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_description.lock().unwrap() = Some(description.to_owned());
        match &self.script {
            ExtractionScript::RawOutput(raw) => parse_extraction_output(raw),
            ExtractionScript::Failure(code, message) => Err(AppError::new(*code, message.clone())),
        }
    }
}

// ============================================================================
// Scripted nutrition collaborator
// ============================================================================

/// What the scripted nutrition collaborator answers with
#[derive(Debug, Clone)]
pub enum NutritionScript {
    /// An HTTP status and body, interpreted by the selected provider's rules
    Http(u16, String),
    /// A transport failure
    Unreachable,
}

/// Nutrition collaborator replaying a canned provider response
pub struct ScriptedNutrition {
    script: NutritionScript,
    calls: Arc<AtomicUsize>,
    last_query: Arc<Mutex<Option<String>>>,
}

impl ScriptedNutrition {
    pub fn new(script: NutritionScript) -> Self {
        Self {
            script,
            calls: Arc::new(AtomicUsize::new(0)),
            last_query: Arc::new(Mutex::new(None)),
        }
    }

    pub fn ok(body: impl Into<String>) -> Self {
        Self::new(NutritionScript::Http(200, body.into()))
    }

    pub fn status(status: u16, body: impl Into<String>) -> Self {
        Self::new(NutritionScript::Http(status, body.into()))
    }

    pub fn unreachable() -> Self {
        Self::new(NutritionScript::Unreachable)
    }

    /// Shared counter of provider calls actually issued
    pub fn call_counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }

    /// Shared slot holding the last batched query
    pub fn query_seen(&self) -> Arc<Mutex<Option<String>>> {
        Arc::clone(&self.last_query)
    }
}

#[async_trait]
impl NutritionCollaborator for ScriptedNutrition {
    async fn fetch_nutrition(
        &self,
        items: &[ParsedItem],
        credentials: &NutritionCredentials,
    ) -> AppResult<Vec<ResolvedFoodItem>> {
        credentials.ensure_present()?;
        if items.is_empty() {
            return Ok(Vec::new());
        }

        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_query.lock().unwrap() = Some(build_query(items));

        match &self.script {
            NutritionScript::Http(status, body) => {
                let status = StatusCode::from_u16(*status).unwrap();
                match credentials.provider() {
                    NutritionProvider::CalorieNinjas => calorieninjas::interpret_response(status, body),
                    NutritionProvider::Nutritionix => nutritionix::interpret_response(status, body),
                }
            }
            NutritionScript::Unreachable => Err(AppError::provider_unavailable(
                "Failed to fetch nutrition data. Please check your API key and try again.",
            )),
        }
    }
}
