// ABOUTME: CalorieNinjas nutrition API client and response normalization
// ABOUTME: GET /nutrition?query= with X-Api-Key, items map 1:1 onto ResolvedFoodItem
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::{debug, error, warn};

use crate::errors::{AppError, AppResult};
use crate::models::ResolvedFoodItem;
use food_logger_core::constants::service_names::CALORIENINJAS;

/// Message shown for every failed lookup
const FETCH_FAILED: &str =
    "Failed to fetch nutrition data. Please check your API key and try again.";

/// One entry of the `items` array
#[derive(Debug, Clone, Deserialize)]
pub struct CalorieNinjasItem {
    /// Food name
    pub name: String,
    /// Energy in kcal
    pub calories: Option<f64>,
    /// Protein in grams
    pub protein_g: Option<f64>,
    /// Total fat in grams
    pub fat_total_g: Option<f64>,
    /// Total carbohydrates in grams
    pub carbohydrates_total_g: Option<f64>,
    /// Sugar in grams
    pub sugar_g: Option<f64>,
    /// Fiber in grams
    pub fiber_g: Option<f64>,
    /// Sodium in milligrams
    pub sodium_mg: Option<f64>,
    /// Potassium in milligrams
    pub potassium_mg: Option<f64>,
    /// Cholesterol in milligrams
    pub cholesterol_mg: Option<f64>,
    /// Serving weight in grams
    pub serving_size_g: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct CalorieNinjasResponse {
    #[serde(default)]
    items: Vec<CalorieNinjasItem>,
}

impl From<CalorieNinjasItem> for ResolvedFoodItem {
    fn from(item: CalorieNinjasItem) -> Self {
        Self {
            name: item.name,
            found: true,
            calories: item.calories,
            protein_g: item.protein_g,
            fat_total_g: item.fat_total_g,
            carbohydrates_total_g: item.carbohydrates_total_g,
            sugar_g: item.sugar_g,
            fiber_g: item.fiber_g,
            sodium_mg: item.sodium_mg,
            potassium_mg: item.potassium_mg,
            cholesterol_mg: item.cholesterol_mg,
            serving_size_g: item.serving_size_g,
        }
    }
}

/// Interpret a `CalorieNinjas` HTTP response
///
/// # Errors
///
/// Returns `ProviderUnavailable` for any non-success status or an unreadable body;
/// the status itself is only logged.
pub fn interpret_response(status: StatusCode, body: &str) -> AppResult<Vec<ResolvedFoodItem>> {
    if !status.is_success() {
        warn!(service = CALORIENINJAS, %status, "Nutrition request rejected");
        return Err(AppError::provider_unavailable(FETCH_FAILED));
    }

    let parsed: CalorieNinjasResponse = serde_json::from_str(body).map_err(|e| {
        error!(service = CALORIENINJAS, "Failed to parse nutrition response: {}", e);
        AppError::provider_unavailable(FETCH_FAILED).with_source(e)
    })?;

    Ok(parsed.items.into_iter().map(ResolvedFoodItem::from).collect())
}

/// Issue the batched lookup
pub(super) async fn fetch(
    client: &Client,
    base_url: &str,
    query: &str,
    api_key: &str,
) -> AppResult<Vec<ResolvedFoodItem>> {
    let url = format!("{}/nutrition", base_url.trim_end_matches('/'));
    debug!(service = CALORIENINJAS, %url, query_len = query.len(), "Querying nutrition provider");

    let response = client
        .get(&url)
        .query(&[("query", query)])
        .header("X-Api-Key", api_key)
        .send()
        .await
        .map_err(|e| {
            error!(service = CALORIENINJAS, "Failed to reach nutrition provider: {}", e);
            AppError::provider_unavailable(FETCH_FAILED).with_source(e)
        })?;

    let status = response.status();
    let body = response.text().await.map_err(|e| {
        error!(service = CALORIENINJAS, "Failed to read nutrition response: {}", e);
        AppError::provider_unavailable(FETCH_FAILED).with_source(e)
    })?;
    interpret_response(status, &body)
}
