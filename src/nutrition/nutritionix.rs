// ABOUTME: Nutritionix natural-language nutrients client and response normalization
// ABOUTME: POST /natural/nutrients with app credentials, nf_* fields renamed, 404 means no results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, warn};

use crate::errors::{AppError, AppResult};
use crate::models::ResolvedFoodItem;
use food_logger_core::constants::service_names::NUTRITIONIX;

/// Message shown for every failed lookup
const FETCH_FAILED: &str =
    "Failed to fetch nutrition data. Please check your App ID and App Key and try again.";

/// One entry of the `foods` array
#[derive(Debug, Clone, Deserialize)]
pub struct NutritionixFood {
    /// Food name
    pub food_name: String,
    /// Energy in kcal
    pub nf_calories: Option<f64>,
    /// Protein in grams
    pub nf_protein: Option<f64>,
    /// Total fat in grams
    pub nf_total_fat: Option<f64>,
    /// Total carbohydrates in grams
    pub nf_total_carbohydrate: Option<f64>,
    /// Sugars in grams
    pub nf_sugars: Option<f64>,
    /// Dietary fiber in grams
    pub nf_dietary_fiber: Option<f64>,
    /// Sodium in milligrams
    pub nf_sodium: Option<f64>,
    /// Potassium in milligrams
    pub nf_potassium: Option<f64>,
    /// Cholesterol in milligrams
    pub nf_cholesterol: Option<f64>,
    /// Serving weight in grams
    pub serving_weight_grams: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct NutritionixResponse {
    #[serde(default)]
    foods: Vec<NutritionixFood>,
}

#[derive(Debug, Serialize)]
struct NutrientsRequest<'a> {
    query: &'a str,
}

impl From<NutritionixFood> for ResolvedFoodItem {
    fn from(food: NutritionixFood) -> Self {
        Self {
            name: food.food_name,
            found: true,
            calories: food.nf_calories,
            protein_g: food.nf_protein,
            fat_total_g: food.nf_total_fat,
            carbohydrates_total_g: food.nf_total_carbohydrate,
            sugar_g: food.nf_sugars,
            fiber_g: food.nf_dietary_fiber,
            sodium_mg: food.nf_sodium,
            potassium_mg: food.nf_potassium,
            cholesterol_mg: food.nf_cholesterol,
            serving_size_g: food.serving_weight_grams,
        }
    }
}

/// Interpret a `Nutritionix` HTTP response
///
/// A 404 means the query matched no foods and yields an empty list.
///
/// # Errors
///
/// Returns `ProviderUnavailable` for any other non-success status or an
/// unreadable body.
pub fn interpret_response(status: StatusCode, body: &str) -> AppResult<Vec<ResolvedFoodItem>> {
    if status == StatusCode::NOT_FOUND {
        debug!(service = NUTRITIONIX, "No foods matched the query");
        return Ok(Vec::new());
    }
    if !status.is_success() {
        warn!(service = NUTRITIONIX, %status, "Nutrition request rejected");
        return Err(AppError::provider_unavailable(FETCH_FAILED));
    }

    let parsed: NutritionixResponse = serde_json::from_str(body).map_err(|e| {
        error!(service = NUTRITIONIX, "Failed to parse nutrition response: {}", e);
        AppError::provider_unavailable(FETCH_FAILED).with_source(e)
    })?;

    Ok(parsed.foods.into_iter().map(ResolvedFoodItem::from).collect())
}

/// Issue the batched lookup
pub(super) async fn fetch(
    client: &Client,
    base_url: &str,
    query: &str,
    app_id: &str,
    app_key: &str,
) -> AppResult<Vec<ResolvedFoodItem>> {
    let url = format!("{}/natural/nutrients", base_url.trim_end_matches('/'));
    debug!(service = NUTRITIONIX, %url, query_len = query.len(), "Querying nutrition provider");

    let response = client
        .post(&url)
        .header("x-app-id", app_id)
        .header("x-app-key", app_key)
        .json(&NutrientsRequest { query })
        .send()
        .await
        .map_err(|e| {
            error!(service = NUTRITIONIX, "Failed to reach nutrition provider: {}", e);
            AppError::provider_unavailable(FETCH_FAILED).with_source(e)
        })?;

    let status = response.status();
    let body = response.text().await.map_err(|e| {
        error!(service = NUTRITIONIX, "Failed to read nutrition response: {}", e);
        AppError::provider_unavailable(FETCH_FAILED).with_source(e)
    })?;
    interpret_response(status, &body)
}
