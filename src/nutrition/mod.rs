// ABOUTME: Nutrition provider adapter normalizing CalorieNinjas and Nutritionix into one record shape
// ABOUTME: Tagged credentials, batched query construction, and the HTTP nutrition collaborator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Nutrition Providers
//!
//! Every provider is reached with exactly one batched natural-language query
//! per confirmation and normalized into [`ResolvedFoodItem`]s. Items the
//! provider does not return are simply absent from the output, and results
//! are kept in the order the provider returned them.
//!
//! ## Key Types
//!
//! - **`NutritionCredentials`**: tagged credential shape, one variant per provider
//! - **`NutritionCollaborator`**: async seam used by the workflow controller
//! - **`HttpNutritionClient`**: reqwest-backed implementation dispatching on the tag

/// `CalorieNinjas` wire format and response interpretation
pub mod calorieninjas;
/// `Nutritionix` wire format and response interpretation
pub mod nutritionix;

use async_trait::async_trait;
use reqwest::Client;
use std::fmt;
use tracing::{info, instrument};

use crate::config::{NutritionProvider, ServiceConfig, SessionConfig};
use crate::errors::{AppError, AppResult};
use crate::models::{ParsedItem, ResolvedFoodItem};

/// Credentials for the selected nutrition provider
///
/// The variant is the provider tag; each provider has its own credential shape.
#[derive(Clone, PartialEq, Eq)]
pub enum NutritionCredentials {
    /// `CalorieNinjas` single API key
    CalorieNinjas {
        /// API key sent as `X-Api-Key`
        api_key: String,
    },
    /// `Nutritionix` application id and key pair
    Nutritionix {
        /// Application id sent as `x-app-id`
        app_id: String,
        /// Application key sent as `x-app-key`
        app_key: String,
    },
}

impl NutritionCredentials {
    /// Credentials for the provider currently selected in the session configuration
    #[must_use]
    pub fn from_config(config: &SessionConfig) -> Self {
        match config.nutrition_provider {
            NutritionProvider::CalorieNinjas => Self::CalorieNinjas {
                api_key: config.nutrition_api_key.trim().to_owned(),
            },
            NutritionProvider::Nutritionix => Self::Nutritionix {
                app_id: config.nutritionix_app_id.trim().to_owned(),
                app_key: config.nutritionix_app_key.trim().to_owned(),
            },
        }
    }

    /// Provider tag
    #[must_use]
    pub const fn provider(&self) -> NutritionProvider {
        match self {
            Self::CalorieNinjas { .. } => NutritionProvider::CalorieNinjas,
            Self::Nutritionix { .. } => NutritionProvider::Nutritionix,
        }
    }

    /// Check every credential the provider needs is non-empty
    ///
    /// # Errors
    ///
    /// Returns `MissingCredentials` naming the first missing value.
    pub fn ensure_present(&self) -> AppResult<()> {
        match self {
            Self::CalorieNinjas { api_key } if api_key.trim().is_empty() => Err(
                AppError::missing_credentials("Nutrition API Key is required."),
            ),
            Self::Nutritionix { app_id, .. } if app_id.trim().is_empty() => Err(
                AppError::missing_credentials("Nutritionix App ID is required."),
            ),
            Self::Nutritionix { app_key, .. } if app_key.trim().is_empty() => Err(
                AppError::missing_credentials("Nutritionix App Key is required."),
            ),
            _ => Ok(()),
        }
    }
}

impl fmt::Debug for NutritionCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CalorieNinjas { .. } => f
                .debug_struct("CalorieNinjas")
                .field("api_key", &"<redacted>")
                .finish(),
            Self::Nutritionix { app_id, .. } => f
                .debug_struct("Nutritionix")
                .field("app_id", app_id)
                .field("app_key", &"<redacted>")
                .finish(),
        }
    }
}

/// Build the single batched query, e.g. `"2 egg, 1 cup coffee"`
#[must_use]
pub fn build_query(items: &[ParsedItem]) -> String {
    items
        .iter()
        .map(ParsedItem::query_fragment)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Collaborator that resolves parsed items to nutrition records
#[async_trait]
pub trait NutritionCollaborator: Send + Sync {
    /// Resolve all items with one provider call
    ///
    /// # Errors
    ///
    /// `MissingCredentials` before any network call if a credential is empty,
    /// `ProviderUnavailable` on transport or authentication failure.
    async fn fetch_nutrition(
        &self,
        items: &[ParsedItem],
        credentials: &NutritionCredentials,
    ) -> AppResult<Vec<ResolvedFoodItem>>;
}

/// Nutrition collaborator talking to the real provider APIs
pub struct HttpNutritionClient {
    client: Client,
    calorieninjas_base_url: String,
    nutritionix_base_url: String,
}

impl HttpNutritionClient {
    /// Create a client using the configured endpoints and timeouts
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: &ServiceConfig) -> AppResult<Self> {
        let client = Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| AppError::internal(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            calorieninjas_base_url: config.calorieninjas_base_url.clone(),
            nutritionix_base_url: config.nutritionix_base_url.clone(),
        })
    }
}

#[async_trait]
impl NutritionCollaborator for HttpNutritionClient {
    #[instrument(skip_all, fields(provider = %credentials.provider(), items = items.len()))]
    async fn fetch_nutrition(
        &self,
        items: &[ParsedItem],
        credentials: &NutritionCredentials,
    ) -> AppResult<Vec<ResolvedFoodItem>> {
        credentials.ensure_present()?;
        if items.is_empty() {
            return Ok(Vec::new());
        }

        let query = build_query(items);
        let resolved = match credentials {
            NutritionCredentials::CalorieNinjas { api_key } => {
                calorieninjas::fetch(&self.client, &self.calorieninjas_base_url, &query, api_key)
                    .await?
            }
            NutritionCredentials::Nutritionix { app_id, app_key } => {
                nutritionix::fetch(
                    &self.client,
                    &self.nutritionix_base_url,
                    &query,
                    app_id,
                    app_key,
                )
                .await?
            }
        };

        info!(
            requested = items.len(),
            returned = resolved.len(),
            "Nutrition lookup completed"
        );
        Ok(resolved)
    }
}
