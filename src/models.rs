// ABOUTME: Core data models for meal descriptions, parsed items, and resolved nutrition records
// ABOUTME: Defines ParsedItem, ResolvedFoodItem (the canonical record), Totals, and Step
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! These types flow between the extraction collaborator, the nutrition
//! adapters, the aggregation engine, and the workflow session.
//!
//! ## Key Types
//!
//! - **`ParsedItem`**: one named quantity produced by meal extraction
//! - **`ResolvedFoodItem`**: the canonical nutrition record every provider is normalized into
//! - **`Totals`**: aggregated macros, always derived from the resolved items
//! - **`Step`**: which part of the workflow is currently active

use serde::{Deserialize, Serialize};
use std::fmt;

/// A food item extracted from a free-text meal description
///
/// The quantity is opaque text ("2", "1 cup", "a handful") and is forwarded
/// to the nutrition provider as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedItem {
    /// English food name, e.g. "egg"
    pub item_name: String,
    /// Free-form quantity, e.g. "2" or "1 cup"
    pub quantity: String,
}

impl ParsedItem {
    /// Create a parsed item
    #[must_use]
    pub fn new(item_name: impl Into<String>, quantity: impl Into<String>) -> Self {
        Self {
            item_name: item_name.into(),
            quantity: quantity.into(),
        }
    }

    /// Natural-language fragment used in batched provider queries ("2 egg")
    #[must_use]
    pub fn query_fragment(&self) -> String {
        let quantity = self.quantity.trim();
        let name = self.item_name.trim();
        if quantity.is_empty() {
            name.to_owned()
        } else {
            format!("{quantity} {name}")
        }
    }
}

/// Canonical nutrition record produced by every nutrition provider adapter
///
/// When `found` is false every numeric field is `None` and must be displayed
/// as missing data, never as zero.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ResolvedFoodItem {
    /// Food name as reported by the provider
    pub name: String,
    /// Whether the provider resolved this item
    pub found: bool,
    /// Energy in kcal
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calories: Option<f64>,
    /// Protein in grams
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protein_g: Option<f64>,
    /// Total fat in grams
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fat_total_g: Option<f64>,
    /// Total carbohydrates in grams
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carbohydrates_total_g: Option<f64>,
    /// Sugar in grams
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sugar_g: Option<f64>,
    /// Dietary fiber in grams
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fiber_g: Option<f64>,
    /// Sodium in milligrams
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sodium_mg: Option<f64>,
    /// Potassium in milligrams
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub potassium_mg: Option<f64>,
    /// Cholesterol in milligrams
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cholesterol_mg: Option<f64>,
    /// Serving weight in grams
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serving_size_g: Option<f64>,
}

impl ResolvedFoodItem {
    /// Record for an item the provider could not resolve
    #[must_use]
    pub fn not_found(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            found: false,
            ..Self::default()
        }
    }
}

/// Aggregated macro totals, each rounded to one decimal place
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Totals {
    /// Total energy in kcal
    pub calories: f64,
    /// Total protein in grams
    pub protein: f64,
    /// Total fat in grams
    pub fat: f64,
    /// Total carbohydrates in grams
    pub carbs: f64,
}

/// Workflow step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Step {
    /// Entering the meal description
    #[default]
    Input,
    /// Reviewing the extracted items before lookup
    Verify,
    /// Viewing resolved items and totals
    Results,
}

impl Step {
    /// Uppercase step name, matching the serialized form
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Input => "INPUT",
            Self::Verify => "VERIFY",
            Self::Results => "RESULTS",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
