// ABOUTME: Aggregation engine computing macro totals from resolved food items
// ABOUTME: Sums found items only and rounds each total half-up to one decimal place
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Macro aggregation
//!
//! Totals are always recomputed from the full item list. They are never
//! adjusted incrementally, so rounding cannot drift across removals.

use crate::models::{ResolvedFoodItem, Totals};

/// Compute totals for the given items
///
/// Only items with `found == true` contribute; a missing field on a found
/// item contributes zero.
#[must_use]
pub fn aggregate(items: &[ResolvedFoodItem]) -> Totals {
    let raw = items
        .iter()
        .filter(|item| item.found)
        .fold(Totals::default(), |acc, item| Totals {
            calories: acc.calories + item.calories.unwrap_or(0.0),
            protein: acc.protein + item.protein_g.unwrap_or(0.0),
            fat: acc.fat + item.fat_total_g.unwrap_or(0.0),
            carbs: acc.carbs + item.carbohydrates_total_g.unwrap_or(0.0),
        });

    Totals {
        calories: round_one_decimal(raw.calories),
        protein: round_one_decimal(raw.protein),
        fat: round_one_decimal(raw.fat),
        carbs: round_one_decimal(raw.carbs),
    }
}

/// Round half-up to one decimal place
#[must_use]
pub fn round_one_decimal(value: f64) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    (value.mul_add(10.0, 0.5)).floor() / 10.0
}
