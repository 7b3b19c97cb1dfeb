// ABOUTME: Output formatting helpers for the food-logger CLI
// ABOUTME: Renders the input, verify, and results views from a session snapshot
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt::Write as _;

use food_logger::models::{ParsedItem, ResolvedFoodItem, Step, Totals};
use food_logger::workflow::SessionSnapshot;

const RULE_WIDTH: usize = 50;

/// Render whichever view the snapshot's step calls for
pub fn render(snapshot: &SessionSnapshot) -> String {
    match snapshot.step {
        Step::Input => render_input(snapshot),
        Step::Verify => render_verify(&snapshot.parsed_items),
        Step::Results => {
            render_results(&snapshot.food_items, snapshot.totals, snapshot.show_micros)
        }
    }
}

fn render_input(snapshot: &SessionSnapshot) -> String {
    let config = &snapshot.configuration;
    let mut out = String::new();
    let _ = writeln!(
        out,
        "\nDescribe your meal (provider: {}).",
        config.nutrition_provider.display_name()
    );
    if !config.llm_api_key_set {
        out.push_str("  LLM API key not set: use `:set llm_api_key <key>`\n");
    }
    out.push_str("Commands: <description> | :set <field> <value> | :micros on|off | quit\n");
    out
}

/// Review list shown before the nutrition lookup
pub fn render_verify(items: &[ParsedItem]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\nWe found these items:");
    let _ = writeln!(out, "{}", "=".repeat(RULE_WIDTH));
    if items.is_empty() {
        out.push_str("   (no items recognized)\n");
    }
    for (i, item) in items.iter().enumerate() {
        let _ = writeln!(out, "{:>3}. {} ({})", i + 1, item.item_name, item.quantity);
    }
    out.push_str("Look up nutrition? [y] confirm  [b] back\n");
    out
}

/// Results table with totals and optional micronutrient rows
pub fn render_results(items: &[ResolvedFoodItem], totals: Totals, show_micros: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\nNutrition results");
    let _ = writeln!(out, "{}", "=".repeat(RULE_WIDTH));
    if items.is_empty() {
        out.push_str("   No foods were recognized by the provider.\n");
    }
    for (i, item) in items.iter().enumerate() {
        render_item(&mut out, i + 1, item, show_micros);
    }
    let _ = writeln!(out, "{}", "-".repeat(RULE_WIDTH));
    let _ = writeln!(
        out,
        "TOTAL  {} kcal | protein {} g | fat {} g | carbs {} g",
        format_number(totals.calories),
        format_number(totals.protein),
        format_number(totals.fat),
        format_number(totals.carbs)
    );
    out.push_str("Commands: remove <n> | micros on|off | new | quit\n");
    out
}

fn render_item(out: &mut String, position: usize, item: &ResolvedFoodItem, show_micros: bool) {
    if !item.found {
        let _ = writeln!(out, "{position:>3}. {} (not found)", item.name);
        let _ = writeln!(out, "     No data available");
        return;
    }

    let _ = writeln!(out, "{position:>3}. {}", item.name);
    let _ = writeln!(
        out,
        "     {} kcal | protein {} g | fat {} g | carbs {} g",
        format_value(item.calories),
        format_value(item.protein_g),
        format_value(item.fat_total_g),
        format_value(item.carbohydrates_total_g)
    );
    if show_micros {
        let _ = writeln!(
            out,
            "     sugar {} g | fiber {} g | sodium {} mg | potassium {} mg | cholesterol {} mg",
            format_value(item.sugar_g),
            format_value(item.fiber_g),
            format_value(item.sodium_mg),
            format_value(item.potassium_mg),
            format_value(item.cholesterol_mg)
        );
    }
}

/// Missing numbers are shown as "no data", never as zero
pub fn format_value(value: Option<f64>) -> String {
    value.map_or_else(|| "no data".to_owned(), format_number)
}

fn format_number(value: f64) -> String {
    format!("{value:.1}")
}
