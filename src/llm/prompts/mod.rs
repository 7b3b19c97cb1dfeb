// ABOUTME: System prompts for LLM interactions loaded at compile time
// ABOUTME: Provides the meal extraction prompt demanding strict JSON item lists
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # System Prompts
//!
//! Prompts are loaded at compile time from markdown files for easy maintenance.

/// Meal extraction system prompt
///
/// Instructs the model to answer with a bare JSON array of
/// `{ "item_name", "quantity" }` objects and nothing else.
pub const MEAL_EXTRACTION_PROMPT: &str = include_str!("meal_extraction.md");

/// Get the system prompt used for meal extraction
#[must_use]
pub const fn get_meal_extraction_prompt() -> &'static str {
    MEAL_EXTRACTION_PROMPT
}
