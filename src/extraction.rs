// ABOUTME: Meal extraction seam and validator for LLM output
// ABOUTME: Strips code fences, parses JSON, and accepts only lists of item_name/quantity objects
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Meal Extraction
//!
//! The extraction collaborator turns a free-text meal description into a list
//! of [`ParsedItem`]s. Whatever produces the raw text (an LLM in production),
//! its output passes through [`parse_extraction_output`] before the workflow
//! ever sees it. No semantic validation of food names happens here.

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use crate::errors::{AppError, AppResult};
use crate::models::ParsedItem;

const INVALID_RESPONSE: &str = "Invalid response from LLM. Please try again.";

/// Collaborator that extracts food items from a meal description
#[async_trait]
pub trait ExtractionCollaborator: Send + Sync {
    /// Extract items, in the order they appear in the description
    ///
    /// # Errors
    ///
    /// `MissingCredentials` if the key is empty, `ProviderUnavailable` if the
    /// service fails, `InvalidExtractionShape` if its output is not an item list.
    async fn extract(&self, description: &str, llm_api_key: &str) -> AppResult<Vec<ParsedItem>>;
}

/// Remove markdown code-fence markers a model may wrap its JSON in
#[must_use]
pub fn strip_code_fences(raw: &str) -> String {
    raw.replace("```json", "").replace("```", "").trim().to_owned()
}

/// Parse raw collaborator output into parsed items
///
/// # Errors
///
/// Returns `InvalidExtractionShape` if the text is not JSON or does not
/// describe a list of items.
pub fn parse_extraction_output(raw: &str) -> AppResult<Vec<ParsedItem>> {
    let cleaned = strip_code_fences(raw);
    let value: Value = serde_json::from_str(&cleaned).map_err(|e| {
        debug!(error = %e, "Extraction output is not valid JSON");
        AppError::invalid_extraction_shape(INVALID_RESPONSE).with_source(e)
    })?;
    validate_extraction_value(&value)
}

/// Validate an already-parsed JSON value as an ordered item list
///
/// `quantity` may be a string or a number; numbers are carried as their
/// decimal text.
///
/// # Errors
///
/// Returns `InvalidExtractionShape` if the value is not an array, or if any
/// element lacks a string `item_name` or a string/number `quantity`.
pub fn validate_extraction_value(value: &Value) -> AppResult<Vec<ParsedItem>> {
    let Value::Array(elements) = value else {
        debug!(kind = json_kind(value), "Extraction output is not a list");
        return Err(AppError::invalid_extraction_shape(INVALID_RESPONSE));
    };

    elements
        .iter()
        .enumerate()
        .map(|(index, element)| parse_element(index, element))
        .collect()
}

fn parse_element(index: usize, element: &Value) -> AppResult<ParsedItem> {
    let Value::Object(fields) = element else {
        debug!(index, kind = json_kind(element), "Extraction element is not an object");
        return Err(AppError::invalid_extraction_shape(INVALID_RESPONSE));
    };

    let Some(Value::String(item_name)) = fields.get("item_name") else {
        debug!(index, "Extraction element has no string item_name");
        return Err(AppError::invalid_extraction_shape(INVALID_RESPONSE));
    };

    let quantity = match fields.get("quantity") {
        Some(Value::String(text)) => text.clone(),
        Some(Value::Number(number)) => number.to_string(),
        _ => {
            debug!(index, "Extraction element has no usable quantity");
            return Err(AppError::invalid_extraction_shape(INVALID_RESPONSE));
        }
    };

    Ok(ParsedItem::new(item_name.clone(), quantity))
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
