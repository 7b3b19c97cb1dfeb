// ABOUTME: Main library entry point for the natural-language food logger
// ABOUTME: Turns meal descriptions into itemized nutrition records and macro totals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Food Logger
//!
//! Log a meal in plain language. An LLM itemizes the description, the user
//! reviews the items, and a nutrition provider resolves them to calories and
//! macronutrients with totals computed locally.
//!
//! ## Architecture
//!
//! - **Workflow**: a pure reducer over `Session` plus an async controller
//! - **Extraction**: LLM output validation and the extraction seam
//! - **Nutrition**: `CalorieNinjas` and `Nutritionix` adapters behind one seam
//! - **Aggregation**: totals over found items, rounded to one decimal
//! - **Config**: environment-only credentials and endpoints
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use food_logger::config::{ServiceConfig, SessionConfig};
//! use food_logger::llm::{OpenAiCompatibleConfig, OpenAiCompatibleProvider, OpenAiExtractor};
//! use food_logger::nutrition::HttpNutritionClient;
//! use food_logger::workflow::FoodLogger;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let service = ServiceConfig::from_env()?;
//!     let provider = OpenAiCompatibleProvider::new(OpenAiCompatibleConfig::from(&service))?;
//!     let mut logger = FoodLogger::new(
//!         SessionConfig::from_env(),
//!         OpenAiExtractor::new(provider),
//!         HttpNutritionClient::new(&service)?,
//!     );
//!
//!     logger.submit_description("2 eggs and a cup of coffee").await;
//!     logger.confirm().await;
//!     println!("{:?}", logger.snapshot().totals);
//!     Ok(())
//! }
//! ```

/// Macro totals over resolved items
pub mod aggregation;

/// Environment configuration and typed configuration fields
pub mod config;

/// Meal extraction seam and output validation
pub mod extraction;

/// Chat completions client and the LLM-backed extractor
pub mod llm;

/// Structured logging setup
pub mod logging;

/// Parsed items, resolved nutrition records, totals, and steps
pub mod models;

/// Nutrition provider adapters
pub mod nutrition;

/// Session state machine and controller
pub mod workflow;

pub use food_logger_core::{constants, errors};
