// ABOUTME: food-logger CLI - log a meal in plain language and see its nutrition
// ABOUTME: Interactive loop over stdin driving the workflow controller step by step
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Start an interactive session with credentials from the environment
//! export FOOD_LOGGER_LLM_API_KEY=sk-...
//! export CALORIENINJAS_API_KEY=...
//! food-logger
//!
//! # Use Nutritionix and submit a first description right away
//! food-logger --provider nutritionix --describe "2 eggs and a cup of coffee"
//!
//! # Show micronutrients in the results view
//! food-logger --micros
//! ```

mod helpers;

use anyhow::{Context, Result};
use clap::Parser;
use food_logger::config::{ConfigField, NutritionProvider, ServiceConfig, SessionConfig};
use food_logger::llm::{OpenAiCompatibleConfig, OpenAiCompatibleProvider, OpenAiExtractor};
use food_logger::logging;
use food_logger::nutrition::HttpNutritionClient;
use food_logger::workflow::FoodLogger;
use tokio::io::{self, AsyncBufReadExt, BufReader};
use tracing::info;

use helpers::commands::{self, Command};
use helpers::display;

#[derive(Parser)]
#[command(
    name = "food-logger",
    about = "Log a meal in plain language",
    long_about = "Describe a meal in plain language, review the items an LLM extracted, and see calories and macronutrients from CalorieNinjas or Nutritionix."
)]
struct Cli {
    /// Nutrition provider (calorieninjas or nutritionix), overrides the environment
    #[arg(long)]
    provider: Option<String>,

    /// Submit this meal description immediately
    #[arg(long)]
    describe: Option<String>,

    /// Show micronutrients in the results view
    #[arg(long)]
    micros: bool,
}

type Logger = FoodLogger<OpenAiExtractor, HttpNutritionClient>;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_from_env()?;

    let service = ServiceConfig::from_env()?;
    let mut session_config = SessionConfig::from_env();
    if let Some(provider) = cli.provider.as_deref() {
        session_config.nutrition_provider =
            NutritionProvider::parse(provider).context("invalid --provider")?;
    }

    let provider = OpenAiCompatibleProvider::new(OpenAiCompatibleConfig::from(&service))?;
    let mut logger: Logger = FoodLogger::new(
        session_config,
        OpenAiExtractor::new(provider),
        HttpNutritionClient::new(&service)?,
    );
    if cli.micros {
        logger.toggle_micros(true).await;
    }

    info!(provider = %logger.session().config().nutrition_provider, "Session started");

    if let Some(description) = cli.describe {
        println!("Looking up items...");
        logger.submit_description(description).await;
    }
    show(&mut logger).await;

    let mut lines = BufReader::new(io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match commands::parse(&line, logger.session().step()) {
            Command::Quit => break,
            Command::Describe(text) => {
                println!("Looking up items...");
                logger.submit_description(text).await;
            }
            Command::Confirm => {
                println!("Fetching nutrition data...");
                logger.confirm().await;
            }
            Command::Back => {
                logger.back().await;
            }
            Command::Remove(index) => {
                logger.remove_item(index).await;
            }
            Command::New => {
                logger.start_over().await;
            }
            Command::Micros(show_micros) => {
                logger.toggle_micros(show_micros).await;
            }
            Command::Set(field, value) => {
                logger.set_config(field, value.as_str()).await;
                if logger.session().error().is_none() {
                    println!("{} updated.", describe_field(field, &value));
                }
            }
            Command::Unknown(hint) => {
                println!("{hint}");
                continue;
            }
        }
        show(&mut logger).await;
    }

    info!("Session ended");
    Ok(())
}

/// Print the current view, then any error, which is cleared once shown
async fn show(logger: &mut Logger) {
    let snapshot = logger.snapshot();
    if let Some(error) = &snapshot.error {
        println!("Error: {error}");
        logger.dismiss_error().await;
    }
    print!("{}", display::render(&snapshot));
}

fn describe_field(field: ConfigField, value: &str) -> String {
    if field.is_secret() {
        format!("{field} ({} characters)", value.chars().count())
    } else {
        format!("{field} = {value}")
    }
}
