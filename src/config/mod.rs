// ABOUTME: Configuration module for session credentials and service endpoints
// ABOUTME: Environment-only configuration with typed provider selection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration management
//!
//! - **environment**: `SessionConfig` (credentials) and `ServiceConfig` (endpoints)
//! - **types**: `NutritionProvider` and `ConfigField`

/// Environment-based configuration loading
pub mod environment;

/// Strongly typed configuration enums
pub mod types;

pub use environment::{ConfigSnapshot, ServiceConfig, SessionConfig};
pub use types::{ConfigField, NutritionProvider};
