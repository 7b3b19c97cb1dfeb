// ABOUTME: Session value owned by the workflow controller and its read-only snapshot projection
// ABOUTME: Holds step, loading gate, error, input text, item lists, totals, and configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::Serialize;

use crate::config::{ConfigSnapshot, SessionConfig};
use crate::errors::SessionError;
use crate::models::{ParsedItem, ResolvedFoodItem, Step, Totals};

/// Complete state of one food logging session
///
/// Only the reducer changes a session; everyone else reads it through the
/// getters or a [`SessionSnapshot`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    pub(super) step: Step,
    pub(super) loading: bool,
    pub(super) error: Option<SessionError>,
    pub(super) input_text: String,
    pub(super) parsed_items: Vec<ParsedItem>,
    pub(super) food_items: Vec<ResolvedFoodItem>,
    pub(super) totals: Totals,
    pub(super) config: SessionConfig,
    pub(super) show_micros: bool,
}

impl Session {
    /// Fresh session at INPUT with the given configuration
    #[must_use]
    pub fn new(config: SessionConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Current step
    #[must_use]
    pub const fn step(&self) -> Step {
        self.step
    }

    /// Whether an outbound call is in flight
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// Error to show the user, if any
    #[must_use]
    pub const fn error(&self) -> Option<&SessionError> {
        self.error.as_ref()
    }

    /// Meal description as last entered
    #[must_use]
    pub fn input_text(&self) -> &str {
        &self.input_text
    }

    /// Items awaiting review
    #[must_use]
    pub fn parsed_items(&self) -> &[ParsedItem] {
        &self.parsed_items
    }

    /// Resolved nutrition records
    #[must_use]
    pub fn food_items(&self) -> &[ResolvedFoodItem] {
        &self.food_items
    }

    /// Totals over the resolved records
    #[must_use]
    pub const fn totals(&self) -> Totals {
        self.totals
    }

    /// Current configuration, secrets included
    #[must_use]
    pub const fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Whether micronutrients are displayed
    #[must_use]
    pub const fn show_micros(&self) -> bool {
        self.show_micros
    }

    /// Read-only projection with secrets reduced to "is set" flags
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            step: self.step,
            loading: self.loading,
            error: self.error.clone(),
            input_text: self.input_text.clone(),
            parsed_items: self.parsed_items.clone(),
            food_items: self.food_items.clone(),
            totals: self.totals,
            configuration: self.config.redacted(),
            show_micros: self.show_micros,
        }
    }
}

/// Serializable view of a session for rendering and logs
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionSnapshot {
    /// Current step
    pub step: Step,
    /// Whether an outbound call is in flight
    pub loading: bool,
    /// Error to show the user
    pub error: Option<SessionError>,
    /// Meal description
    pub input_text: String,
    /// Items awaiting review
    pub parsed_items: Vec<ParsedItem>,
    /// Resolved nutrition records
    pub food_items: Vec<ResolvedFoodItem>,
    /// Totals over the resolved records
    pub totals: Totals,
    /// Configuration without secrets
    pub configuration: ConfigSnapshot,
    /// Whether micronutrients are displayed
    pub show_micros: bool,
}
