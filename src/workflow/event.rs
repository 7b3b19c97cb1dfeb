// ABOUTME: Workflow events, outbound effects, and the transition result type
// ABOUTME: Effects describe the single external call a transition asks the controller to perform
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;

use super::session::Session;
use crate::config::ConfigField;
use crate::errors::SessionError;
use crate::models::{ParsedItem, ResolvedFoodItem};
use crate::nutrition::NutritionCredentials;

/// Something that happened: a user intent or a collaborator outcome
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Replace the meal description without submitting it
    EditDescription(String),
    /// Submit a meal description for extraction
    SubmitDescription(String),
    /// Extraction produced a well-formed item list
    ExtractionSucceeded(Vec<ParsedItem>),
    /// Extraction failed
    ExtractionFailed(SessionError),
    /// Accept the parsed items and look up nutrition
    Confirm,
    /// Nutrition lookup returned records
    NutritionSucceeded(Vec<ResolvedFoodItem>),
    /// Nutrition lookup failed
    NutritionFailed(SessionError),
    /// Return from review to editing the description
    Back,
    /// Remove one resolved item by zero-based index
    RemoveItem(usize),
    /// Discard results and start a new entry
    StartOver,
    /// Update one configuration field
    SetConfig {
        /// Field to update
        field: ConfigField,
        /// New value
        value: String,
    },
    /// Show or hide micronutrients
    ToggleMicros(bool),
    /// Clear the current error
    DismissError,
}

/// The outbound call a transition requests
#[derive(Clone, PartialEq)]
pub enum Effect {
    /// Run meal extraction
    Extract {
        /// Meal description as submitted
        description: String,
        /// Key for the extraction service
        llm_api_key: String,
    },
    /// Resolve nutrition for the reviewed items
    ResolveNutrition {
        /// Items in review order
        items: Vec<ParsedItem>,
        /// Credentials of the selected provider
        credentials: NutritionCredentials,
    },
}

impl fmt::Debug for Effect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Extract { description, .. } => f
                .debug_struct("Extract")
                .field("description", description)
                .field("llm_api_key", &"<redacted>")
                .finish(),
            Self::ResolveNutrition { items, credentials } => f
                .debug_struct("ResolveNutrition")
                .field("items", items)
                .field("credentials", credentials)
                .finish(),
        }
    }
}

/// Result of applying one event
#[derive(Debug, Clone)]
pub struct Transition {
    /// The next session value
    pub session: Session,
    /// Outbound call to perform, if the event was accepted and needs one
    pub effect: Option<Effect>,
}
