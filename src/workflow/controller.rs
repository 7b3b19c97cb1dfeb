// ABOUTME: Async controller that owns the session and performs the effects transitions request
// ABOUTME: Feeds collaborator outcomes back into the reducer as success or failure events
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use tracing::{debug, info, instrument, warn};

use super::event::{Effect, Event, Transition};
use super::reducer::transition;
use super::session::{Session, SessionSnapshot};
use crate::config::{ConfigField, SessionConfig};
use crate::extraction::ExtractionCollaborator;
use crate::nutrition::NutritionCollaborator;

/// Food logging controller
///
/// Owns exactly one [`Session`] and applies events strictly in order.
/// Taking `&mut self` for every event means a second call cannot start while
/// one is awaiting a collaborator; the reducer's loading gate covers
/// everything else.
pub struct FoodLogger<E, N> {
    session: Session,
    extractor: E,
    nutrition: N,
}

impl<E, N> FoodLogger<E, N>
where
    E: ExtractionCollaborator,
    N: NutritionCollaborator,
{
    /// Create a controller with a fresh session
    pub fn new(config: SessionConfig, extractor: E, nutrition: N) -> Self {
        Self {
            session: Session::new(config),
            extractor,
            nutrition,
        }
    }

    /// Current session
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Read-only projection of the current session
    pub fn snapshot(&self) -> SessionSnapshot {
        self.session.snapshot()
    }

    /// Apply an event, performing any outbound call it triggers
    #[instrument(skip_all, fields(step = %self.session.step()))]
    pub async fn dispatch(&mut self, event: Event) -> &Session {
        let mut pending = Some(event);
        while let Some(event) = pending.take() {
            let Transition { session, effect } = transition(&self.session, event);
            self.session = session;
            if let Some(effect) = effect {
                pending = Some(self.perform(effect).await);
            }
        }
        &self.session
    }

    async fn perform(&self, effect: Effect) -> Event {
        match effect {
            Effect::Extract {
                description,
                llm_api_key,
            } => {
                debug!("Requesting meal extraction");
                match self.extractor.extract(&description, &llm_api_key).await {
                    Ok(items) => {
                        info!(items = items.len(), "Extraction succeeded");
                        Event::ExtractionSucceeded(items)
                    }
                    Err(e) => {
                        warn!(code = %e.code, "Extraction failed: {}", e.message);
                        Event::ExtractionFailed(e.into())
                    }
                }
            }
            Effect::ResolveNutrition { items, credentials } => {
                debug!(provider = %credentials.provider(), "Requesting nutrition lookup");
                match self.nutrition.fetch_nutrition(&items, &credentials).await {
                    Ok(resolved) => {
                        info!(items = resolved.len(), "Nutrition lookup succeeded");
                        Event::NutritionSucceeded(resolved)
                    }
                    Err(e) => {
                        warn!(code = %e.code, "Nutrition lookup failed: {}", e.message);
                        Event::NutritionFailed(e.into())
                    }
                }
            }
        }
    }

    /// Replace the description without submitting
    pub async fn edit_description(&mut self, text: impl Into<String>) -> &Session {
        self.dispatch(Event::EditDescription(text.into())).await
    }

    /// Submit a description and run extraction
    pub async fn submit_description(&mut self, text: impl Into<String>) -> &Session {
        self.dispatch(Event::SubmitDescription(text.into())).await
    }

    /// Confirm the parsed items and run the nutrition lookup
    pub async fn confirm(&mut self) -> &Session {
        self.dispatch(Event::Confirm).await
    }

    /// Go back from review to the description
    pub async fn back(&mut self) -> &Session {
        self.dispatch(Event::Back).await
    }

    /// Remove a resolved item by zero-based index
    pub async fn remove_item(&mut self, index: usize) -> &Session {
        self.dispatch(Event::RemoveItem(index)).await
    }

    /// Discard results and return to the description
    pub async fn start_over(&mut self) -> &Session {
        self.dispatch(Event::StartOver).await
    }

    /// Update one configuration field
    pub async fn set_config(&mut self, field: ConfigField, value: impl Into<String>) -> &Session {
        self.dispatch(Event::SetConfig {
            field,
            value: value.into(),
        })
        .await
    }

    /// Show or hide micronutrients
    pub async fn toggle_micros(&mut self, show: bool) -> &Session {
        self.dispatch(Event::ToggleMicros(show)).await
    }

    /// Clear the current error
    pub async fn dismiss_error(&mut self) -> &Session {
        self.dispatch(Event::DismissError).await
    }
}
