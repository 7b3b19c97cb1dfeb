// ABOUTME: Pure transition function for the food logging workflow
// ABOUTME: Applies guards, recomputes totals, and reports the outbound effect for accepted submits and confirms
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! The transition function is total. Events that are not legal in the
//! current state leave the session unchanged, and guard failures set
//! `error` without changing step. Nothing here performs I/O.

use super::event::{Effect, Event, Transition};
use super::session::Session;
use crate::aggregation::aggregate;
use crate::config::{NutritionProvider, SessionConfig};
use crate::errors::{AppError, AppResult, SessionError};
use crate::models::{ParsedItem, ResolvedFoodItem, Step, Totals};
use crate::nutrition::NutritionCredentials;

/// Apply one event to a session
#[must_use]
pub fn transition(session: &Session, event: Event) -> Transition {
    let mut next = session.clone();
    let effect = apply(&mut next, event);
    Transition {
        session: next,
        effect,
    }
}

/// Apply one event and keep only the resulting session
#[must_use]
pub fn reduce(session: &Session, event: Event) -> Session {
    transition(session, event).session
}

fn apply(s: &mut Session, event: Event) -> Option<Effect> {
    match event {
        Event::EditDescription(text) => edit_description(s, text),
        Event::SubmitDescription(text) => return submit(s, text),
        Event::ExtractionSucceeded(items) => extraction_finished(s, Ok(items)),
        Event::ExtractionFailed(error) => extraction_finished(s, Err(error)),
        Event::Confirm => return confirm(s),
        Event::NutritionSucceeded(items) => nutrition_finished(s, Ok(items)),
        Event::NutritionFailed(error) => nutrition_finished(s, Err(error)),
        Event::Back => back(s),
        Event::RemoveItem(index) => remove_item(s, index),
        Event::StartOver => start_over(s),
        Event::SetConfig { field, value } => {
            if let Err(e) = s.config.apply(field, &value) {
                s.error = Some(e.into());
            }
        }
        Event::ToggleMicros(show) => s.show_micros = show,
        Event::DismissError => s.error = None,
    }
    None
}

fn edit_description(s: &mut Session, text: String) {
    if s.step == Step::Input && !s.loading {
        s.input_text = text;
    }
}

fn extraction_finished(s: &mut Session, outcome: Result<Vec<ParsedItem>, SessionError>) {
    if s.step != Step::Input || !s.loading {
        return;
    }
    s.loading = false;
    match outcome {
        Ok(items) => {
            s.parsed_items = items;
            s.step = Step::Verify;
        }
        Err(error) => s.error = Some(error),
    }
}

fn nutrition_finished(s: &mut Session, outcome: Result<Vec<ResolvedFoodItem>, SessionError>) {
    if s.step != Step::Verify || !s.loading {
        return;
    }
    s.loading = false;
    match outcome {
        Ok(items) => {
            s.totals = aggregate(&items);
            s.food_items = items;
            s.step = Step::Results;
        }
        Err(error) => s.error = Some(error),
    }
}

fn back(s: &mut Session) {
    if s.step == Step::Verify && !s.loading {
        s.parsed_items.clear();
        s.error = None;
        s.step = Step::Input;
    }
}

fn remove_item(s: &mut Session, index: usize) {
    if s.step != Step::Results {
        return;
    }
    if index < s.food_items.len() {
        s.food_items.remove(index);
        s.totals = aggregate(&s.food_items);
    } else {
        let message = format!("There is no item number {}.", index.saturating_add(1));
        s.error = Some(AppError::invalid_input(message).into());
    }
}

fn start_over(s: &mut Session) {
    if s.step == Step::Results {
        s.parsed_items.clear();
        s.food_items.clear();
        s.totals = Totals::default();
        s.error = None;
        s.step = Step::Input;
    }
}

fn submit(s: &mut Session, text: String) -> Option<Effect> {
    if s.step != Step::Input || s.loading {
        return None;
    }
    s.input_text = text;

    let llm_api_key = match submit_credentials(&s.config) {
        Ok(key) => key,
        Err(e) => {
            s.error = Some(e.into());
            return None;
        }
    };

    let description = s.input_text.trim();
    if description.is_empty() {
        s.error = Some(AppError::empty_input().into());
        return None;
    }

    let effect = Effect::Extract {
        description: description.to_owned(),
        llm_api_key,
    };
    s.error = None;
    s.loading = true;
    Some(effect)
}

fn confirm(s: &mut Session) -> Option<Effect> {
    if s.step != Step::Verify || s.loading {
        return None;
    }

    let credentials = NutritionCredentials::from_config(&s.config);
    if let Err(e) = credentials.ensure_present() {
        s.error = Some(SessionError::from(e));
        return None;
    }

    s.error = None;
    s.loading = true;
    Some(Effect::ResolveNutrition {
        items: s.parsed_items.clone(),
        credentials,
    })
}

/// Every credential a full run needs, checked before anything is sent
fn submit_credentials(config: &SessionConfig) -> AppResult<String> {
    let llm_present = config.require_llm_api_key().is_ok();
    let nutrition_present = NutritionCredentials::from_config(config)
        .ensure_present()
        .is_ok();

    if llm_present && nutrition_present {
        return config.require_llm_api_key().map(str::to_owned);
    }

    let message = match config.nutrition_provider {
        NutritionProvider::CalorieNinjas => {
            "Please provide both API keys in the configuration panel."
        }
        NutritionProvider::Nutritionix => {
            "Please provide the LLM API key and the Nutritionix App ID and App Key in the configuration panel."
        }
    };
    Err(AppError::missing_credentials(message))
}
