// ABOUTME: Food logging workflow: session state, events, pure reducer, and async controller
// ABOUTME: Drives INPUT -> VERIFY -> RESULTS with the loading flag as the single in-flight gate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Workflow
//!
//! The workflow is split into a pure core and an effectful shell:
//!
//! - **`reducer`**: `transition(&Session, Event) -> Transition`, total and
//!   side-effect free. Illegal events return the session unchanged.
//! - **`controller`**: `FoodLogger` owns the one `Session`, performs the
//!   outbound call a transition asks for, and feeds the outcome back in.

mod controller;
mod event;
mod reducer;
mod session;

pub use controller::FoodLogger;
pub use event::{Effect, Event, Transition};
pub use reducer::{reduce, transition};
pub use session::{Session, SessionSnapshot};
