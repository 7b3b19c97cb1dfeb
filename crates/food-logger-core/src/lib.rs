// ABOUTME: Core types and constants for the Food Logger workspace
// ABOUTME: Foundation crate with error handling and configuration constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Food Logger Core
//!
//! Foundation crate providing the shared error taxonomy and constants used by
//! the workflow, the nutrition adapters, and the LLM extraction client. This
//! crate is designed to change infrequently.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and the
//!   cloneable `SessionError` projection stored in the workflow session
//! - **constants**: Environment variable names, service names, and default endpoints

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;
