// ABOUTME: Unified error taxonomy for the food logging workflow and its collaborators
// ABOUTME: Defines ErrorCode, AppError, and the cloneable SessionError stored in session state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling
//!
//! Every failure in the workflow is recoverable by the user. Errors raised by
//! the collaborators (LLM extraction, nutrition lookups) and by the workflow
//! guards are expressed as [`AppError`] values carrying an [`ErrorCode`]. The
//! session keeps only a [`SessionError`], a plain cloneable projection of the
//! code and message, so that the session itself stays a cheap value type.

use serde::{Deserialize, Serialize};
use std::error::Error as StdError;
use std::fmt;
use thiserror::Error;

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// The meal description was empty or whitespace only
    EmptyInput,
    /// A credential required by the selected provider is not configured
    MissingCredentials,
    /// The extraction collaborator returned something other than a list of items
    InvalidExtractionShape,
    /// An external service could not be reached or rejected the request
    ProviderUnavailable,
    /// A request argument was out of range or unrecognized
    InvalidInput,
    /// Configuration could not be loaded or is inconsistent
    ConfigInvalid,
    /// Unexpected internal failure
    InternalError,
}

impl ErrorCode {
    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::EmptyInput => "Please enter a meal description",
            Self::MissingCredentials => "Required API credentials are missing",
            Self::InvalidExtractionShape => "The meal description could not be itemized",
            Self::ProviderUnavailable => "An external service is currently unavailable",
            Self::InvalidInput => "The provided input is invalid",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::InternalError => "An internal error occurred",
        }
    }

    /// Stable machine-readable name, matching the serialized form
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::EmptyInput => "EMPTY_INPUT",
            Self::MissingCredentials => "MISSING_CREDENTIALS",
            Self::InvalidExtractionShape => "INVALID_EXTRACTION_SHAPE",
            Self::ProviderUnavailable => "PROVIDER_UNAVAILABLE",
            Self::InvalidInput => "INVALID_INPUT",
            Self::ConfigInvalid => "CONFIG_INVALID",
            Self::InternalError => "INTERNAL_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unified error type for the application
#[derive(Debug, Error)]
#[error("{}: {message}", code.description())]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn StdError + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Empty meal description
    #[must_use]
    pub fn empty_input() -> Self {
        Self::new(ErrorCode::EmptyInput, "Please enter a meal description.")
    }

    /// Missing credential for the named provider
    #[must_use]
    pub fn missing_credentials(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::MissingCredentials, message)
    }

    /// Extraction output was not a well-formed item list
    #[must_use]
    pub fn invalid_extraction_shape(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidExtractionShape, message)
    }

    /// External service failure
    ///
    /// The message is shown to the user as-is; callers record which service
    /// failed in their log fields.
    #[must_use]
    pub fn provider_unavailable(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ProviderUnavailable, message)
    }

    /// Invalid input
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalid, message)
    }

    /// Internal error
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// Error as stored in the workflow session and shown to the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionError {
    /// Error code
    pub code: ErrorCode,
    /// Message surfaced verbatim to the user
    pub message: String,
}

impl From<&AppError> for SessionError {
    fn from(error: &AppError) -> Self {
        Self {
            code: error.code,
            message: error.message.clone(),
        }
    }
}

impl From<AppError> for SessionError {
    fn from(error: AppError) -> Self {
        Self {
            code: error.code,
            message: error.message,
        }
    }
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}
