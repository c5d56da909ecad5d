// SPDX-FileCopyrightText: 2026 YETI AI Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the YETI AI router and its provider collaborators.

use strum::Display;
use thiserror::Error;

/// Failure classes a provider maps its transport errors into.
///
/// The dispatcher uses the kind of the last failure to explain to the
/// end user why no model could answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "snake_case")]
pub enum ProviderErrorKind {
    /// API key rejected or missing.
    InvalidCredentials,
    /// Provider throttled the request.
    RateLimited,
    /// Model is cold-starting on the provider side.
    WarmingUp,
    /// Provider or model is unreachable.
    Unavailable,
    /// Anything else.
    Other,
}

impl ProviderErrorKind {
    /// End-user explanation for this failure class.
    pub fn explanation(self) -> &'static str {
        match self {
            ProviderErrorKind::InvalidCredentials => {
                "the model provider rejected our credentials (invalid credentials)"
            }
            ProviderErrorKind::RateLimited => {
                "the model provider is rate limiting requests right now (rate limited)"
            }
            ProviderErrorKind::WarmingUp => {
                "the model is still warming up and cannot answer yet (model warming up)"
            }
            ProviderErrorKind::Unavailable => "the model provider is currently unavailable",
            ProviderErrorKind::Other => "the model provider returned an unexpected error",
        }
    }
}

/// The primary error type used across YETI crates.
#[derive(Debug, Error)]
pub enum YetiError {
    /// Configuration errors (invalid TOML, bad values).
    #[error("configuration error: {0}")]
    Config(String),

    /// Provider errors reported by a [`ModelProvider`](crate::ModelProvider).
    #[error("provider error ({kind}): {message}")]
    Provider {
        kind: ProviderErrorKind,
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A model category tag could not be parsed.
    #[error("unknown model category `{0}`")]
    UnknownCategory(String),

    /// Operation timed out.
    #[error("operation timed out after {duration:?}")]
    Timeout { duration: std::time::Duration },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

impl YetiError {
    /// Convenience constructor for a provider error without a source.
    pub fn provider(kind: ProviderErrorKind, message: impl Into<String>) -> Self {
        YetiError::Provider {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Failure class of this error, as seen by the dispatcher.
    pub fn provider_kind(&self) -> ProviderErrorKind {
        match self {
            YetiError::Provider { kind, .. } => *kind,
            YetiError::Timeout { .. } => ProviderErrorKind::Unavailable,
            _ => ProviderErrorKind::Other,
        }
    }
}
