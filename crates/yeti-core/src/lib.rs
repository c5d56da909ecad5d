// SPDX-FileCopyrightText: 2026 YETI AI Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the YETI AI router.
//!
//! This crate provides the shared vocabulary used throughout the YETI
//! workspace: the eight model categories, analyzer enums, error types, and
//! the [`ModelProvider`] seam that provider integrations implement.

pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::{ProviderErrorKind, YetiError};
pub use types::{
    ComplexityLevel, CostTier, ModelCategory, PatternKind, ProviderRequest, ProviderResponse,
    SpeedTier,
};

pub use traits::ModelProvider;
