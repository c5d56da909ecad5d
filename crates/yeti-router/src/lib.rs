// SPDX-FileCopyrightText: 2026 YETI AI Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Input analysis and model-category routing for YETI AI.
//!
//! This crate provides:
//! - [`KnowledgeBase`]: capability records, skill rules, and keyword patterns
//! - [`InputAnalyzer`]: pattern detection and complexity classification
//! - [`ModelSelector`]: the ordered override pipeline producing a [`RoutingDecision`]
//! - [`ModelRouter`]: config-driven facade with inline `/category` overrides
//! - [`Dispatcher`]: walks a decision's candidates against a provider
//!
//! Analysis and selection are synchronous and side-effect free; only the
//! dispatcher is async.

use std::sync::LazyLock;

pub mod analyzer;
pub mod dispatch;
pub mod knowledge;
pub mod router;
pub mod selector;

pub use analyzer::{AnalysisResult, InputAnalyzer};
pub use dispatch::{Attempt, DispatchOutcome, Dispatcher};
pub use knowledge::{CapabilityRecord, KnowledgeBase, SkillRule};
pub use router::{ModelRouter, RouteOptions, parse_category_override};
pub use selector::{ModelSelector, RoutingDecision, RoutingFactors};

static DEFAULT_ROUTER: LazyLock<ModelRouter> = LazyLock::new(ModelRouter::default);

/// Analyze `text` with the built-in tables.
pub fn analyze_input(text: &str) -> AnalysisResult {
    DEFAULT_ROUTER.analyze(text)
}

/// Route a message with the built-in tables and default routing settings.
pub fn route_message(input_text: &str, skill: Option<&str>, options: RouteOptions) -> RoutingDecision {
    DEFAULT_ROUTER.route(input_text, skill, options)
}
