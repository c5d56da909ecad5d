// SPDX-FileCopyrightText: 2026 YETI AI Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Router facade over the knowledge base, analyzer, and selector.
//!
//! Orchestrates per-message routing: inline category override > explicit
//! user preference > configured force > skill/analysis pipeline.

use std::sync::Arc;

use yeti_config::model::RoutingConfig;
use yeti_core::{ComplexityLevel, ModelCategory, YetiError};

use crate::analyzer::AnalysisResult;
use crate::knowledge::KnowledgeBase;
use crate::selector::{ModelSelector, RoutingDecision, RoutingFactors};

/// Optional per-call routing inputs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RouteOptions {
    /// Prefer latency over capability. `None` uses `routing.fast_response`.
    pub requires_fast_response: Option<bool>,
    /// Caller-supplied complexity.
    pub complexity_level: Option<ComplexityLevel>,
    /// Hard user choice of category.
    pub user_preference: Option<ModelCategory>,
}

/// Routes messages to model categories.
#[derive(Debug, Clone)]
pub struct ModelRouter {
    knowledge: Arc<KnowledgeBase>,
    selector: ModelSelector,
}

impl ModelRouter {
    /// Build a router from routing config, applying its table overrides.
    pub fn new(config: &RoutingConfig) -> Result<Self, YetiError> {
        let knowledge = Arc::new(KnowledgeBase::from_config(config)?);
        Ok(Self::with_knowledge(knowledge, config.clone()))
    }

    /// Build a router over explicit tables.
    pub fn with_knowledge(knowledge: Arc<KnowledgeBase>, config: RoutingConfig) -> Self {
        Self {
            selector: ModelSelector::new(knowledge.clone(), config),
            knowledge,
        }
    }

    /// Tables this router consults.
    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.knowledge
    }

    /// Run only the input analyzer.
    pub fn analyze(&self, text: &str) -> AnalysisResult {
        self.selector.analyzer().analyze(text)
    }

    /// Route a message.
    pub fn route(&self, text: &str, skill: Option<&str>, options: RouteOptions) -> RoutingDecision {
        self.selector.select(&RoutingFactors {
            input_text: text,
            skill,
            requires_fast_response: options.requires_fast_response,
            complexity_level: options.complexity_level,
            user_preference: options.user_preference,
        })
    }

    /// Route a message that may start with an inline `/<category> ` prefix.
    ///
    /// A prefix acts as the user preference and wins over `options`. The
    /// prefix is stripped before analysis; the cleaned text is returned.
    pub fn route_with_prefix<'a>(
        &self,
        text: &'a str,
        skill: Option<&str>,
        mut options: RouteOptions,
    ) -> (RoutingDecision, &'a str) {
        let (prefix, clean) = parse_category_override(text);
        if prefix.is_some() {
            options.user_preference = prefix;
        }
        (self.route(clean, skill, options), clean)
    }
}

impl Default for ModelRouter {
    fn default() -> Self {
        Self::with_knowledge(Arc::new(KnowledgeBase::builtin()), RoutingConfig::default())
    }
}

/// Parse an inline category override such as `/vlm describe this`.
///
/// Any category tag or alias works (`/sam`, `/vision-language`). Returns
/// `(Some(category), rest)` with the prefix stripped, or `(None, text)`.
pub fn parse_category_override(text: &str) -> (Option<ModelCategory>, &str) {
    let trimmed = text.trim_start();
    let Some(rest) = trimmed.strip_prefix('/') else {
        return (None, text);
    };
    let Some((tag, message)) = rest.split_once(char::is_whitespace) else {
        return (None, text);
    };
    match tag.parse::<ModelCategory>() {
        Ok(category) => (Some(category), message.trim_start()),
        Err(_) => (None, text),
    }
}
