// SPDX-FileCopyrightText: 2026 YETI AI Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Model selection as an ordered pipeline of override steps.
//!
//! Precedence, lowest to highest: default < content analysis < skill <
//! fast response < complexity escalation < user preference. Every step that
//! reselects demotes the current winner to the front of the fallback list.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info};
use yeti_config::model::RoutingConfig;
use yeti_core::{ComplexityLevel, ModelCategory, PatternKind};

use crate::analyzer::{AnalysisResult, InputAnalyzer};
use crate::knowledge::KnowledgeBase;

pub const SKILL_CONFIDENCE: f32 = 0.9;
pub const ANALYSIS_CONFIDENCE: f32 = 0.7;
pub const DEFAULT_CONFIDENCE: f32 = 0.5;
pub const USER_PREFERENCE_CONFIDENCE: f32 = 0.95;

/// Fast-response reselection costs this much confidence...
const FAST_RESPONSE_PENALTY: f32 = 0.2;
/// ...but never drops below this.
const FAST_RESPONSE_FLOOR: f32 = 0.6;
/// Complexity escalation raises confidence to at least this.
const ESCALATION_FLOOR: f32 = 0.8;

/// Maximum number of fallbacks in a decision.
pub const MAX_FALLBACKS: usize = 2;

/// Everything the caller knows about a message.
#[derive(Debug, Clone, Default)]
pub struct RoutingFactors<'a> {
    /// Raw message text.
    pub input_text: &'a str,
    /// Assistive shortcut the user picked, if any.
    pub skill: Option<&'a str>,
    /// Prefer latency over capability. `None` uses the configured default.
    pub requires_fast_response: Option<bool>,
    /// Caller-supplied complexity; replaces the analyzer's estimate.
    pub complexity_level: Option<ComplexityLevel>,
    /// Hard user choice; always wins.
    pub user_preference: Option<ModelCategory>,
}

/// The router's output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoutingDecision {
    /// Category to invoke.
    pub selected: ModelCategory,
    /// Advisory confidence in `[0, 1]`.
    pub confidence: f32,
    /// Human-readable reason.
    pub rationale: String,
    /// Up to two alternatives, most recently demoted first, never `selected`.
    pub fallbacks: Vec<ModelCategory>,
    /// Patterns the analyzer found (empty if it did not run).
    pub patterns: Vec<PatternKind>,
    /// Effective complexity: the caller's override, else the analyzer's
    /// estimate, else `None` when the analyzer did not run.
    pub complexity: Option<ComplexityLevel>,
}

impl RoutingDecision {
    /// Selected category followed by the fallbacks, in dispatch order.
    pub fn candidates(&self) -> impl Iterator<Item = ModelCategory> + '_ {
        std::iter::once(self.selected).chain(self.fallbacks.iter().copied())
    }
}

/// Accumulator threaded through the selection steps.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Draft {
    pub selected: ModelCategory,
    pub confidence: f32,
    pub rationale: String,
    pub fallbacks: Vec<ModelCategory>,
    pub analysis: Option<AnalysisResult>,
}

impl Draft {
    fn new(selected: ModelCategory, confidence: f32, rationale: String) -> Self {
        Self {
            selected,
            confidence,
            rationale,
            fallbacks: Vec::new(),
            analysis: None,
        }
    }

    /// Replace the selection, demoting the current winner to fallback #1.
    fn reselect(&mut self, category: ModelCategory) {
        let previous = std::mem::replace(&mut self.selected, category);
        self.fallbacks.insert(0, previous);
    }
}

/// Combines skill, analysis, speed, complexity, and preference into a decision.
#[derive(Debug, Clone)]
pub struct ModelSelector {
    knowledge: Arc<KnowledgeBase>,
    analyzer: InputAnalyzer,
    config: RoutingConfig,
}

impl ModelSelector {
    /// Create a selector over the given tables and routing settings.
    pub fn new(knowledge: Arc<KnowledgeBase>, config: RoutingConfig) -> Self {
        Self {
            analyzer: InputAnalyzer::new(knowledge.clone()),
            knowledge,
            config,
        }
    }

    /// The analyzer this selector runs.
    pub fn analyzer(&self) -> &InputAnalyzer {
        &self.analyzer
    }

    /// Select a model category. Never fails.
    pub fn select(&self, factors: &RoutingFactors<'_>) -> RoutingDecision {
        let mut draft = if self.config.enabled {
            let mut draft = self
                .skill_step(factors.skill)
                .unwrap_or_else(|| self.analysis_step(factors.input_text));

            let fast = factors
                .requires_fast_response
                .unwrap_or(self.config.fast_response);
            self.fast_response_step(&mut draft, fast);
            self.complexity_step(&mut draft, factors.complexity_level);
            draft
        } else {
            let default = self.config.default_category;
            Draft::new(
                default,
                DEFAULT_CONFIDENCE,
                format!(
                    "Routing disabled; using {}",
                    self.knowledge.display_name(default)
                ),
            )
        };

        if factors.user_preference.is_some() {
            self.preference_step(&mut draft, factors.user_preference);
        } else {
            self.forced_category_step(&mut draft);
        }

        let mut decision = finalize(draft);
        if factors.complexity_level.is_some() {
            decision.complexity = factors.complexity_level;
        }
        debug!(
            selected = %decision.selected,
            confidence = decision.confidence,
            fallbacks = ?decision.fallbacks,
            "routing decision"
        );
        decision
    }

    /// Step 1: a recognised skill maps straight to its category.
    pub(crate) fn skill_step(&self, skill: Option<&str>) -> Option<Draft> {
        let name = skill?;
        let rule = self.knowledge.skill(name)?;

        let mut draft = Draft::new(
            rule.category,
            SKILL_CONFIDENCE,
            format!(
                "Skill '{}' maps to {}",
                name.trim(),
                self.knowledge.display_name(rule.category)
            ),
        );
        draft.fallbacks.extend_from_slice(&rule.fallbacks);
        self.push_backstop(&mut draft);
        Some(draft)
    }

    /// Step 2: route on detected patterns, else the default category.
    pub(crate) fn analysis_step(&self, text: &str) -> Draft {
        let analysis = self.analyzer.analyze(text);

        let mut draft = match analysis.suggested.split_first() {
            Some((&first, rest)) => {
                let names: Vec<&str> = analysis.patterns.iter().map(|&p| p.into()).collect();
                let mut draft = Draft::new(
                    first,
                    ANALYSIS_CONFIDENCE,
                    format!("Detected patterns: {}", names.join(", ")),
                );
                draft.fallbacks.extend_from_slice(rest);
                self.push_backstop(&mut draft);
                draft
            }
            None => {
                let default = self.config.default_category;
                Draft::new(
                    default,
                    DEFAULT_CONFIDENCE,
                    format!(
                        "No specific patterns detected; using general-purpose {}",
                        self.knowledge.display_name(default)
                    ),
                )
            }
        };

        draft.analysis = Some(analysis);
        draft
    }

    /// Step 3: swap slow categories for the small model when latency matters.
    pub(crate) fn fast_response_step(&self, draft: &mut Draft, requires_fast_response: bool) {
        if !requires_fast_response || !self.knowledge.is_slow(draft.selected) {
            return;
        }

        let fast = ModelCategory::SmallLanguage;
        draft.reselect(fast);
        draft.confidence = (draft.confidence - FAST_RESPONSE_PENALTY).max(FAST_RESPONSE_FLOOR);
        draft.rationale.push_str(&format!(
            "; switched to {} for fast response",
            self.knowledge.display_name(fast)
        ));
    }

    /// Step 4: escalate HIGH complexity to the mixture of experts.
    ///
    /// The analyzer's estimate only applies when the analyzer ran, i.e. no
    /// skill decided the category. A caller override always applies.
    pub(crate) fn complexity_step(&self, draft: &mut Draft, override_level: Option<ComplexityLevel>) {
        let level = override_level.or_else(|| draft.analysis.as_ref().map(|a| a.complexity));
        let expert = ModelCategory::MixtureOfExperts;
        if level != Some(ComplexityLevel::High) || draft.selected == expert {
            return;
        }

        draft.reselect(expert);
        draft.confidence = draft.confidence.max(ESCALATION_FLOOR);
        draft.rationale.push_str(&format!(
            "; escalated to {} for high complexity",
            self.knowledge.display_name(expert)
        ));
    }

    /// Step 5: an explicit user preference replaces everything.
    pub(crate) fn preference_step(&self, draft: &mut Draft, preference: Option<ModelCategory>) {
        let Some(preferred) = preference else {
            return;
        };

        info!(preferred = %preferred, overridden = %draft.selected, "user preference override");
        draft.reselect(preferred);
        draft.confidence = USER_PREFERENCE_CONFIDENCE;
        draft.rationale = format!(
            "User preference: {}",
            self.knowledge.display_name(preferred)
        );
    }

    /// `routing.force_category` behaves like a preference set in config.
    fn forced_category_step(&self, draft: &mut Draft) {
        let Some(forced) = self.config.force_category else {
            return;
        };

        draft.reselect(forced);
        draft.confidence = USER_PREFERENCE_CONFIDENCE;
        draft.rationale = format!(
            "Configuration forces {}",
            self.knowledge.display_name(forced)
        );
    }

    /// Content-routed selections keep the default category as a last resort.
    fn push_backstop(&self, draft: &mut Draft) {
        let default = self.config.default_category;
        if draft.selected != default {
            draft.fallbacks.push(default);
        }
    }
}

/// Step 6: drop the selection from the fallbacks, keep two, clamp
/// confidence.
///
/// Repeated categories are also dropped before truncating, keeping the
/// first occurrence, so "segment the photo" (image and segment both
/// suggest sam) yields `[sam, llm]` rather than `[sam, sam]`.
pub(crate) fn finalize(draft: Draft) -> RoutingDecision {
    let mut fallbacks: Vec<ModelCategory> = Vec::with_capacity(MAX_FALLBACKS);
    for category in draft.fallbacks {
        if fallbacks.len() == MAX_FALLBACKS {
            break;
        }
        if category != draft.selected && !fallbacks.contains(&category) {
            fallbacks.push(category);
        }
    }

    let (patterns, analyzed) = match draft.analysis {
        Some(a) => (a.patterns, Some(a.complexity)),
        None => (Vec::new(), None),
    };

    RoutingDecision {
        selected: draft.selected,
        confidence: draft.confidence.clamp(0.0, 1.0),
        rationale: draft.rationale,
        fallbacks,
        patterns,
        complexity: analyzed,
    }
}
