// SPDX-FileCopyrightText: 2026 YETI AI Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Heuristic input analysis.
//!
//! Detects keyword pattern families in a message and classifies its
//! complexity from length and structural signals. No model call, no
//! network, no state: identical input always yields identical output.

use std::sync::Arc;

use serde::Serialize;
use tracing::trace;
use yeti_core::{ComplexityLevel, ModelCategory, PatternKind};

use crate::knowledge::KnowledgeBase;

/// Word count above which a message is HIGH complexity.
const HIGH_WORD_COUNT: usize = 50;

/// Word count above which a message is at least MEDIUM complexity.
const MEDIUM_WORD_COUNT: usize = 20;

/// Distinct pattern count above which a message is at least MEDIUM complexity.
const MEDIUM_PATTERN_COUNT: usize = 2;

const BRACKETS: &[char] = &['{', '}', '[', ']', '(', ')'];

/// Result of analyzing one input string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisResult {
    /// Detected pattern kinds in canonical order.
    pub patterns: Vec<PatternKind>,
    /// Coarse complexity classification.
    pub complexity: ComplexityLevel,
    /// Suggested categories in pattern order. May repeat a category.
    pub suggested: Vec<ModelCategory>,
}

/// Structural signals the complexity decision is based on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextSignals {
    pub word_count: usize,
    pub has_brackets: bool,
    pub question_marks: usize,
}

impl TextSignals {
    /// Measure the raw text.
    pub fn measure(text: &str) -> Self {
        Self {
            word_count: text.split_whitespace().count(),
            has_brackets: text.contains(BRACKETS),
            question_marks: text.matches('?').count(),
        }
    }
}

/// Pattern detector and complexity classifier over a [`KnowledgeBase`].
#[derive(Debug, Clone)]
pub struct InputAnalyzer {
    knowledge: Arc<KnowledgeBase>,
}

impl InputAnalyzer {
    /// Create an analyzer over the given tables.
    pub fn new(knowledge: Arc<KnowledgeBase>) -> Self {
        Self { knowledge }
    }

    /// Analyze a message.
    pub fn analyze(&self, text: &str) -> AnalysisResult {
        let mut patterns = Vec::new();
        let mut suggested = Vec::new();

        for rule in self.knowledge.patterns() {
            if rule.regex.is_match(text) {
                patterns.push(rule.kind);
                suggested.extend_from_slice(rule.suggests);
            }
        }

        let signals = TextSignals::measure(text);
        let complexity = classify_complexity(signals, patterns.len());

        trace!(
            words = signals.word_count,
            brackets = signals.has_brackets,
            questions = signals.question_marks,
            patterns = ?patterns,
            complexity = %complexity,
            "analyzed input"
        );

        AnalysisResult {
            patterns,
            complexity,
            suggested,
        }
    }
}

impl Default for InputAnalyzer {
    fn default() -> Self {
        Self::new(Arc::new(KnowledgeBase::builtin()))
    }
}

/// Three-tier complexity decision.
///
/// HIGH on long text, any bracket, or more than one `?`; otherwise MEDIUM on
/// moderately long text or more than two distinct patterns; otherwise LOW.
pub fn classify_complexity(signals: TextSignals, pattern_count: usize) -> ComplexityLevel {
    if signals.word_count > HIGH_WORD_COUNT
        || signals.has_brackets
        || signals.question_marks > 1
    {
        ComplexityLevel::High
    } else if signals.word_count > MEDIUM_WORD_COUNT || pattern_count > MEDIUM_PATTERN_COUNT {
        ComplexityLevel::Medium
    } else {
        ComplexityLevel::Low
    }
}
