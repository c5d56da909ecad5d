// SPDX-FileCopyrightText: 2026 YETI AI Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types shared by the analyzer, selector, config, and dispatcher.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, IntoStaticStr};

/// One of the eight model families YETI can route to.
///
/// The short tag (`llm`, `vlm`, ...) is the canonical form for config files,
/// JSON output, and CLI flags. Descriptive aliases such as `vision-language`
/// are accepted when parsing.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    EnumString,
    IntoStaticStr,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive)]
pub enum ModelCategory {
    /// General-purpose conversational and creative text generation.
    #[serde(rename = "llm", alias = "large-language")]
    #[strum(to_string = "llm", serialize = "large-language")]
    LargeLanguage,
    /// Sentence/concept-level reasoning; translation and summarization.
    #[serde(rename = "lcm", alias = "concept")]
    #[strum(to_string = "lcm", serialize = "concept")]
    Concept,
    /// Image understanding and generation.
    #[serde(rename = "vlm", alias = "vision-language")]
    #[strum(to_string = "vlm", serialize = "vision-language")]
    VisionLanguage,
    /// Small, fast models for code and quick answers.
    #[serde(rename = "slm", alias = "small-language")]
    #[strum(to_string = "slm", serialize = "small-language")]
    SmallLanguage,
    /// Expert ensembles for complex multi-step reasoning.
    #[serde(rename = "moe", alias = "mixture-of-experts")]
    #[strum(to_string = "moe", serialize = "mixture-of-experts")]
    MixtureOfExperts,
    /// Encoder models for classification and text analysis.
    #[serde(rename = "mlm", alias = "masked-language")]
    #[strum(to_string = "mlm", serialize = "masked-language")]
    MaskedLanguage,
    /// Agentic models that plan and execute actions.
    #[serde(rename = "lam", alias = "action")]
    #[strum(to_string = "lam", serialize = "action")]
    Action,
    /// Image segmentation models.
    #[serde(rename = "sam", alias = "segmentation")]
    #[strum(to_string = "sam", serialize = "segmentation")]
    Segmentation,
}

impl ModelCategory {
    /// All categories in canonical table order.
    pub const ALL: [ModelCategory; 8] = [
        ModelCategory::LargeLanguage,
        ModelCategory::Concept,
        ModelCategory::VisionLanguage,
        ModelCategory::SmallLanguage,
        ModelCategory::MixtureOfExperts,
        ModelCategory::MaskedLanguage,
        ModelCategory::Action,
        ModelCategory::Segmentation,
    ];

    /// Short tag, e.g. `"vlm"`.
    pub fn tag(self) -> &'static str {
        self.into()
    }
}

/// Keyword pattern families detected by the input analyzer.
///
/// Declaration order is the canonical reporting order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    EnumString,
    IntoStaticStr,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum PatternKind {
    Image,
    Code,
    Translate,
    Analyze,
    Creative,
    Action,
    Segment,
    Complex,
}

impl PatternKind {
    /// All pattern kinds in canonical order.
    pub const ALL: [PatternKind; 8] = [
        PatternKind::Image,
        PatternKind::Code,
        PatternKind::Translate,
        PatternKind::Analyze,
        PatternKind::Creative,
        PatternKind::Action,
        PatternKind::Segment,
        PatternKind::Complex,
    ];

    /// Pattern names as used in config keys.
    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(|&k| k.into()).collect()
    }
}

/// Coarse request complexity.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    EnumString,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ComplexityLevel {
    Low,
    Medium,
    High,
}

/// Qualitative latency tier of a model category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum SpeedTier {
    VeryFast,
    Fast,
    Medium,
    Slow,
}

/// Qualitative cost tier of a model category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum CostTier {
    VeryLow,
    Low,
    Medium,
    High,
}

/// A single inference request handed to a [`ModelProvider`](crate::ModelProvider).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderRequest {
    /// Category the dispatcher is currently trying.
    pub category: ModelCategory,
    /// Concrete model identifier chosen from the category's provider list.
    pub model: String,
    /// The user's message text.
    pub prompt: String,
}

/// Response text returned by a provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProviderResponse {
    /// Model identifier that actually served the request.
    pub model: String,
    /// Generated content.
    pub content: String,
}
