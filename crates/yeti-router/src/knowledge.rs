// SPDX-FileCopyrightText: 2026 YETI AI Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Static routing knowledge: capability records, skill rules, and keyword patterns.
//!
//! The built-in tables are plain data. [`KnowledgeBase`] bundles them (plus
//! any config overrides) and is handed to the analyzer and selector at
//! construction, so tests can swap in alternate tables.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use yeti_config::model::RoutingConfig;
use yeti_core::{CostTier, ModelCategory, PatternKind, SpeedTier, YetiError};

/// Read-only description of one model category.
#[derive(Debug, Clone, Serialize)]
pub struct CapabilityRecord {
    pub category: ModelCategory,
    pub name: &'static str,
    pub description: &'static str,
    /// Strength keywords, most characteristic first.
    pub strengths: &'static [&'static str],
    pub speed: SpeedTier,
    pub cost: CostTier,
    /// Candidate provider model identifiers, preferred first.
    pub providers: &'static [&'static str],
}

/// Built-in capability table, one record per category.
pub const BUILTIN_CAPABILITIES: &[CapabilityRecord] = &[
    CapabilityRecord {
        category: ModelCategory::LargeLanguage,
        name: "Large Language Model",
        description: "General-purpose conversation, writing, and broad knowledge",
        strengths: &["conversation", "creative writing", "general knowledge", "reasoning"],
        speed: SpeedTier::Medium,
        cost: CostTier::Medium,
        providers: &[
            "meta-llama/Llama-3.1-8B-Instruct",
            "mistralai/Mistral-7B-Instruct-v0.3",
            "HuggingFaceH4/zephyr-7b-beta",
        ],
    },
    CapabilityRecord {
        category: ModelCategory::Concept,
        name: "Large Concept Model",
        description: "Sentence-level semantics for translation and summarization",
        strengths: &["translation", "summarization", "multilingual", "semantic understanding"],
        speed: SpeedTier::Medium,
        cost: CostTier::Low,
        providers: &["facebook/nllb-200-distilled-600M", "facebook/bart-large-cnn"],
    },
    CapabilityRecord {
        category: ModelCategory::VisionLanguage,
        name: "Vision Language Model",
        description: "Understands and describes images alongside text",
        strengths: &["image understanding", "image captioning", "visual question answering"],
        speed: SpeedTier::Slow,
        cost: CostTier::High,
        providers: &[
            "Salesforce/blip-image-captioning-large",
            "llava-hf/llava-1.5-7b-hf",
        ],
    },
    CapabilityRecord {
        category: ModelCategory::SmallLanguage,
        name: "Small Language Model",
        description: "Fast, inexpensive answers and code assistance",
        strengths: &["code", "quick answers", "low latency", "efficiency"],
        speed: SpeedTier::VeryFast,
        cost: CostTier::VeryLow,
        providers: &[
            "microsoft/Phi-3-mini-4k-instruct",
            "Qwen/Qwen2.5-Coder-1.5B-Instruct",
        ],
    },
    CapabilityRecord {
        category: ModelCategory::MixtureOfExperts,
        name: "Mixture of Experts",
        description: "Routes hard problems through specialised expert networks",
        strengths: &["complex reasoning", "multi-step problems", "mathematics", "depth"],
        speed: SpeedTier::Medium,
        cost: CostTier::High,
        providers: &[
            "mistralai/Mixtral-8x7B-Instruct-v0.1",
            "deepseek-ai/DeepSeek-V2-Lite-Chat",
        ],
    },
    CapabilityRecord {
        category: ModelCategory::MaskedLanguage,
        name: "Masked Language Model",
        description: "Encoder models for classification and text analysis",
        strengths: &["text analysis", "classification", "sentiment", "entity extraction"],
        speed: SpeedTier::Fast,
        cost: CostTier::VeryLow,
        providers: &["google-bert/bert-base-uncased", "FacebookAI/roberta-base"],
    },
    CapabilityRecord {
        category: ModelCategory::Action,
        name: "Large Action Model",
        description: "Plans and executes tasks through tools and function calls",
        strengths: &["automation", "task execution", "function calling", "workflows"],
        speed: SpeedTier::Fast,
        cost: CostTier::Medium,
        providers: &["Salesforce/xLAM-1b-fc-r", "Salesforce/xLAM-7b-fc-r"],
    },
    CapabilityRecord {
        category: ModelCategory::Segmentation,
        name: "Segment Anything Model",
        description: "Pixel-level object segmentation and masking",
        strengths: &["segmentation", "object isolation", "background removal", "masks"],
        speed: SpeedTier::Slow,
        cost: CostTier::Medium,
        providers: &["facebook/sam-vit-base", "facebook/sam-vit-huge"],
    },
];

/// Skill → category rule with the skill group's extra fallbacks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillRule {
    pub category: ModelCategory,
    pub fallbacks: Vec<ModelCategory>,
}

const COMMUNICATION_FALLBACKS: &[ModelCategory] = &[ModelCategory::LargeLanguage];
const VISUAL_FALLBACKS: &[ModelCategory] =
    &[ModelCategory::VisionLanguage, ModelCategory::LargeLanguage];

/// Built-in skill table: `(skill, category, group fallbacks)`.
pub const BUILTIN_SKILLS: &[(&str, ModelCategory, &[ModelCategory])] = &[
    // Creative / communication
    ("writing", ModelCategory::LargeLanguage, COMMUNICATION_FALLBACKS),
    ("creative", ModelCategory::LargeLanguage, COMMUNICATION_FALLBACKS),
    ("email", ModelCategory::LargeLanguage, COMMUNICATION_FALLBACKS),
    ("chat", ModelCategory::LargeLanguage, COMMUNICATION_FALLBACKS),
    ("summarize", ModelCategory::Concept, COMMUNICATION_FALLBACKS),
    ("translate", ModelCategory::Concept, COMMUNICATION_FALLBACKS),
    // Image / design
    ("image", ModelCategory::VisionLanguage, VISUAL_FALLBACKS),
    ("design", ModelCategory::VisionLanguage, VISUAL_FALLBACKS),
    ("vision", ModelCategory::VisionLanguage, VISUAL_FALLBACKS),
    ("segment", ModelCategory::Segmentation, VISUAL_FALLBACKS),
    // Everything else
    ("code", ModelCategory::SmallLanguage, &[]),
    ("debug", ModelCategory::SmallLanguage, &[]),
    ("analyze", ModelCategory::MaskedLanguage, &[]),
    ("classify", ModelCategory::MaskedLanguage, &[]),
    ("research", ModelCategory::MixtureOfExperts, &[]),
    ("reason", ModelCategory::MixtureOfExperts, &[]),
    ("math", ModelCategory::MixtureOfExperts, &[]),
    ("automate", ModelCategory::Action, &[]),
    ("schedule", ModelCategory::Action, &[]),
];

/// A compiled keyword pattern and the categories it suggests.
#[derive(Debug, Clone)]
pub struct PatternRule {
    pub kind: PatternKind,
    pub regex: Regex,
    pub suggests: &'static [ModelCategory],
}

/// Built-in pattern sources: `(kind, regex, suggested categories)`.
///
/// English keywords only. Translation is matched as a bare substring so
/// that any mention of "translate" is caught.
pub const BUILTIN_PATTERN_SOURCES: &[(PatternKind, &str, &[ModelCategory])] = &[
    (
        PatternKind::Image,
        r"(?i)\b(?:images?|pictures?|photos?|draw(?:ing)?|illustrat\w*|visuals?|diagrams?|logos?|sketch\w*|paint\w*|render\w*)\b",
        &[ModelCategory::VisionLanguage, ModelCategory::Segmentation],
    ),
    (
        PatternKind::Code,
        r"(?i)\b(?:code|coding|functions?|programs?|programming|scripts?|debug\w*|bugs?|compile\w*|javascript|typescript|python|rust|sql|api|regex|refactor\w*)\b",
        &[ModelCategory::SmallLanguage],
    ),
    (
        PatternKind::Translate,
        r"(?i)translat|\b(?:in|into|to) (?:english|french|spanish|german|italian|portuguese|chinese|japanese|korean|arabic|hindi|russian)\b",
        &[ModelCategory::Concept],
    ),
    (
        PatternKind::Analyze,
        r"(?i)\b(?:analy[sz]\w*|statistics?|data|dataset|compare|comparison|evaluate|sentiment|classify|insights?|trends?|metrics?)\b",
        &[ModelCategory::MaskedLanguage],
    ),
    (
        PatternKind::Creative,
        r"(?i)\b(?:write|writing|story|stories|poems?|poetry|creative|essay|novel|lyrics|songs?|fiction|blog|slogan|imagine)\b",
        &[ModelCategory::LargeLanguage],
    ),
    (
        PatternKind::Action,
        r"(?i)\b(?:automate\w*|automation|schedule\w*|execute|book|send|remind(?:er)?|navigate|click|fill out|workflows?|perform)\b",
        &[ModelCategory::Action],
    ),
    (
        PatternKind::Segment,
        r"(?i)\b(?:segment\w*|masks?|masking|cut ?out|isolate|remove (?:the )?background|outline|detect objects?|object detection)\b",
        &[ModelCategory::Segmentation],
    ),
    (
        PatternKind::Complex,
        r"(?i)\b(?:explain why|step[- ]by[- ]step|reasoning|prove|proof|complex|optimi[sz]\w*|strategy|multi[- ]step|architecture|in depth|trade-?offs?)\b",
        &[ModelCategory::MixtureOfExperts],
    ),
];

static BUILTIN_PATTERNS: LazyLock<Vec<PatternRule>> = LazyLock::new(|| {
    BUILTIN_PATTERN_SOURCES
        .iter()
        .map(|&(kind, src, suggests)| PatternRule {
            kind,
            regex: Regex::new(src).expect("built-in routing patterns are valid regexes"),
            suggests,
        })
        .collect()
});

/// Suggestions for a pattern kind from the built-in table.
fn builtin_suggestions(kind: PatternKind) -> &'static [ModelCategory] {
    BUILTIN_PATTERN_SOURCES
        .iter()
        .find(|(k, _, _)| *k == kind)
        .map(|(_, _, s)| *s)
        .unwrap_or(&[])
}

/// All reference tables the analyzer and selector consult.
#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    capabilities: BTreeMap<ModelCategory, CapabilityRecord>,
    skills: BTreeMap<String, SkillRule>,
    patterns: Vec<PatternRule>,
}

impl KnowledgeBase {
    /// Assemble a knowledge base from explicit tables.
    ///
    /// Patterns are sorted into canonical order so reporting never depends
    /// on table order.
    pub fn new(
        capabilities: impl IntoIterator<Item = CapabilityRecord>,
        skills: impl IntoIterator<Item = (String, SkillRule)>,
        mut patterns: Vec<PatternRule>,
    ) -> Self {
        patterns.sort_by_key(|p| p.kind);
        Self {
            capabilities: capabilities.into_iter().map(|r| (r.category, r)).collect(),
            skills: skills
                .into_iter()
                .map(|(name, rule)| (normalize_skill(&name), rule))
                .collect(),
            patterns,
        }
    }

    /// The built-in tables with no overrides.
    pub fn builtin() -> Self {
        Self::new(
            BUILTIN_CAPABILITIES.iter().cloned(),
            BUILTIN_SKILLS.iter().map(|&(name, category, fallbacks)| {
                (
                    name.to_string(),
                    SkillRule {
                        category,
                        fallbacks: fallbacks.to_vec(),
                    },
                )
            }),
            BUILTIN_PATTERNS.clone(),
        )
    }

    /// Built-in tables with `[routing.skills]` and `[routing.patterns]` applied.
    ///
    /// Config skill rules replace built-in rules of the same name. Pattern
    /// overrides replace the regex but keep the kind's suggestions.
    pub fn from_config(config: &RoutingConfig) -> Result<Self, YetiError> {
        let mut kb = Self::builtin();

        for (name, rule) in &config.skills {
            kb.skills.insert(
                normalize_skill(name),
                SkillRule {
                    category: rule.category,
                    fallbacks: rule.fallbacks.clone(),
                },
            );
        }

        for (name, src) in &config.patterns {
            let kind: PatternKind = name
                .parse()
                .map_err(|_| YetiError::Config(format!("unknown pattern `{name}`")))?;
            let regex = Regex::new(src)
                .map_err(|e| YetiError::Config(format!("pattern `{name}`: {e}")))?;
            match kb.patterns.iter_mut().find(|p| p.kind == kind) {
                Some(rule) => rule.regex = regex,
                None => kb.patterns.push(PatternRule {
                    kind,
                    regex,
                    suggests: builtin_suggestions(kind),
                }),
            }
        }
        kb.patterns.sort_by_key(|p| p.kind);

        Ok(kb)
    }

    /// Capability record for a category, if the table has one.
    pub fn capability(&self, category: ModelCategory) -> Option<&CapabilityRecord> {
        self.capabilities.get(&category)
    }

    /// All capability records in canonical category order.
    pub fn capabilities(&self) -> impl Iterator<Item = &CapabilityRecord> {
        ModelCategory::ALL
            .iter()
            .filter_map(|c| self.capabilities.get(c))
    }

    /// Display name for a category, falling back to its tag.
    pub fn display_name(&self, category: ModelCategory) -> &str {
        self.capability(category)
            .map(|r| r.name)
            .unwrap_or_else(|| category.tag())
    }

    /// Whether the category sits in the slow speed tier.
    pub fn is_slow(&self, category: ModelCategory) -> bool {
        self.capability(category)
            .is_some_and(|r| r.speed == SpeedTier::Slow)
    }

    /// First candidate provider model for a category.
    pub fn preferred_model(&self, category: ModelCategory) -> Option<&'static str> {
        self.capability(category)
            .and_then(|r| r.providers.first().copied())
    }

    /// Look up a skill rule; matching ignores case and surrounding whitespace.
    pub fn skill(&self, skill: &str) -> Option<&SkillRule> {
        self.skills.get(&normalize_skill(skill))
    }

    /// All skill rules, sorted by name.
    pub fn skills(&self) -> impl Iterator<Item = (&str, &SkillRule)> {
        self.skills.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Pattern rules in canonical order.
    pub fn patterns(&self) -> &[PatternRule] {
        &self.patterns
    }
}

impl Default for KnowledgeBase {
    fn default() -> Self {
        Self::builtin()
    }
}

fn normalize_skill(skill: &str) -> String {
    skill.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use yeti_config::model::SkillRuleConfig;

    #[test]
    fn builtin_patterns_compile() {
        assert_eq!(BUILTIN_PATTERNS.len(), PatternKind::ALL.len());
    }

    #[test]
    fn every_category_has_a_capability_record() {
        let kb = KnowledgeBase::builtin();
        for category in ModelCategory::ALL {
            let record = kb.capability(category).expect("record present");
            assert!(!record.providers.is_empty(), "{category} has no providers");
            assert!(!record.strengths.is_empty());
        }
        assert_eq!(kb.capabilities().count(), 8);
    }

    #[test]
    fn only_vision_and_segmentation_are_slow() {
        let kb = KnowledgeBase::builtin();
        let slow: Vec<_> = ModelCategory::ALL
            .into_iter()
            .filter(|c| kb.is_slow(*c))
            .collect();
        assert_eq!(
            slow,
            vec![ModelCategory::VisionLanguage, ModelCategory::Segmentation]
        );
    }

    #[test]
    fn skill_lookup_ignores_case() {
        let kb = KnowledgeBase::builtin();
        assert_eq!(
            kb.skill("  Code ").map(|r| r.category),
            Some(ModelCategory::SmallLanguage)
        );
        assert!(kb.skill("juggling").is_none());
    }

    #[test]
    fn skill_groups_carry_fallbacks() {
        let kb = KnowledgeBase::builtin();
        assert_eq!(
            kb.skill("email").unwrap().fallbacks,
            vec![ModelCategory::LargeLanguage]
        );
        assert_eq!(
            kb.skill("design").unwrap().fallbacks,
            vec![ModelCategory::VisionLanguage, ModelCategory::LargeLanguage]
        );
        assert!(kb.skill("code").unwrap().fallbacks.is_empty());
    }

    #[test]
    fn config_skills_override_builtin() {
        let mut config = RoutingConfig::default();
        config.skills.insert(
            "code".to_string(),
            SkillRuleConfig {
                category: ModelCategory::MixtureOfExperts,
                fallbacks: vec![ModelCategory::SmallLanguage],
            },
        );
        config.skills.insert(
            "poetry".to_string(),
            SkillRuleConfig {
                category: ModelCategory::LargeLanguage,
                fallbacks: vec![],
            },
        );
        let kb = KnowledgeBase::from_config(&config).unwrap();
        assert_eq!(
            kb.skill("code").unwrap().category,
            ModelCategory::MixtureOfExperts
        );
        assert!(kb.skill("poetry").is_some());
    }

    #[test]
    fn config_pattern_override_keeps_suggestions() {
        let mut config = RoutingConfig::default();
        config
            .patterns
            .insert("image".to_string(), r"(?i)\bpng\b".to_string());
        let kb = KnowledgeBase::from_config(&config).unwrap();
        let rule = kb
            .patterns()
            .iter()
            .find(|p| p.kind == PatternKind::Image)
            .unwrap();
        assert!(rule.regex.is_match("convert this PNG"));
        assert!(!rule.regex.is_match("a picture"));
        assert_eq!(
            rule.suggests,
            &[ModelCategory::VisionLanguage, ModelCategory::Segmentation]
        );
    }

    #[test]
    fn invalid_pattern_override_is_an_error() {
        let mut config = RoutingConfig::default();
        config
            .patterns
            .insert("code".to_string(), "(".to_string());
        assert!(matches!(
            KnowledgeBase::from_config(&config),
            Err(YetiError::Config(_))
        ));
    }

    #[test]
    fn preferred_model_is_first_provider() {
        let kb = KnowledgeBase::builtin();
        assert_eq!(
            kb.preferred_model(ModelCategory::Segmentation),
            Some("facebook/sam-vit-base")
        );
    }
}
