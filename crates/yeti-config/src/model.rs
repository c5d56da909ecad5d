// SPDX-FileCopyrightText: 2026 YETI AI Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the YETI AI router.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use yeti_core::ModelCategory;

/// Top-level YETI configuration.
///
/// Loaded from TOML files following XDG hierarchy, with environment variable overrides.
/// All sections are optional and default to sensible values.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct YetiConfig {
    /// Process identity and logging.
    #[serde(default)]
    pub agent: AgentConfig,

    /// Model routing settings and knowledge-table overrides.
    #[serde(default)]
    pub routing: RoutingConfig,

    /// Provider dispatch settings.
    #[serde(default)]
    pub dispatch: DispatchConfig,
}

/// Process identity and logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AgentConfig {
    /// Display name used in the shell prompt and logs.
    #[serde(default = "default_agent_name")]
    pub name: String,

    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            name: default_agent_name(),
            log_level: default_log_level(),
        }
    }
}

fn default_agent_name() -> String {
    "yeti".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Model routing configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RoutingConfig {
    /// Enable content-based routing. When false, every message goes to
    /// `default_category` (a user preference still wins).
    #[serde(default = "default_routing_enabled")]
    pub enabled: bool,

    /// Category used when nothing else matches.
    #[serde(default = "default_category")]
    pub default_category: ModelCategory,

    /// Force every message to one category, applied like a user preference.
    #[serde(default)]
    pub force_category: Option<ModelCategory>,

    /// Default for the fast-response flag when the caller does not set it.
    #[serde(default)]
    pub fast_response: bool,

    /// Skill rules added to (or replacing) the built-in skill table.
    #[serde(default)]
    pub skills: BTreeMap<String, SkillRuleConfig>,

    /// Regex overrides keyed by pattern name (`image`, `code`, ...).
    #[serde(default)]
    pub patterns: BTreeMap<String, String>,
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            enabled: default_routing_enabled(),
            default_category: default_category(),
            force_category: None,
            fast_response: false,
            skills: BTreeMap::new(),
            patterns: BTreeMap::new(),
        }
    }
}

fn default_routing_enabled() -> bool {
    true
}

fn default_category() -> ModelCategory {
    ModelCategory::LargeLanguage
}

/// A single skill rule from `[routing.skills.<name>]`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SkillRuleConfig {
    /// Category the skill maps to.
    pub category: ModelCategory,

    /// Extra fallback categories appended after the skill selection.
    #[serde(default)]
    pub fallbacks: Vec<ModelCategory>,
}

/// Provider dispatch configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct DispatchConfig {
    /// Per-attempt timeout for a provider call, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Confidence below which the primary category is skipped in favour of
    /// the first fallback. `0.0` never skips.
    #[serde(default)]
    pub min_confidence: f32,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            min_confidence: 0.0,
        }
    }
}

fn default_timeout_secs() -> u64 {
    30
}
