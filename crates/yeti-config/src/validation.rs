// SPDX-FileCopyrightText: 2026 YETI AI Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Checks constraints serde cannot express: pattern names and regex
//! syntax, skill naming, threshold ranges, and log levels.

use std::collections::HashSet;

use tracing::warn;
use yeti_core::PatternKind;

use crate::diagnostic::{ConfigError, suggest_key};
use crate::model::YetiConfig;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Validate a deserialized configuration for semantic correctness.
///
/// Collects every failure instead of stopping at the first one.
pub fn validate_config(config: &YetiConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    let level = config.agent.log_level.trim().to_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ConfigError::Validation {
            message: format!(
                "agent.log_level `{}` must be one of: {}",
                config.agent.log_level,
                LOG_LEVELS.join(", ")
            ),
        });
    }

    let pattern_names = PatternKind::names();
    for (name, regex) in &config.routing.patterns {
        if !pattern_names.contains(&name.as_str()) {
            errors.push(ConfigError::UnknownPattern {
                name: name.clone(),
                suggestion: suggest_key(name, &pattern_names),
                valid_patterns: pattern_names.join(", "),
            });
            continue;
        }
        if let Err(e) = regex::Regex::new(regex) {
            errors.push(ConfigError::InvalidPattern {
                name: name.clone(),
                detail: e.to_string(),
            });
        }
    }

    for (name, rule) in &config.routing.skills {
        if name.trim().is_empty() {
            errors.push(ConfigError::Validation {
                message: "routing.skills keys must not be empty".to_string(),
            });
            continue;
        }
        if name.chars().any(|c| c.is_whitespace() || c.is_uppercase()) {
            errors.push(ConfigError::Validation {
                message: format!(
                    "routing.skills.{name}: skill names must be lowercase without whitespace"
                ),
            });
        }

        let mut seen = HashSet::new();
        for fallback in &rule.fallbacks {
            if !seen.insert(fallback) {
                errors.push(ConfigError::Validation {
                    message: format!(
                        "routing.skills.{name}.fallbacks lists `{fallback}` more than once"
                    ),
                });
            }
        }
        if rule.fallbacks.contains(&rule.category) {
            // Harmless: finalize drops it. Worth a nudge though.
            warn!(skill = name.as_str(), "skill fallbacks repeat the skill's own category");
        }
    }

    if config.dispatch.timeout_secs == 0 {
        errors.push(ConfigError::Validation {
            message: "dispatch.timeout_secs must be greater than 0".to_string(),
        });
    }

    let min = config.dispatch.min_confidence;
    if !(0.0..=1.0).contains(&min) {
        errors.push(ConfigError::Validation {
            message: format!("dispatch.min_confidence must be within [0, 1], got {min}"),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
