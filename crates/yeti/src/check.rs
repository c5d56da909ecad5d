// SPDX-FileCopyrightText: 2026 YETI AI Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `yeti config check` command implementation.
//!
//! Loads and validates configuration, then runs a few checks on the
//! effective routing settings that are legal but probably unintended.

use std::path::Path;

use yeti_config::YetiConfig;
use yeti_router::ModelRouter;
use yeti_router::selector::USER_PREFERENCE_CONFIDENCE;

use crate::output::{self, Palette};

/// Status of a configuration check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStatus {
    Pass,
    Warn,
    Fail,
}

/// Result of a single check.
#[derive(Debug, Clone)]
pub struct CheckResult {
    pub name: &'static str,
    pub status: CheckStatus,
    pub message: String,
}

impl CheckResult {
    fn new(name: &'static str, status: CheckStatus, message: impl Into<String>) -> Self {
        Self {
            name,
            status,
            message: message.into(),
        }
    }
}

/// Run the `yeti config check` command. Returns `false` if any check failed.
pub fn run_check(path: Option<&Path>, palette: Palette) -> bool {
    let config = match crate::load_config(path) {
        Ok(config) => config,
        Err(errors) => {
            yeti_config::render_errors(&errors);
            let result = CheckResult::new(
                "Configuration",
                CheckStatus::Fail,
                format!("{} error(s)", errors.len()),
            );
            print_results(&[result], palette);
            return false;
        }
    };

    let results = check_config(&config);
    print_results(&results, palette);
    results.iter().all(|r| r.status != CheckStatus::Fail)
}

/// Checks on an already-validated configuration.
pub fn check_config(config: &YetiConfig) -> Vec<CheckResult> {
    vec![
        CheckResult::new("Configuration", CheckStatus::Pass, "valid"),
        check_routing_tables(config),
        check_routing_enabled(config),
        check_forced_category(config),
        check_min_confidence(config),
    ]
}

fn check_routing_tables(config: &YetiConfig) -> CheckResult {
    match ModelRouter::new(&config.routing) {
        Ok(router) => CheckResult::new(
            "Routing tables",
            CheckStatus::Pass,
            format!(
                "{} skills, {} patterns",
                router.knowledge().skills().count(),
                router.knowledge().patterns().len()
            ),
        ),
        Err(e) => CheckResult::new("Routing tables", CheckStatus::Fail, e.to_string()),
    }
}

fn check_routing_enabled(config: &YetiConfig) -> CheckResult {
    if config.routing.enabled {
        CheckResult::new(
            "Routing",
            CheckStatus::Pass,
            format!("enabled (default: {})", config.routing.default_category),
        )
    } else {
        CheckResult::new(
            "Routing",
            CheckStatus::Warn,
            format!(
                "disabled; every message goes to {}",
                config.routing.default_category
            ),
        )
    }
}

fn check_forced_category(config: &YetiConfig) -> CheckResult {
    match config.routing.force_category {
        None => CheckResult::new("Forced category", CheckStatus::Pass, "none"),
        Some(category) => CheckResult::new(
            "Forced category",
            CheckStatus::Warn,
            format!("every message without a user preference goes to {category}"),
        ),
    }
}

fn check_min_confidence(config: &YetiConfig) -> CheckResult {
    let threshold = config.dispatch.min_confidence;
    if threshold > USER_PREFERENCE_CONFIDENCE {
        CheckResult::new(
            "Dispatch threshold",
            CheckStatus::Warn,
            format!(
                "min_confidence {threshold:.2} is above every routing confidence; \
                 the selected category is skipped whenever a fallback exists"
            ),
        )
    } else {
        CheckResult::new(
            "Dispatch threshold",
            CheckStatus::Pass,
            format!(
                "min_confidence {threshold:.2}, timeout {}s",
                config.dispatch.timeout_secs
            ),
        )
    }
}

fn print_results(results: &[CheckResult], palette: Palette) {
    print!("{}", output::header("yeti config check", 50));

    let mut issues = 0;
    for result in results {
        let line = match result.status {
            CheckStatus::Pass => format!(
                "    {:<6} {:<20} {}",
                palette.marker(true),
                result.name,
                result.message
            ),
            CheckStatus::Warn => {
                issues += 1;
                format!(
                    "    {:<6} {:<20} {}",
                    palette.warn_marker(),
                    result.name,
                    palette.warn(&result.message)
                )
            }
            CheckStatus::Fail => {
                issues += 1;
                format!(
                    "    {:<6} {:<20} {}",
                    palette.marker(false),
                    result.name,
                    palette.bad(&result.message)
                )
            }
        };
        println!("{line}");
    }

    println!();
    if issues > 0 {
        let issue_word = if issues == 1 { "issue" } else { "issues" };
        println!("  {issues} {issue_word} found.");
    } else {
        println!("  All checks passed.");
    }
    println!();
}
