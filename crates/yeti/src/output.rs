// SPDX-FileCopyrightText: 2026 YETI AI Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Terminal output helpers shared by the subcommands.

use std::fmt::Write as _;
use std::io::IsTerminal;

use colored::Colorize;
use serde::Serialize;
use yeti_core::ModelCategory;
use yeti_router::{AnalysisResult, KnowledgeBase, RoutingDecision};

/// Color choice for one command invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    color: bool,
}

impl Palette {
    /// Colors on unless `--plain` was passed or stdout is not a TTY.
    pub fn detect(plain: bool) -> Self {
        Self {
            color: !plain && std::io::stdout().is_terminal(),
        }
    }

    pub fn plain() -> Self {
        Self { color: false }
    }

    pub fn good(&self, text: &str) -> String {
        if self.color {
            text.green().bold().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn warn(&self, text: &str) -> String {
        if self.color {
            text.yellow().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn bad(&self, text: &str) -> String {
        if self.color {
            text.red().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn dim(&self, text: &str) -> String {
        if self.color {
            text.dimmed().to_string()
        } else {
            text.to_string()
        }
    }

    /// Status marker: a symbol in color, a bracketed word otherwise.
    pub fn marker(&self, ok: bool) -> String {
        match (self.color, ok) {
            (true, true) => "✓".green().to_string(),
            (true, false) => "✗".red().to_string(),
            (false, true) => "[OK]".to_string(),
            (false, false) => "[FAIL]".to_string(),
        }
    }

    pub fn warn_marker(&self) -> String {
        if self.color {
            "!".yellow().to_string()
        } else {
            "[WARN]".to_string()
        }
    }
}

/// Print a section header.
pub fn header(title: &str, width: usize) -> String {
    format!("\n  {title}\n  {}\n", "-".repeat(width))
}

/// Pretty JSON for `--json` output.
pub fn to_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
}

/// Comma-separated category tags, or `none`.
pub fn tags(categories: &[ModelCategory]) -> String {
    if categories.is_empty() {
        return "none".to_string();
    }
    categories
        .iter()
        .map(|c| c.tag())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Human-readable routing decision.
pub fn format_decision(
    decision: &RoutingDecision,
    knowledge: &KnowledgeBase,
    palette: Palette,
) -> String {
    let mut out = String::new();
    let selected = format!(
        "{} ({})",
        decision.selected,
        knowledge.display_name(decision.selected)
    );
    let _ = writeln!(out, "    Selected:   {}", palette.good(&selected));
    let _ = writeln!(out, "    Confidence: {:.2}", decision.confidence);
    let _ = writeln!(out, "    Rationale:  {}", decision.rationale);
    let _ = writeln!(
        out,
        "    Fallbacks:  {}",
        palette.warn(&tags(&decision.fallbacks))
    );
    if !decision.patterns.is_empty() {
        let names: Vec<&str> = decision.patterns.iter().map(|&p| p.into()).collect();
        let _ = writeln!(out, "    Patterns:   {}", names.join(", "));
    }
    if let Some(complexity) = decision.complexity {
        let _ = writeln!(out, "    Complexity: {complexity}");
    }
    out
}

/// Human-readable analysis result.
pub fn format_analysis(analysis: &AnalysisResult) -> String {
    let names: Vec<&str> = analysis.patterns.iter().map(|&p| p.into()).collect();
    let patterns = if names.is_empty() {
        "none".to_string()
    } else {
        names.join(", ")
    };

    let mut out = String::new();
    let _ = writeln!(out, "    Patterns:   {patterns}");
    let _ = writeln!(out, "    Complexity: {}", analysis.complexity);
    let _ = writeln!(out, "    Suggested:  {}", tags(&analysis.suggested));
    out
}
