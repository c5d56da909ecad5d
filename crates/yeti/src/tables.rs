// SPDX-FileCopyrightText: 2026 YETI AI Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `yeti models` and `yeti skills` command implementations.

use std::fmt::Write as _;

use serde::Serialize;
use yeti_core::{ModelCategory, YetiError};
use yeti_router::KnowledgeBase;

use crate::output::{self, Palette};

/// One row of `yeti skills --json`.
#[derive(Debug, Serialize)]
pub struct SkillRow<'a> {
    pub skill: &'a str,
    pub category: ModelCategory,
    pub fallbacks: &'a [ModelCategory],
}

/// Run the `yeti models` command.
pub fn run_models(knowledge: &KnowledgeBase, json: bool, palette: Palette) -> Result<(), YetiError> {
    if json {
        let records: Vec<_> = knowledge.capabilities().collect();
        println!("{}", output::to_json(&records));
    } else {
        print!("{}", output::header("yeti models", 60));
        print!("{}", format_models(knowledge, palette));
    }
    Ok(())
}

/// Run the `yeti skills` command.
pub fn run_skills(knowledge: &KnowledgeBase, json: bool, palette: Palette) -> Result<(), YetiError> {
    if json {
        println!("{}", output::to_json(&skill_rows(knowledge)));
    } else {
        print!("{}", output::header("yeti skills", 50));
        print!("{}", format_skills(knowledge, palette));
    }
    Ok(())
}

fn skill_rows(knowledge: &KnowledgeBase) -> Vec<SkillRow<'_>> {
    knowledge
        .skills()
        .map(|(skill, rule)| SkillRow {
            skill,
            category: rule.category,
            fallbacks: &rule.fallbacks,
        })
        .collect()
}

fn format_models(knowledge: &KnowledgeBase, palette: Palette) -> String {
    let mut out = String::new();
    for record in knowledge.capabilities() {
        let _ = writeln!(
            out,
            "    {:<4} {:<24} speed: {:<10} cost: {}",
            palette.good(record.category.tag()),
            record.name,
            record.speed,
            record.cost
        );
        let _ = writeln!(out, "         {}", record.description);
        let _ = writeln!(
            out,
            "         {}",
            palette.dim(&format!("strengths: {}", record.strengths.join(", ")))
        );
        if let Some(model) = record.providers.first() {
            let _ = writeln!(out, "         {}", palette.dim(&format!("model: {model}")));
        }
        out.push('\n');
    }
    out
}

fn format_skills(knowledge: &KnowledgeBase, palette: Palette) -> String {
    let mut out = String::new();
    for row in skill_rows(knowledge) {
        let mut line = format!(
            "    {:<12} -> {}",
            row.skill,
            palette.good(row.category.tag())
        );
        if !row.fallbacks.is_empty() {
            line.push_str(&palette.dim(&format!(
                "  (fallbacks: {})",
                output::tags(row.fallbacks)
            )));
        }
        let _ = writeln!(out, "{line}");
    }
    out.push('\n');
    out
}
