// SPDX-FileCopyrightText: 2026 YETI AI Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! End-to-end tests that run the `yeti` binary.
//!
//! Each test points `--config` at its own temp file so user and system
//! configuration never leak in.

use std::io::Write;
use std::process::{Command, Output};

use serde_json::Value;
use tempfile::NamedTempFile;

fn config_file(toml: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(toml.as_bytes()).unwrap();
    file
}

fn yeti(config: &NamedTempFile, args: &[&str]) -> Output {
    yeti_with_env(config, args, &[])
}

fn yeti_with_env(config: &NamedTempFile, args: &[&str], env: &[(&str, &str)]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_yeti"))
        .args(args)
        .arg("--config")
        .arg(config.path())
        .arg("--plain")
        .env_remove("RUST_LOG")
        .envs(env.iter().copied())
        .output()
        .unwrap()
}

fn json_stdout(output: &Output) -> Value {
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).unwrap()
}

// ---- route ----

#[test]
fn route_translation_as_json() {
    let config = config_file("");
    let out = yeti(
        &config,
        &["route", "Translate this document into French", "--json"],
    );
    let decision = json_stdout(&out);
    assert_eq!(decision["selected"], "lcm");
    assert_eq!(decision["fallbacks"], serde_json::json!(["llm"]));
    assert_eq!(decision["patterns"], serde_json::json!(["translate"]));
}

#[test]
fn route_fast_flag_swaps_vision_model() {
    let config = config_file("");
    let out = yeti(
        &config,
        &["route", "generate an image of a mountain", "--fast", "--json"],
    );
    let decision = json_stdout(&out);
    assert_eq!(decision["selected"], "slm");
    assert_eq!(decision["fallbacks"][0], "vlm");
}

#[test]
fn route_preference_and_skill() {
    let config = config_file("");
    let out = yeti(
        &config,
        &[
            "route", "a note", "--skill", "writing", "--prefer", "action", "--json",
        ],
    );
    let decision = json_stdout(&out);
    assert_eq!(decision["selected"], "lam");
    assert_eq!(decision["rationale"], "User preference: Large Action Model");
}

#[test]
fn route_inline_prefix_overrides() {
    let config = config_file("");
    let out = yeti(&config, &["route", "/moe what is two plus two", "--json"]);
    assert_eq!(json_stdout(&out)["selected"], "moe");
}

#[test]
fn route_plain_text_output() {
    let config = config_file("");
    let out = yeti(&config, &["route", "write a python function"]);
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Selected:   slm (Small Language Model)"), "{stdout}");
}

#[test]
fn config_file_settings_apply() {
    let config = config_file(
        r#"
[routing]
force_category = "mlm"
"#,
    );
    let out = yeti(&config, &["route", "hello", "--json"]);
    let decision = json_stdout(&out);
    assert_eq!(decision["selected"], "mlm");
    assert_eq!(
        decision["rationale"],
        "Configuration forces Masked Language Model"
    );
}

#[test]
fn env_overrides_reach_the_binary() {
    let config = config_file("");
    let out = yeti_with_env(
        &config,
        &["route", "hello", "--json"],
        &[
            ("YETI_ROUTING_FORCE_CATEGORY", "moe"),
            ("YETI_AGENT_LOG_LEVEL", "warn"),
        ],
    );
    assert_eq!(json_stdout(&out)["selected"], "moe");
}

#[test]
fn unknown_preference_is_a_usage_error() {
    let config = config_file("");
    let out = yeti(&config, &["route", "hi", "--prefer", "gpt"]);
    assert_eq!(out.status.code(), Some(2));
}

// ---- analyze / tables ----

#[test]
fn analyze_as_json() {
    let config = config_file("");
    let out = yeti(&config, &["analyze", "why? how? what?", "--json"]);
    let analysis = json_stdout(&out);
    assert_eq!(analysis["complexity"], "high");
    assert_eq!(analysis["patterns"], serde_json::json!([]));
}

#[test]
fn models_lists_eight_categories() {
    let config = config_file("");
    let out = yeti(&config, &["models", "--json"]);
    let models = json_stdout(&out);
    assert_eq!(models.as_array().unwrap().len(), 8);
    assert_eq!(models[2]["category"], "vlm");
    assert_eq!(models[2]["speed"], "slow");
}

#[test]
fn skills_include_config_additions() {
    let config = config_file(
        r#"
[routing.skills.poetry]
category = "llm"
fallbacks = ["lcm"]
"#,
    );
    let out = yeti(&config, &["skills", "--json"]);
    let skills = json_stdout(&out);
    let poetry = skills
        .as_array()
        .unwrap()
        .iter()
        .find(|row| row["skill"] == "poetry")
        .expect("poetry skill listed");
    assert_eq!(poetry["fallbacks"], serde_json::json!(["lcm"]));
}

// ---- config check ----

#[test]
fn config_check_passes_on_defaults() {
    let config = config_file("");
    let out = yeti(&config, &["config", "check"]);
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("All checks passed."), "{stdout}");
}

#[test]
fn config_check_fails_on_unknown_key() {
    let config = config_file(
        r#"
[routing]
default_categroy = "llm"
"#,
    );
    let out = yeti(&config, &["config", "check"]);
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("default_categroy"), "{stderr}");
}

#[test]
fn invalid_config_stops_other_commands() {
    let config = config_file(
        r#"
[dispatch]
timeout_secs = 0
"#,
    );
    let out = yeti(&config, &["route", "hello"]);
    assert_eq!(out.status.code(), Some(1));
}
