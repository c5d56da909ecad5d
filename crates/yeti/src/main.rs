// SPDX-FileCopyrightText: 2026 YETI AI Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! YETI AI - route messages to the model category best suited to answer them.
//!
//! This is the binary entry point.

mod check;
mod output;
mod route;
mod shell;
mod tables;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use yeti_config::YetiConfig;
use yeti_core::{ComplexityLevel, ModelCategory, YetiError};
use yeti_router::ModelRouter;

use crate::output::Palette;

/// YETI AI - model-category router.
#[derive(Parser, Debug)]
#[command(name = "yeti", version, about, long_about = None)]
struct Cli {
    /// Read configuration from this file instead of the standard locations.
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Disable colored output.
    #[arg(long, global = true)]
    plain: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Route a message and print the decision.
    Route {
        /// Message text.
        text: String,
        /// Skill shortcut (e.g. writing, code, image).
        #[arg(long)]
        skill: Option<String>,
        /// Prefer a fast model over a capable one.
        #[arg(long)]
        fast: bool,
        /// Override the detected complexity (low, medium, high).
        #[arg(long)]
        complexity: Option<ComplexityLevel>,
        /// Force a model category (e.g. llm, vlm, moe).
        #[arg(long, value_name = "CATEGORY")]
        prefer: Option<ModelCategory>,
        /// Output the decision as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Show detected patterns and complexity for a message.
    Analyze {
        /// Message text.
        text: String,
        /// Output the analysis as JSON.
        #[arg(long)]
        json: bool,
    },
    /// List model categories and their capabilities.
    Models {
        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },
    /// List skill shortcuts and the categories they map to.
    Skills {
        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Launch an interactive routing session.
    Shell,
    /// Manage YETI configuration.
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommands {
    /// Load and validate configuration, then report on it.
    Check,
}

fn main() {
    let cli = Cli::parse();
    let palette = Palette::detect(cli.plain);

    if let Some(Commands::Config {
        action: ConfigCommands::Check,
    }) = &cli.command
    {
        let passed = check::run_check(cli.config.as_deref(), palette);
        std::process::exit(if passed { 0 } else { 1 });
    }

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(errors) => {
            yeti_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    init_tracing(&config.agent.log_level);

    if let Err(e) = run(cli.command, &config, palette) {
        eprintln!("yeti: {e}");
        std::process::exit(1);
    }
}

fn run(command: Option<Commands>, config: &YetiConfig, palette: Palette) -> Result<(), YetiError> {
    let router = ModelRouter::new(&config.routing)?;

    match command {
        Some(Commands::Route {
            text,
            skill,
            fast,
            complexity,
            prefer,
            json,
        }) => {
            let options = yeti_router::RouteOptions {
                // An absent flag defers to routing.fast_response.
                requires_fast_response: fast.then_some(true),
                complexity_level: complexity,
                user_preference: prefer,
            };
            route::run_route(&router, &text, skill.as_deref(), options, json, palette)
        }
        Some(Commands::Analyze { text, json }) => route::run_analyze(&router, &text, json),
        Some(Commands::Models { json }) => tables::run_models(router.knowledge(), json, palette),
        Some(Commands::Skills { json }) => tables::run_skills(router.knowledge(), json, palette),
        Some(Commands::Shell) => shell::run_shell(&router, palette),
        Some(Commands::Config { .. }) => Ok(()),
        None => {
            println!("yeti: use --help for available commands");
            Ok(())
        }
    }
}

/// Load configuration from an explicit file or the standard hierarchy.
pub(crate) fn load_config(path: Option<&Path>) -> Result<YetiConfig, Vec<yeti_config::ConfigError>> {
    match path {
        Some(path) => yeti_config::load_and_validate_path(path),
        None => yeti_config::load_and_validate(),
    }
}

/// Initialize tracing with `RUST_LOG`, falling back to the configured level.
///
/// Logs go to stderr so `--json` output stays machine-readable.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "yeti={log_level},yeti_router={log_level},yeti_config={log_level},warn"
        ))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn route_flags_parse_into_typed_values() {
        let cli = Cli::try_parse_from([
            "yeti",
            "route",
            "hello",
            "--skill",
            "code",
            "--fast",
            "--complexity",
            "HIGH",
            "--prefer",
            "vision-language",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::Route {
                text,
                skill,
                fast,
                complexity,
                prefer,
                json,
            }) => {
                assert_eq!(text, "hello");
                assert_eq!(skill.as_deref(), Some("code"));
                assert!(fast);
                assert_eq!(complexity, Some(ComplexityLevel::High));
                assert_eq!(prefer, Some(ModelCategory::VisionLanguage));
                assert!(!json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn unknown_category_is_rejected() {
        assert!(Cli::try_parse_from(["yeti", "route", "hi", "--prefer", "gpt"]).is_err());
    }

    #[test]
    fn global_flags_work_after_subcommand() {
        let cli = Cli::try_parse_from(["yeti", "config", "check", "--plain", "--config", "x.toml"])
            .unwrap();
        assert!(cli.plain);
        assert_eq!(cli.config.as_deref(), Some(Path::new("x.toml")));
    }

    #[test]
    fn binary_loads_config_defaults() {
        let config =
            yeti_config::load_and_validate_str("").expect("default config should be valid");
        assert_eq!(config.agent.name, "yeti");

        let command = Commands::Analyze {
            text: "hi".into(),
            json: true,
        };
        assert!(run(Some(command), &config, Palette::plain()).is_ok());
    }
}
