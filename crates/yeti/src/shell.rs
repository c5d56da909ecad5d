// SPDX-FileCopyrightText: 2026 YETI AI Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `yeti shell` command implementation.
//!
//! Interactive REPL that routes every line and prints the decision.
//! Session settings (`/skill`, `/fast`, `/prefer`) apply to every following
//! message until `/reset`. A line starting with `/<category>` overrides the
//! category for that message only.

use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tracing::debug;
use yeti_core::{ModelCategory, YetiError};
use yeti_router::{ModelRouter, RouteOptions};

use crate::output::{self, Palette};

/// Settings that persist across messages in one shell session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    pub skill: Option<String>,
    pub fast: bool,
    pub preference: Option<ModelCategory>,
}

impl SessionState {
    fn options(&self) -> RouteOptions {
        RouteOptions {
            requires_fast_response: self.fast.then_some(true),
            complexity_level: None,
            user_preference: self.preference,
        }
    }

    fn describe(&self) -> String {
        format!(
            "skill: {}, fast: {}, prefer: {}",
            self.skill.as_deref().unwrap_or("none"),
            if self.fast { "on" } else { "off" },
            self.preference.map_or("none", |c| c.tag()),
        )
    }
}

/// One parsed line of shell input.
#[derive(Debug, PartialEq, Eq)]
pub enum ShellInput<'a> {
    Quit,
    Help,
    /// `/skill NAME` sets, bare `/skill` clears.
    Skill(Option<&'a str>),
    /// Toggle fast-response mode.
    Fast,
    /// `/prefer CAT` sets, bare `/prefer` clears.
    Prefer(Option<ModelCategory>),
    Reset,
    /// Text to route, possibly with an inline `/<category>` prefix.
    Message(&'a str),
    Invalid(String),
}

/// Parse one line of input.
pub fn parse_input(line: &str) -> ShellInput<'_> {
    let trimmed = line.trim();
    let (command, arg) = match trimmed.split_once(char::is_whitespace) {
        Some((command, arg)) => (command, Some(arg.trim()).filter(|a| !a.is_empty())),
        None => (trimmed, None),
    };

    match command {
        "/quit" | "/exit" => ShellInput::Quit,
        "/help" => ShellInput::Help,
        "/skill" => ShellInput::Skill(arg),
        "/fast" => ShellInput::Fast,
        "/reset" => ShellInput::Reset,
        "/prefer" => match arg.map(str::parse::<ModelCategory>) {
            None => ShellInput::Prefer(None),
            Some(Ok(category)) => ShellInput::Prefer(Some(category)),
            Some(Err(_)) => ShellInput::Invalid(format!(
                "unknown model category `{}`; expected one of: {}",
                arg.unwrap_or_default(),
                output::tags(&ModelCategory::ALL)
            )),
        },
        _ => ShellInput::Message(trimmed),
    }
}

/// Apply a settings command; returns the confirmation to print, or `None`
/// for inputs that are not settings changes.
pub fn apply(state: &mut SessionState, input: &ShellInput<'_>) -> Option<String> {
    match input {
        ShellInput::Skill(skill) => {
            state.skill = skill.map(str::to_string);
            Some(match skill {
                Some(s) => format!("skill set to {s}"),
                None => "skill cleared".to_string(),
            })
        }
        ShellInput::Fast => {
            state.fast = !state.fast;
            Some(format!(
                "fast response {}",
                if state.fast { "on" } else { "off" }
            ))
        }
        ShellInput::Prefer(category) => {
            state.preference = *category;
            Some(match category {
                Some(c) => format!("preferring {c}"),
                None => "preference cleared".to_string(),
            })
        }
        ShellInput::Reset => {
            *state = SessionState::default();
            Some("session settings reset".to_string())
        }
        _ => None,
    }
}

const HELP: &str = "\
  /skill NAME   route with a skill shortcut (bare /skill clears)
  /fast         toggle fast-response mode
  /prefer CAT   always use a category (bare /prefer clears)
  /reset        clear session settings
  /CAT message  use a category for one message
  /quit         exit";

/// Runs the `yeti shell` interactive REPL.
pub fn run_shell(router: &ModelRouter, palette: Palette) -> Result<(), YetiError> {
    let mut rl = DefaultEditor::new()
        .map_err(|e| YetiError::Internal(format!("failed to initialize readline: {e}")))?;
    let mut state = SessionState::default();

    println!("{}", palette.good("yeti shell"));
    println!(
        "Type {} for commands, {} to exit.\n",
        palette.warn("/help"),
        palette.warn("/quit")
    );

    let prompt = format!("{}> ", palette.good("yeti"));
    loop {
        match rl.readline(&prompt) {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(&line);

                let input = parse_input(&line);
                match &input {
                    ShellInput::Quit => break,
                    ShellInput::Help => println!("{HELP}\n"),
                    ShellInput::Invalid(message) => eprintln!("{}: {message}", palette.bad("error")),
                    ShellInput::Message(text) => {
                        let (decision, _) = router.route_with_prefix(
                            text,
                            state.skill.as_deref(),
                            state.options(),
                        );
                        print!(
                            "{}",
                            output::format_decision(&decision, router.knowledge(), palette)
                        );
                        println!();
                    }
                    _ => {
                        if let Some(confirmation) = apply(&mut state, &input) {
                            debug!(state = %state.describe(), "shell settings changed");
                            println!("{}", palette.dim(&confirmation));
                        }
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                // Ctrl+C
                break;
            }
            Err(ReadlineError::Eof) => {
                // Ctrl+D
                break;
            }
            Err(e) => {
                eprintln!("{}: {e}", palette.bad("error"));
                break;
            }
        }
    }

    println!("{}", palette.dim("goodbye"));
    Ok(())
}
