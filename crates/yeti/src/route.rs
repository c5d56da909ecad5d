// SPDX-FileCopyrightText: 2026 YETI AI Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `yeti route` and `yeti analyze` command implementations.

use yeti_core::YetiError;
use yeti_router::{ModelRouter, RouteOptions};

use crate::output::{self, Palette};

/// Run the `yeti route` command.
///
/// The text may start with an inline `/<category>` override. With `--json`
/// the decision is printed as a JSON object.
pub fn run_route(
    router: &ModelRouter,
    text: &str,
    skill: Option<&str>,
    options: RouteOptions,
    json: bool,
    palette: Palette,
) -> Result<(), YetiError> {
    let (decision, _) = router.route_with_prefix(text, skill, options);

    if json {
        println!("{}", output::to_json(&decision));
    } else {
        print!("{}", output::header("yeti route", 50));
        print!(
            "{}",
            output::format_decision(&decision, router.knowledge(), palette)
        );
        println!();
    }
    Ok(())
}

/// Run the `yeti analyze` command.
pub fn run_analyze(router: &ModelRouter, text: &str, json: bool) -> Result<(), YetiError> {
    let analysis = router.analyze(text);

    if json {
        println!("{}", output::to_json(&analysis));
    } else {
        print!("{}", output::header("yeti analyze", 50));
        print!("{}", output::format_analysis(&analysis));
        println!();
    }
    Ok(())
}
