// SPDX-FileCopyrightText: 2026 YETI AI Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./yeti.toml` > `~/.config/yeti/yeti.toml` > `/etc/yeti/yeti.toml`
//! with environment variable overrides via `YETI_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};

use crate::model::YetiConfig;

/// System-wide config location.
pub const SYSTEM_CONFIG_PATH: &str = "/etc/yeti/yeti.toml";

/// Config file name looked up in the working directory.
pub const LOCAL_CONFIG_FILE: &str = "yeti.toml";

/// Path of the per-user XDG config file, if a config dir exists.
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("yeti").join(LOCAL_CONFIG_FILE))
}

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/yeti/yeti.toml` (system-wide)
/// 3. `~/.config/yeti/yeti.toml` (user XDG config)
/// 4. `./yeti.toml` (local directory)
/// 5. `YETI_*` environment variables
pub fn load_config() -> Result<YetiConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from a TOML string over compiled defaults (no files, no env).
pub fn load_config_from_str(toml_content: &str) -> Result<YetiConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(YetiConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<YetiConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(YetiConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Build the Figment used for XDG config loading, before extraction.
pub fn build_figment() -> Figment {
    Figment::new()
        .merge(Serialized::defaults(YetiConfig::default()))
        .merge(Toml::file(SYSTEM_CONFIG_PATH))
        .merge(Toml::file(user_config_path().unwrap_or_default()))
        .merge(Toml::file(LOCAL_CONFIG_FILE))
        .merge(env_provider())
}

/// Environment variable provider with explicit section mapping.
///
/// Only the first underscore after the section name becomes a dot, so
/// `YETI_ROUTING_DEFAULT_CATEGORY` maps to `routing.default_category`.
fn env_provider() -> Env {
    Env::prefixed("YETI_").map(|key| map_env_key(key.as_str()).into())
}

/// Map a prefix-stripped env var name to a lowercase dotted config key.
///
/// Figment hands over the name in its original case.
pub(crate) fn map_env_key(key: &str) -> String {
    let key = key.to_ascii_lowercase();
    for section in ["agent", "routing", "dispatch"] {
        if let Some(rest) = key.strip_prefix(section).and_then(|r| r.strip_prefix('_')) {
            return format!("{section}.{rest}");
        }
    }
    key
}
