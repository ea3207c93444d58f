// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::path::{Path, PathBuf};

use anyhow::Context;
use brik::{config::ConfigRoot, GameFamily, ParserOptions};
use log::LevelFilter;

pub const CONFIG_FILE_NAME: &str = "brik.toml";

/// Reads the configuration. An explicitly given file must exist; the implicit `brik.toml`
/// beside the input is optional.
pub fn load_config(explicit: Option<&Path>, input: &Path) -> anyhow::Result<ConfigRoot> {
    let (path, required) = match explicit {
        Some(path) => (path.to_path_buf(), true),
        None => (implicit_config_path(input), false),
    };

    if !required && !path.is_file() {
        return Ok(ConfigRoot::default());
    }

    let text = std::fs::read_to_string(&path)
        .with_context(|| format!("could not read configuration file {}", path.display()))?;

    parse_config(&text)
        .with_context(|| format!("invalid configuration file {}", path.display()))
}

pub fn parse_config(text: &str) -> anyhow::Result<ConfigRoot> {
    Ok(toml::from_str(text)?)
}

fn implicit_config_path(input: &Path) -> PathBuf {
    input.parent()
        .unwrap_or_else(|| Path::new(""))
        .join(CONFIG_FILE_NAME)
}

/// The configuration after command-line flags were applied on top of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub family: GameFamily,
    pub options: ParserOptions,
    pub compact: bool,
    pub log_level: LevelFilter,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Overrides {
    pub dialect: Option<GameFamily>,
    pub max_depth: Option<usize>,
    pub compact: bool,
    pub verbose: bool,
}

impl Settings {
    #[must_use]
    pub fn resolve(config: &ConfigRoot, overrides: Overrides) -> Self {
        let mut options = config.parser.options();
        if let Some(max_depth) = overrides.max_depth {
            options.max_depth = max_depth;
        }

        Self {
            family: overrides.dialect.unwrap_or(config.parser.dialect),
            options,
            compact: overrides.compact || config.output.compact,
            log_level: if overrides.verbose || config.log.debug {
                LevelFilter::Trace
            } else {
                LevelFilter::Warn
            },
        }
    }
}
