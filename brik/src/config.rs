// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use serde::Deserialize;

use crate::{GameFamily, ParserOptions};

/// The contents of a `brik.toml` file. Every section and key is optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
#[serde(rename_all = "kebab-case")]
pub struct ConfigRoot {
    pub log: ConfigSectionLog,
    pub parser: ConfigSectionParser,
    pub output: ConfigSectionOutput,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
#[serde(rename_all = "kebab-case")]
pub struct ConfigSectionLog {
    pub debug: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
#[serde(rename_all = "kebab-case")]
pub struct ConfigSectionParser {
    pub dialect: GameFamily,
    pub max_depth: usize,
}

impl ConfigSectionParser {
    #[must_use]
    pub fn options(&self) -> ParserOptions {
        ParserOptions {
            max_depth: self.max_depth,
        }
    }
}

impl Default for ConfigSectionParser {
    fn default() -> Self {
        Self {
            dialect: GameFamily::default(),
            max_depth: ParserOptions::DEFAULT_MAX_DEPTH,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
#[serde(rename_all = "kebab-case")]
pub struct ConfigSectionOutput {
    /// Print the tree on a single line instead of indented.
    pub compact: bool,
}
