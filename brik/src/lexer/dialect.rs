// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use serde::Deserialize;
use strum::{AsRefStr, EnumString};

use super::keyword::{ARCADE_KEYWORDS, SNAKE_KEYWORDS, TETRIS_KEYWORDS};

/// The game families the tokenizer knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[derive(AsRefStr, EnumString, strum::Display)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum GameFamily {
    Tetris,
    Snake,
    #[default]
    Arcade,
}

impl GameFamily {
    #[must_use]
    pub const fn dialect(&self) -> &'static Dialect {
        match self {
            Self::Tetris => &Dialect::TETRIS,
            Self::Snake => &Dialect::SNAKE,
            Self::Arcade => &Dialect::ARCADE,
        }
    }
}

/// Lexical rules of one game family.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dialect {
    family: GameFamily,
    keywords: &'static [&'static str],
    line_comments: &'static [&'static str],
    string_escapes: bool,
    multiline_strings: bool,
}

impl Dialect {
    pub const TETRIS: Self = Self {
        family: GameFamily::Tetris,
        keywords: TETRIS_KEYWORDS,
        line_comments: &["#"],
        string_escapes: true,
        multiline_strings: true,
    };

    pub const SNAKE: Self = Self {
        family: GameFamily::Snake,
        keywords: SNAKE_KEYWORDS,
        line_comments: &["//", "#"],
        string_escapes: false,
        multiline_strings: false,
    };

    pub const ARCADE: Self = Self {
        family: GameFamily::Arcade,
        keywords: ARCADE_KEYWORDS,
        line_comments: &["#", "//"],
        string_escapes: true,
        multiline_strings: true,
    };

    #[must_use]
    pub const fn family(&self) -> GameFamily {
        self.family
    }

    /// Reserved words, excluding the root spellings which every dialect shares.
    #[must_use]
    pub const fn keywords(&self) -> &'static [&'static str] {
        self.keywords
    }

    #[must_use]
    pub const fn line_comments(&self) -> &'static [&'static str] {
        self.line_comments
    }

    #[must_use]
    pub const fn string_escapes(&self) -> bool {
        self.string_escapes
    }

    #[must_use]
    pub const fn multiline_strings(&self) -> bool {
        self.multiline_strings
    }

    #[must_use]
    pub fn starts_line_comment(&self, remaining: &str) -> bool {
        self.line_comments.iter().any(|prefix| remaining.starts_with(prefix))
    }
}

impl Default for Dialect {
    fn default() -> Self {
        Self::ARCADE
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("tetris", GameFamily::Tetris)]
    #[case("snake", GameFamily::Snake)]
    #[case("arcade", GameFamily::Arcade)]
    fn family_from_str(#[case] input: &str, #[case] expected: GameFamily) {
        assert_eq!(GameFamily::from_str(input).unwrap(), expected);
        assert_eq!(expected.dialect().family(), expected);
        assert_eq!(expected.to_string(), input);
    }

    #[rstest]
    #[case(Dialect::TETRIS, "// nope", false)]
    #[case(Dialect::TETRIS, "# yes", true)]
    #[case(Dialect::SNAKE, "// yes", true)]
    #[case(Dialect::ARCADE, "## yes", true)]
    #[case(Dialect::ARCADE, "/ nope", false)]
    fn line_comments(#[case] dialect: Dialect, #[case] input: &str, #[case] expected: bool) {
        assert_eq!(dialect.starts_line_comment(input), expected);
    }
}
