// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::fmt::{Display, Formatter};

use strum::{EnumIter, IntoEnumIterator, IntoStaticStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoStaticStr, EnumIter)]
pub enum Punctuator {
    #[strum(serialize = "LBRACE")]
    LeftCurlyBracket,
    #[strum(serialize = "RBRACE")]
    RightCurlyBracket,
    #[strum(serialize = "LBRACKET")]
    LeftSquareBracket,
    #[strum(serialize = "RBRACKET")]
    RightSquareBracket,
    #[strum(serialize = "LPAREN")]
    LeftParenthesis,
    #[strum(serialize = "RPAREN")]
    RightParenthesis,
    #[strum(serialize = "EQUAL")]
    Assignment,
    #[strum(serialize = "COMMA")]
    Comma,
    #[strum(serialize = "SEMICOLON")]
    Semicolon,
    #[strum(serialize = "COLON")]
    Colon,
}

impl Punctuator {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::LeftCurlyBracket => "{",
            Self::RightCurlyBracket => "}",
            Self::LeftSquareBracket => "[",
            Self::RightSquareBracket => "]",
            Self::LeftParenthesis => "(",
            Self::RightParenthesis => ")",
            Self::Assignment => "=",
            Self::Comma => ",",
            Self::Semicolon => ";",
            Self::Colon => ":",
        }
    }

    /// Kind name as it shows up in token dumps, e.g. `LBRACE`.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.into()
    }

    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        Self::iter().find(|punctuator| punctuator.as_str().starts_with(c))
    }
}

impl Display for Punctuator {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
