// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::{borrow::Cow, fmt::{Display, Formatter}};

use super::{Keyword, Punctuator};

#[derive(Clone, Debug, PartialEq)]
pub enum TokenKind {
    Keyword(Keyword),

    Identifier(String),
    Number(Number),
    StringLiteral(String),
    Boolean(bool),

    Punctuator(Punctuator),
    EndOfFile,
}

impl TokenKind {
    /// The category name of this token, e.g. `NUMBER`, `LBRACE` or `TABLERO`.
    #[must_use]
    pub fn name(&self) -> Cow<'static, str> {
        match self {
            Self::Keyword(keyword) => keyword.name(),

            Self::Identifier(..) => Cow::Borrowed("ID"),
            Self::Number(..) => Cow::Borrowed("NUMBER"),
            Self::StringLiteral(..) => Cow::Borrowed("STRING"),
            Self::Boolean(..) => Cow::Borrowed("BOOLEAN"),

            Self::Punctuator(punctuator) => Cow::Borrowed(punctuator.name()),
            Self::EndOfFile => Cow::Borrowed("EOF"),
        }
    }

    /// Identifiers and every keyword may be used as the key of a statement.
    #[must_use]
    pub const fn is_key(&self) -> bool {
        matches!(self, Self::Identifier(..) | Self::Keyword(..))
    }

    #[must_use]
    pub fn is_game_keyword(&self) -> bool {
        matches!(self, Self::Keyword(keyword) if keyword.is_game())
    }

    #[must_use]
    pub fn is_punctuator(&self, punctuator: Punctuator) -> bool {
        matches!(self, Self::Punctuator(p) if *p == punctuator)
    }

    #[must_use]
    pub const fn is_end_of_file(&self) -> bool {
        matches!(self, Self::EndOfFile)
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Keyword(keyword) => keyword.fmt(f),
            Self::Identifier(ident) => ident.fmt(f),
            Self::Number(number) => number.fmt(f),
            Self::StringLiteral(str) => f.write_fmt(format_args!("\"{str}\"")),
            Self::Boolean(boolean) => boolean.fmt(f),
            Self::Punctuator(punctuator) => punctuator.fmt(f),
            Self::EndOfFile => f.write_str("end of input"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Integer(i64),
    Float(f64),
}

impl Display for Number {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(int) => int.fmt(f),
            Self::Float(float) => f.write_fmt(format_args!("{float:?}")),
        }
    }
}
