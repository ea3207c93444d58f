// Copyright (C) 2023 - 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::fmt::{Display, Formatter};

use crate::{FileLocation, FileRange};

use super::TokenKind;

#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    /// The source text this token was scanned from, quotes included.
    pub lexeme: String,
    pub begin: FileLocation,
    pub end: FileLocation,
}

impl Token {
    #[must_use]
    pub fn as_identifier(&self) -> Option<&str> {
        let TokenKind::Identifier(ident) = &self.kind else {
            return None;
        };

        Some(ident)
    }

    #[must_use]
    pub const fn line(&self) -> usize {
        self.begin.line()
    }

    #[must_use]
    pub const fn column(&self) -> usize {
        self.begin.column()
    }
}

impl Token {
    pub fn range(&self) -> FileRange {
        (self.begin, self.end).into()
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.kind.is_end_of_file() {
            return self.kind.fmt(f);
        }

        f.write_str(&self.lexeme)
    }
}
