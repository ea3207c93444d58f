// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

mod dialect;
mod keyword;
mod lexer;
mod punctuator;
mod token;
mod token_kind;

pub use self::{
    dialect::{
        Dialect,
        GameFamily,
    },
    keyword::{
        Keyword,
        ROOT_KEYWORDS,
    },
    lexer::{
        Lexer,
        LexerError,
        LexerErrorKind,
    },
    punctuator::Punctuator,
    token::Token,
    token_kind::{
        Number,
        TokenKind,
    },
};
