// Copyright (C) 2023 - 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

#![deny(elided_lifetimes_in_paths)]

mod ast;
pub mod config;
mod lexer;
mod parser;
mod util;

pub use self::{
    ast::{Assign, Block, DEFAULT_BLOCK_NAME, FunctionCall, Game, List, Literal, Object, Statement, ToPlainValue, Value},
    lexer::{Dialect, GameFamily, Keyword, Lexer, LexerError, LexerErrorKind, Number, Punctuator, ROOT_KEYWORDS, Token, TokenKind},
    parser::{ParseDiagnostic, ParseResult, Parser, ParserOptions},
    util::{FileLocation, FileRange, SourceCode},
};

/// Scans the whole input. The token list always ends with [`TokenKind::EndOfFile`].
pub fn tokenize(source: &str, dialect: &Dialect) -> (Vec<Token>, Vec<LexerError>) {
    Lexer::new(source, dialect).collect_all()
}

/// Parses a token list that ends with [`TokenKind::EndOfFile`].
pub fn parse(tokens: &[Token], options: ParserOptions) -> (Option<Game>, Vec<ParseDiagnostic>) {
    let mut parser = Parser::with_options(tokens, options);
    let game = parser.parse_game();
    (game, parser.into_diagnostics())
}

/// Everything produced by running both stages over one source text.
#[derive(Debug, Clone)]
pub struct ParseOutput {
    pub tokens: Vec<Token>,
    pub lexer_errors: Vec<LexerError>,
    pub game: Option<Game>,
    pub diagnostics: Vec<ParseDiagnostic>,
}

impl ParseOutput {
    pub fn lexical_messages(&self) -> impl Iterator<Item = String> + '_ {
        self.lexer_errors.iter().map(ToString::to_string)
    }

    pub fn syntax_messages(&self) -> impl Iterator<Item = String> + '_ {
        self.diagnostics.iter().map(ToString::to_string)
    }

    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.lexer_errors.is_empty() || !self.diagnostics.is_empty()
    }

    #[must_use]
    pub fn has_fatal_error(&self) -> bool {
        self.diagnostics.iter().any(ParseDiagnostic::is_fatal)
    }
}

/// Tokenizes and parses in one go. Lexical errors never stop the parser from running.
pub fn parse_source(source: &str, dialect: &Dialect, options: ParserOptions) -> ParseOutput {
    let (tokens, lexer_errors) = tokenize(source, dialect);
    let (game, diagnostics) = parse(&tokens, options);

    ParseOutput {
        tokens,
        lexer_errors,
        game,
        diagnostics,
    }
}
