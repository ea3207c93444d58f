// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use brik::{parse_source, Game, GameFamily, ParseOutput, ParserOptions, TokenKind};

pub const TETRIS: &str = include_str!("../data/tetris.brik");
pub const SNAKE: &str = include_str!("../data/snake.brik");

pub fn init_logging() {
    _ = env_logger::builder().is_test(true).try_init();
}

pub fn parse_with(input: &str, family: GameFamily) -> ParseOutput {
    init_logging();
    parse_source(input, family.dialect(), ParserOptions::default())
}

pub fn parse(input: &str) -> ParseOutput {
    parse_with(input, GameFamily::Arcade)
}

/// Parses input that must not produce a single diagnostic.
pub fn parse_clean(input: &str, family: GameFamily) -> Game {
    let output = parse_with(input, family);

    let lexical: Vec<String> = output.lexical_messages().collect();
    let syntax: Vec<String> = output.syntax_messages().collect();
    assert!(!output.has_errors(), "Lexical: {lexical:#?}\nSyntax: {syntax:#?}");

    output.game.expect("no tree despite no diagnostics")
}

/// Token kinds and lexemes, without the end-of-file token.
pub fn token_texts(output: &ParseOutput) -> Vec<(TokenKind, String)> {
    output.tokens.iter()
        .filter(|token| !token.kind.is_end_of_file())
        .map(|token| (token.kind.clone(), token.lexeme.clone()))
        .collect()
}
