// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use brik::{GameFamily, LexerErrorKind, Literal, TokenKind, Value};
use pretty_assertions::assert_eq;
use rstest::rstest;
use tests::{parse_clean, parse_with};

fn string(value: &str) -> Value {
    Value::Literal(Literal::String(value.into()))
}

#[rstest]
fn root_spellings_are_keywords_everywhere(
    #[values(GameFamily::Tetris, GameFamily::Snake, GameFamily::Arcade)] family: GameFamily,
    #[values("game", "juego")] spelling: &str,
) {
    let output = parse_with(&format!("{spelling} {{ }}"), family);

    assert!(output.tokens[0].kind.is_game_keyword());
    assert_eq!(output.tokens[0].kind.name(), "GAME");
    assert!(output.game.is_some());
}

#[rstest]
#[case(GameFamily::Tetris, "tablero", "TABLERO")]
#[case(GameFamily::Tetris, "serpiente", "ID")]
#[case(GameFamily::Snake, "serpiente", "SERPIENTE")]
#[case(GameFamily::Snake, "rotaciones", "ID")]
#[case(GameFamily::Arcade, "rotaciones", "ROTACIONES")]
#[case(GameFamily::Arcade, "T", "T")]
fn keyword_sets(#[case] family: GameFamily, #[case] word: &str, #[case] expected: &str) {
    let output = parse_with(word, family);
    assert_eq!(output.tokens[0].kind.name(), expected);
}

#[test]
fn tetris_has_only_hash_comments() {
    let output = parse_with("juego t {\n    // nota\n}", GameFamily::Tetris);

    let kinds: Vec<&LexerErrorKind> = output.lexer_errors.iter().map(|x| &x.kind).collect();
    assert_eq!(kinds, vec![
        &LexerErrorKind::UnexpectedCharacter { character: '/' },
        &LexerErrorKind::UnexpectedCharacter { character: '/' },
    ]);
    assert_eq!(output.lexer_errors[0].location.line(), 2);
    assert!(output.game.is_some());
}

#[rstest]
#[case(GameFamily::Snake)]
#[case(GameFamily::Arcade)]
fn double_slash_comments(#[case] family: GameFamily) {
    let game = parse_clean("game s { // nota\n    title = \"x\" # otra nota\n}", family);
    assert_eq!(game.body.assignment("title").unwrap().value, string("x"));
}

#[test]
fn snake_strings_end_at_the_line() {
    let output = parse_with("game s {\n    title = \"ab\ncd\"\n}", GameFamily::Snake);

    assert_eq!(output.lexer_errors.len(), 2);
    assert!(output.lexer_errors.iter().all(|x| x.kind == LexerErrorKind::UnterminatedString));
    assert_eq!(output.lexer_errors[0].location.line(), 2);
    assert_eq!(output.lexer_errors[0].location.column(), 13);
}

#[rstest]
#[case(GameFamily::Tetris)]
#[case(GameFamily::Arcade)]
fn multiline_strings(#[case] family: GameFamily) {
    let game = parse_clean("juego t {\n    fondo = \"ab\ncd\"\n}", family);
    assert_eq!(game.body.assignment("fondo").unwrap().value, string("ab\ncd"));
}

#[rstest]
#[case(GameFamily::Tetris, "C:\tmp")]
#[case(GameFamily::Arcade, "C:\tmp")]
#[case(GameFamily::Snake, "C:\\tmp")]
fn escapes(#[case] family: GameFamily, #[case] expected: &str) {
    let game = parse_clean("game t { ruta = \"C:\\tmp\" }", family);
    assert_eq!(game.body.assignment("ruta").unwrap().value, string(expected));
}

#[test]
fn escaped_quote() {
    let game = parse_clean(r#"juego t { titulo = "dice \"hola\"" }"#, GameFamily::Tetris);
    assert_eq!(game.body.assignment("titulo").unwrap().value, string("dice \"hola\""));
}

#[rstest]
#[case("tetris", GameFamily::Tetris)]
#[case("snake", GameFamily::Snake)]
#[case("arcade", GameFamily::Arcade)]
fn family_names(#[case] name: &str, #[case] family: GameFamily) {
    assert_eq!(name.parse::<GameFamily>().ok(), Some(family));
    assert_eq!(family.to_string(), name);
    assert_eq!(family.dialect().family(), family);
}

#[test]
fn keywords_stay_valid_keys() {
    let game = parse_clean("game s { serpiente { largo_inicial = 3 } }", GameFamily::Snake);

    let serpiente = game.body.block("serpiente").unwrap();
    assert_eq!(serpiente.assignment("largo_inicial").unwrap().value, Value::Literal(Literal::Integer(3)));
    assert!(matches!(game.body.statements[0], brik::Statement::Block(..)));
    assert!(!matches!(parse_with("serpiente", GameFamily::Snake).tokens[0].kind, TokenKind::Identifier(..)));
}
