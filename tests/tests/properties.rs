// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use brik::{FunctionCall, GameFamily, List, Literal, Statement, Value};
use pretty_assertions::assert_eq;
use rstest::rstest;
use tests::{parse, parse_clean, parse_with, token_texts, SNAKE, TETRIS};

#[rstest]
#[case(TETRIS, GameFamily::Tetris)]
#[case(TETRIS, GameFamily::Arcade)]
#[case(SNAKE, GameFamily::Snake)]
#[case(SNAKE, GameFamily::Arcade)]
#[case("game {}", GameFamily::Arcade)]
#[case("juego j { a = 1; b = 2; }", GameFamily::Tetris)]
fn well_formed_input_is_clean(#[case] input: &str, #[case] family: GameFamily) {
    parse_clean(input, family);
}

#[test]
fn literals_survive_serialization() {
    let game = parse_clean(TETRIS, GameFamily::Tetris);
    let value = brik::ToPlainValue::to_plain_value(&game);

    assert_eq!(value["name"], "Tetris Clasico");

    let statements = value["body"]["statements"].as_array().unwrap();
    let find = |key: &str| statements.iter()
        .find(|x| x["key"] == key || x["name"] == key)
        .unwrap_or_else(|| panic!("no statement `{key}`"))
        .clone();

    let velocidad = find("velocidad");
    let velocidad = &velocidad["value"]["value"];
    assert!(velocidad.is_f64());
    assert_eq!(velocidad.as_f64(), Some(1.5));

    assert_eq!(find("perdiste")["value"]["value"], false);

    let tablero = find("tablero");
    let filas = &tablero["statements"][0]["value"]["value"];
    assert!(filas.is_i64());
    assert_eq!(filas.as_i64(), Some(20));
    assert_eq!(tablero["statements"][2]["value"]["value"], "negro");
}

#[rstest]
#[case("\n\n\n")]
#[case("   \t\r\n")]
#[case("\n# trailing comment")]
#[case("\n// trailing comment\n")]
fn trailing_trivia_does_not_change_tokens(#[case] suffix: &str) {
    let plain = parse(TETRIS);
    let padded = parse(&format!("{TETRIS}{suffix}"));

    assert_eq!(token_texts(&plain), token_texts(&padded));
    assert_eq!(padded.tokens.last().map(|x| x.kind.is_end_of_file()), Some(true));
}

#[test]
fn unclosed_root_brace_is_fatal() {
    let output = parse("game x { tablero = 1");

    assert!(output.game.is_none());
    assert!(output.has_fatal_error());
    assert_eq!(output.lexical_messages().count(), 0);
    assert_eq!(
        output.syntax_messages().collect::<Vec<_>>(),
        vec!["expected `}` but found the end of the input at line 1, column 21".to_string()],
    );
}

#[test]
fn stray_character_is_skipped() {
    let output = parse("game g { a = 1 @ b = 2 }");

    assert_eq!(
        output.lexical_messages().collect::<Vec<_>>(),
        vec!["unexpected character `@` at line 1, column 16".to_string()],
    );
    assert_eq!(output.syntax_messages().count(), 0);

    let game = output.game.unwrap();
    assert_eq!(game.body.assignment("a").unwrap().value, Value::Literal(Literal::Integer(1)));
    assert_eq!(game.body.assignment("b").unwrap().value, Value::Literal(Literal::Integer(2)));
}

#[test]
fn colon_outside_object_is_recoverable() {
    let output = parse("game g { size = [1,2,3] colors: red }");

    assert_eq!(output.lexical_messages().count(), 0);
    assert!(output.syntax_messages().count() >= 1);
    assert!(!output.has_fatal_error());

    let game = output.game.unwrap();
    let items = (1..=3).map(|x| Value::Literal(Literal::Integer(x))).collect();
    assert_eq!(game.body.assignment("size").unwrap().value, Value::List(List { items }));
}

#[test]
fn nested_named_block() {
    let game = parse_clean("game g { tablero { filas = 10 columnas = 5 } }", GameFamily::Arcade);

    let tablero = game.body.block("tablero").unwrap();
    assert_eq!(tablero.statements.len(), 2);
    assert!(tablero.statements.iter().all(|x| matches!(x, Statement::Assign(..))));
    assert_eq!(tablero.assignment("columnas").unwrap().value, Value::Literal(Literal::Integer(5)));
}

#[test]
fn function_call_is_distinct_from_name() {
    let game = parse_clean("game g { pieza = random(I,O,T) otra = I }", GameFamily::Arcade);

    let name = |x: &str| Value::Literal(Literal::Name(x.into()));

    assert_eq!(game.body.assignment("pieza").unwrap().value, Value::FunctionCall(FunctionCall {
        name: "random".into(),
        args: vec![name("I"), name("O"), name("T")],
    }));
    assert_eq!(game.body.assignment("otra").unwrap().value, name("I"));
}

#[test]
fn both_lists_are_reported_together() {
    let output = parse_with("juego t { a = 1 $ b c = 2 }", GameFamily::Tetris);

    assert_eq!(output.lexical_messages().count(), 1);
    assert_eq!(output.syntax_messages().count(), 1);
    assert!(output.game.is_some());
}
