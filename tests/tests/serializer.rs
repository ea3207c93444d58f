// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use brik::{GameFamily, Literal, ToPlainValue, Value};
use pretty_assertions::assert_eq;
use serde_json::json;
use tests::{parse, parse_clean, SNAKE};

#[test]
fn small_game() {
    let game = parse_clean("game g { tablero { filas = 10 } pieza = random(I, 2.0) }", GameFamily::Arcade);

    assert_eq!(game.to_plain_value(), json!({
        "type": "GameNode",
        "name": "g",
        "body": {
            "type": "BlockNode",
            "name": "block",
            "statements": [
                {
                    "type": "BlockNode",
                    "name": "tablero",
                    "statements": [
                        { "type": "AssignNode", "key": "filas", "value": { "type": "ValueNode", "value": 10 } },
                    ],
                },
                {
                    "type": "AssignNode",
                    "key": "pieza",
                    "value": {
                        "type": "FunctionNode",
                        "name": "random",
                        "args": [
                            { "type": "ValueNode", "value": "I" },
                            { "type": "ValueNode", "value": 2.0 },
                        ],
                    },
                },
            ],
        },
    }));
}

#[test]
fn objects_inside_lists() {
    let game = parse_clean(SNAKE, GameFamily::Snake);
    let value = game.to_plain_value();

    let comida = value["body"]["statements"].as_array().unwrap()
        .iter()
        .find(|x| x["name"] == "comida")
        .unwrap()
        .clone();

    let items = &comida["statements"][0]["value"];
    assert_eq!(items["type"], "ListNode");
    assert_eq!(items["items"][1], json!({
        "nombre": { "type": "ValueNode", "value": "dorada" },
        "valor": { "type": "ValueNode", "value": 50 },
    }));
}

#[test]
fn repeated_object_key_keeps_first_position() {
    let game = parse_clean("game g { c = { a: 1, b: 2, a: 3 } }", GameFamily::Arcade);
    let value = game.to_plain_value();

    let Value::Object(source) = &game.body.assignment("c").unwrap().value else {
        panic!("Expected an object: {:#?}", game.body);
    };
    assert_eq!(source.pairs.len(), 3);
    assert_eq!(source.get("a"), Some(&Value::Literal(Literal::Integer(3))));
    assert_eq!(source.get("z"), None);

    let object = value["body"]["statements"][0]["value"].as_object().unwrap();
    assert_eq!(object.keys().collect::<Vec<_>>(), vec!["a", "b"]);
    assert_eq!(object["a"]["value"], 3);
}

#[test]
fn fatal_error_leaves_nothing_to_serialize() {
    let output = parse("game g { a = [1, 2 }");

    assert!(output.game.is_none());
    assert_eq!(output.diagnostics.iter().filter(|x| x.is_fatal()).count(), 1);
}

#[test]
fn pretty_output_is_indented() {
    let game = parse_clean("juego { }", GameFamily::Arcade);
    let text = serde_json::to_string_pretty(&game.to_plain_value()).unwrap();

    assert_eq!(text, "{\n  \"type\": \"GameNode\",\n  \"name\": null,\n  \"body\": {\n    \"type\": \"BlockNode\",\n    \"name\": \"block\",\n    \"statements\": []\n  }\n}");
}

#[test]
fn huge_numbers_are_never_null() {
    let huge = "9".repeat(400);
    let output = parse(&format!("game g {{ a = {huge}.5 b = {huge} }}"));

    assert_eq!(output.lexical_messages().count(), 2);
    assert_eq!(output.syntax_messages().count(), 0);

    let value = output.game.unwrap().to_plain_value();
    for statement in value["body"]["statements"].as_array().unwrap() {
        assert_eq!(statement["value"]["value"].as_f64(), Some(f64::MAX));
    }
}
