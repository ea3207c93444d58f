// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use serde_json::{json, Map, Number as JsonNumber, Value as JsonValue};

use super::{Assign, Block, FunctionCall, Game, List, Literal, Object, Statement, Value};

/// Converts a tree into nested maps, sequences and scalars, for display and export.
///
/// Structural nodes become maps with a `type` entry naming the node (`GameNode`,
/// `BlockNode`, ...) followed by their fields. Objects are the exception: they become a flat
/// `key → value` map, the way the object literal was written.
pub trait ToPlainValue {
    fn to_plain_value(&self) -> JsonValue;
}

impl ToPlainValue for Game {
    fn to_plain_value(&self) -> JsonValue {
        json!({
            "type": "GameNode",
            "name": self.name,
            "body": self.body.to_plain_value(),
        })
    }
}

impl ToPlainValue for Block {
    fn to_plain_value(&self) -> JsonValue {
        json!({
            "type": "BlockNode",
            "name": self.name,
            "statements": self.statements.to_plain_value(),
        })
    }
}

impl ToPlainValue for Statement {
    fn to_plain_value(&self) -> JsonValue {
        match self {
            Self::Assign(assign) => assign.to_plain_value(),
            Self::Block(block) => block.to_plain_value(),
        }
    }
}

impl ToPlainValue for Assign {
    fn to_plain_value(&self) -> JsonValue {
        json!({
            "type": "AssignNode",
            "key": self.key,
            "value": self.value.to_plain_value(),
        })
    }
}

impl ToPlainValue for Value {
    fn to_plain_value(&self) -> JsonValue {
        match self {
            Self::Literal(literal) => json!({
                "type": "ValueNode",
                "value": literal.to_plain_value(),
            }),
            Self::List(list) => list.to_plain_value(),
            Self::Object(object) => object.to_plain_value(),
            Self::FunctionCall(call) => call.to_plain_value(),
        }
    }
}

/// The bare scalar, without a `ValueNode` wrapper.
impl ToPlainValue for Literal {
    fn to_plain_value(&self) -> JsonValue {
        match self {
            Self::Integer(int) => JsonValue::Number((*int).into()),
            Self::Float(float) => JsonNumber::from_f64(*float)
                .map(JsonValue::Number)
                .unwrap_or(JsonValue::Null),
            Self::String(str) | Self::Name(str) => JsonValue::String(str.clone()),
            Self::Boolean(boolean) => JsonValue::Bool(*boolean),
        }
    }
}

impl ToPlainValue for List {
    fn to_plain_value(&self) -> JsonValue {
        json!({
            "type": "ListNode",
            "items": self.items.to_plain_value(),
        })
    }
}

impl ToPlainValue for Object {
    fn to_plain_value(&self) -> JsonValue {
        let mut map = Map::new();

        for (key, value) in &self.pairs {
            map.insert(key.clone(), value.to_plain_value());
        }

        JsonValue::Object(map)
    }
}

impl ToPlainValue for FunctionCall {
    fn to_plain_value(&self) -> JsonValue {
        json!({
            "type": "FunctionNode",
            "name": self.name,
            "args": self.args.to_plain_value(),
        })
    }
}

impl<T: ToPlainValue> ToPlainValue for [T] {
    fn to_plain_value(&self) -> JsonValue {
        JsonValue::Array(self.iter().map(ToPlainValue::to_plain_value).collect())
    }
}

impl<T: ToPlainValue> ToPlainValue for Vec<T> {
    fn to_plain_value(&self) -> JsonValue {
        self.as_slice().to_plain_value()
    }
}
