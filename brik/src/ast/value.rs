// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::fmt::{Display, Formatter};

use crate::Number;

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Literal(Literal),
    List(List),
    Object(Object),
    FunctionCall(FunctionCall),
}

impl From<Literal> for Value {
    fn from(value: Literal) -> Self {
        Self::Literal(value)
    }
}

/// A leaf value. Bare names are symbolic references, which are kept as their raw text and
/// never resolved.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Integer(i64),
    Float(f64),
    String(String),
    Boolean(bool),
    Name(String),
}

impl From<Number> for Literal {
    fn from(value: Number) -> Self {
        match value {
            Number::Integer(int) => Self::Integer(int),
            Number::Float(float) => Self::Float(float),
        }
    }
}

impl Display for Literal {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(int) => int.fmt(f),
            Self::Float(float) => f.write_fmt(format_args!("{float:?}")),
            Self::String(str) => f.write_fmt(format_args!("\"{str}\"")),
            Self::Boolean(boolean) => boolean.fmt(f),
            Self::Name(name) => name.fmt(f),
        }
    }
}

/// `[a, b, c]`
#[derive(Debug, Clone, PartialEq, Default)]
pub struct List {
    pub items: Vec<Value>,
}

/// `{ key: value, ... }`. Pairs stay in source order and repeated keys are all retained.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Object {
    pub pairs: Vec<(String, Value)>,
}

impl Object {
    /// The value of the last pair with this key, which is the one that wins once the
    /// object is flattened into a map.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.pairs.iter().rev().find(|(k, _)| k == key).map(|(_, value)| value)
    }
}

/// `name(arg, ...)`
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionCall {
    pub name: String,
    pub args: Vec<Value>,
}
