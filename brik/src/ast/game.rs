// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use super::Value;

/// Name given to a block before it is known to be a named section. The body of a
/// [`Game`] keeps this name.
pub const DEFAULT_BLOCK_NAME: &str = "block";

/// The root of a configuration file: `game "name" { ... }`.
#[derive(Debug, Clone, PartialEq)]
pub struct Game {
    pub name: Option<String>,
    pub body: Block,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub name: String,
    pub statements: Vec<Statement>,
}

impl Block {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            statements: Vec::new(),
        }
    }

    /// Finds the first assignment with the given key, in source order.
    #[must_use]
    pub fn assignment(&self, key: &str) -> Option<&Assign> {
        self.statements.iter().find_map(|statement| match statement {
            Statement::Assign(assign) if assign.key == key => Some(assign),
            _ => None,
        })
    }

    /// Finds the first nested block with the given name, in source order.
    #[must_use]
    pub fn block(&self, name: &str) -> Option<&Block> {
        self.statements.iter().find_map(|statement| match statement {
            Statement::Block(block) if block.name == name => Some(block),
            _ => None,
        })
    }
}

impl Default for Block {
    fn default() -> Self {
        Self::new(DEFAULT_BLOCK_NAME)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Assign(Assign),
    Block(Block),
}

/// `key = value`
#[derive(Debug, Clone, PartialEq)]
pub struct Assign {
    pub key: String,
    pub value: Value,
}
