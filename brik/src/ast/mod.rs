// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

mod game;
mod plain;
mod value;

pub use self::{
    game::{
        Assign,
        Block,
        DEFAULT_BLOCK_NAME,
        Game,
        Statement,
    },
    plain::ToPlainValue,
    value::{
        FunctionCall,
        List,
        Literal,
        Object,
        Value,
    },
};
