// Copyright (C) 2023 - 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use log::{debug, trace};
use strum::AsRefStr;

use crate::{
    Assign, Block, FileRange, FunctionCall, Game, List, Literal, Object, Punctuator, Statement, Token, TokenKind, Value,
};

/// Fatal conditions travel up the descent as the `Err` side, and are recorded once by
/// [`Parser::parse_game`].
pub type ParseResult<T> = Result<T, ParseDiagnostic>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserOptions {
    /// How many blocks, lists, objects and calls may be nested inside each other.
    pub max_depth: usize,
}

impl ParserOptions {
    pub const DEFAULT_MAX_DEPTH: usize = 256;
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            max_depth: Self::DEFAULT_MAX_DEPTH,
        }
    }
}

#[derive(Clone)]
pub struct Parser<'tokens> {
    tokens: &'tokens [Token],
    cursor: usize,
    depth: usize,
    options: ParserOptions,
    diagnostics: Vec<ParseDiagnostic>,
    end_of_file_token: Token,
}

impl<'tokens> Parser<'tokens> {
    pub fn new(tokens: &'tokens [Token]) -> Self {
        Self::with_options(tokens, ParserOptions::default())
    }

    pub fn with_options(tokens: &'tokens [Token], options: ParserOptions) -> Self {
        let end = tokens.last().map(|x| x.end).unwrap_or_default();

        Self {
            tokens,
            cursor: 0,
            depth: 0,
            options,
            diagnostics: Vec::new(),
            end_of_file_token: Token {
                kind: TokenKind::EndOfFile,
                lexeme: String::new(),
                begin: end,
                end,
            },
        }
    }

    /// Parses the whole token stream. Returns `None` when a fatal diagnostic aborted the
    /// parse; recoverable diagnostics may be present either way.
    pub fn parse_game(&mut self) -> Option<Game> {
        match self.parse_root() {
            Ok(game) => Some(game),
            Err(diagnostic) => {
                debug!("Parse aborted: {diagnostic}");
                self.emit_diagnostic(diagnostic);
                None
            }
        }
    }

    #[must_use]
    pub fn diagnostics(&self) -> &[ParseDiagnostic] {
        &self.diagnostics
    }

    #[must_use]
    pub fn into_diagnostics(self) -> Vec<ParseDiagnostic> {
        self.diagnostics
    }

    #[must_use]
    pub fn is_at_end(&self) -> bool {
        self.current_token().kind.is_end_of_file()
    }

    fn parse_root(&mut self) -> ParseResult<Game> {
        if !self.current_token().kind.is_game_keyword() {
            return Err(ParseDiagnostic::MissingGameKeyword { token: self.current_token().clone() });
        }
        self.advance();

        let name = match &self.current_token().kind {
            TokenKind::StringLiteral(name) | TokenKind::Identifier(name) => Some(name.clone()),
            _ => None,
        };

        if name.is_some() {
            self.advance();
        }

        self.expect_punctuator(Punctuator::LeftCurlyBracket)?;
        let body = self.nested(Self::parse_block)?;
        self.expect_punctuator(Punctuator::RightCurlyBracket)?;

        if !self.is_at_end() {
            self.emit_diagnostic(ParseDiagnostic::TrailingInput { token: self.current_token().clone() });
        }

        Ok(Game { name, body })
    }

    fn parse_block(&mut self) -> ParseResult<Block> {
        let mut block = Block::default();

        loop {
            let token = self.current_token();
            if token.kind.is_end_of_file() || token.kind.is_punctuator(Punctuator::RightCurlyBracket) {
                break;
            }

            if !token.kind.is_key() {
                trace!("Skipping stray token `{token}` at {}", token.begin);
                self.advance();
                continue;
            }

            let key = self.advance().lexeme;

            match self.current_punctuator() {
                Some(Punctuator::Assignment) => {
                    self.advance();
                    let value = self.parse_value()?;

                    if self.current_punctuator() == Some(Punctuator::Semicolon) {
                        self.advance();
                    }

                    block.statements.push(Statement::Assign(Assign { key, value }));
                }

                Some(Punctuator::LeftCurlyBracket) => {
                    self.advance();

                    let mut section = self.nested(Self::parse_block)?;
                    section.name = key;
                    block.statements.push(Statement::Block(section));

                    self.expect_punctuator(Punctuator::RightCurlyBracket)?;
                }

                punctuator => {
                    let token = self.current_token().clone();
                    self.emit_diagnostic(ParseDiagnostic::ExpectedAssignmentOrBlock { key, token });

                    // Never swallow the brace that closes this block, or the end of the input.
                    if punctuator != Some(Punctuator::RightCurlyBracket) && !self.is_at_end() {
                        self.advance();
                    }
                }
            }
        }

        Ok(block)
    }

    pub fn parse_value(&mut self) -> ParseResult<Value> {
        let token = self.current_token();

        let literal = match &token.kind {
            TokenKind::Number(number) => Literal::from(*number),
            TokenKind::StringLiteral(str) => Literal::String(str.clone()),
            TokenKind::Boolean(boolean) => Literal::Boolean(*boolean),

            TokenKind::Punctuator(Punctuator::LeftSquareBracket) => {
                return self.nested(Self::parse_list).map(Value::List);
            }

            TokenKind::Punctuator(Punctuator::LeftCurlyBracket) => {
                return self.nested(Self::parse_object).map(Value::Object);
            }

            kind if kind.is_key() => {
                if self.peek().is_some_and(|next| next.kind.is_punctuator(Punctuator::LeftParenthesis)) {
                    return self.nested(Self::parse_function_call).map(Value::FunctionCall);
                }

                Literal::Name(token.lexeme.clone())
            }

            _ => {
                let token = token.clone();
                self.emit_diagnostic(ParseDiagnostic::UnexpectedValue { token: token.clone() });

                if !token.kind.is_end_of_file() {
                    self.advance();
                }

                return Ok(Value::Literal(Literal::String(token.lexeme)));
            }
        };

        self.advance();
        Ok(Value::Literal(literal))
    }

    fn parse_list(&mut self) -> ParseResult<List> {
        self.expect_punctuator(Punctuator::LeftSquareBracket)?;

        let mut list = List::default();
        while !self.at_closing(Punctuator::RightSquareBracket) {
            list.items.push(self.parse_value()?);

            if self.current_punctuator() == Some(Punctuator::Comma) {
                self.advance();
            }
        }

        self.expect_punctuator(Punctuator::RightSquareBracket)?;
        Ok(list)
    }

    fn parse_object(&mut self) -> ParseResult<Object> {
        self.expect_punctuator(Punctuator::LeftCurlyBracket)?;

        let mut object = Object::default();
        while !self.at_closing(Punctuator::RightCurlyBracket) {
            let key = self.expect_identifier()?;
            self.expect_punctuator(Punctuator::Colon)?;
            let value = self.parse_value()?;
            object.pairs.push((key, value));

            if self.current_punctuator() == Some(Punctuator::Comma) {
                self.advance();
            }
        }

        self.expect_punctuator(Punctuator::RightCurlyBracket)?;
        Ok(object)
    }

    fn parse_function_call(&mut self) -> ParseResult<FunctionCall> {
        let name = self.advance().lexeme;
        self.expect_punctuator(Punctuator::LeftParenthesis)?;

        let mut args = Vec::new();
        while self.current_punctuator() != Some(Punctuator::RightParenthesis) {
            if self.is_at_end() {
                return Err(ParseDiagnostic::UnclosedCall { name, token: self.current_token().clone() });
            }

            args.push(self.parse_value()?);

            if self.current_punctuator() == Some(Punctuator::Comma) {
                self.advance();
            }
        }

        self.expect_punctuator(Punctuator::RightParenthesis)?;
        Ok(FunctionCall { name, args })
    }

    /// Runs `f` one nesting level deeper, failing once the configured depth is exceeded.
    fn nested<T>(&mut self, f: impl FnOnce(&mut Self) -> ParseResult<T>) -> ParseResult<T> {
        if self.depth >= self.options.max_depth {
            return Err(ParseDiagnostic::NestingTooDeep {
                limit: self.options.max_depth,
                token: self.current_token().clone(),
            });
        }

        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        result
    }

    fn at_closing(&self, punctuator: Punctuator) -> bool {
        let kind = &self.current_token().kind;
        kind.is_punctuator(punctuator) || kind.is_end_of_file()
    }

    fn current_token(&self) -> &Token {
        self.tokens.get(self.cursor).unwrap_or(&self.end_of_file_token)
    }

    fn current_punctuator(&self) -> Option<Punctuator> {
        match self.current_token().kind {
            TokenKind::Punctuator(punctuator) => Some(punctuator),
            _ => None,
        }
    }

    /// The token after the current one, without consuming anything.
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.cursor + 1)
    }

    fn advance(&mut self) -> Token {
        let token = self.current_token().clone();
        if self.cursor < self.tokens.len() {
            self.cursor += 1;
        }
        token
    }

    fn expect_punctuator(&mut self, punctuator: Punctuator) -> ParseResult<Token> {
        if self.current_punctuator() != Some(punctuator) {
            return Err(ParseDiagnostic::ExpectedToken {
                expected: punctuator.as_str(),
                token: self.current_token().clone(),
            });
        }

        Ok(self.advance())
    }

    fn expect_identifier(&mut self) -> ParseResult<String> {
        match self.current_token().as_identifier() {
            Some(ident) => {
                let ident = ident.to_string();
                self.advance();
                Ok(ident)
            }

            None => Err(ParseDiagnostic::ExpectedToken {
                expected: "identifier",
                token: self.current_token().clone(),
            }),
        }
    }

    fn emit_diagnostic(&mut self, diagnostic: ParseDiagnostic) {
        trace!("Diagnostic {}: {diagnostic}", diagnostic.name());
        self.diagnostics.push(diagnostic);
    }
}

#[derive(Clone, Debug, thiserror::Error, AsRefStr)]
pub enum ParseDiagnostic {
    #[error("the file must begin with `game` or `juego`, but found {}", describe(.token))]
    MissingGameKeyword { token: Token },

    #[error("expected `{expected}` but found {}", describe(.token))]
    ExpectedToken { expected: &'static str, token: Token },

    #[error("unclosed parenthesis in call to `{name}`, reached {}", describe(.token))]
    UnclosedCall { name: String, token: Token },

    #[error("nesting is deeper than {limit} levels at {}", describe(.token))]
    NestingTooDeep { limit: usize, token: Token },

    #[error("expected `=` or `{{` after `{key}`, but found {}", describe(.token))]
    ExpectedAssignmentOrBlock { key: String, token: Token },

    #[error("unexpected value {}", describe(.token))]
    UnexpectedValue { token: Token },

    #[error("unexpected input after the closing `}}` of the game: {}", describe(.token))]
    TrailingInput { token: Token },
}

impl ParseDiagnostic {
    pub fn token(&self) -> &Token {
        match self {
            Self::MissingGameKeyword { token } => token,
            Self::ExpectedToken { token, .. } => token,
            Self::UnclosedCall { token, .. } => token,
            Self::NestingTooDeep { token, .. } => token,
            Self::ExpectedAssignmentOrBlock { token, .. } => token,
            Self::UnexpectedValue { token } => token,
            Self::TrailingInput { token } => token,
        }
    }

    pub fn range(&self) -> FileRange {
        self.token().range()
    }

    /// Fatal diagnostics abort the parse and leave no tree behind.
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        match self {
            Self::MissingGameKeyword { .. } => true,
            Self::ExpectedToken { .. } => true,
            Self::UnclosedCall { .. } => true,
            Self::NestingTooDeep { .. } => true,

            Self::ExpectedAssignmentOrBlock { .. } => false,
            Self::UnexpectedValue { .. } => false,
            Self::TrailingInput { .. } => false,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        self.as_ref()
    }
}

fn describe(token: &Token) -> String {
    if token.kind.is_end_of_file() {
        format!("the end of the input at line {}, column {}", token.line(), token.column())
    } else {
        format!("`{token}` at line {}, column {}", token.line(), token.column())
    }
}
