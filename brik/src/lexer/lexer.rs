// Copyright (C) 2023 - 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use log::{debug, trace};
use strum::AsRefStr;
use thiserror::Error;

use crate::FileLocation;

use super::{Dialect, Keyword, Number, Punctuator, Token, TokenKind};

pub struct Lexer<'source_code> {
    input: &'source_code str,
    dialect: &'source_code Dialect,

    position: Position,
    finished: bool,
    errors: Vec<LexerError>,
}

#[derive(Debug, Clone, Copy)]
struct Position {
    offset: usize,
    line: usize,
    column: usize,
}

impl<'source_code> Lexer<'source_code> {
    pub fn new(input: &'source_code str, dialect: &'source_code Dialect) -> Self {
        Self {
            input,
            dialect,
            position: Position {
                offset: 0,
                line: 1,
                column: 1,
            },
            finished: false,
            errors: Vec::new(),
        }
    }

    pub fn next(&mut self) -> Option<Token> {
        loop {
            self.skip_trivia();

            let Some(ch) = self.peek_char() else {
                return self.end_of_file();
            };

            let token = match ch {
                '0'..='9' => Some(self.consume_number()),
                '"' => self.consume_string(),
                'a'..='z' | 'A'..='Z' | '_' => Some(self.consume_identifier_or_keyword()),

                _ => match Punctuator::from_char(ch) {
                    Some(punctuator) => Some(self.consume_single_char_token(TokenKind::Punctuator(punctuator))),
                    None => {
                        self.report_unexpected_character(ch);
                        None
                    }
                }
            };

            if token.is_some() {
                return token;
            }
        }
    }

    pub fn collect_all(mut self) -> (Vec<Token>, Vec<LexerError>) {
        let mut tokens = Vec::new();

        while let Some(token) = self.next() {
            tokens.push(token);
        }

        debug!("Scanned {} tokens, {} lexical errors", tokens.len(), self.errors.len());
        (tokens, self.errors)
    }

    fn end_of_file(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }

        self.finished = true;
        let location = self.current_location();
        Some(Token {
            kind: TokenKind::EndOfFile,
            lexeme: String::new(),
            begin: location,
            end: location,
        })
    }

    #[must_use]
    fn consume_single_char_token(&mut self, kind: TokenKind) -> Token {
        let begin = self.current_location();

        self.consume_char();

        self.finish_token(kind, begin)
    }

    fn consume_number(&mut self) -> Token {
        let begin = self.current_location();

        self.consume_while(|c| c.is_ascii_digit());

        let mut remaining = self.remaining().chars();
        if remaining.next() == Some('.') && remaining.next().is_some_and(|c| c.is_ascii_digit()) {
            self.consume_char();
            self.consume_while(|c| c.is_ascii_digit());
        }

        let input = self.input;
        let lexeme = &input[begin.offset()..self.position.offset];
        let number = match lexeme.parse() {
            Ok(integer) if !lexeme.contains('.') => Some(Number::Integer(integer)),
            _ => match lexeme.parse::<f64>() {
                Ok(float) if float.is_finite() && lexeme.contains('.') => Some(Number::Float(float)),
                _ => None,
            },
        };

        // Out of range integers and floats are kept as the largest float, so parsing can go on.
        let number = number.unwrap_or_else(|| {
            self.errors.push(LexerError {
                location: begin,
                kind: LexerErrorKind::NumberOutOfRange { lexeme: lexeme.to_string() },
            });
            Number::Float(f64::MAX)
        });

        self.finish_token(TokenKind::Number(number), begin)
    }

    fn consume_string(&mut self) -> Option<Token> {
        let checkpoint = self.position;
        let begin = self.current_location();

        self.consume_char();

        let mut str = String::new();

        loop {
            let Some(c) = self.peek_char() else {
                return self.abandon_string(checkpoint);
            };

            match c {
                '"' => {
                    self.consume_char();
                    break;
                }

                '\r' | '\n' if !self.dialect.multiline_strings() => {
                    return self.abandon_string(checkpoint);
                }

                '\\' if self.dialect.string_escapes() => {
                    self.consume_char();

                    match self.peek_char() {
                        Some('"') => str.push('"'),
                        Some('n') => str.push('\n'),
                        Some('r') => str.push('\r'),
                        Some('t') => str.push('\t'),
                        Some('\\') => str.push('\\'),

                        // A backslash at the end of a line is kept as-is, the line break
                        // itself is picked up by the next iteration.
                        Some('\n') => {
                            str.push('\\');
                            continue;
                        }

                        Some(other) => {
                            str.push('\\');
                            str.push(other);
                        }

                        None => return self.abandon_string(checkpoint),
                    }

                    self.consume_char();
                }

                _ => {
                    str.push(c);
                    self.consume_char();
                }
            }
        }

        Some(self.finish_token(TokenKind::StringLiteral(str), begin))
    }

    /// Rewinds to the opening quote of an unterminated string literal, reports it, and
    /// resumes scanning right after the quote.
    fn abandon_string(&mut self, checkpoint: Position) -> Option<Token> {
        self.position = checkpoint;
        let location = self.current_location();
        self.consume_char();

        trace!("Unterminated string literal at {location}");
        self.errors.push(LexerError {
            location,
            kind: LexerErrorKind::UnterminatedString,
        });

        None
    }

    fn consume_identifier_or_keyword(&mut self) -> Token {
        let begin = self.current_location();

        self.consume_while(is_identifier_char);

        let str = &self.input[begin.offset()..self.position.offset];

        let kind = match str {
            "true" => TokenKind::Boolean(true),
            "false" => TokenKind::Boolean(false),
            _ => match Keyword::parse(str, self.dialect) {
                Some(keyword) => TokenKind::Keyword(keyword),
                None => TokenKind::Identifier(str.to_string()),
            }
        };

        self.finish_token(kind, begin)
    }

    fn report_unexpected_character(&mut self, character: char) {
        let location = self.current_location();
        self.consume_char();

        trace!("Unexpected character {character:?} at {location}");
        self.errors.push(LexerError {
            location,
            kind: LexerErrorKind::UnexpectedCharacter { character },
        });
    }

    fn skip_trivia(&mut self) {
        while let Some(c) = self.peek_char() {
            if matches!(c, ' ' | '\t' | '\r' | '\n') {
                self.consume_char();
                continue;
            }

            if self.dialect.starts_line_comment(self.remaining()) {
                self.consume_until_end_of_line();
                continue;
            }

            break;
        }
    }

    /// Leaves the line break in place, so that it is counted like any other.
    fn consume_until_end_of_line(&mut self) {
        self.consume_while(|c| c != '\n');
    }

    fn consume_while(&mut self, predicate: impl Fn(char) -> bool) {
        while let Some(c) = self.peek_char() {
            if !predicate(c) {
                break;
            }

            self.consume_char();
        }
    }

    fn finish_token(&self, kind: TokenKind, begin: FileLocation) -> Token {
        Token {
            kind,
            lexeme: self.input[begin.offset()..self.position.offset].to_string(),
            begin,
            end: self.current_location(),
        }
    }

    fn remaining(&self) -> &'source_code str {
        let input = self.input;
        &input[self.position.offset..]
    }

    fn peek_char(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    fn consume_char(&mut self) {
        let Some(c) = self.peek_char() else {
            return;
        };

        self.position.offset += c.len_utf8();

        if c == '\n' {
            self.position.line += 1;
            self.position.column = 1;
        } else {
            self.position.column += 1;
        }
    }

    fn current_location(&self) -> FileLocation {
        FileLocation::new(self.position.offset, self.position.line, self.position.column)
    }
}

impl<'source_code> Iterator for Lexer<'source_code> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        self.next()
    }
}

fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{kind} at line {}, column {}", location.line(), location.column())]
pub struct LexerError {
    pub location: FileLocation,
    pub kind: LexerErrorKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Error, AsRefStr)]
pub enum LexerErrorKind {
    #[error("unexpected character `{character}`")]
    UnexpectedCharacter { character: char },

    #[error("unterminated string literal, no closing `\"` for this quote")]
    UnterminatedString,

    #[error("number `{lexeme}` is out of range")]
    NumberOutOfRange { lexeme: String },
}

impl LexerErrorKind {
    #[must_use]
    pub fn name(&self) -> &str {
        self.as_ref()
    }
}
