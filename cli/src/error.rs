// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::fmt::Display;

use brik::{FileRange, SourceCode};
use colored::{Color, ColoredString, Colorize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

/// Renders one diagnostic to stderr with an excerpt of the offending source lines.
pub struct ErrorPrinter {
    severity: Severity,
    source_code: SourceCode,
    range: FileRange,
    message: String,
    hint: Option<String>,

    color: Color,
    line_number: ColoredString,
}

impl ErrorPrinter {
    #[must_use = "Use the `print` method to actually print"]
    pub fn new(source_code: &SourceCode, range: FileRange, message: impl Display) -> Self {
        Self {
            source_code: source_code.clone(),
            range,
            severity: Severity::Error,
            message: message.to_string(),
            hint: None,

            color: Color::Red,
            line_number: range.start().line().to_string().blue().bold(),
        }
    }

    #[must_use]
    pub fn hint(self, hint: impl Into<Option<String>>) -> Self {
        Self {
            hint: hint.into(),
            ..self
        }
    }

    #[must_use]
    pub fn severity(self, severity: Severity) -> Self {
        Self {
            severity,
            color: match severity {
                Severity::Error => Color::Red,
                Severity::Warning => Color::Yellow,
            },
            ..self
        }
    }

    pub fn print(self) {
        self.print_prelude();
        self.print_lines();
        self.print_postlude();
    }

    fn print_prelude(&self) {
        let severity_string = match self.severity {
            Severity::Error => "error".red().bold(),
            Severity::Warning => "warning".yellow().bold(),
        };
        eprintln!("{severity_string}: {}", self.message.bold());
        eprintln!();
    }

    fn print_lines(&self) {
        let line = self.range.start().line();

        if let Some(previous) = line.checked_sub(1).and_then(|x| self.source_code.line(x)) {
            if !previous.trim().is_empty() {
                self.print_line(false, previous);
            }
        }

        // The end of the input may sit on a line that has no text at all.
        self.print_line(true, self.source_code.line(line).unwrap_or_default());
        self.print_error_indicator();

        if let Some(next) = self.source_code.line(line + 1) {
            if !next.trim().is_empty() {
                self.print_line(false, next);
            }
        }
    }

    fn print_line(&self, is_primary: bool, line: &str) {
        self.print_line_prefix(is_primary);
        eprintln!("{line}");
    }

    fn print_error_indicator(&self) {
        let start = self.range.start();
        let end = self.range.end();

        let width = if start.line() == end.line() {
            end.column().saturating_sub(start.column())
        } else {
            1
        };

        let spaces = " ".repeat(start.column().saturating_sub(1));
        let caret = "^".color(self.color).bold();
        let tildes = "~".repeat(width.saturating_sub(1)).color(self.color);

        let hint = match &self.hint {
            Some(hint) => format!("hint: {hint}").color(self.color).bold(),
            None => "".bold(),
        };

        self.print_line_prefix(false);
        eprintln!("{spaces}{caret}{tildes} {hint}");
    }

    fn print_line_prefix(&self, is_primary: bool) {
        let separator = " | ".blue().bold();

        if is_primary {
            eprint!("{} {separator}", self.line_number);
        } else {
            eprint!("{} {separator}", " ".repeat(self.line_number.len()));
        }
    }

    fn print_postlude(&self) {
        eprintln!();

        let path = self.source_code.path().display();
        let start = self.range.start();

        eprintln!("In {path}:{}:{}\n", start.line(), start.column());
    }
}
