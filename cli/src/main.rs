// Copyright (C) 2023 - 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

#![deny(elided_lifetimes_in_paths)]

mod config;
mod error;
mod logger;

use std::{path::{Path, PathBuf}, process::ExitCode};

use anyhow::Context;
use brik::{parse_source, GameFamily, ParseOutput, SourceCode, ToPlainValue};
use clap::Subcommand;
use colored::Colorize;
use log::debug;

use self::{
    config::{load_config, Overrides, Settings},
    error::{ErrorPrinter, Severity},
    logger::Logger,
};

#[derive(clap::Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,

    /// Log everything the tokenizer and parser do
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file to use instead of the `brik.toml` beside the input
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Game family whose lexical rules apply: tetris, snake or arcade
    #[arg(short, long, global = true)]
    dialect: Option<GameFamily>,

    #[arg(long, global = true)]
    max_depth: Option<usize>,

    /// Print the tree on a single line
    #[arg(long, global = true)]
    compact: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        use clap::Parser;
        Self::parse()
    }

    fn overrides(&self) -> Overrides {
        Overrides {
            dialect: self.dialect,
            max_depth: self.max_depth,
            compact: self.compact,
            verbose: self.verbose,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the token stream
    Tokens {
        file: PathBuf,
    },
    /// Print the syntax tree as JSON
    Parse {
        file: PathBuf,
    },
    /// Only report diagnostics
    Check {
        file: PathBuf,
    },
}

impl Commands {
    fn file(&self) -> &Path {
        match self {
            Self::Tokens { file } | Self::Parse { file } | Self::Check { file } => file,
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse_args();

    match run(&args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {e:#}", "error".red().bold());
            ExitCode::from(2)
        }
    }
}

fn run(args: &Args) -> anyhow::Result<ExitCode> {
    let path = args.command.file();

    let config = load_config(args.config.as_deref(), path)?;
    let settings = Settings::resolve(&config, args.overrides());
    Logger::initialize(settings.log_level);
    debug!("Using {settings:?}");

    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("could not read {}", path.display()))?;
    let source_code = SourceCode::new(path, contents);

    let output = parse_source(&source_code, settings.family.dialect(), settings.options);

    let code = match args.command {
        Commands::Tokens { .. } => print_tokens(&source_code, &output),
        Commands::Parse { .. } => print_tree(&source_code, &output, settings.compact)?,
        Commands::Check { .. } => check(&source_code, &output),
    };

    Ok(code)
}

fn print_tokens(source_code: &SourceCode, output: &ParseOutput) -> ExitCode {
    for token in &output.tokens {
        println!("{:<12} {:<24} {}", token.kind.name(), token.lexeme, token.begin);
    }

    print_lexer_errors(source_code, output);

    if output.lexer_errors.is_empty() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn print_tree(source_code: &SourceCode, output: &ParseOutput, compact: bool) -> anyhow::Result<ExitCode> {
    print_lexer_errors(source_code, output);
    print_syntax_errors(source_code, output);

    let Some(game) = &output.game else {
        return Ok(ExitCode::FAILURE);
    };

    let value = game.to_plain_value();
    let text = if compact {
        serde_json::to_string(&value)?
    } else {
        serde_json::to_string_pretty(&value)?
    };

    println!("{text}");
    Ok(ExitCode::SUCCESS)
}

fn check(source_code: &SourceCode, output: &ParseOutput) -> ExitCode {
    print_lexer_errors(source_code, output);
    print_syntax_errors(source_code, output);

    let count = output.lexer_errors.len() + output.diagnostics.len();
    match count {
        0 => {
            eprintln!("{} {}", "ok:".green().bold(), source_code.path().display());
            ExitCode::SUCCESS
        }
        1 => {
            eprintln!("1 problem found");
            ExitCode::FAILURE
        }
        _ => {
            eprintln!("{count} problems found");
            ExitCode::FAILURE
        }
    }
}

fn print_lexer_errors(source_code: &SourceCode, output: &ParseOutput) {
    for error in &output.lexer_errors {
        ErrorPrinter::new(source_code, error.location.as_zero_range(), error)
            .print();
    }
}

fn print_syntax_errors(source_code: &SourceCode, output: &ParseOutput) {
    for diagnostic in &output.diagnostics {
        let severity = if diagnostic.is_fatal() {
            Severity::Error
        } else {
            Severity::Warning
        };

        let hint = diagnostic.is_fatal().then(|| "no tree was produced".to_string());

        ErrorPrinter::new(source_code, diagnostic.range(), diagnostic)
            .severity(severity)
            .hint(hint)
            .print();
    }
}
