//! minnow: Token-stream harness for the minnow language.
//!
//! Usage:
//!   minnow [options] [file...]
//!
//! Tokenizes each file and prints the token stream, or starts a
//! read-a-line/print-its-tokens REPL when no files are given. This is a
//! front-end harness only; the parser consumes the same stream directly.

use clap::Parser as ClapParser;
use minnow_core::text::LineMap;
use minnow_diagnostics::Diagnostic;
use minnow_scanner::{Scanner, TokenInfo};
use minnow_token::TokenKind;
use serde::Serialize;
use std::io::{BufRead, Write};
use std::process;

#[derive(ClapParser, Debug)]
#[command(name = "minnow", about = "minnow - token-stream tooling for the minnow language", disable_version_flag = true)]
struct Cli {
    /// minnow source files to tokenize.
    #[arg(value_name = "FILE")]
    files: Vec<String>,

    /// Emit the token stream as JSON.
    #[arg(long)]
    json: bool,

    /// Enable pretty printing for diagnostics.
    #[arg(long, default_value_t = true)]
    pretty: bool,

    /// Print the version.
    #[arg(short = 'v', long)]
    version: bool,
}

// ANSI color codes
const RED: &str = "\x1b[31m";
const CYAN: &str = "\x1b[36m";
const GRAY: &str = "\x1b[90m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

/// One token as emitted by `--json`.
#[derive(Serialize)]
struct TokenRecord {
    kind: String,
    literal: String,
    start: u32,
    end: u32,
}

impl From<&TokenInfo> for TokenRecord {
    fn from(info: &TokenInfo) -> Self {
        Self {
            kind: info.kind.to_string(),
            literal: info.literal.clone(),
            start: info.start,
            end: info.end,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    if cli.version {
        println!("minnow Version 0.1.0");
        return;
    }

    if cli.files.is_empty() {
        run_repl();
        return;
    }

    let exit_code = run_tokenize(&cli);
    process::exit(exit_code);
}

fn run_tokenize(cli: &Cli) -> i32 {
    let use_color = cli.pretty && atty_is_terminal();
    let mut saw_errors = false;

    for file in &cli.files {
        let source = match std::fs::read_to_string(file) {
            Ok(source) => source,
            Err(e) => {
                print_error(&format!("Failed to read '{}': {}", file, e));
                return 1;
            }
        };

        let (tokens, diagnostics) = tokenize(&source);

        if cli.json {
            let records: Vec<TokenRecord> = tokens.iter().map(TokenRecord::from).collect();
            match serde_json::to_string_pretty(&records) {
                Ok(json) => println!("{}", json),
                Err(e) => {
                    print_error(&format!("Failed to serialize tokens: {}", e));
                    return 1;
                }
            }
        } else {
            for info in &tokens {
                print_token(info);
            }
        }

        let line_map = LineMap::new(&source);
        for diag in diagnostics.diagnostics() {
            print_diagnostic(file, &line_map, diag, use_color);
        }
        if diagnostics.has_errors() {
            saw_errors = true;
        }
    }

    if saw_errors {
        2
    } else {
        0
    }
}

fn run_repl() {
    println!("minnow token REPL. One line in, its tokens out. Ctrl-D exits.");
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();

    loop {
        print!(">> ");
        if stdout.flush().is_err() {
            return;
        }
        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => return,
            Ok(_) => {}
        }

        let (tokens, diagnostics) = tokenize(&line);
        for info in &tokens {
            print_token(info);
        }
        let line_map = LineMap::new(&line);
        for diag in diagnostics.diagnostics() {
            print_diagnostic("<repl>", &line_map, diag, atty_is_terminal());
        }
    }
}

/// Scan a whole source text, collecting every token up to end-of-input.
fn tokenize(source: &str) -> (Vec<TokenInfo>, minnow_diagnostics::DiagnosticCollection) {
    let mut scanner = Scanner::new(source);
    let mut tokens = Vec::new();
    loop {
        let info = scanner.next_token_info();
        if info.kind == TokenKind::EndOfFileToken {
            break;
        }
        tokens.push(info);
    }
    (tokens, scanner.take_diagnostics())
}

fn print_token(info: &TokenInfo) {
    println!(
        "{:>5}..{:<5} {:<24} {:?}",
        info.start,
        info.end,
        info.kind.to_string(),
        info.literal
    );
}

fn print_diagnostic(file: &str, line_map: &LineMap, diag: &Diagnostic, use_color: bool) {
    let location = diag
        .span
        .map(|span| {
            let lc = line_map.line_and_column_of(span.start);
            format!("{}:{}:{}", file, lc.line + 1, lc.column + 1)
        })
        .unwrap_or_else(|| file.to_string());

    if use_color {
        eprintln!(
            "{}{}{}: {}{}{}{} {}MN{}{}: {}",
            CYAN, location, RESET,
            BOLD, RED, diag.category, RESET,
            GRAY, diag.code, RESET,
            diag.message_text
        );
    } else {
        eprintln!(
            "{}: {} MN{}: {}",
            location, diag.category, diag.code, diag.message_text
        );
    }
}

fn print_error(msg: &str) {
    if atty_is_terminal() {
        eprintln!("{}{}error{}: {}", BOLD, RED, RESET, msg);
    } else {
        eprintln!("error: {}", msg);
    }
}

fn atty_is_terminal() -> bool {
    // On Unix, check if stderr is a terminal
    #[cfg(unix)]
    {
        unsafe { libc::isatty(2) != 0 }
    }
    #[cfg(not(unix))]
    {
        true // Assume terminal on other platforms
    }
}
