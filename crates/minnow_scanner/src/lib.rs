//! minnow_scanner: Lexer/tokenizer for minnow source code.
//!
//! A single-pass, single-byte-lookahead scanner. The parser pulls tokens
//! one at a time with [`Scanner::next_token`]; there is no precomputed
//! token array and no backtracking.
//!
//! The scanner operates on single-byte code units and recognizes only the
//! 7-bit ASCII alphabet of the language. Bytes outside it (including the
//! individual bytes of a multi-byte UTF-8 sequence) come back as `Illegal`
//! tokens, one per byte.
//!
//! Known leniency: a string literal with no closing quote scans to
//! end-of-input and is still produced as a string token. The token carries
//! [`minnow_token::TokenFlags::UNTERMINATED`] so callers can be stricter
//! if they choose.

mod char_codes;
mod scanner;
mod token;

pub use scanner::Scanner;
pub use token::{Token, TokenInfo};
