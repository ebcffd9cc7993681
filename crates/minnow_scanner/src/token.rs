//! Token values produced by the scanner.

use minnow_token::{TokenFlags, TokenKind};

/// A single lexical token: a kind plus the exact source text that produced it.
///
/// Tokens are produced once and never mutated. The literal is empty for
/// end-of-input, excludes the delimiting quotes for string literals, and is
/// the single offending byte for illegal input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The kind of token.
    pub kind: TokenKind,
    /// The source text of the token.
    pub literal: String,
}

impl Token {
    pub fn new(kind: TokenKind, literal: String) -> Self {
        Self { kind, literal }
    }

    /// Whether this token marks the end of the input.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::EndOfFileToken
    }
}

/// A token together with its source span and scan flags.
///
/// Harnesses that want positions (the CLI, tooling) use this; the parser
/// itself only needs [`Token`].
#[derive(Debug, Clone)]
pub struct TokenInfo {
    /// The kind of token.
    pub kind: TokenKind,
    /// Start position in the source text.
    pub start: u32,
    /// End position in the source text (exclusive).
    pub end: u32,
    /// The source text of the token.
    pub literal: String,
    /// Flags recorded while scanning this token.
    pub flags: TokenFlags,
}

impl TokenInfo {
    /// The length of this token's source span in bytes.
    pub fn len(&self) -> u32 {
        self.end - self.start
    }

    /// Whether this token has a zero-length span (only end-of-input does).
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Whether there was a line break before this token.
    pub fn has_preceding_line_break(&self) -> bool {
        self.flags.contains(TokenFlags::PRECEDING_LINE_BREAK)
    }

    /// Whether this is a string literal that ran to end-of-input.
    pub fn is_unterminated(&self) -> bool {
        self.flags.contains(TokenFlags::UNTERMINATED)
    }
}
