//! minnow_token: Token kinds for the minnow language.
//!
//! Defines the closed set of lexical token kinds, the reserved-word lookup
//! table, and the flag bits the scanner attaches to tokens. The scanner
//! consults this crate as a read-only collaborator; it never extends it.

mod token_kind;
mod types;

pub use token_kind::TokenKind;
pub use types::TokenFlags;
