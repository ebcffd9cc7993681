//! minnow_core: Core utilities shared by the minnow front end.
//!
//! Provides text spans and the line map used to convert byte offsets into
//! line/column positions for diagnostics and tooling.

pub mod text;

// Re-export commonly used types
pub use text::{LineAndColumn, LineMap, TextSpan};
