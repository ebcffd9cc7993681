//! Flag bits the scanner attaches to tokens.

bitflags::bitflags! {
    /// Observational facts about the most recently scanned token.
    ///
    /// Flags never change which token is produced; they record what the
    /// scanner saw while producing it.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct TokenFlags: u16 {
        const NONE                 = 0;
        /// At least one line break was skipped before this token.
        const PRECEDING_LINE_BREAK = 1 << 0;
        /// A string literal reached end-of-input before its closing quote.
        const UNTERMINATED         = 1 << 1;
    }
}
