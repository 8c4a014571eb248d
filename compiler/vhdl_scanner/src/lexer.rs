//! Host cursor capability.
//!
//! The host owns the read position and token boundaries; the scanner only
//! calls into it. Modeled on the external-scanner lexer interface of
//! incremental parsing hosts:
//!
//! - `lookahead` returns the current code point, `'\0'` at end of input
//! - `advance(skip)` moves one code point; skipped characters are layout and
//!   move the token start along with them
//! - `mark_end` commits the current position as the token end
//! - `set_result_symbol` records which kind was produced
//!
//! `checkpoint`/`rewind` let the scanner undo every effect of a declined
//! attempt, so a decline is observably a no-op to the host.

use crate::TokenKind;

/// Cursor interface the scanner drives.
pub trait Lexer {
    /// Opaque snapshot of the cursor state. Must capture the read position,
    /// the token start, the committed token end and the result symbol.
    type Checkpoint: Copy;

    /// Current code point, or `'\0'` at end of input.
    ///
    /// Interior NUL characters also return `'\0'`; use
    /// [`is_eof()`](Self::is_eof) to distinguish.
    fn lookahead(&self) -> char;

    /// Returns `true` when the read position is at the end of input.
    fn is_eof(&self) -> bool;

    /// Move past the current code point.
    ///
    /// With `skip == true` the character is layout: it does not become part
    /// of the token and the token start moves past it.
    fn advance(&mut self, skip: bool);

    /// Commit the current read position as the end of the token.
    fn mark_end(&mut self);

    /// Record the kind of the token being produced.
    fn set_result_symbol(&mut self, kind: TokenKind);

    /// Capture the cursor state.
    fn checkpoint(&self) -> Self::Checkpoint;

    /// Restore a state captured by [`checkpoint()`](Self::checkpoint).
    fn rewind(&mut self, checkpoint: Self::Checkpoint);
}

