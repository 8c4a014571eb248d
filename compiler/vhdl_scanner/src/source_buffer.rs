//! In-memory host cursor.
//!
//! [`SourceBuffer`] owns the text; [`BufferLexer`] is a [`Lexer`] over it
//! that behaves the way an incremental-parsing host drives an external
//! scanner: layout skipped with `advance(true)` moves the token start, the
//! token end is whatever was last committed with `mark_end`.
//!
//! Positions are byte offsets stored as `u32`. Sources larger than
//! `u32::MAX` bytes are truncated at the last character boundary that fits.

use std::fmt;
use std::ops::Range;

use crate::{scan, BitStringLiterals, Lexer, TokenKind, ValidSymbols};

/// Byte range `start..end` in a [`SourceBuffer`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        Span { start, end }
    }

    #[inline]
    pub const fn len(self) -> u32 {
        self.end - self.start
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.start == self.end
    }

    /// The span as a `usize` range for slicing.
    #[inline]
    pub fn to_range(self) -> Range<usize> {
        self.start as usize..self.end as usize
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// A token recognized by the scanner: its kind and its span.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ScannedToken {
    pub kind: TokenKind,
    pub span: Span,
}

/// Owned source text the reference host cursor reads from.
#[derive(Clone, Debug)]
pub struct SourceBuffer {
    text: String,
    len: u32,
}

impl SourceBuffer {
    pub fn new(source: &str) -> Self {
        let mut end = source.len().min(u32::MAX as usize);
        while !source.is_char_boundary(end) {
            end -= 1;
        }
        Self {
            text: source[..end].to_owned(),
            len: u32::try_from(end).unwrap_or(u32::MAX),
        }
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    #[inline]
    pub fn len(&self) -> u32 {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Source text covered by `span`. Out-of-range or non-boundary spans
    /// yield an empty string.
    pub fn slice(&self, span: Span) -> &str {
        self.as_str().get(span.to_range()).unwrap_or("")
    }

    /// Create a host cursor positioned at `offset`.
    ///
    /// Offsets past the end clamp to the end; offsets inside a multi-byte
    /// character move forward to the next character boundary.
    pub fn lexer_at(&self, offset: u32) -> BufferLexer<'_> {
        let text = self.as_str();
        let mut pos = offset.min(self.len);
        while !text.is_char_boundary(pos as usize) {
            pos += 1;
        }
        BufferLexer {
            text,
            pos,
            token_start: pos,
            token_end: None,
            result: None,
        }
    }

    /// Run the scanner once at `offset` and report the token it produced.
    ///
    /// Returns `None` when the scanner declines. Each call uses a fresh
    /// cursor, so repeated calls at the same offset agree.
    pub fn scan_at(&self, offset: u32, valid: ValidSymbols) -> Option<ScannedToken> {
        let mut lexer = self.lexer_at(offset);
        if scan(&mut lexer, valid) {
            lexer.token()
        } else {
            None
        }
    }

    /// Iterate over every bit-string literal in the buffer.
    pub fn literals(&self, valid: ValidSymbols) -> BitStringLiterals<'_> {
        BitStringLiterals::new(self, valid)
    }
}

/// Reference [`Lexer`] over a [`SourceBuffer`].
///
/// The lexer is [`Copy`]; [`BufferCheckpoint`] captures everything except
/// the borrowed text.
#[derive(Clone, Copy, Debug)]
pub struct BufferLexer<'a> {
    text: &'a str,
    /// Current read position (byte offset, always on a char boundary).
    pos: u32,
    /// Start of the token: first position not skipped as layout.
    token_start: u32,
    /// Last position committed with `mark_end`.
    token_end: Option<u32>,
    result: Option<TokenKind>,
}

/// Saved state of a [`BufferLexer`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BufferCheckpoint {
    pos: u32,
    token_start: u32,
    token_end: Option<u32>,
    result: Option<TokenKind>,
}

impl BufferLexer<'_> {
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    #[inline]
    pub fn token_start(&self) -> u32 {
        self.token_start
    }

    #[inline]
    pub fn token_end(&self) -> Option<u32> {
        self.token_end
    }

    #[inline]
    pub fn result_symbol(&self) -> Option<TokenKind> {
        self.result
    }

    /// Start a new token at the current position, forgetting any previous
    /// end mark and result symbol.
    pub fn begin_token(&mut self) {
        self.token_start = self.pos;
        self.token_end = None;
        self.result = None;
    }

    /// The produced token, once both a result symbol and an end are set.
    pub fn token(&self) -> Option<ScannedToken> {
        let kind = self.result?;
        let end = self.token_end?;
        Some(ScannedToken {
            kind,
            span: Span::new(self.token_start, end),
        })
    }
}

impl Lexer for BufferLexer<'_> {
    type Checkpoint = BufferCheckpoint;

    #[inline]
    fn lookahead(&self) -> char {
        self.text[self.pos as usize..].chars().next().unwrap_or('\0')
    }

    #[inline]
    fn is_eof(&self) -> bool {
        self.pos as usize >= self.text.len()
    }

    fn advance(&mut self, skip: bool) {
        if let Some(c) = self.text[self.pos as usize..].chars().next() {
            #[allow(
                clippy::cast_possible_truncation,
                reason = "char::len_utf8 is at most 4"
            )]
            let width = c.len_utf8() as u32;
            self.pos += width;
        }
        if skip {
            self.token_start = self.pos;
        }
    }

    #[inline]
    fn mark_end(&mut self) {
        self.token_end = Some(self.pos);
    }

    #[inline]
    fn set_result_symbol(&mut self, kind: TokenKind) {
        self.result = Some(kind);
    }

    fn checkpoint(&self) -> BufferCheckpoint {
        BufferCheckpoint {
            pos: self.pos,
            token_start: self.token_start,
            token_end: self.token_end,
            result: self.result,
        }
    }

    fn rewind(&mut self, checkpoint: BufferCheckpoint) {
        self.pos = checkpoint.pos;
        self.token_start = checkpoint.token_start;
        self.token_end = checkpoint.token_end;
        self.result = checkpoint.result;
    }
}

#[cfg(test)]
mod tests;
