//! Whole-buffer driver emulating a host tokenizer loop.
//!
//! At every token start the bit-string scanner gets the first attempt. When
//! it declines, a simplified generic rule consumes one host token so that
//! radix letters inside identifiers, strings and comments are never
//! offered to the scanner:
//!
//! - layout runs
//! - words (identifiers, keywords, abstract literals)
//! - `"..."` string literals and `\...\` extended identifiers
//! - `'c'` character literals (a lone `'` is an attribute tick)
//! - `--` line comments and `/* */` block comments
//! - any other single character

use std::iter::FusedIterator;

use crate::radix::is_layout;
use crate::{scan, BufferLexer, Lexer, ScannedToken, SourceBuffer, ValidSymbols};

/// Iterator over the bit-string literals of a [`SourceBuffer`], in order.
///
/// Created via [`SourceBuffer::literals()`].
#[derive(Clone, Debug)]
pub struct BitStringLiterals<'a> {
    lexer: BufferLexer<'a>,
    valid: ValidSymbols,
}

impl<'a> BitStringLiterals<'a> {
    pub(crate) fn new(buf: &'a SourceBuffer, valid: ValidSymbols) -> Self {
        Self {
            lexer: buf.lexer_at(0),
            valid,
        }
    }
}

impl Iterator for BitStringLiterals<'_> {
    type Item = ScannedToken;

    fn next(&mut self) -> Option<ScannedToken> {
        while !self.lexer.is_eof() {
            self.lexer.begin_token();
            let mut attempt = self.lexer;
            if scan(&mut attempt, self.valid) {
                if let Some(tok) = attempt.token() {
                    self.lexer = attempt;
                    return Some(tok);
                }
            }
            skip_host_token(&mut self.lexer);
        }
        None
    }
}

impl FusedIterator for BitStringLiterals<'_> {}

#[inline]
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Consume one token the host's own rules would produce. Always advances
/// unless already at end of input.
fn skip_host_token(lexer: &mut BufferLexer<'_>) {
    let c = lexer.lookahead();
    lexer.advance(false);
    match c {
        c if is_layout(c) => eat_while(lexer, is_layout),
        c if is_word_char(c) => eat_while(lexer, is_word_char),
        '"' | '\\' => eat_through(lexer, c),
        '-' if lexer.lookahead() == '-' => eat_while(lexer, |c| c != '\n'),
        '/' if lexer.lookahead() == '*' => {
            lexer.advance(false);
            while !lexer.is_eof() {
                let c = lexer.lookahead();
                lexer.advance(false);
                if c == '*' && lexer.lookahead() == '/' {
                    lexer.advance(false);
                    break;
                }
            }
        }
        '\'' => {
            let mut probe = *lexer;
            probe.advance(false);
            if !lexer.is_eof() && probe.lookahead() == '\'' {
                lexer.advance(false);
                lexer.advance(false);
            }
        }
        _ => {}
    }
}

fn eat_while(lexer: &mut BufferLexer<'_>, pred: impl Fn(char) -> bool) {
    while !lexer.is_eof() && pred(lexer.lookahead()) {
        lexer.advance(false);
    }
}

/// Consume up to and including the next `close`, or to end of input.
fn eat_through(lexer: &mut BufferLexer<'_>, close: char) {
    eat_while(lexer, |c| c != close);
    if !lexer.is_eof() {
        lexer.advance(false);
    }
}
