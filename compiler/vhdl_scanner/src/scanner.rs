//! Bit-string literal recognition.
//!
//! Shape accepted (letters case-insensitive):
//!
//! ```text
//! literal = [ size ] [ sign ] letter [ letter ] delim { any - delim } delim
//! size    = digit { digit | "_" }
//! sign    = "S" | "U"
//! delim   = '"' | "%"
//! ```
//!
//! The literal is well-formed when the letters are a single radix specifier
//! (`B`, `O`, `X`, `D`) and every body character belongs to that radix.
//! Any other letter combination still yields a bounded token, classified as
//! malformed, so the host can recover at the closing delimiter.
//!
//! # Commitment
//!
//! The scanner checkpoints the host cursor on entry and rewinds to it on
//! every decline, including a decline after the provisional boundary at the
//! end of the prefix (unterminated literal, or a digit-driven kind the host
//! does not accept). A declined attempt therefore leaves the cursor exactly
//! as the host handed it over.

use tracing::trace;

use crate::radix::{is_delimiter, is_layout, is_size_digit};
use crate::{Lexer, Radix, Signedness, TokenKind, ValidSymbols};

/// Everything in front of the opening delimiter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Prefix {
    /// A size field (`8`, `1_6`) preceded the letters.
    pub sized: bool,
    /// Signedness letter consumed right after the size field (or at the
    /// token start when unsized).
    pub sign: Option<Signedness>,
    /// First alphabetic character.
    pub first: char,
    /// Optional second alphabetic character.
    pub second: Option<char>,
}

impl Prefix {
    /// Radix selected by this prefix, or `None` if the shape is invalid.
    ///
    /// Valid shapes are a single radix letter (after an optional size and
    /// sign), or an unsized `sign radix` letter pair.
    pub fn radix(&self) -> Option<Radix> {
        match self.second {
            None => Radix::from_specifier(self.first),
            Some(second)
                if !self.sized
                    && self.sign.is_none()
                    && Signedness::from_letter(self.first).is_some() =>
            {
                Radix::from_specifier(second)
            }
            Some(_) => None,
        }
    }
}

/// Why an attempt produced no token. Never surfaced to the host.
#[derive(Debug, thiserror::Error)]
enum Decline {
    #[error("no bit-string kind is valid here")]
    NothingAccepted,
    #[error("not a bit-string literal: {0}")]
    ShapeMismatch(&'static str),
    #[error("`{0}` is not valid here")]
    KindNotAccepted(TokenKind),
    #[error("unterminated literal, missing closing `{0}`")]
    Unterminated(char),
}

/// Try to recognize a bit-string literal at the cursor.
///
/// On a match the host cursor has consumed the literal, its end is marked
/// just past the closing delimiter, the result symbol is set and `true` is
/// returned. On a decline the cursor is left untouched and `false` is
/// returned so the host can try its own rules at the same position.
#[tracing::instrument(level = "trace", skip_all)]
pub fn scan<L: Lexer>(lexer: &mut L, valid: ValidSymbols) -> bool {
    if !valid.intersects(ValidSymbols::all()) {
        trace!(reason = %Decline::NothingAccepted, "declined");
        return false;
    }

    let entry = lexer.checkpoint();
    match scan_literal(lexer, valid) {
        Ok(kind) => {
            trace!(%kind, "matched");
            true
        }
        Err(reason) => {
            lexer.rewind(entry);
            trace!(%reason, "declined");
            false
        }
    }
}

fn scan_literal<L: Lexer>(lexer: &mut L, valid: ValidSymbols) -> Result<TokenKind, Decline> {
    while is_layout(lexer.lookahead()) {
        lexer.advance(true);
    }

    let prefix = scan_prefix(lexer)?;
    let delimiter = lexer.lookahead();
    if !is_delimiter(delimiter) {
        return Err(Decline::ShapeMismatch("prefix not followed by a delimiter"));
    }

    let radix = prefix.radix();
    let shape_kind = if radix.is_some() {
        TokenKind::BitStringLiteral
    } else {
        TokenKind::InvalidBitStringLiteral
    };
    if !valid.accepts(shape_kind) {
        return Err(Decline::KindNotAccepted(shape_kind));
    }

    // Provisional boundary at the end of the prefix.
    lexer.mark_end();
    lexer.advance(false);

    let mut digits_ok = true;
    while lexer.lookahead() != delimiter {
        if lexer.is_eof() {
            return Err(Decline::Unterminated(delimiter));
        }
        if let Some(radix) = radix.filter(|_| digits_ok) {
            let c = lexer.lookahead();
            if !radix.accepts(c) {
                trace!(digit = ?c, ?radix, "digit outside radix");
                digits_ok = false;
            }
        }
        lexer.advance(false);
    }

    lexer.advance(false);
    lexer.mark_end();

    let kind = if radix.is_some() && digits_ok {
        TokenKind::BitStringLiteral
    } else {
        TokenKind::InvalidBitStringLiteral
    };
    if !valid.accepts(kind) {
        return Err(Decline::KindNotAccepted(kind));
    }
    lexer.set_result_symbol(kind);
    Ok(kind)
}

fn scan_prefix<L: Lexer>(lexer: &mut L) -> Result<Prefix, Decline> {
    let sized = lexer.lookahead().is_ascii_digit();
    if sized {
        while is_size_digit(lexer.lookahead()) {
            lexer.advance(false);
        }
    }

    let sign = Signedness::from_letter(lexer.lookahead());
    if sign.is_some() {
        lexer.advance(false);
    }

    let first = lexer.lookahead();
    if !first.is_alphabetic() {
        return Err(Decline::ShapeMismatch("no radix letter"));
    }
    lexer.advance(false);

    let second = Some(lexer.lookahead()).filter(|c| c.is_alphabetic());
    if second.is_some() {
        lexer.advance(false);
    }

    Ok(Prefix {
        sized,
        sign,
        first,
        second,
    })
}
