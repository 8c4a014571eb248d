//! Token kinds surfaced to the host and the per-call acceptable-kind set.
//!
//! The discriminants of [`TokenKind`] are the host's external-symbol
//! indices: they must match the order of the grammar's `externals` list.

use bitflags::bitflags;

/// Kind of token the scanner produces.
///
/// `#[repr(u8)]` with explicit discriminants: the value is the index into
/// the host's `valid_symbols` array and the value written as the result
/// symbol.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TokenKind {
    /// Correct shape, every body character legal for the radix.
    BitStringLiteral = 0,
    /// Bounded literal with a bad prefix shape or out-of-radix digits.
    InvalidBitStringLiteral = 1,
}

impl TokenKind {
    /// All kinds, in external-symbol order.
    pub const ALL: [TokenKind; 2] = [
        TokenKind::BitStringLiteral,
        TokenKind::InvalidBitStringLiteral,
    ];

    /// Index of this kind in the host's external-symbol table.
    #[inline]
    pub const fn symbol(self) -> u16 {
        self as u16
    }

    /// Inverse of [`symbol()`](Self::symbol).
    pub fn from_symbol(symbol: u16) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.symbol() == symbol)
    }

    /// Grammar name of the external token.
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::BitStringLiteral => "bit_string_literal",
            TokenKind::InvalidBitStringLiteral => "invalid_bit_string_literal",
        }
    }

    /// Flag for this kind in a [`ValidSymbols`] set.
    #[inline]
    pub const fn flag(self) -> ValidSymbols {
        match self {
            TokenKind::BitStringLiteral => ValidSymbols::BIT_STRING_LITERAL,
            TokenKind::InvalidBitStringLiteral => ValidSymbols::INVALID_BIT_STRING_LITERAL,
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

bitflags! {
    /// Token kinds the host is willing to accept at the current position.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct ValidSymbols: u8 {
        const BIT_STRING_LITERAL = 1 << 0;
        const INVALID_BIT_STRING_LITERAL = 1 << 1;
    }
}

impl ValidSymbols {
    /// Build the set from the host's `valid_symbols` array.
    ///
    /// Slots past the end of the array are treated as not accepted: a
    /// grammar that declares only `bit_string_literal` passes a one-element
    /// array and never receives the malformed kind.
    pub fn from_host(valid_symbols: &[bool]) -> Self {
        TokenKind::ALL
            .into_iter()
            .filter(|kind| {
                valid_symbols
                    .get(usize::from(kind.symbol()))
                    .copied()
                    .unwrap_or(false)
            })
            .fold(Self::empty(), |set, kind| set | kind.flag())
    }

    /// Returns `true` if the host accepts `kind` here.
    #[inline]
    pub fn accepts(self, kind: TokenKind) -> bool {
        self.contains(kind.flag())
    }
}

#[cfg(test)]
mod tests;
