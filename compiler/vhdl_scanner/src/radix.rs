//! Character classes for bit-string literals.
//!
//! Radix and signedness letters are matched case-insensitively. Every radix
//! accepts `_` as a digit separator.

/// Digit interpretation selected by the radix specifier letter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Radix {
    /// `B`: `0`, `1`.
    Binary,
    /// `O`: `0`-`7`.
    Octal,
    /// `X`: `0`-`9`, `a`-`f`, `A`-`F`.
    Hex,
    /// `D`: `0`-`9`.
    Decimal,
}

impl Radix {
    /// Map a radix specifier letter (`B`, `O`, `X`, `D`, any case).
    #[inline]
    pub fn from_specifier(c: char) -> Option<Self> {
        match c {
            'B' | 'b' => Some(Radix::Binary),
            'O' | 'o' => Some(Radix::Octal),
            'X' | 'x' => Some(Radix::Hex),
            'D' | 'd' => Some(Radix::Decimal),
            _ => None,
        }
    }

    /// Returns `true` if `c` may appear in the body of a literal of this radix.
    #[inline]
    pub fn accepts(self, c: char) -> bool {
        match self {
            Radix::Binary => matches!(c, '0' | '1' | '_'),
            Radix::Octal => matches!(c, '0'..='7' | '_'),
            Radix::Hex => c.is_ascii_hexdigit() || c == '_',
            Radix::Decimal => is_size_digit(c),
        }
    }

    /// Numeric base.
    pub const fn base(self) -> u32 {
        match self {
            Radix::Binary => 2,
            Radix::Octal => 8,
            Radix::Hex => 16,
            Radix::Decimal => 10,
        }
    }
}

/// Signedness letter between the size field and the radix letter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Signedness {
    /// `S`
    Signed,
    /// `U`
    Unsigned,
}

impl Signedness {
    /// Map a signedness letter (`S`, `U`, any case).
    #[inline]
    pub fn from_letter(c: char) -> Option<Self> {
        match c {
            'S' | 's' => Some(Signedness::Signed),
            'U' | 'u' => Some(Signedness::Unsigned),
            _ => None,
        }
    }
}

/// Layout characters skipped before the token start.
#[inline]
pub(crate) fn is_layout(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}

/// Characters of the optional size field after its leading digit.
#[inline]
pub(crate) fn is_size_digit(c: char) -> bool {
    c.is_ascii_digit() || c == '_'
}

/// Opening (and matching closing) delimiter.
#[inline]
pub(crate) fn is_delimiter(c: char) -> bool {
    c == '"' || c == '%'
}
