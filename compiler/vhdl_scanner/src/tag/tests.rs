use super::*;

// === TokenKind discriminants ===

#[test]
fn repr_u8_matches_externals_order() {
    assert_eq!(TokenKind::BitStringLiteral as u8, 0);
    assert_eq!(TokenKind::InvalidBitStringLiteral as u8, 1);
}

#[test]
fn kind_is_one_byte() {
    assert_eq!(std::mem::size_of::<TokenKind>(), 1);
}

#[test]
fn symbol_round_trips() {
    for kind in TokenKind::ALL {
        assert_eq!(TokenKind::from_symbol(kind.symbol()), Some(kind));
    }
    assert_eq!(TokenKind::from_symbol(2), None);
}

#[test]
fn names_match_grammar() {
    assert_eq!(TokenKind::BitStringLiteral.name(), "bit_string_literal");
    assert_eq!(
        TokenKind::InvalidBitStringLiteral.to_string(),
        "invalid_bit_string_literal"
    );
}

// === ValidSymbols ===

#[test]
fn from_host_both_valid() {
    let valid = ValidSymbols::from_host(&[true, true]);
    assert_eq!(valid, ValidSymbols::all());
    assert!(valid.accepts(TokenKind::BitStringLiteral));
    assert!(valid.accepts(TokenKind::InvalidBitStringLiteral));
}

#[test]
fn from_host_only_well_formed() {
    let valid = ValidSymbols::from_host(&[true, false]);
    assert!(valid.accepts(TokenKind::BitStringLiteral));
    assert!(!valid.accepts(TokenKind::InvalidBitStringLiteral));
}

#[test]
fn from_host_short_array_lacks_malformed_kind() {
    let valid = ValidSymbols::from_host(&[true]);
    assert_eq!(valid, ValidSymbols::BIT_STRING_LITERAL);
}

#[test]
fn from_host_empty_array() {
    assert!(ValidSymbols::from_host(&[]).is_empty());
}

#[test]
fn from_host_ignores_extra_slots() {
    let valid = ValidSymbols::from_host(&[false, true, true, true]);
    assert_eq!(valid, ValidSymbols::INVALID_BIT_STRING_LITERAL);
}

#[test]
fn flag_matches_kind() {
    for kind in TokenKind::ALL {
        assert!(kind.flag().accepts(kind));
    }
}
