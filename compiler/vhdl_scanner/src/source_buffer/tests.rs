use super::*;

// === Span ===

#[test]
fn span_basics() {
    let span = Span::new(3, 8);
    assert_eq!(span.len(), 5);
    assert!(!span.is_empty());
    assert!(Span::new(4, 4).is_empty());
    assert_eq!(span.to_range(), 3..8);
    assert_eq!(span.to_string(), "3..8");
}

// === SourceBuffer ===

#[test]
fn buffer_reports_length() {
    let buf = SourceBuffer::new("X\"FF\"");
    assert_eq!(buf.len(), 5);
    assert!(!buf.is_empty());
    assert!(SourceBuffer::new("").is_empty());
    assert_eq!(buf.as_str(), "X\"FF\"");
}

#[test]
fn slice_extracts_text() {
    let buf = SourceBuffer::new("a <= B\"01\";");
    assert_eq!(buf.slice(Span::new(5, 10)), "B\"01\"");
}

#[test]
fn slice_out_of_range_is_empty() {
    let buf = SourceBuffer::new("abc");
    assert_eq!(buf.slice(Span::new(2, 9)), "");
}

#[test]
fn slice_inside_multibyte_char_is_empty() {
    let buf = SourceBuffer::new("é");
    assert_eq!(buf.slice(Span::new(1, 2)), "");
}

// === BufferLexer navigation ===

#[test]
fn lookahead_and_advance() {
    let buf = SourceBuffer::new("ab");
    let mut lexer = buf.lexer_at(0);
    assert_eq!(lexer.lookahead(), 'a');
    lexer.advance(false);
    assert_eq!(lexer.lookahead(), 'b');
    assert_eq!(lexer.pos(), 1);
    lexer.advance(false);
    assert!(lexer.is_eof());
    assert_eq!(lexer.lookahead(), '\0');
}

#[test]
fn advance_at_eof_is_harmless() {
    let buf = SourceBuffer::new("");
    let mut lexer = buf.lexer_at(0);
    lexer.advance(false);
    assert_eq!(lexer.pos(), 0);
    assert!(lexer.is_eof());
}

#[test]
fn advance_steps_over_multibyte_chars() {
    let buf = SourceBuffer::new("éx");
    let mut lexer = buf.lexer_at(0);
    assert_eq!(lexer.lookahead(), 'é');
    lexer.advance(false);
    assert_eq!(lexer.pos(), 2);
    assert_eq!(lexer.lookahead(), 'x');
}

#[test]
fn interior_null_is_not_eof() {
    let buf = SourceBuffer::new("a\0b");
    let mut lexer = buf.lexer_at(1);
    assert_eq!(lexer.lookahead(), '\0');
    assert!(!lexer.is_eof());
    lexer.advance(false);
    assert_eq!(lexer.lookahead(), 'b');
}

#[test]
fn skip_moves_token_start() {
    let buf = SourceBuffer::new("  x");
    let mut lexer = buf.lexer_at(0);
    lexer.advance(true);
    lexer.advance(true);
    assert_eq!(lexer.token_start(), 2);
    lexer.advance(false);
    assert_eq!(lexer.token_start(), 2);
    assert_eq!(lexer.pos(), 3);
}

#[test]
fn lexer_at_clamps_past_end() {
    let buf = SourceBuffer::new("abc");
    let lexer = buf.lexer_at(99);
    assert_eq!(lexer.pos(), 3);
    assert!(lexer.is_eof());
}

#[test]
fn lexer_at_snaps_to_char_boundary() {
    let buf = SourceBuffer::new("éx");
    let lexer = buf.lexer_at(1);
    assert_eq!(lexer.pos(), 2);
    assert_eq!(lexer.lookahead(), 'x');
}

// === Token boundaries ===

#[test]
fn token_requires_end_and_result() {
    let buf = SourceBuffer::new("X\"1\"");
    let mut lexer = buf.lexer_at(0);
    assert_eq!(lexer.token(), None);
    lexer.advance(false);
    lexer.mark_end();
    assert_eq!(lexer.token(), None);
    lexer.set_result_symbol(TokenKind::InvalidBitStringLiteral);
    assert_eq!(
        lexer.token(),
        Some(ScannedToken {
            kind: TokenKind::InvalidBitStringLiteral,
            span: Span::new(0, 1),
        })
    );
}

#[test]
fn later_mark_end_wins() {
    let buf = SourceBuffer::new("abcd");
    let mut lexer = buf.lexer_at(0);
    lexer.advance(false);
    lexer.mark_end();
    lexer.advance(false);
    lexer.advance(false);
    lexer.mark_end();
    assert_eq!(lexer.token_end(), Some(3));
}

#[test]
fn begin_token_resets_boundaries() {
    let buf = SourceBuffer::new("abcd");
    let mut lexer = buf.lexer_at(0);
    lexer.advance(false);
    lexer.mark_end();
    lexer.set_result_symbol(TokenKind::BitStringLiteral);
    lexer.advance(false);
    lexer.begin_token();
    assert_eq!(lexer.token_start(), 2);
    assert_eq!(lexer.token_end(), None);
    assert_eq!(lexer.result_symbol(), None);
}

// === Checkpoint / rewind ===

#[test]
fn rewind_restores_everything() {
    let buf = SourceBuffer::new(" X\"1\"");
    let mut lexer = buf.lexer_at(0);
    let saved = lexer.checkpoint();

    lexer.advance(true);
    lexer.advance(false);
    lexer.mark_end();
    lexer.set_result_symbol(TokenKind::BitStringLiteral);
    assert_ne!(lexer.checkpoint(), saved);

    lexer.rewind(saved);
    assert_eq!(lexer.checkpoint(), saved);
    assert_eq!(lexer.pos(), 0);
    assert_eq!(lexer.token_start(), 0);
    assert_eq!(lexer.token_end(), None);
    assert_eq!(lexer.result_symbol(), None);
}

// === scan_at ===

#[test]
fn scan_at_reports_token() {
    let buf = SourceBuffer::new("v := O\"17\";");
    assert_eq!(
        buf.scan_at(5, ValidSymbols::all()),
        Some(ScannedToken {
            kind: TokenKind::BitStringLiteral,
            span: Span::new(5, 10),
        })
    );
    assert_eq!(buf.scan_at(0, ValidSymbols::all()), None);
}
