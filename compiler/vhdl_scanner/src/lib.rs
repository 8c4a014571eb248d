//! External scanner for VHDL bit-string literals.
//!
//! Incremental-parsing hosts tokenize greedily: given `X"FF"`, the generic
//! identifier rule grabs `X` before the delimiter is visible. This crate runs
//! ahead of the host tokenizer and claims radix-prefixed bit-string literals
//! (`X"DEADBEEF"`, `8UB"1010"`, `O%777%`) before that happens.
//!
//! # Layers
//!
//! - [`Lexer`]: the host cursor capability, injected by `&mut` into [`scan`].
//! - [`scan`]: the recognition algorithm. Stateless and idempotent.
//! - [`BitStringScanner`]: the lifecycle handle the host's external-scanner
//!   protocol expects (create, destroy, serialize, deserialize, scan).
//! - [`SourceBuffer`] / [`BufferLexer`]: a reference host cursor over
//!   in-memory text, used by tests and the `vhdlscan` tool.
//!
//! # Example
//!
//! ```
//! use vhdl_scanner::{SourceBuffer, Span, TokenKind, ValidSymbols};
//!
//! let buf = SourceBuffer::new("x <= 8uB\"1010\";");
//! let tok = buf.scan_at(5, ValidSymbols::all()).map(|t| (t.kind, t.span));
//! assert_eq!(tok, Some((TokenKind::BitStringLiteral, Span::new(5, 14))));
//! ```

mod external;
mod lexer;
mod literals;
mod radix;
mod scanner;
mod source_buffer;
mod tag;

pub use external::{BitStringScanner, ExternalScanner, StateError};
pub use lexer::Lexer;
pub use literals::BitStringLiterals;
pub use radix::{Radix, Signedness};
pub use scanner::{scan, Prefix};
pub use source_buffer::{BufferCheckpoint, BufferLexer, ScannedToken, SourceBuffer, Span};
pub use tag::{TokenKind, ValidSymbols};
