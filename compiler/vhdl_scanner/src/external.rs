//! External-scanner lifecycle.
//!
//! Incremental hosts create one scanner per parser, snapshot its state
//! after every external token (`serialize`), restore it when re-lexing
//! from an earlier point (`deserialize`) and destroy it with the parser.
//! The bit-string scanner keeps no state, so every hook except `scan` is a
//! no-op: the handle is zero-sized and the serialized payload is empty.

use crate::{scan, Lexer, ValidSymbols};

/// Error restoring scanner state from a host payload.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StateError {
    /// The host handed back bytes this scanner never serialized.
    #[error("bit-string scanner is stateless, got a {len}-byte state payload")]
    UnexpectedPayload { len: usize },
}

/// Lifecycle contract an incremental-parsing host expects from an external
/// scanner.
pub trait ExternalScanner: Sized {
    /// Create a scanner for a new parser.
    fn create() -> Self;

    /// Release the scanner. Consumes the handle.
    fn destroy(self) {
        drop(self);
    }

    /// Write the scanner state into `buffer`, returning the bytes written.
    fn serialize(&self, buffer: &mut [u8]) -> usize;

    /// Rebuild a scanner from a payload previously produced by
    /// [`serialize()`](Self::serialize).
    fn deserialize(payload: &[u8]) -> Result<Self, StateError>;

    /// Try to produce an external token at the cursor.
    fn scan<L: Lexer>(&mut self, lexer: &mut L, valid: ValidSymbols) -> bool;
}

/// Handle for the bit-string scanner. Holds nothing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct BitStringScanner;

const _: () = assert!(std::mem::size_of::<BitStringScanner>() == 0);

impl ExternalScanner for BitStringScanner {
    fn create() -> Self {
        BitStringScanner
    }

    fn serialize(&self, _buffer: &mut [u8]) -> usize {
        0
    }

    fn deserialize(payload: &[u8]) -> Result<Self, StateError> {
        if payload.is_empty() {
            Ok(BitStringScanner)
        } else {
            Err(StateError::UnexpectedPayload { len: payload.len() })
        }
    }

    #[inline]
    fn scan<L: Lexer>(&mut self, lexer: &mut L, valid: ValidSymbols) -> bool {
        scan(lexer, valid)
    }
}
