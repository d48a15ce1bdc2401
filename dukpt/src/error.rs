use thiserror::Error;

use paycrypt_core::{CipherError, HexError};

/**
    Errors from DUKPT key derivation.
*/
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DukptError {
    #[error(transparent)]
    Hex(#[from] HexError),

    #[error(transparent)]
    Cipher(#[from] CipherError),

    #[error("{what} must be {expected} bytes, got {found}")]
    KeyLength {
        what: &'static str,
        expected: &'static str,
        found: usize,
    },

    #[error("KSN must be {expected} bytes, got {found}")]
    KsnLength { expected: usize, found: usize },

    #[error("transaction counter {counter:#X} is outside the derivation window (non-zero, at most {max_bits} set bits)")]
    Counter { counter: u32, max_bits: u32 },
}

/**
    Type alias for results that may return a [`DukptError`].
*/
pub type DukptResult<T> = std::result::Result<T, DukptError>;
