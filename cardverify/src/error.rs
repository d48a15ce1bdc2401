use thiserror::Error;

use paycrypt_core::{CipherError, DigitError, HexError};

/**
    Errors from card verification value computation.
*/
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CardVerifyError {
    #[error(transparent)]
    Cipher(#[from] CipherError),

    #[error(transparent)]
    Digits(#[from] DigitError),

    #[error(transparent)]
    Hex(#[from] HexError),

    #[error("{what} must be {expected} bytes, got {found}")]
    KeyLength {
        what: &'static str,
        expected: &'static str,
        found: usize,
    },

    #[error("PVKI must be a single digit 0-9, got {0}")]
    Pvki(u8),

    #[error("track data must be 1 to 20 hex characters, got {0}")]
    TrackLength(usize),

    #[error("selection window [{start}..{start}+{length}] falls outside the 16 natural digits")]
    Window { start: usize, length: usize },

    #[error("window pad must be a decimal digit value, got {0}")]
    PadDigit(u8),

    #[error("mask may only contain digits and 'N' placeholders, got '{0}'")]
    MaskChar(char),

    #[error("selection must yield 4 to 12 PIN digits, got {0}")]
    SelectionLength(usize),

    #[error("PIN length {found} does not match the {expected}-digit selection")]
    PinLength { expected: usize, found: usize },
}

/**
    Type alias for results that may return a [`CardVerifyError`].
*/
pub type CardVerifyResult<T> = std::result::Result<T, CardVerifyError>;
