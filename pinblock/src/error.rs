use thiserror::Error;

use paycrypt_core::{DigitError, HexError};

use crate::format::PinBlockFormat;

/**
    Errors from PIN block encoding and decoding.
*/
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PinBlockError {
    #[error(transparent)]
    Hex(#[from] HexError),

    #[error(transparent)]
    Digits(#[from] DigitError),

    #[error("{0} PIN blocks require a PAN")]
    PanRequired(PinBlockFormat),

    #[error("{format} PIN block must be {expected} hex chars, got {found}")]
    BlockLength {
        format: PinBlockFormat,
        expected: usize,
        found: usize,
    },

    #[error("decoded format tag {found:X} does not match {expected}")]
    FormatTag {
        expected: PinBlockFormat,
        found: u8,
    },

    #[error("decoded PIN length {0} is outside 4-12")]
    PinLength(usize),

    #[error("decoded PIN digit is not decimal (nibble {0:X})")]
    PinDigit(u8),
}
