use thiserror::Error;

/**
    Error returned by `FromStr` implementations on enum types.
*/
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} '{value}'")]
pub struct ParseError {
    pub kind: &'static str,
    pub value: String,
}

/**
    Errors from hexadecimal string parsing.
*/
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HexError {
    #[error("invalid hex character '{ch}' at offset {index}")]
    InvalidChar { ch: char, index: usize },

    #[error("hex string has odd length {0}")]
    OddLength(usize),

    #[error("hex string must be {expected} characters, got {found}")]
    Length { expected: usize, found: usize },
}

/**
    Errors from digit-string validation (PANs, PINs, decimalization tables).
*/
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DigitError {
    #[error("{kind} must be {expected} digits, got {found} characters")]
    Length {
        kind: &'static str,
        expected: &'static str,
        found: usize,
    },

    #[error("{kind} contains non-digit character '{ch}'")]
    NonDigit { kind: &'static str, ch: char },
}

/**
    Errors from block cipher construction.
*/
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CipherError {
    #[error("{cipher} key must be {expected} bytes, got {found}")]
    KeyLength {
        cipher: &'static str,
        expected: &'static str,
        found: usize,
    },
}
