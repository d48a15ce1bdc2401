use thiserror::Error;

use paycrypt_core::CipherError;

/**
    Errors from MAC computation.
*/
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MacError {
    #[error(transparent)]
    Cipher(#[from] CipherError),

    #[error("{algorithm} key must be {expected} bytes, got {found}")]
    KeyLength {
        algorithm: &'static str,
        expected: &'static str,
        found: usize,
    },

    #[error("cannot MAC an empty message with this algorithm")]
    EmptyData,

    #[error("truncation length must be 1..={max} bytes, got {found}")]
    Truncation { max: usize, found: usize },
}

/**
    Type alias for results that may return a [`MacError`].
*/
pub type MacResult<T> = std::result::Result<T, MacError>;
