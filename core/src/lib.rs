#![allow(clippy::doc_overindented_list_items)]

mod cipher;
mod error;
mod types;

pub mod utils;

pub use self::cipher::{
    AesCipher, BlockCipher, DesCipher, TdesCipher, adjust_des_parity, key_check_value,
};
pub use self::error::{CipherError, DigitError, HexError, ParseError};
pub use self::types::{DecimalizationTable, Pan, Pin};
pub use self::utils::{eq_ignore_ascii_case, parse_hex, parse_hex_exact, trim_ascii};
