#![allow(clippy::doc_overindented_list_items)]

mod codec;
mod error;
mod format;

pub use self::codec::{DecodedPinBlock, decode, encode};
pub use self::error::PinBlockError;
pub use self::format::PinBlockFormat;
