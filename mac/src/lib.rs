/*!
    Message authentication codes for payment messaging.

    Covers the ISO 9797-1 CBC-MAC algorithms 1-3, the ANSI X9.9 and
    X9.19 banking profiles, AS2805.4.1, plain TDES CBC-MAC and NIST
    SP 800-38B CMAC over TDES or AES. A [`MacContext`] pairs an
    algorithm with a padding method and truncation length and computes
    tags over raw bytes.
*/
#![allow(clippy::doc_overindented_list_items)]

mod algorithm;
mod cmac;
mod engine;
mod error;
mod padding;

pub use self::algorithm::MacAlgorithm;
pub use self::engine::MacContext;
pub use self::error::{MacError, MacResult};
pub use self::padding::PaddingMethod;
