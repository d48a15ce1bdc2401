/*!
    Derived Unique Key Per Transaction.

    Two hierarchies live here: the legacy TDES scheme of ANSI X9.24-1
    under [`tdes`], and the AES scheme of ANSI X9.24-3 under [`aes`].
    Both take a base derivation key and a key serial number and hand back
    the working key a device would hold for that transaction.
*/
#![allow(clippy::doc_overindented_list_items)]

pub mod aes;
pub mod tdes;

mod error;
mod ksn;
mod types;

pub use self::error::{DukptError, DukptResult};
pub use self::ksn::{AesKsn, Ksn};
pub use self::types::{DukptKeyType, KeyUsage, KeyVariant};
