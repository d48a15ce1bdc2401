/*!
    Card verification cryptography.

    The static codes (CVV/CVC, AMEX CSC) run a shared two-block TDES
    chain with decimal digit extraction; the dynamic MasterCard CVC3
    derives a per-card key first. PIN verification comes in the Visa
    PVV flavor and the IBM 3624 offset flavor, both built on encrypting
    the PAN block and decimalizing the result.
*/
#![allow(clippy::doc_overindented_list_items)]

mod chain;
mod csc;
mod cvc3;
mod cvv;
mod error;
mod offset;
mod pvv;

pub use self::csc::{CscCodes, csc_v1, csc_v2};
pub use self::cvc3::{cvc3, derive_card_key};
pub use self::cvv::{cvv, verify_cvv};
pub use self::error::{CardVerifyError, CardVerifyResult};
pub use self::offset::{PinSelection, natural_pin, pin_from_offset, pin_offset};
pub use self::pvv::{pin_from_pvv, pvv};
