/*!
    Card verification values: CVV/CVC printed on the card, and the
    iCVV/dCVV chip variants that mix an application transaction counter
    into the data block.
*/

use paycrypt_core::Pan;

use crate::chain::{check_digits, cvv_chain, extract_digits};
use crate::error::CardVerifyResult;

/**
    Compute the three-digit verification code.

    The data block is the rightmost sixteen PAN digits (zero padded on
    the left), the `YYMM` expiry, the service code and, for the chip
    variants, the four-digit ATC, zero filled on the right to 32 hex
    digits.
*/
pub fn cvv(
    cvk: &[u8],
    pan: &Pan,
    expiry: &str,
    service_code: &str,
    atc: Option<&str>,
) -> CardVerifyResult<String> {
    check_digits("expiry", expiry, "4", 4)?;
    check_digits("service code", service_code, "3", 3)?;
    if let Some(atc) = atc {
        check_digits("ATC", atc, "4", 4)?;
    }
    let block = data_block(pan, expiry, service_code, atc);
    let cipher = cvv_chain("CVK", cvk, &block)?;
    Ok(extract_digits(&cipher, 3))
}

/** Recompute the code and compare. */
pub fn verify_cvv(
    cvk: &[u8],
    pan: &Pan,
    expiry: &str,
    service_code: &str,
    atc: Option<&str>,
    code: &str,
) -> CardVerifyResult<bool> {
    Ok(cvv(cvk, pan, expiry, service_code, atc)? == code)
}

fn data_block(pan: &Pan, expiry: &str, service_code: &str, atc: Option<&str>) -> String {
    let mut block = pan.rightmost(16);
    block.push_str(expiry);
    block.push_str(service_code);
    if let Some(atc) = atc {
        block.push_str(atc);
    }
    while block.len() < 32 {
        block.push('0');
    }
    block
}
