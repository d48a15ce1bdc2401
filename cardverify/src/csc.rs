/*!
    American Express card security codes.

    Both versions run the CVV cipher chain over the same block, the
    fifteen-digit PAN followed by expiry and service code, zero filled
    to 32 hex digits. Version 1 takes the first four digits of the
    extraction stream; version 2 deals the first twelve out into the
    five-, four- and three-digit codes.
*/

use paycrypt_core::{DigitError, Pan};

use crate::chain::{check_digits, cvv_chain, extract_digits};
use crate::error::CardVerifyResult;

/** The version 2 code set. */
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CscCodes {
    pub csc5: String,
    pub csc4: String,
    pub csc3: String,
}

/** Compute the four-digit version 1 code. */
pub fn csc_v1(key: &[u8], pan: &Pan, expiry: &str, service_code: &str) -> CardVerifyResult<String> {
    let block = data_block(pan, expiry, service_code)?;
    let cipher = cvv_chain("CSC key", key, &block)?;
    Ok(extract_digits(&cipher, 4))
}

/** Compute the version 2 five/four/three-digit code set. */
pub fn csc_v2(
    key: &[u8],
    pan: &Pan,
    expiry: &str,
    service_code: &str,
) -> CardVerifyResult<CscCodes> {
    let block = data_block(pan, expiry, service_code)?;
    let cipher = cvv_chain("CSC key", key, &block)?;
    let stream = extract_digits(&cipher, 12);
    Ok(CscCodes {
        csc5: stream[..5].to_string(),
        csc4: stream[5..9].to_string(),
        csc3: stream[9..].to_string(),
    })
}

fn data_block(pan: &Pan, expiry: &str, service_code: &str) -> CardVerifyResult<String> {
    if pan.as_str().len() != 15 {
        return Err(DigitError::Length {
            kind: "AMEX PAN",
            expected: "15",
            found: pan.as_str().len(),
        }
        .into());
    }
    check_digits("expiry", expiry, "4", 4)?;
    check_digits("service code", service_code, "3", 3)?;

    let mut block = format!("{}{expiry}{service_code}", pan.as_str());
    while block.len() < 32 {
        block.push('0');
    }
    Ok(block)
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: [u8; 16] = [
        0xFE, 0xDC, 0xBA, 0x98, 0x76, 0x54, 0x32, 0x10, 0x01, 0x23, 0x45, 0x67, 0x89, 0xAB, 0xCD,
        0xEF,
    ];

    fn amex() -> Pan {
        "374245455400126".parse().unwrap()
    }

    #[test]
    fn data_block_layout() {
        assert_eq!(
            data_block(&amex(), "2405", "101").unwrap(),
            "37424545540012624051010000000000"
        );
    }

    #[test]
    fn version_1_leads_the_version_2_stream() {
        let v1 = csc_v1(&KEY, &amex(), "2405", "101").unwrap();
        let v2 = csc_v2(&KEY, &amex(), "2405", "101").unwrap();
        assert_eq!(v1.len(), 4);
        assert_eq!(v2.csc5.len(), 5);
        assert_eq!(v2.csc4.len(), 4);
        assert_eq!(v2.csc3.len(), 3);
        // Same block, same stream: v1 is the head of csc5.
        assert_eq!(v1, v2.csc5[..4]);
    }

    #[test]
    fn only_fifteen_digit_pans_are_accepted() {
        let wrong: Pan = "4123456789012345".parse().unwrap();
        let err = csc_v1(&KEY, &wrong, "2405", "101").unwrap_err();
        assert_eq!(
            err,
            DigitError::Length {
                kind: "AMEX PAN",
                expected: "15",
                found: 16
            }
            .into()
        );
    }

    #[test]
    fn determinism() {
        let a = csc_v2(&KEY, &amex(), "2405", "101").unwrap();
        let b = csc_v2(&KEY, &amex(), "2405", "101").unwrap();
        assert_eq!(a, b);
    }
}
