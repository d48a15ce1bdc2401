/*!
    Shared machinery for the card verification values: the two-block CVV
    cipher chain and decimal digit extraction from ciphertext nibbles.
*/

use paycrypt_core::{BlockCipher, DesCipher, DigitError, TdesCipher, parse_hex};

use crate::error::{CardVerifyError, CardVerifyResult};

/**
    Run the CVV cipher chain over a 32-hex-digit data block: single-DES
    the left half under the A key, XOR the right half in, then TDES the
    result under the full double-length key.
*/
pub(crate) fn cvv_chain(what: &'static str, key: &[u8], block: &str) -> CardVerifyResult<[u8; 8]> {
    check_key16(what, key)?;
    let bytes = parse_hex(block)?;

    let mut state = [0u8; 8];
    state.copy_from_slice(&bytes[..8]);
    DesCipher::new(&key[..8])?.encrypt_block(&mut state);
    for (s, b) in state.iter_mut().zip(&bytes[8..]) {
        *s ^= b;
    }
    TdesCipher::new(key)?.encrypt_block(&mut state);
    Ok(state)
}

/**
    Pull `count` decimal digits out of a ciphertext: first the nibbles
    that already are decimal, in order, then the remaining nibbles with
    ten subtracted.
*/
pub(crate) fn extract_digits(bytes: &[u8], count: usize) -> String {
    let nibbles: Vec<u8> = bytes.iter().flat_map(|b| [b >> 4, b & 0x0F]).collect();
    let mut digits = String::with_capacity(count);
    let decimals = nibbles.iter().filter(|&&n| n < 10);
    let letters = nibbles.iter().filter(|&&n| n >= 10).map(|n| n - 10);
    for digit in decimals.copied().chain(letters).take(count) {
        digits.push(char::from(b'0' + digit));
    }
    digits
}

pub(crate) fn check_digits(
    kind: &'static str,
    value: &str,
    expected: &'static str,
    len: usize,
) -> CardVerifyResult<()> {
    if value.len() != len {
        return Err(DigitError::Length {
            kind,
            expected,
            found: value.len(),
        }
        .into());
    }
    if let Some(ch) = value.chars().find(|ch| !ch.is_ascii_digit()) {
        return Err(DigitError::NonDigit { kind, ch }.into());
    }
    Ok(())
}

pub(crate) fn check_key16(what: &'static str, key: &[u8]) -> CardVerifyResult<()> {
    if key.len() != 16 {
        return Err(CardVerifyError::KeyLength {
            what,
            expected: "16",
            found: key.len(),
        });
    }
    Ok(())
}

pub(crate) fn check_tdes_key(what: &'static str, key: &[u8]) -> CardVerifyResult<()> {
    if !matches!(key.len(), 16 | 24) {
        return Err(CardVerifyError::KeyLength {
            what,
            expected: "16 or 24",
            found: key.len(),
        });
    }
    Ok(())
}
