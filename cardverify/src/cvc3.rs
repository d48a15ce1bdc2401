/*!
    MasterCard dynamic CVC3.

    The card master key comes from the issuer master key through EMV
    Option A: the rightmost sixteen digits of PAN and PAN sequence
    number, TDES-encrypted plain and complemented, halves concatenated
    and parity adjusted. The CVC3 itself chains the track-derived block,
    the unpredictable number and the ATC through TDES-CBC and reads the
    low three decimal digits of the final two ciphertext bytes.
*/

use paycrypt_core::{BlockCipher, HexError, Pan, TdesCipher, adjust_des_parity, parse_hex};

use crate::chain::{check_digits, check_key16};
use crate::error::{CardVerifyError, CardVerifyResult};

/** Derive the per-card key from the issuer master key (EMV Option A). */
pub fn derive_card_key(imk: &[u8], pan: &Pan, psn: &str) -> CardVerifyResult<[u8; 16]> {
    check_key16("IMK", imk)?;
    check_digits("PAN sequence number", psn, "2", 2)?;

    let y = parse_hex(&y_block(pan, psn))?;
    let cipher = TdesCipher::new(imk)?;

    let mut left = [0u8; 8];
    left.copy_from_slice(&y);
    cipher.encrypt_block(&mut left);

    let mut right = [0u8; 8];
    for (r, b) in right.iter_mut().zip(&y) {
        *r = b ^ 0xFF;
    }
    cipher.encrypt_block(&mut right);

    let mut key = [0u8; 16];
    key[..8].copy_from_slice(&left);
    key[8..].copy_from_slice(&right);
    adjust_des_parity(&mut key);
    Ok(key)
}

/**
    Compute the three-digit dynamic code for one transaction.

    `track` is up to twenty hex digits of track discretionary data,
    right filled with zeros; `un` is the eight-hex-digit unpredictable
    number and `atc` the four-hex-digit transaction counter.
*/
pub fn cvc3(
    imk: &[u8],
    pan: &Pan,
    psn: &str,
    track: &str,
    un: &str,
    atc: &str,
) -> CardVerifyResult<String> {
    if track.is_empty() || track.len() > 20 {
        return Err(CardVerifyError::TrackLength(track.len()));
    }
    if un.len() != 8 {
        return Err(HexError::Length {
            expected: 8,
            found: un.len(),
        }
        .into());
    }
    if atc.len() != 4 {
        return Err(HexError::Length {
            expected: 4,
            found: atc.len(),
        }
        .into());
    }

    let key = derive_card_key(imk, pan, psn)?;
    let bytes = parse_hex(&format!("{track:0<20}{un}{atc}"))?;

    let cipher = TdesCipher::new(&key)?;
    let mut state = [0u8; 8];
    for chunk in bytes.chunks(8) {
        for (s, b) in state.iter_mut().zip(chunk) {
            *s ^= b;
        }
        cipher.encrypt_block(&mut state);
    }

    let value = u16::from_be_bytes([state[6], state[7]]);
    Ok(format!("{:03}", value % 1000))
}

/** Rightmost sixteen digits of PAN and sequence number, zero padded. */
fn y_block(pan: &Pan, psn: &str) -> String {
    let joined = format!("{}{psn}", pan.as_str());
    if joined.len() >= 16 {
        joined[joined.len() - 16..].to_string()
    } else {
        format!("{joined:0>16}")
    }
}
