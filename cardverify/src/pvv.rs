/*!
    Visa PIN verification values.

    The transformed security parameter is read out of the encrypted,
    decimalized PAN block at the PVKI offset; the PVV is the digit-wise
    mod-10 sum of PIN and TSP, which makes recovery of the PIN from a
    known PVV the mirror subtraction.
*/

use paycrypt_core::{BlockCipher, DecimalizationTable, Pan, Pin, TdesCipher, parse_hex};

use crate::chain::{check_digits, check_tdes_key};
use crate::error::{CardVerifyError, CardVerifyResult};

/** Compute the four-digit PVV for a PIN (its first four digits). */
pub fn pvv(
    pdk: &[u8],
    pan: &Pan,
    pin: &Pin,
    pvki: u8,
    table: &DecimalizationTable,
) -> CardVerifyResult<String> {
    let tsp = tsp(pdk, pan, pvki, table)?;
    let code = pin
        .digits()
        .take(4)
        .zip(tsp_digits(&tsp))
        .map(|(p, t)| char::from(b'0' + (p + t) % 10))
        .collect();
    Ok(code)
}

/** Recover the four-digit PIN that produces `pvv`. */
pub fn pin_from_pvv(
    pdk: &[u8],
    pan: &Pan,
    pvv: &str,
    pvki: u8,
    table: &DecimalizationTable,
) -> CardVerifyResult<Pin> {
    check_digits("PVV", pvv, "4", 4)?;
    let tsp = tsp(pdk, pan, pvki, table)?;
    let digits: String = pvv
        .bytes()
        .map(|b| b - b'0')
        .zip(tsp_digits(&tsp))
        .map(|(v, t)| char::from(b'0' + (v + 10 - t) % 10))
        .collect();
    Ok(Pin::new(&digits)?)
}

/**
    The transformed security parameter: encrypt the rightmost sixteen
    PAN digits under the PDK, decimalize, and take four digits starting
    at the PVKI.
*/
fn tsp(
    pdk: &[u8],
    pan: &Pan,
    pvki: u8,
    table: &DecimalizationTable,
) -> CardVerifyResult<String> {
    check_tdes_key("PDK", pdk)?;
    if pvki > 9 {
        return Err(CardVerifyError::Pvki(pvki));
    }

    let block = parse_hex(&pan.rightmost(16))?;
    let mut state = [0u8; 8];
    state.copy_from_slice(&block);
    TdesCipher::new(pdk)?.encrypt_block(&mut state);

    let digits = table.decimalize(&state);
    let start = pvki as usize;
    Ok(digits[start..start + 4].to_string())
}

fn tsp_digits(tsp: &str) -> impl Iterator<Item = u8> + '_ {
    tsp.bytes().map(|b| b - b'0')
}
