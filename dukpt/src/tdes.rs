/*!
    Legacy TDES DUKPT (ANSI X9.24-1).

    The IPEK is derived by TDES-encrypting the counter-zeroed KSN under
    the BDK and under the BDK XOR `C0C0C0C0.00000000` (repeated); each set
    counter bit, highest first, is then folded into the key through the
    non-reversible key generation step. Working keys apply the usage
    variant masks, with the data key self-encrypted one way so that it
    cannot be turned back into the transaction key.
*/

use paycrypt_core::{BlockCipher, DesCipher, TdesCipher};

use crate::error::{DukptError, DukptResult};
use crate::ksn::Ksn;
use crate::types::KeyVariant;

const KEY_MASK: [u8; 16] = [
    0xC0, 0xC0, 0xC0, 0xC0, 0x00, 0x00, 0x00, 0x00, 0xC0, 0xC0, 0xC0, 0xC0, 0x00, 0x00, 0x00, 0x00,
];

const PIN_VARIANT: [u8; 8] = [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xFF];
const MAC_VARIANT: [u8; 8] = [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xFF, 0x00];
const DATA_VARIANT: [u8; 8] = [0x00, 0x00, 0x00, 0x00, 0x00, 0xFF, 0x00, 0x00];

/**
    Derive the initial PIN encryption key for a device.

    The counter portion of the KSN is ignored; only the device identity
    feeds the IPEK.
*/
pub fn derive_ipek(bdk: &[u8], ksn: &Ksn) -> DukptResult<[u8; 16]> {
    check_bdk(bdk)?;

    let mut left = [0u8; 8];
    left.copy_from_slice(&ksn.base()[..8]);
    let mut right = left;

    TdesCipher::new(bdk)?.encrypt_block(&mut left);
    TdesCipher::new(&xor_masked(bdk))?.encrypt_block(&mut right);

    let mut ipek = [0u8; 16];
    ipek[..8].copy_from_slice(&left);
    ipek[8..].copy_from_slice(&right);
    Ok(ipek)
}

/**
    Walk the counter bits from the IPEK to the per-transaction key,
    folding in set bits from the most significant down.

    A device never reaches a counter with more than ten set bits, and
    counter zero identifies the IPEK itself, so both are rejected.
*/
pub fn transaction_key(ipek: &[u8; 16], ksn: &Ksn) -> DukptResult<[u8; 16]> {
    let counter = ksn.counter();
    check_counter(counter)?;
    let mut key = *ipek;
    let mut acc = 0u32;
    let mut bit = 1u32 << 20;
    while bit != 0 {
        if counter & bit != 0 {
            acc |= bit;
            let tail = right8(&ksn.with_counter(acc));
            key = nonreversible_step(&key, &tail)?;
        }
        bit >>= 1;
    }
    Ok(key)
}

/** IPEK derivation plus counter walk in one call. */
pub fn derive_transaction_key(bdk: &[u8], ksn: &Ksn) -> DukptResult<[u8; 16]> {
    let ipek = derive_ipek(bdk, ksn)?;
    transaction_key(&ipek, ksn)
}

/** Usage-specific working key for this KSN. */
pub fn derive_working_key(bdk: &[u8], ksn: &Ksn, variant: KeyVariant) -> DukptResult<[u8; 16]> {
    let key = derive_transaction_key(bdk, ksn)?;
    apply_variant(&key, variant)
}

/**
    Apply a usage variant to a transaction key.

    PIN and MAC keys are plain XOR variants. The data key XORs its mask
    and then TDES-encrypts each half under the variant key itself.
*/
pub fn apply_variant(key: &[u8; 16], variant: KeyVariant) -> DukptResult<[u8; 16]> {
    let mask = match variant {
        KeyVariant::Pin => PIN_VARIANT,
        KeyVariant::Mac => MAC_VARIANT,
        KeyVariant::Data => DATA_VARIANT,
    };

    let mut out = *key;
    for i in 0..8 {
        out[i] ^= mask[i];
        out[8 + i] ^= mask[i];
    }

    if variant == KeyVariant::Data {
        let cipher = TdesCipher::new(&out)?;
        let mut left = [0u8; 8];
        left.copy_from_slice(&out[..8]);
        let mut right = [0u8; 8];
        right.copy_from_slice(&out[8..]);
        cipher.encrypt_block(&mut left);
        cipher.encrypt_block(&mut right);
        out[..8].copy_from_slice(&left);
        out[8..].copy_from_slice(&right);
    }

    Ok(out)
}

/**
    X9.24-1 non-reversible key generation: one single-DES round per key
    half, keyed by the current key and by its C0-masked form.
*/
fn nonreversible_step(key: &[u8; 16], ksn_tail: &[u8; 8]) -> DukptResult<[u8; 16]> {
    let mut out = [0u8; 16];
    out[8..].copy_from_slice(&half_step(key, ksn_tail)?);
    out[..8].copy_from_slice(&half_step(&xor_masked16(key), ksn_tail)?);
    Ok(out)
}

/** `DES(key_left, tail XOR key_right) XOR key_right`. */
fn half_step(key: &[u8; 16], ksn_tail: &[u8; 8]) -> DukptResult<[u8; 8]> {
    let mut block = [0u8; 8];
    for i in 0..8 {
        block[i] = ksn_tail[i] ^ key[8 + i];
    }
    DesCipher::new(&key[..8])?.encrypt_block(&mut block);
    for i in 0..8 {
        block[i] ^= key[8 + i];
    }
    Ok(block)
}

fn check_counter(counter: u32) -> DukptResult<()> {
    if counter == 0 || counter.count_ones() > 10 {
        return Err(DukptError::Counter {
            counter,
            max_bits: 10,
        });
    }
    Ok(())
}

fn check_bdk(bdk: &[u8]) -> DukptResult<()> {
    if bdk.len() != 16 {
        return Err(DukptError::KeyLength {
            what: "TDES DUKPT BDK",
            expected: "16",
            found: bdk.len(),
        });
    }
    Ok(())
}

fn xor_masked(bdk: &[u8]) -> Vec<u8> {
    bdk.iter().zip(&KEY_MASK).map(|(b, m)| b ^ m).collect()
}

fn xor_masked16(key: &[u8; 16]) -> [u8; 16] {
    let mut out = *key;
    for (b, m) in out.iter_mut().zip(&KEY_MASK) {
        *b ^= m;
    }
    out
}

fn right8(ksn: &[u8; 10]) -> [u8; 8] {
    let mut out = [0u8; 8];
    out.copy_from_slice(&ksn[2..]);
    out
}
