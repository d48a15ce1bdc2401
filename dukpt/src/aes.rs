/*!
    AES DUKPT (ANSI X9.24-3).

    Every key in the hierarchy comes out of the same key derivation
    function: AES-ECB over a 16-byte derivation-data block carrying a
    version, a block counter, the key usage, the algorithm of the key
    being derived, its length in bits and an 8-byte context. The initial
    key binds the full initial key ID; intermediate and working keys bind
    the rightmost four ID bytes plus the transaction counter.
*/

use paycrypt_core::{AesCipher, BlockCipher};

use crate::error::{DukptError, DukptResult};
use crate::ksn::AesKsn;
use crate::types::{DukptKeyType, KeyUsage};

const VERSION: u8 = 0x01;
const USAGE_DERIVATION: u16 = 0x8000;
const USAGE_INITIAL_KEY: u16 = 0x8001;

/**
    Derive the initial key loaded into a device, from the BDK and the
    initial key ID half of the KSN.
*/
pub fn derive_initial_key(bdk: &[u8], ksn: &AesKsn) -> DukptResult<Vec<u8>> {
    let kind = bdk_type(bdk)?;
    let mut data = derivation_data(USAGE_INITIAL_KEY, kind, &ksn.initial_key_id());
    derive_key(bdk, kind, &mut data)
}

/**
    Derive the working key for one transaction.

    `usage` and `target` describe the key handed out; the intermediate
    walk always stays at the BDK's own strength.
*/
pub fn derive_working_key(
    bdk: &[u8],
    ksn: &AesKsn,
    usage: KeyUsage,
    target: DukptKeyType,
) -> DukptResult<Vec<u8>> {
    check_counter(ksn.counter())?;
    let kind = bdk_type(bdk)?;
    let intermediate = intermediate_key(bdk, kind, ksn)?;
    let mut data = derivation_data(usage.code(), target, &context(ksn, ksn.counter()));
    derive_key(&intermediate, target, &mut data)
}

/**
    Walk the transaction counter bits, highest first, deriving one
    intermediate key per set bit.
*/
fn intermediate_key(bdk: &[u8], kind: DukptKeyType, ksn: &AesKsn) -> DukptResult<Vec<u8>> {
    let counter = ksn.counter();
    let mut key = derive_initial_key(bdk, ksn)?;
    let mut acc = 0u32;
    let mut bit = 1u32 << 31;
    while bit != 0 {
        if counter & bit != 0 {
            acc |= bit;
            let mut data = derivation_data(USAGE_DERIVATION, kind, &context(ksn, acc));
            key = derive_key(&key, kind, &mut data)?;
        }
        bit >>= 1;
    }
    Ok(key)
}

/** Rightmost four bytes of the initial key ID followed by the counter. */
fn context(ksn: &AesKsn, counter: u32) -> [u8; 8] {
    let id = ksn.initial_key_id();
    let mut out = [0u8; 8];
    out[..4].copy_from_slice(&id[4..]);
    out[4..].copy_from_slice(&counter.to_be_bytes());
    out
}

fn derivation_data(usage: u16, target: DukptKeyType, context: &[u8; 8]) -> [u8; 16] {
    let mut data = [0u8; 16];
    data[0] = VERSION;
    data[1] = 1;
    data[2..4].copy_from_slice(&usage.to_be_bytes());
    data[4..6].copy_from_slice(&target.code().to_be_bytes());
    data[6..8].copy_from_slice(&target.bits().to_be_bytes());
    data[8..].copy_from_slice(context);
    data
}

/**
    The key derivation function itself: encrypt the derivation data under
    the parent key once per 16-byte block of output, bumping the block
    counter, and truncate to the target length.
*/
fn derive_key(parent: &[u8], target: DukptKeyType, data: &mut [u8; 16]) -> DukptResult<Vec<u8>> {
    let cipher = AesCipher::new(parent)?;
    let blocks = target.key_len().div_ceil(16);
    let mut out = Vec::with_capacity(blocks * 16);
    for i in 1..=blocks {
        data[1] = i as u8;
        let mut block = *data;
        cipher.encrypt_block(&mut block);
        out.extend_from_slice(&block);
    }
    out.truncate(target.key_len());
    Ok(out)
}

/** Devices stop deriving once the counter carries sixteen set bits. */
fn check_counter(counter: u32) -> DukptResult<()> {
    if counter == 0 || counter.count_ones() > 16 {
        return Err(DukptError::Counter {
            counter,
            max_bits: 16,
        });
    }
    Ok(())
}

fn bdk_type(bdk: &[u8]) -> DukptResult<DukptKeyType> {
    match bdk.len() {
        16 => Ok(DukptKeyType::Aes128),
        24 => Ok(DukptKeyType::Aes192),
        32 => Ok(DukptKeyType::Aes256),
        found => Err(DukptError::KeyLength {
            what: "AES DUKPT BDK",
            expected: "16, 24 or 32",
            found,
        }),
    }
}
