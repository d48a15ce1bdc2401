/*!
    Single-block cipher seam over the RustCrypto DES/TDES/AES primitives.

    Every engine in this workspace chains raw block operations itself (CBC
    runs for MACs, key derivation ladders, CVV chains), so the shared
    interface is one block at a time with no mode or padding attached.
*/

use aes::cipher::{BlockDecrypt, BlockEncrypt, KeyInit, generic_array::GenericArray};
use aes::{Aes128, Aes192, Aes256};
use des::{Des, TdesEde2, TdesEde3};

use crate::error::CipherError;

/**
    Uniform single-block encrypt/decrypt interface.

    `block` slices passed to `encrypt_block`/`decrypt_block` must be exactly
    `block_size` bytes; anything else is a caller bug and panics.
*/
pub trait BlockCipher {
    /** Block size in bytes: 8 for DES/TDES, 16 for AES. */
    fn block_size(&self) -> usize;

    /** Encrypt one block in place. */
    fn encrypt_block(&self, block: &mut [u8]);

    /** Decrypt one block in place. */
    fn decrypt_block(&self, block: &mut [u8]);
}

/**
    Single-length DES (8-byte key).
*/
#[derive(Debug)]
pub struct DesCipher(Des);

impl DesCipher {
    pub fn new(key: &[u8]) -> Result<Self, CipherError> {
        if key.len() != 8 {
            return Err(CipherError::KeyLength {
                cipher: "DES",
                expected: "8",
                found: key.len(),
            });
        }
        Ok(Self(Des::new(GenericArray::from_slice(key))))
    }
}

impl BlockCipher for DesCipher {
    fn block_size(&self) -> usize {
        8
    }

    fn encrypt_block(&self, block: &mut [u8]) {
        self.0.encrypt_block(GenericArray::from_mut_slice(block));
    }

    fn decrypt_block(&self, block: &mut [u8]) {
        self.0.decrypt_block(GenericArray::from_mut_slice(block));
    }
}

#[derive(Debug)]
enum Tdes {
    Ede2(TdesEde2),
    Ede3(TdesEde3),
}

/**
    Triple DES (EDE), two-key or three-key by key length (16 or 24 bytes).
*/
#[derive(Debug)]
pub struct TdesCipher(Tdes);

impl TdesCipher {
    pub fn new(key: &[u8]) -> Result<Self, CipherError> {
        match key.len() {
            16 => Ok(Self(Tdes::Ede2(TdesEde2::new(GenericArray::from_slice(
                key,
            ))))),
            24 => Ok(Self(Tdes::Ede3(TdesEde3::new(GenericArray::from_slice(
                key,
            ))))),
            n => Err(CipherError::KeyLength {
                cipher: "TDES",
                expected: "16 or 24",
                found: n,
            }),
        }
    }
}

impl BlockCipher for TdesCipher {
    fn block_size(&self) -> usize {
        8
    }

    fn encrypt_block(&self, block: &mut [u8]) {
        let block = GenericArray::from_mut_slice(block);
        match &self.0 {
            Tdes::Ede2(c) => c.encrypt_block(block),
            Tdes::Ede3(c) => c.encrypt_block(block),
        }
    }

    fn decrypt_block(&self, block: &mut [u8]) {
        let block = GenericArray::from_mut_slice(block);
        match &self.0 {
            Tdes::Ede2(c) => c.decrypt_block(block),
            Tdes::Ede3(c) => c.decrypt_block(block),
        }
    }
}

#[derive(Debug)]
enum Aes {
    Aes128(Aes128),
    Aes192(Aes192),
    Aes256(Aes256),
}

/**
    AES-128/192/256 by key length (16, 24 or 32 bytes).
*/
pub struct AesCipher(Aes);

impl AesCipher {
    pub fn new(key: &[u8]) -> Result<Self, CipherError> {
        match key.len() {
            16 => Ok(Self(Aes::Aes128(Aes128::new(GenericArray::from_slice(
                key,
            ))))),
            24 => Ok(Self(Aes::Aes192(Aes192::new(GenericArray::from_slice(
                key,
            ))))),
            32 => Ok(Self(Aes::Aes256(Aes256::new(GenericArray::from_slice(
                key,
            ))))),
            n => Err(CipherError::KeyLength {
                cipher: "AES",
                expected: "16, 24 or 32",
                found: n,
            }),
        }
    }
}

impl BlockCipher for AesCipher {
    fn block_size(&self) -> usize {
        16
    }

    fn encrypt_block(&self, block: &mut [u8]) {
        let block = GenericArray::from_mut_slice(block);
        match &self.0 {
            Aes::Aes128(c) => c.encrypt_block(block),
            Aes::Aes192(c) => c.encrypt_block(block),
            Aes::Aes256(c) => c.encrypt_block(block),
        }
    }

    fn decrypt_block(&self, block: &mut [u8]) {
        let block = GenericArray::from_mut_slice(block);
        match &self.0 {
            Aes::Aes128(c) => c.decrypt_block(block),
            Aes::Aes192(c) => c.decrypt_block(block),
            Aes::Aes256(c) => c.decrypt_block(block),
        }
    }
}

/**
    Key check value: leftmost `len` bytes of the all-zero block encrypted
    under the key. Conventionally 3 bytes.
*/
pub fn key_check_value(cipher: &dyn BlockCipher, len: usize) -> Vec<u8> {
    let mut block = vec![0u8; cipher.block_size()];
    cipher.encrypt_block(&mut block);
    block.truncate(len.min(block.len()));
    block
}

/**
    Force odd parity on every byte of a DES key (bit 0 is the parity bit).
*/
pub fn adjust_des_parity(key: &mut [u8]) {
    for b in key.iter_mut() {
        let ones = (*b & 0xFE).count_ones();
        *b = (*b & 0xFE) | u8::from(ones % 2 == 0);
    }
}
