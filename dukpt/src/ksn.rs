use core::fmt;
use core::str::FromStr;

use paycrypt_core::parse_hex;

use crate::error::DukptError;

/**
    Legacy 80-bit key serial number (X9.24-1).

    The rightmost 21 bits are the transaction counter; everything to their
    left identifies the key set and device and stays fixed for the life of
    the injected key.
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ksn([u8; 10]);

impl Ksn {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, DukptError> {
        let bytes: [u8; 10] = bytes.try_into().map_err(|_| DukptError::KsnLength {
            expected: 10,
            found: bytes.len(),
        })?;
        Ok(Self(bytes))
    }

    pub fn from_hex(s: &str) -> Result<Self, DukptError> {
        Self::from_bytes(&parse_hex(s.trim())?)
    }

    pub const fn as_bytes(&self) -> &[u8; 10] {
        &self.0
    }

    /** The 21-bit transaction counter. */
    pub fn counter(&self) -> u32 {
        (u32::from(self.0[7] & 0x1F) << 16) | (u32::from(self.0[8]) << 8) | u32::from(self.0[9])
    }

    /** The KSN with its counter bits cleared. */
    pub fn base(&self) -> [u8; 10] {
        let mut out = self.0;
        out[7] &= 0xE0;
        out[8] = 0;
        out[9] = 0;
        out
    }

    /** `base()` with `counter` folded back in (used during the key walk). */
    pub(crate) fn with_counter(&self, counter: u32) -> [u8; 10] {
        let mut out = self.base();
        out[7] |= ((counter >> 16) & 0x1F) as u8;
        out[8] = ((counter >> 8) & 0xFF) as u8;
        out[9] = (counter & 0xFF) as u8;
        out
    }
}

impl fmt::Display for Ksn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in self.0 {
            write!(f, "{b:02X}")?;
        }
        Ok(())
    }
}

impl FromStr for Ksn {
    type Err = DukptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

/**
    96-bit key serial number for AES DUKPT (X9.24-3): an 8-byte initial
    key ID followed by a 32-bit big-endian transaction counter.
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AesKsn([u8; 12]);

impl AesKsn {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, DukptError> {
        let bytes: [u8; 12] = bytes.try_into().map_err(|_| DukptError::KsnLength {
            expected: 12,
            found: bytes.len(),
        })?;
        Ok(Self(bytes))
    }

    pub fn from_hex(s: &str) -> Result<Self, DukptError> {
        Self::from_bytes(&parse_hex(s.trim())?)
    }

    pub const fn as_bytes(&self) -> &[u8; 12] {
        &self.0
    }

    /** The fixed 8-byte initial key ID. */
    pub const fn initial_key_id(&self) -> [u8; 8] {
        [
            self.0[0], self.0[1], self.0[2], self.0[3], self.0[4], self.0[5], self.0[6], self.0[7],
        ]
    }

    /** The 32-bit transaction counter. */
    pub const fn counter(&self) -> u32 {
        u32::from_be_bytes([self.0[8], self.0[9], self.0[10], self.0[11]])
    }
}

impl fmt::Display for AesKsn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in self.0 {
            write!(f, "{b:02X}")?;
        }
        Ok(())
    }
}

impl FromStr for AesKsn {
    type Err = DukptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}
