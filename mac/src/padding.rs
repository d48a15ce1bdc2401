use core::fmt;
use core::str::FromStr;

use paycrypt_core::{ParseError, eq_ignore_ascii_case, trim_ascii};

/**
    ISO 9797-1 padding methods for the CBC-MAC family.

    - Method 1: right-pad with zero bytes up to the block boundary; a
      message already on the boundary gains nothing.
    - Method 2: always append a single `80` byte, then zero bytes.
    - Method 3: prefix one block carrying the big-endian bit length of
      the unpadded message, then pad the message per Method 1.

    CMAC defines its own final-block treatment and ignores this choice.
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaddingMethod {
    Method1,
    Method2,
    Method3,
}

impl PaddingMethod {
    /** Pad `data` out to a multiple of `block` bytes. */
    pub fn pad(self, data: &[u8], block: usize) -> Vec<u8> {
        match self {
            Self::Method1 => {
                let mut out = data.to_vec();
                out.resize(data.len().div_ceil(block).max(1) * block, 0);
                out
            }
            Self::Method2 => {
                let mut out = data.to_vec();
                out.push(0x80);
                out.resize(out.len().div_ceil(block) * block, 0);
                out
            }
            Self::Method3 => {
                let bits = (data.len() as u64) * 8;
                let mut out = vec![0u8; block];
                out[block - 8..].copy_from_slice(&bits.to_be_bytes());
                out.extend_from_slice(data);
                out.resize(out.len().div_ceil(block) * block, 0);
                out
            }
        }
    }

    pub const fn from_name(name: &[u8]) -> Option<Self> {
        let name = trim_ascii(name);
        match name.len() {
            1 if eq_ignore_ascii_case(name, b"1") => Some(Self::Method1),
            1 if eq_ignore_ascii_case(name, b"2") => Some(Self::Method2),
            1 if eq_ignore_ascii_case(name, b"3") => Some(Self::Method3),
            8 if eq_ignore_ascii_case(name, b"method-1") => Some(Self::Method1),
            8 if eq_ignore_ascii_case(name, b"method-2") => Some(Self::Method2),
            8 if eq_ignore_ascii_case(name, b"method-3") => Some(Self::Method3),
            _ => None,
        }
    }

    pub const fn to_name(self) -> &'static str {
        match self {
            Self::Method1 => "METHOD-1",
            Self::Method2 => "METHOD-2",
            Self::Method3 => "METHOD-3",
        }
    }
}

impl fmt::Display for PaddingMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_name())
    }
}

impl FromStr for PaddingMethod {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s.as_bytes()).ok_or_else(|| ParseError {
            kind: "padding method",
            value: s.to_owned(),
        })
    }
}
