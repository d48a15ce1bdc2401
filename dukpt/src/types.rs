use core::fmt;
use core::str::FromStr;

use paycrypt_core::{ParseError, eq_ignore_ascii_case, trim_ascii};

/**
    Usage variants for legacy TDES working keys (X9.24-1).

    Each selects a fixed XOR mask applied to both halves of the
    transaction key; the data key additionally runs the one-way
    self-encryption step.
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyVariant {
    Pin,
    Mac,
    Data,
}

impl KeyVariant {
    pub const fn from_name(name: &[u8]) -> Option<Self> {
        let name = trim_ascii(name);
        match name.len() {
            3 if eq_ignore_ascii_case(name, b"pin") => Some(Self::Pin),
            3 if eq_ignore_ascii_case(name, b"mac") => Some(Self::Mac),
            4 if eq_ignore_ascii_case(name, b"data") => Some(Self::Data),
            _ => None,
        }
    }

    pub const fn to_name(self) -> &'static str {
        match self {
            Self::Pin => "PIN",
            Self::Mac => "MAC",
            Self::Data => "DATA",
        }
    }
}

impl fmt::Display for KeyVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_name())
    }
}

impl FromStr for KeyVariant {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s.as_bytes()).ok_or_else(|| ParseError {
            kind: "key variant",
            value: s.to_owned(),
        })
    }
}

/**
    Working-key usage indicators for AES DUKPT (X9.24-3 table of key
    usage values).
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyUsage {
    Pin,
    MacGeneration,
    MacVerification,
    MacBoth,
    DataEncrypt,
    DataDecrypt,
    DataBoth,
    KeyEncryption,
}

impl KeyUsage {
    /** The 16-bit usage indicator carried in derivation data. */
    pub const fn code(self) -> u16 {
        match self {
            Self::Pin => 0x1000,
            Self::MacGeneration => 0x2000,
            Self::MacVerification => 0x2001,
            Self::MacBoth => 0x2002,
            Self::DataEncrypt => 0x3000,
            Self::DataDecrypt => 0x3001,
            Self::DataBoth => 0x3002,
            Self::KeyEncryption => 0x0002,
        }
    }

    pub const fn from_name(name: &[u8]) -> Option<Self> {
        let name = trim_ascii(name);
        match name.len() {
            3 if eq_ignore_ascii_case(name, b"pin") => Some(Self::Pin),
            3 if eq_ignore_ascii_case(name, b"mac") => Some(Self::MacGeneration),
            3 if eq_ignore_ascii_case(name, b"kek") => Some(Self::KeyEncryption),
            4 if eq_ignore_ascii_case(name, b"data") => Some(Self::DataEncrypt),
            8 if eq_ignore_ascii_case(name, b"mac-both") => Some(Self::MacBoth),
            9 if eq_ignore_ascii_case(name, b"data-both") => Some(Self::DataBoth),
            10 if eq_ignore_ascii_case(name, b"mac-verify") => Some(Self::MacVerification),
            12 if eq_ignore_ascii_case(name, b"mac-generate") => Some(Self::MacGeneration),
            12 if eq_ignore_ascii_case(name, b"data-encrypt") => Some(Self::DataEncrypt),
            12 if eq_ignore_ascii_case(name, b"data-decrypt") => Some(Self::DataDecrypt),
            _ => None,
        }
    }

    pub const fn to_name(self) -> &'static str {
        match self {
            Self::Pin => "PIN",
            Self::MacGeneration => "MAC-GENERATE",
            Self::MacVerification => "MAC-VERIFY",
            Self::MacBoth => "MAC-BOTH",
            Self::DataEncrypt => "DATA-ENCRYPT",
            Self::DataDecrypt => "DATA-DECRYPT",
            Self::DataBoth => "DATA-BOTH",
            Self::KeyEncryption => "KEK",
        }
    }
}

impl fmt::Display for KeyUsage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_name())
    }
}

impl FromStr for KeyUsage {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s.as_bytes()).ok_or_else(|| ParseError {
            kind: "key usage",
            value: s.to_owned(),
        })
    }
}

/**
    Key algorithms for DUKPT working keys (X9.24-3 algorithm indicators).
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DukptKeyType {
    TwoKeyTdes,
    ThreeKeyTdes,
    Aes128,
    Aes192,
    Aes256,
}

impl DukptKeyType {
    /** Key length in bytes. */
    pub const fn key_len(self) -> usize {
        match self {
            Self::TwoKeyTdes | Self::Aes128 => 16,
            Self::ThreeKeyTdes | Self::Aes192 => 24,
            Self::Aes256 => 32,
        }
    }

    /** Key length in bits, as carried in derivation data. */
    pub const fn bits(self) -> u16 {
        (self.key_len() * 8) as u16
    }

    /** The 16-bit algorithm indicator carried in derivation data. */
    pub const fn code(self) -> u16 {
        match self {
            Self::TwoKeyTdes => 0x0000,
            Self::ThreeKeyTdes => 0x0001,
            Self::Aes128 => 0x0002,
            Self::Aes192 => 0x0003,
            Self::Aes256 => 0x0004,
        }
    }

    pub const fn from_name(name: &[u8]) -> Option<Self> {
        let name = trim_ascii(name);
        match name.len() {
            5 if eq_ignore_ascii_case(name, b"2tdea") => Some(Self::TwoKeyTdes),
            5 if eq_ignore_ascii_case(name, b"3tdea") => Some(Self::ThreeKeyTdes),
            6 if eq_ignore_ascii_case(name, b"aes128") => Some(Self::Aes128),
            6 if eq_ignore_ascii_case(name, b"aes192") => Some(Self::Aes192),
            6 if eq_ignore_ascii_case(name, b"aes256") => Some(Self::Aes256),
            7 if eq_ignore_ascii_case(name, b"aes-128") => Some(Self::Aes128),
            7 if eq_ignore_ascii_case(name, b"aes-192") => Some(Self::Aes192),
            7 if eq_ignore_ascii_case(name, b"aes-256") => Some(Self::Aes256),
            _ => None,
        }
    }

    pub const fn to_name(self) -> &'static str {
        match self {
            Self::TwoKeyTdes => "2TDEA",
            Self::ThreeKeyTdes => "3TDEA",
            Self::Aes128 => "AES-128",
            Self::Aes192 => "AES-192",
            Self::Aes256 => "AES-256",
        }
    }
}

impl fmt::Display for DukptKeyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_name())
    }
}

impl FromStr for DukptKeyType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s.as_bytes()).ok_or_else(|| ParseError {
            kind: "key type",
            value: s.to_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variant_names_round_trip() {
        for v in [KeyVariant::Pin, KeyVariant::Mac, KeyVariant::Data] {
            assert_eq!(v.to_name().parse::<KeyVariant>().unwrap(), v);
        }
        assert!("pek".parse::<KeyVariant>().is_err());
    }

    #[test]
    fn usage_names_round_trip() {
        for u in [
            KeyUsage::Pin,
            KeyUsage::MacGeneration,
            KeyUsage::MacVerification,
            KeyUsage::MacBoth,
            KeyUsage::DataEncrypt,
            KeyUsage::DataDecrypt,
            KeyUsage::DataBoth,
            KeyUsage::KeyEncryption,
        ] {
            assert_eq!(u.to_name().parse::<KeyUsage>().unwrap(), u);
        }
        assert_eq!("mac".parse::<KeyUsage>().unwrap(), KeyUsage::MacGeneration);
        assert_eq!("data".parse::<KeyUsage>().unwrap(), KeyUsage::DataEncrypt);
    }

    #[test]
    fn usage_codes_match_the_indicator_table() {
        assert_eq!(KeyUsage::Pin.code(), 0x1000);
        assert_eq!(KeyUsage::MacGeneration.code(), 0x2000);
        assert_eq!(KeyUsage::MacVerification.code(), 0x2001);
        assert_eq!(KeyUsage::DataEncrypt.code(), 0x3000);
        assert_eq!(KeyUsage::KeyEncryption.code(), 0x0002);
    }

    #[test]
    fn key_type_lengths_and_codes() {
        assert_eq!(DukptKeyType::TwoKeyTdes.key_len(), 16);
        assert_eq!(DukptKeyType::ThreeKeyTdes.key_len(), 24);
        assert_eq!(DukptKeyType::Aes128.bits(), 128);
        assert_eq!(DukptKeyType::Aes256.bits(), 256);
        assert_eq!(DukptKeyType::TwoKeyTdes.code(), 0x0000);
        assert_eq!(DukptKeyType::Aes128.code(), 0x0002);
        assert_eq!(DukptKeyType::Aes256.code(), 0x0004);
    }

    #[test]
    fn key_type_names_round_trip() {
        for k in [
            DukptKeyType::TwoKeyTdes,
            DukptKeyType::ThreeKeyTdes,
            DukptKeyType::Aes128,
            DukptKeyType::Aes192,
            DukptKeyType::Aes256,
        ] {
            assert_eq!(k.to_name().parse::<DukptKeyType>().unwrap(), k);
        }
        assert_eq!(
            "aes128".parse::<DukptKeyType>().unwrap(),
            DukptKeyType::Aes128
        );
    }
}
