use core::fmt;
use core::str::FromStr;

use paycrypt_core::{ParseError, eq_ignore_ascii_case, trim_ascii};

/**
    The supported MAC algorithms.

    The CBC-MAC family differs only in key splitting and in what happens
    to the final block:

    - `Iso9797Alg1`: single-DES CBC-MAC, last ciphertext block out.
    - `Iso9797Alg2`: as Algorithm 1 under K1, output re-encrypted with K2.
    - `Iso9797Alg3`: as Algorithm 1 under K1, output decrypted with K2
      and re-encrypted with K1 (the retail MAC).
    - `AnsiX99`: the wholesale MAC; computes as Algorithm 1.
    - `AnsiX919`: the retail MAC; computes as Algorithm 3.
    - `TdesCbcMac`: CBC-MAC running every block through full TDES.
    - `As2805`: AS2805.4.1, computes as the retail MAC.
    - `CmacTdes` / `CmacAes`: NIST SP 800-38B CMAC over TDES or AES.
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MacAlgorithm {
    Iso9797Alg1,
    Iso9797Alg2,
    Iso9797Alg3,
    AnsiX99,
    AnsiX919,
    TdesCbcMac,
    As2805,
    CmacTdes,
    CmacAes,
}

impl MacAlgorithm {
    /** Cipher block width, which caps the truncation length. */
    pub const fn block_size(self) -> usize {
        match self {
            Self::CmacAes => 16,
            _ => 8,
        }
    }

    pub const fn from_name(name: &[u8]) -> Option<Self> {
        let name = trim_ascii(name);
        match name.len() {
            3 if eq_ignore_ascii_case(name, b"x99") => Some(Self::AnsiX99),
            4 if eq_ignore_ascii_case(name, b"alg1") => Some(Self::Iso9797Alg1),
            4 if eq_ignore_ascii_case(name, b"alg2") => Some(Self::Iso9797Alg2),
            4 if eq_ignore_ascii_case(name, b"alg3") => Some(Self::Iso9797Alg3),
            4 if eq_ignore_ascii_case(name, b"x9.9") => Some(Self::AnsiX99),
            4 if eq_ignore_ascii_case(name, b"x919") => Some(Self::AnsiX919),
            4 if eq_ignore_ascii_case(name, b"cmac") => Some(Self::CmacAes),
            5 if eq_ignore_ascii_case(name, b"x9.19") => Some(Self::AnsiX919),
            6 if eq_ignore_ascii_case(name, b"retail") => Some(Self::AnsiX919),
            6 if eq_ignore_ascii_case(name, b"as2805") => Some(Self::As2805),
            8 if eq_ignore_ascii_case(name, b"tdes-cbc") => Some(Self::TdesCbcMac),
            8 if eq_ignore_ascii_case(name, b"cmac-aes") => Some(Self::CmacAes),
            8 if eq_ignore_ascii_case(name, b"aes-cmac") => Some(Self::CmacAes),
            9 if eq_ignore_ascii_case(name, b"cmac-tdes") => Some(Self::CmacTdes),
            10 if eq_ignore_ascii_case(name, b"as2805.4.1") => Some(Self::As2805),
            12 if eq_ignore_ascii_case(name, b"iso9797-alg1") => Some(Self::Iso9797Alg1),
            12 if eq_ignore_ascii_case(name, b"iso9797-alg2") => Some(Self::Iso9797Alg2),
            12 if eq_ignore_ascii_case(name, b"iso9797-alg3") => Some(Self::Iso9797Alg3),
            12 if eq_ignore_ascii_case(name, b"tdes-cbc-mac") => Some(Self::TdesCbcMac),
            _ => None,
        }
    }

    pub const fn to_name(self) -> &'static str {
        match self {
            Self::Iso9797Alg1 => "ISO9797-ALG1",
            Self::Iso9797Alg2 => "ISO9797-ALG2",
            Self::Iso9797Alg3 => "ISO9797-ALG3",
            Self::AnsiX99 => "X9.9",
            Self::AnsiX919 => "X9.19",
            Self::TdesCbcMac => "TDES-CBC-MAC",
            Self::As2805 => "AS2805.4.1",
            Self::CmacTdes => "CMAC-TDES",
            Self::CmacAes => "CMAC-AES",
        }
    }
}

impl fmt::Display for MacAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_name())
    }
}

impl FromStr for MacAlgorithm {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s.as_bytes()).ok_or_else(|| ParseError {
            kind: "MAC algorithm",
            value: s.to_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for algorithm in [
            MacAlgorithm::Iso9797Alg1,
            MacAlgorithm::Iso9797Alg2,
            MacAlgorithm::Iso9797Alg3,
            MacAlgorithm::AnsiX99,
            MacAlgorithm::AnsiX919,
            MacAlgorithm::TdesCbcMac,
            MacAlgorithm::As2805,
            MacAlgorithm::CmacTdes,
            MacAlgorithm::CmacAes,
        ] {
            assert_eq!(
                algorithm.to_name().parse::<MacAlgorithm>().unwrap(),
                algorithm
            );
        }
    }

    #[test]
    fn aliases() {
        assert_eq!(
            "retail".parse::<MacAlgorithm>().unwrap(),
            MacAlgorithm::AnsiX919
        );
        assert_eq!(
            "cmac".parse::<MacAlgorithm>().unwrap(),
            MacAlgorithm::CmacAes
        );
        assert_eq!(
            " Alg3 ".parse::<MacAlgorithm>().unwrap(),
            MacAlgorithm::Iso9797Alg3
        );
        assert_eq!(
            "as2805".parse::<MacAlgorithm>().unwrap(),
            MacAlgorithm::As2805
        );
    }

    #[test]
    fn unknown_name_is_an_error() {
        let err = "alg4".parse::<MacAlgorithm>().unwrap_err();
        assert_eq!(err.kind, "MAC algorithm");
        assert_eq!(err.value, "alg4");
    }

    #[test]
    fn block_sizes() {
        assert_eq!(MacAlgorithm::Iso9797Alg1.block_size(), 8);
        assert_eq!(MacAlgorithm::CmacTdes.block_size(), 8);
        assert_eq!(MacAlgorithm::CmacAes.block_size(), 16);
    }
}
