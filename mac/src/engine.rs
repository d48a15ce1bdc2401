/*!
    MAC computation over a declared algorithm, padding and truncation.

    The CBC-MAC family shares one zero-IV chaining core; the algorithms
    differ in how the key splits and in the final-block transform. CMAC
    carries its own final-block rules and ignores the padding method.
*/

use paycrypt_core::{AesCipher, BlockCipher, DesCipher, TdesCipher};

use crate::algorithm::MacAlgorithm;
use crate::cmac;
use crate::error::{MacError, MacResult};
use crate::padding::PaddingMethod;

/**
    A MAC computation profile.

    [`MacContext::new`] fills in the common defaults, padding Method 1
    and an untruncated tag; callers needing the retail four-byte tag or
    bit-length padding set the fields directly.
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MacContext {
    pub algorithm: MacAlgorithm,
    pub padding: PaddingMethod,
    pub truncation: usize,
}

impl MacContext {
    pub fn new(algorithm: MacAlgorithm) -> Self {
        Self {
            algorithm,
            padding: PaddingMethod::Method1,
            truncation: algorithm.block_size(),
        }
    }

    /**
        MAC `data` under `key`.

        The key length is checked against the algorithm before any
        cipher work: 8 bytes for the single-DES algorithms, 16 for the
        two-key ISO 9797 ones, 16 or 24 for the TDES profiles and 16,
        24 or 32 for CMAC-AES. Every algorithm except the CMACs rejects
        an empty message.
    */
    pub fn compute(&self, key: &[u8], data: &[u8]) -> MacResult<Vec<u8>> {
        let block = self.algorithm.block_size();
        if self.truncation == 0 || self.truncation > block {
            return Err(MacError::Truncation {
                max: block,
                found: self.truncation,
            });
        }
        check_key(self.algorithm, key)?;

        let mut mac = match self.algorithm {
            MacAlgorithm::Iso9797Alg1 | MacAlgorithm::AnsiX99 => {
                let padded = self.padded(data)?;
                cbc_mac(&DesCipher::new(key)?, &padded)
            }
            MacAlgorithm::Iso9797Alg2 => {
                let padded = self.padded(data)?;
                let mut state = cbc_mac(&DesCipher::new(&key[..8])?, &padded);
                DesCipher::new(&key[8..])?.encrypt_block(&mut state);
                state
            }
            MacAlgorithm::Iso9797Alg3 | MacAlgorithm::AnsiX919 | MacAlgorithm::As2805 => {
                let padded = self.padded(data)?;
                let leading = DesCipher::new(&key[..8])?;
                let mut state = cbc_mac(&leading, &padded);
                DesCipher::new(&key[8..])?.decrypt_block(&mut state);
                leading.encrypt_block(&mut state);
                state
            }
            MacAlgorithm::TdesCbcMac => {
                let padded = self.padded(data)?;
                cbc_mac(&TdesCipher::new(key)?, &padded)
            }
            MacAlgorithm::CmacTdes => cmac::compute(&TdesCipher::new(key)?, data),
            MacAlgorithm::CmacAes => cmac::compute(&AesCipher::new(key)?, data),
        };
        mac.truncate(self.truncation);
        Ok(mac)
    }

    fn padded(&self, data: &[u8]) -> MacResult<Vec<u8>> {
        if data.is_empty() {
            return Err(MacError::EmptyData);
        }
        Ok(self.padding.pad(data, self.algorithm.block_size()))
    }
}

/** Zero-IV CBC over already-padded data; the last state is the MAC. */
fn cbc_mac(cipher: &dyn BlockCipher, padded: &[u8]) -> Vec<u8> {
    let mut state = vec![0u8; cipher.block_size()];
    for chunk in padded.chunks(cipher.block_size()) {
        for (s, c) in state.iter_mut().zip(chunk) {
            *s ^= c;
        }
        cipher.encrypt_block(&mut state);
    }
    state
}

fn check_key(algorithm: MacAlgorithm, key: &[u8]) -> MacResult<()> {
    let (ok, expected) = match algorithm {
        MacAlgorithm::Iso9797Alg1 | MacAlgorithm::AnsiX99 => (key.len() == 8, "8"),
        MacAlgorithm::Iso9797Alg2
        | MacAlgorithm::Iso9797Alg3
        | MacAlgorithm::AnsiX919
        | MacAlgorithm::As2805 => (key.len() == 16, "16"),
        MacAlgorithm::TdesCbcMac | MacAlgorithm::CmacTdes => {
            (matches!(key.len(), 16 | 24), "16 or 24")
        }
        MacAlgorithm::CmacAes => (matches!(key.len(), 16 | 24 | 32), "16, 24 or 32"),
    };
    if ok {
        Ok(())
    } else {
        Err(MacError::KeyLength {
            algorithm: algorithm.to_name(),
            expected,
            found: key.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ::cmac::{Cmac, Mac};
    use hex_literal::hex;

    const RETAIL_KEY: [u8; 16] = hex!("7962D9ECE03D1ACD4C76089DCE131543");

    fn retail(padding: PaddingMethod) -> MacContext {
        MacContext {
            algorithm: MacAlgorithm::Iso9797Alg3,
            padding,
            truncation: 8,
        }
    }

    // ICAO 9303-11 appendix D worked examples (retail MAC, padding
    // method 2).
    #[test]
    fn retail_mac_matches_the_icao_worked_examples() {
        let ctx = retail(PaddingMethod::Method2);
        let mac = ctx
            .compute(
                &RETAIL_KEY,
                &hex!("72C29C2371CC9BDB65B779B8E8D37B29ECC154AA56A8799FAE2F498F76ED92F2"),
            )
            .unwrap();
        assert_eq!(mac, hex!("5F1448EEA8AD90A7"));

        let mac = ctx
            .compute(
                &RETAIL_KEY,
                &hex!("46B9342A41396CD7386BF5803104D7CEDC122B9132139BAF2EEDC94EE178534F"),
            )
            .unwrap();
        assert_eq!(mac, hex!("2F2D235D074D7449"));

        let key = hex!("F1CB1F1FB5ADF208806B89DC579DC1F8");
        let mac = ctx
            .compute(
                &key,
                &hex!("887022120C06C2270CA4020C800000008709016375432908C044F6"),
            )
            .unwrap();
        assert_eq!(mac, hex!("BF8B92D635FF24F8"));
    }

    #[test]
    fn x919_and_as2805_share_the_retail_computation() {
        let data = hex!("0123456789ABCDEF1122334455667788");
        let alg3 = MacContext::new(MacAlgorithm::Iso9797Alg3)
            .compute(&RETAIL_KEY, &data)
            .unwrap();
        for algorithm in [MacAlgorithm::AnsiX919, MacAlgorithm::As2805] {
            assert_eq!(
                MacContext::new(algorithm)
                    .compute(&RETAIL_KEY, &data)
                    .unwrap(),
                alg3
            );
        }
    }

    #[test]
    fn x99_computes_as_algorithm_1() {
        let key = hex!("0123456789ABCDEF");
        let data = hex!("AABBCCDDEEFF00112233");
        assert_eq!(
            MacContext::new(MacAlgorithm::AnsiX99)
                .compute(&key, &data)
                .unwrap(),
            MacContext::new(MacAlgorithm::Iso9797Alg1)
                .compute(&key, &data)
                .unwrap()
        );
    }

    #[test]
    fn equal_halves_degenerate_to_algorithm_1() {
        // With K2 == K1 the final decrypt/encrypt cancels out.
        let half = hex!("0123456789ABCDEF");
        let key = hex!("0123456789ABCDEF0123456789ABCDEF");
        let data = hex!("112233445566778899AABB");
        assert_eq!(
            MacContext::new(MacAlgorithm::Iso9797Alg3)
                .compute(&key, &data)
                .unwrap(),
            MacContext::new(MacAlgorithm::Iso9797Alg1)
                .compute(&half, &data)
                .unwrap()
        );
    }

    #[test]
    fn algorithm_2_recrypts_the_algorithm_1_output() {
        let data = hex!("00112233445566778899AABBCCDDEEFF0011");
        let alg2 = MacContext::new(MacAlgorithm::Iso9797Alg2)
            .compute(&RETAIL_KEY, &data)
            .unwrap();

        let mut expected = MacContext::new(MacAlgorithm::Iso9797Alg1)
            .compute(&RETAIL_KEY[..8], &data)
            .unwrap();
        DesCipher::new(&RETAIL_KEY[8..])
            .unwrap()
            .encrypt_block(&mut expected);
        assert_eq!(alg2, expected);
    }

    #[test]
    fn single_block_retail_equals_tdes_ecb() {
        let data = hex!("0011223344556677");
        let mut block = data;
        TdesCipher::new(&RETAIL_KEY)
            .unwrap()
            .encrypt_block(&mut block);

        assert_eq!(
            MacContext::new(MacAlgorithm::Iso9797Alg3)
                .compute(&RETAIL_KEY, &data)
                .unwrap(),
            block
        );
        assert_eq!(
            MacContext::new(MacAlgorithm::TdesCbcMac)
                .compute(&RETAIL_KEY, &data)
                .unwrap(),
            block
        );
    }

    #[test]
    fn cmac_matches_the_rustcrypto_implementation() {
        let data = b"An arbitrary differential test message";

        let key = hex!("2B7E151628AED2A6ABF7158809CF4F3C");
        let ours = MacContext::new(MacAlgorithm::CmacAes)
            .compute(&key, data)
            .unwrap();
        let mut reference = <Cmac<aes::Aes128> as Mac>::new_from_slice(&key).unwrap();
        reference.update(data);
        assert_eq!(ours, reference.finalize().into_bytes().to_vec());

        let key = hex!("0123456789ABCDEF23456789ABCDEF01456789ABCDEF0123");
        let ours = MacContext::new(MacAlgorithm::CmacTdes)
            .compute(&key, data)
            .unwrap();
        let mut reference = <Cmac<des::TdesEde3> as Mac>::new_from_slice(&key).unwrap();
        reference.update(data);
        assert_eq!(ours, reference.finalize().into_bytes().to_vec());

        let key = hex!("0123456789ABCDEF23456789ABCDEF01");
        let ours = MacContext::new(MacAlgorithm::CmacTdes)
            .compute(&key, data)
            .unwrap();
        let mut reference = <Cmac<des::TdesEde2> as Mac>::new_from_slice(&key).unwrap();
        reference.update(data);
        assert_eq!(ours, reference.finalize().into_bytes().to_vec());
    }

    #[test]
    fn truncation_takes_the_leading_bytes() {
        let ctx = MacContext {
            algorithm: MacAlgorithm::Iso9797Alg3,
            padding: PaddingMethod::Method2,
            truncation: 4,
        };
        let mac = ctx
            .compute(
                &RETAIL_KEY,
                &hex!("72C29C2371CC9BDB65B779B8E8D37B29ECC154AA56A8799FAE2F498F76ED92F2"),
            )
            .unwrap();
        assert_eq!(mac, hex!("5F1448EE"));
    }

    #[test]
    fn truncation_is_bounded_by_the_block() {
        let mut ctx = MacContext::new(MacAlgorithm::Iso9797Alg1);
        ctx.truncation = 0;
        assert_eq!(
            ctx.compute(&hex!("0123456789ABCDEF"), &[0u8; 8]).unwrap_err(),
            MacError::Truncation { max: 8, found: 0 }
        );
        ctx.truncation = 9;
        assert_eq!(
            ctx.compute(&hex!("0123456789ABCDEF"), &[0u8; 8]).unwrap_err(),
            MacError::Truncation { max: 8, found: 9 }
        );

        // A 96-bit AES-CMAC tag is just truncation 12.
        let ctx = MacContext {
            algorithm: MacAlgorithm::CmacAes,
            padding: PaddingMethod::Method1,
            truncation: 12,
        };
        let mac = ctx
            .compute(&hex!("2B7E151628AED2A6ABF7158809CF4F3C"), &[])
            .unwrap();
        assert_eq!(mac, hex!("BB1D6929E95937287FA37D12"));
    }

    #[test]
    fn empty_data_is_rejected_outside_cmac() {
        for (algorithm, key_len) in [
            (MacAlgorithm::Iso9797Alg1, 8),
            (MacAlgorithm::Iso9797Alg2, 16),
            (MacAlgorithm::Iso9797Alg3, 16),
            (MacAlgorithm::AnsiX99, 8),
            (MacAlgorithm::AnsiX919, 16),
            (MacAlgorithm::TdesCbcMac, 16),
            (MacAlgorithm::As2805, 16),
        ] {
            let key = vec![0x45u8; key_len];
            assert_eq!(
                MacContext::new(algorithm).compute(&key, &[]).unwrap_err(),
                MacError::EmptyData,
                "{algorithm}"
            );
        }
    }

    #[test]
    fn key_lengths_are_policed() {
        let err = MacContext::new(MacAlgorithm::Iso9797Alg1)
            .compute(&[0u8; 16], &[1, 2, 3])
            .unwrap_err();
        assert_eq!(
            err,
            MacError::KeyLength {
                algorithm: "ISO9797-ALG1",
                expected: "8",
                found: 16
            }
        );

        let err = MacContext::new(MacAlgorithm::Iso9797Alg3)
            .compute(&[0u8; 8], &[1, 2, 3])
            .unwrap_err();
        assert_eq!(
            err,
            MacError::KeyLength {
                algorithm: "ISO9797-ALG3",
                expected: "16",
                found: 8
            }
        );

        let err = MacContext::new(MacAlgorithm::CmacAes)
            .compute(&[0u8; 20], &[1, 2, 3])
            .unwrap_err();
        assert_eq!(
            err,
            MacError::KeyLength {
                algorithm: "CMAC-AES",
                expected: "16, 24 or 32",
                found: 20
            }
        );
    }

    #[test]
    fn padding_method_changes_the_mac() {
        let data = hex!("0011223344556677");
        let method1 = retail(PaddingMethod::Method1)
            .compute(&RETAIL_KEY, &data)
            .unwrap();
        let method2 = retail(PaddingMethod::Method2)
            .compute(&RETAIL_KEY, &data)
            .unwrap();
        let method3 = retail(PaddingMethod::Method3)
            .compute(&RETAIL_KEY, &data)
            .unwrap();
        assert_ne!(method1, method2);
        assert_ne!(method1, method3);
        assert_ne!(method2, method3);
    }
}
