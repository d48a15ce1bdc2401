use anyhow::{Context, Result};
use clap::Args;

use paycrypt_core::{AesCipher, TdesCipher, key_check_value, parse_hex};
use paycrypt_dukpt::{AesKsn, DukptKeyType, KeyUsage, KeyVariant, Ksn};

/**
    Derive the working key for one transaction.
*/
#[derive(Args)]
pub struct WorkingKeyCommand {
    /**
        Base derivation key in hex.
    */
    #[arg(short, long)]
    bdk: String,

    /**
        Key serial number, transaction counter included: 20 hex digits
        (TDES) or 24 (AES).
    */
    #[arg(short, long)]
    ksn: String,

    /**
        TDES usage variant: pin, mac or data. Ignored for AES KSNs.
    */
    #[arg(short, long, default_value = "pin")]
    variant: KeyVariant,

    /**
        AES key usage: pin, mac-generate, mac-verify, mac-both,
        data-encrypt, data-decrypt, data-both or kek. Ignored for
        TDES KSNs.
    */
    #[arg(short, long, default_value = "pin")]
    usage: KeyUsage,

    /**
        AES working key algorithm: 2tdea, 3tdea, aes-128, aes-192 or
        aes-256. Ignored for TDES KSNs.
    */
    #[arg(short = 't', long, default_value = "aes-128")]
    key_type: DukptKeyType,
}

impl WorkingKeyCommand {
    pub fn run(self) -> Result<()> {
        let bdk = parse_hex(&self.bdk).context("invalid BDK")?;

        if self.ksn.trim().len() == 24 {
            let ksn: AesKsn = self.ksn.parse().context("invalid KSN")?;
            let key =
                paycrypt_dukpt::aes::derive_working_key(&bdk, &ksn, self.usage, self.key_type)
                    .context("working key derivation failed")?;
            let kcv = match self.key_type {
                DukptKeyType::TwoKeyTdes | DukptKeyType::ThreeKeyTdes => {
                    key_check_value(&TdesCipher::new(&key)?, 3)
                }
                _ => key_check_value(&AesCipher::new(&key)?, 3),
            };

            eprintln!(
                "AES DUKPT {} {} key, counter {:#X}",
                self.key_type,
                self.usage,
                ksn.counter()
            );
            println!("Key: {}", hex::encode_upper(&key));
            println!("KCV: {}", hex::encode_upper(kcv));
        } else {
            let ksn: Ksn = self.ksn.parse().context("invalid KSN")?;
            let key = paycrypt_dukpt::tdes::derive_working_key(&bdk, &ksn, self.variant)
                .context("working key derivation failed")?;
            let kcv = key_check_value(&TdesCipher::new(&key)?, 3);

            eprintln!(
                "TDES DUKPT {} key, counter {:#X}",
                self.variant,
                ksn.counter()
            );
            println!("Key: {}", hex::encode_upper(key));
            println!("KCV: {}", hex::encode_upper(kcv));
        }
        Ok(())
    }
}
