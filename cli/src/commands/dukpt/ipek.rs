use anyhow::{Context, Result};
use clap::Args;

use paycrypt_core::{AesCipher, TdesCipher, key_check_value, parse_hex};
use paycrypt_dukpt::{AesKsn, Ksn};

/**
    Derive the initial key injected into a device.
*/
#[derive(Args)]
pub struct IpekCommand {
    /**
        Base derivation key in hex.
    */
    #[arg(short, long)]
    bdk: String,

    /**
        Key serial number: 20 hex digits (TDES) or 24 (AES).
    */
    #[arg(short, long)]
    ksn: String,
}

impl IpekCommand {
    pub fn run(self) -> Result<()> {
        let bdk = parse_hex(&self.bdk).context("invalid BDK")?;

        if self.ksn.trim().len() == 24 {
            let ksn: AesKsn = self.ksn.parse().context("invalid KSN")?;
            let key = paycrypt_dukpt::aes::derive_initial_key(&bdk, &ksn)
                .context("initial key derivation failed")?;
            let kcv = key_check_value(&AesCipher::new(&key)?, 3);

            eprintln!(
                "AES DUKPT, key ID {}",
                hex::encode_upper(ksn.initial_key_id())
            );
            println!("Initial key: {}", hex::encode_upper(&key));
            println!("KCV:         {}", hex::encode_upper(kcv));
        } else {
            let ksn: Ksn = self.ksn.parse().context("invalid KSN")?;
            let ipek =
                paycrypt_dukpt::tdes::derive_ipek(&bdk, &ksn).context("IPEK derivation failed")?;
            let kcv = key_check_value(&TdesCipher::new(&ipek)?, 3);

            eprintln!("TDES DUKPT, key set {}", hex::encode_upper(ksn.base()));
            println!("IPEK: {}", hex::encode_upper(ipek));
            println!("KCV:  {}", hex::encode_upper(kcv));
        }
        Ok(())
    }
}
