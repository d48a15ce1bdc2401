use anyhow::{Context, Result, bail};
use clap::Args;

use paycrypt_core::{Pan, parse_hex};

/**
    Compute Amex card security codes.
*/
#[derive(Args)]
pub struct CscCommand {
    /**
        CSC key pair in hex.
    */
    #[arg(short, long)]
    key: String,

    /**
        The 15-digit Amex PAN.
    */
    #[arg(short, long)]
    pan: Pan,

    /**
        Expiry date as YYMM.
    */
    #[arg(short, long)]
    expiry: String,

    /**
        Three-digit service code.
    */
    #[arg(short, long)]
    service_code: String,

    /**
        Code set version: 1 (four digits) or 2 (five, four and three).
    */
    #[arg(short, long, default_value_t = 2)]
    version: u8,
}

impl CscCommand {
    pub fn run(self) -> Result<()> {
        let key = parse_hex(&self.key).context("invalid CSC key")?;

        match self.version {
            1 => {
                let code =
                    paycrypt_cardverify::csc_v1(&key, &self.pan, &self.expiry, &self.service_code)
                        .context("CSC computation failed")?;
                println!("{code}");
            }
            2 => {
                let codes =
                    paycrypt_cardverify::csc_v2(&key, &self.pan, &self.expiry, &self.service_code)
                        .context("CSC computation failed")?;
                println!("CSC-5: {}", codes.csc5);
                println!("CSC-4: {}", codes.csc4);
                println!("CSC-3: {}", codes.csc3);
            }
            version => bail!("unsupported CSC version {version}"),
        }
        Ok(())
    }
}
