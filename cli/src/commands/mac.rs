use anyhow::{Context, Result};
use clap::Args;

use paycrypt_core::parse_hex;
use paycrypt_mac::{MacAlgorithm, MacContext, PaddingMethod};

/**
    Compute a message authentication code.
*/
#[derive(Args)]
pub struct MacCommand {
    /**
        Algorithm: iso9797-alg1/2/3, x9.9, x9.19, tdes-cbc-mac,
        as2805.4.1, cmac-tdes or cmac-aes.
    */
    #[arg(short, long)]
    algorithm: MacAlgorithm,

    /**
        MAC key in hex.
    */
    #[arg(short, long)]
    key: String,

    /**
        Message to authenticate, in hex.
    */
    #[arg(short, long)]
    data: String,

    /**
        ISO 9797-1 padding method: 1, 2 or 3. CMAC pads internally and
        ignores this.
    */
    #[arg(short, long, default_value = "1")]
    padding: PaddingMethod,

    /**
        Truncate the MAC to this many bytes. Defaults to the full
        cipher block.
    */
    #[arg(short, long)]
    truncation: Option<usize>,
}

impl MacCommand {
    pub fn run(self) -> Result<()> {
        let key = parse_hex(&self.key).context("invalid key")?;
        let data = parse_hex(&self.data).context("invalid data")?;

        let mut context = MacContext::new(self.algorithm);
        context.padding = self.padding;
        if let Some(truncation) = self.truncation {
            context.truncation = truncation;
        }
        let mac = context
            .compute(&key, &data)
            .context("MAC computation failed")?;

        eprintln!(
            "{} over {} bytes, padding {}",
            self.algorithm,
            data.len(),
            context.padding
        );
        println!("{}", hex::encode_upper(mac));
        Ok(())
    }
}
