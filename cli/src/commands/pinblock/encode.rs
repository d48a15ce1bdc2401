use anyhow::{Context, Result};
use clap::Args;

use paycrypt_core::{Pan, Pin};
use paycrypt_pinblock::PinBlockFormat;

/**
    Encode a PIN into a clear PIN block.
*/
#[derive(Args)]
pub struct EncodeCommand {
    /**
        Block format: ISO-0, ISO-1, ISO-2, ISO-3 or ISO-4.
    */
    #[arg(short, long, default_value = "iso-0")]
    format: PinBlockFormat,

    /**
        The PIN, 4 to 12 digits.
    */
    #[arg(short, long)]
    pin: Pin,

    /**
        The PAN. Required by formats 0, 3 and 4, folded into format 2
        when given, ignored by format 1.
    */
    #[arg(long)]
    pan: Option<Pan>,
}

impl EncodeCommand {
    pub fn run(self) -> Result<()> {
        let block = paycrypt_pinblock::encode(self.format, &self.pin, self.pan.as_ref())
            .context("failed to encode PIN block")?;

        eprintln!("Encoded {} PIN block", self.format);
        println!("{block}");
        Ok(())
    }
}
