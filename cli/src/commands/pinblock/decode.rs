use anyhow::{Context, Result};
use clap::Args;

use paycrypt_core::Pan;
use paycrypt_pinblock::PinBlockFormat;

/**
    Recover the PIN from a clear PIN block.
*/
#[derive(Args)]
pub struct DecodeCommand {
    /**
        Block format: ISO-0, ISO-1, ISO-2, ISO-3 or ISO-4.
    */
    #[arg(short, long, default_value = "iso-0")]
    format: PinBlockFormat,

    /**
        The PIN block as hex, 16 digits (32 for ISO-4).
    */
    #[arg(short, long)]
    block: String,

    /**
        The PAN. Required by formats 0, 3 and 4; format 2 blocks that
        were folded with a PAN need the same PAN here.
    */
    #[arg(long)]
    pan: Option<Pan>,
}

impl DecodeCommand {
    pub fn run(self) -> Result<()> {
        let decoded = paycrypt_pinblock::decode(self.format, &self.block, self.pan.as_ref())
            .context("failed to decode PIN block")?;

        eprintln!("Decoded {} PIN block", decoded.format);
        println!("{}", decoded.pin);
        Ok(())
    }
}
