use anyhow::{Context, Result};
use clap::Args;

use paycrypt_core::{DecimalizationTable, Pan, parse_hex};

/**
    Rebuild a customer PIN from its IBM 3624 offset.
*/
#[derive(Args)]
pub struct OffsetPinCommand {
    /**
        PIN derivation key pair in hex.
    */
    #[arg(long)]
    pdk: String,

    /**
        The PAN.
    */
    #[arg(short, long)]
    pan: Pan,

    /**
        The stored offset. Must be as long as the selection.
    */
    #[arg(long)]
    offset: String,

    /**
        Selection mask of literal digits and N placeholders, e.g.
        "NN7NN2". Replaces the window arguments.
    */
    #[arg(short, long, conflicts_with_all = ["start", "length", "pad", "pin_length"])]
    mask: Option<String>,

    /**
        Window start within the 16 natural digits.
    */
    #[arg(long, default_value_t = 0)]
    start: usize,

    /**
        Window length in digits.
    */
    #[arg(long, default_value_t = 4)]
    length: usize,

    /**
        Digit that right-pads the window up to the PIN length.
    */
    #[arg(long, default_value_t = 0)]
    pad: u8,

    /**
        PIN length the window selection produces, 4 to 12.
    */
    #[arg(long, default_value_t = 4)]
    pin_length: usize,

    /**
        Decimalization table, 16 hex digits mapping 0-F to digits.
    */
    #[arg(short, long, default_value = "0123456789012345")]
    table: DecimalizationTable,
}

impl OffsetPinCommand {
    pub fn run(self) -> Result<()> {
        let pdk = parse_hex(&self.pdk).context("invalid PDK")?;
        let selection = super::offset::selection(
            self.mask,
            self.start,
            self.length,
            self.pad,
            self.pin_length,
        );

        let pin = paycrypt_cardverify::pin_from_offset(
            &pdk,
            &self.pan,
            &self.table,
            &selection,
            &self.offset,
        )
        .context("PIN recovery failed")?;

        println!("{pin}");
        Ok(())
    }
}
