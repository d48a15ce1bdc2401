use anyhow::{Context, Result};
use clap::Args;

use paycrypt_cardverify::PinSelection;
use paycrypt_core::{DecimalizationTable, Pan, Pin, parse_hex};

/**
    Compute the IBM 3624 PIN offset.
*/
#[derive(Args)]
pub struct OffsetCommand {
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
        The customer PIN. Must be as long as the selection.
    */
    #[arg(long)]
    pin: Pin,

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

impl OffsetCommand {
    pub fn run(self) -> Result<()> {
        let pdk = parse_hex(&self.pdk).context("invalid PDK")?;
        let selection = selection(
            self.mask,
            self.start,
            self.length,
            self.pad,
            self.pin_length,
        );

        let offset =
            paycrypt_cardverify::pin_offset(&pdk, &self.pan, &self.table, &selection, &self.pin)
                .context("offset computation failed")?;

        println!("{offset}");
        Ok(())
    }
}

pub(super) fn selection(
    mask: Option<String>,
    start: usize,
    length: usize,
    pad: u8,
    pin_length: usize,
) -> PinSelection {
    match mask {
        Some(mask) => PinSelection::Mask(mask),
        None => PinSelection::Window {
            start,
            length,
            pad,
            pin_length,
        },
    }
}
