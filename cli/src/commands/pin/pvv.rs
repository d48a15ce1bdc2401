use anyhow::{Context, Result};
use clap::Args;

use paycrypt_core::{DecimalizationTable, Pan, Pin, parse_hex};

/**
    Compute the VISA PIN verification value.
*/
#[derive(Args)]
pub struct PvvCommand {
    /**
        PIN verification key pair in hex.
    */
    #[arg(long)]
    pdk: String,

    /**
        The PAN.
    */
    #[arg(short, long)]
    pan: Pan,

    /**
        The PIN. Only the first four digits enter the PVV.
    */
    #[arg(long)]
    pin: Pin,

    /**
        PIN verification key indicator, 0 to 9.
    */
    #[arg(long, default_value_t = 1)]
    pvki: u8,

    /**
        Decimalization table, 16 hex digits mapping 0-F to digits.
    */
    #[arg(short, long, default_value = "0123456789012345")]
    table: DecimalizationTable,
}

impl PvvCommand {
    pub fn run(self) -> Result<()> {
        let pdk = parse_hex(&self.pdk).context("invalid PDK")?;

        let pvv = paycrypt_cardverify::pvv(&pdk, &self.pan, &self.pin, self.pvki, &self.table)
            .context("PVV computation failed")?;

        eprintln!("PVKI {} over PAN {}", self.pvki, self.pan);
        println!("{pvv}");
        Ok(())
    }
}
