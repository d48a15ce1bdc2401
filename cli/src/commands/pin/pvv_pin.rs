use anyhow::{Context, Result};
use clap::Args;

use paycrypt_core::{DecimalizationTable, Pan, parse_hex};

/**
    Recover the four-digit PIN behind a PIN verification value.
*/
#[derive(Args)]
pub struct PvvPinCommand {
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
        The stored four-digit PVV.
    */
    #[arg(long)]
    pvv: String,

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

impl PvvPinCommand {
    pub fn run(self) -> Result<()> {
        let pdk = parse_hex(&self.pdk).context("invalid PDK")?;

        let pin = paycrypt_cardverify::pin_from_pvv(
            &pdk,
            &self.pan,
            &self.pvv,
            self.pvki,
            &self.table,
        )
        .context("PIN recovery failed")?;

        eprintln!("PVKI {} over PAN {}", self.pvki, self.pan);
        println!("{pin}");
        Ok(())
    }
}
