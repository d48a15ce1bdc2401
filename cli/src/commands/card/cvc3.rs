use anyhow::{Context, Result};
use clap::Args;

use paycrypt_core::{Pan, parse_hex};

/**
    Compute a dynamic CVC3 for contactless magstripe.
*/
#[derive(Args)]
pub struct Cvc3Command {
    /**
        Issuer master key in hex; the card key is derived from it.
    */
    #[arg(short, long)]
    imk: String,

    /**
        The PAN.
    */
    #[arg(short, long)]
    pan: Pan,

    /**
        Two-digit PAN sequence number.
    */
    #[arg(long, default_value = "00")]
    psn: String,

    /**
        Track discretionary data, up to 20 hex digits.
    */
    #[arg(short, long)]
    track: String,

    /**
        Terminal unpredictable number, 8 hex digits.
    */
    #[arg(short, long)]
    un: String,

    /**
        Application transaction counter, 4 hex digits.
    */
    #[arg(short, long)]
    atc: String,
}

impl Cvc3Command {
    pub fn run(self) -> Result<()> {
        let imk = parse_hex(&self.imk).context("invalid IMK")?;

        let code = paycrypt_cardverify::cvc3(
            &imk,
            &self.pan,
            &self.psn,
            &self.track,
            &self.un,
            &self.atc,
        )
        .context("CVC3 computation failed")?;

        eprintln!("Card key from PAN {} / PSN {}", self.pan, self.psn);
        println!("{code}");
        Ok(())
    }
}
