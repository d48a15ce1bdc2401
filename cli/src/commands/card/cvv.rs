use anyhow::{Context, Result, bail};
use clap::Args;

use paycrypt_core::{Pan, parse_hex};

/**
    Compute or check a CVV/CVC magnetic-stripe code.

    Pass an ATC to get the chip-card variants (iCVV from ATC 0000 by
    convention, dCVV from the live counter).
*/
#[derive(Args)]
pub struct CvvCommand {
    /**
        Card verification key pair in hex, CVK-A then CVK-B.
    */
    #[arg(short, long)]
    cvk: String,

    /**
        The PAN.
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
        Four-digit application transaction counter.
    */
    #[arg(short, long)]
    atc: Option<String>,

    /**
        Check this code against the computed one instead of printing it.
    */
    #[arg(long)]
    check: Option<String>,
}

impl CvvCommand {
    pub fn run(self) -> Result<()> {
        let cvk = parse_hex(&self.cvk).context("invalid CVK")?;

        match &self.check {
            Some(code) => {
                let ok = paycrypt_cardverify::verify_cvv(
                    &cvk,
                    &self.pan,
                    &self.expiry,
                    &self.service_code,
                    self.atc.as_deref(),
                    code,
                )
                .context("CVV verification failed")?;
                if !ok {
                    bail!("code {code} does not match");
                }
                println!("MATCH");
            }
            None => {
                let code = paycrypt_cardverify::cvv(
                    &cvk,
                    &self.pan,
                    &self.expiry,
                    &self.service_code,
                    self.atc.as_deref(),
                )
                .context("CVV computation failed")?;
                println!("{code}");
            }
        }
        Ok(())
    }
}
