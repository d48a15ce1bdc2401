mod csc;
mod cvc3;
mod cvv;

use anyhow::Result;
use clap::{Args, Subcommand};

use self::csc::CscCommand;
use self::cvc3::Cvc3Command;
use self::cvv::CvvCommand;

/**
    Card verification codes.
*/
#[derive(Args)]
pub struct CardCommand {
    #[command(subcommand)]
    command: CardSubcommand,
}

#[derive(Subcommand)]
enum CardSubcommand {
    Cvv(CvvCommand),
    Csc(CscCommand),
    Cvc3(Cvc3Command),
}

impl CardCommand {
    pub fn run(self) -> Result<()> {
        match self.command {
            CardSubcommand::Cvv(cmd) => cmd.run(),
            CardSubcommand::Csc(cmd) => cmd.run(),
            CardSubcommand::Cvc3(cmd) => cmd.run(),
        }
    }
}
