use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands::{CardCommand, DukptCommand, MacCommand, PinBlockCommand, PinCommand};

/**
    Payment cryptography command-line tool.
*/
#[derive(Parser)]
#[command(name = "paycrypt")]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Encode and decode clear PIN blocks.
    Pinblock(PinBlockCommand),
    /// DUKPT key derivation.
    Dukpt(DukptCommand),
    /// Compute a message authentication code.
    Mac(MacCommand),
    /// Card verification codes.
    Card(CardCommand),
    /// PIN verification values and offsets.
    Pin(PinCommand),
}

impl Cli {
    pub fn run(self) -> Result<()> {
        match self.command {
            Command::Pinblock(cmd) => cmd.run(),
            Command::Dukpt(cmd) => cmd.run(),
            Command::Mac(cmd) => cmd.run(),
            Command::Card(cmd) => cmd.run(),
            Command::Pin(cmd) => cmd.run(),
        }
    }
}
