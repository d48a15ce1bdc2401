mod decode;
mod encode;

use anyhow::Result;
use clap::{Args, Subcommand};

use self::decode::DecodeCommand;
use self::encode::EncodeCommand;

/**
    Encode and decode clear PIN blocks.
*/
#[derive(Args)]
pub struct PinBlockCommand {
    #[command(subcommand)]
    command: PinBlockSubcommand,
}

#[derive(Subcommand)]
enum PinBlockSubcommand {
    Encode(EncodeCommand),
    Decode(DecodeCommand),
}

impl PinBlockCommand {
    pub fn run(self) -> Result<()> {
        match self.command {
            PinBlockSubcommand::Encode(cmd) => cmd.run(),
            PinBlockSubcommand::Decode(cmd) => cmd.run(),
        }
    }
}
