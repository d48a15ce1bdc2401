mod offset;
mod offset_pin;
mod pvv;
mod pvv_pin;

use anyhow::Result;
use clap::{Args, Subcommand};

use self::offset::OffsetCommand;
use self::offset_pin::OffsetPinCommand;
use self::pvv::PvvCommand;
use self::pvv_pin::PvvPinCommand;

/**
    PIN verification values and offsets.
*/
#[derive(Args)]
pub struct PinCommand {
    #[command(subcommand)]
    command: PinSubcommand,
}

#[derive(Subcommand)]
enum PinSubcommand {
    Pvv(PvvCommand),
    PvvPin(PvvPinCommand),
    Offset(OffsetCommand),
    OffsetPin(OffsetPinCommand),
}

impl PinCommand {
    pub fn run(self) -> Result<()> {
        match self.command {
            PinSubcommand::Pvv(cmd) => cmd.run(),
            PinSubcommand::PvvPin(cmd) => cmd.run(),
            PinSubcommand::Offset(cmd) => cmd.run(),
            PinSubcommand::OffsetPin(cmd) => cmd.run(),
        }
    }
}
