mod ipek;
mod working_key;

use anyhow::Result;
use clap::{Args, Subcommand};

use self::ipek::IpekCommand;
use self::working_key::WorkingKeyCommand;

/**
    DUKPT key derivation.

    The key serial number picks the scheme: 20 hex digits run the TDES
    derivation, 24 hex digits the AES one.
*/
#[derive(Args)]
pub struct DukptCommand {
    #[command(subcommand)]
    command: DukptSubcommand,
}

#[derive(Subcommand)]
enum DukptSubcommand {
    Ipek(IpekCommand),
    WorkingKey(WorkingKeyCommand),
}

impl DukptCommand {
    pub fn run(self) -> Result<()> {
        match self.command {
            DukptSubcommand::Ipek(cmd) => cmd.run(),
            DukptSubcommand::WorkingKey(cmd) => cmd.run(),
        }
    }
}
