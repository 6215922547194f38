use anyhow::Result;
use clap::Parser;
use env_logger::Env;

mod cli;
mod commands;
mod crypto;
mod defaults;
mod util;

use crate::cli::{Cli, Command};
use crate::defaults::Defaults;

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or(Defaults::LOG_FILTER)).init();
    let cli = Cli::parse();

    match cli.cmd {
        Command::Keygen { count, out } => {
            let records = commands::keygen::generate(count)?;
            commands::emit(&records, out)
        }

        Command::Pubkey { key } => {
            let record = commands::derive::pubkey(&key.private_key)?;
            commands::emit(&record, None)
        }

        Command::Tweak { key, tweak } => {
            let record = commands::derive::tweak(&key.private_key, &tweak)?;
            commands::emit(&record, None)
        }

        Command::Sign { key, hash, message } => {
            let record =
                commands::sign::sign(&key.private_key, hash.as_deref(), message.as_deref())?;
            commands::emit(&record, None)
        }
    }
}
