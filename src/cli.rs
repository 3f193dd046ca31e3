mod calculate;
pub mod entry;
pub mod session;

use clap::{Parser, Subcommand};

use crate::{
    cli::{calculate::CalculateArgs, session::SessionArgs},
    prelude::*,
};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

impl Args {
    pub fn run(self) -> Result {
        match self.command {
            Command::Calculate(args) => args.run(),
            Command::Session(args) => args.run(),
        }
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Calculate a single day's consumption without storing it.
    #[clap(name = "calculate")]
    Calculate(Box<CalculateArgs>),

    /// Replay a session script, then render the weekly, analytics and records views.
    #[clap(name = "session")]
    Session(Box<SessionArgs>),
}
