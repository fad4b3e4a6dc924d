use std::io::{self, Write as _};

use anyhow::{Context as _, Result};
use clap::Parser as _;

use self::{command::Arguments, configuration::Configuration};

mod command;
mod configuration;

fn main() -> Result<()> {
    log::init().context("Failed to initialize logging!")?;

    let Arguments { command } = Arguments::parse();

    let configuration = Configuration::read_from_env()
        .context("Failed to load application configuration!")?;

    let mut stdout = io::stdout().lock();

    command
        .execute(configuration)?
        .into_iter()
        .try_for_each(|line| writeln!(stdout, "{line}"))
        .context("Failed to write output!")
}
