//! Man command: roff man page generated from the clap definition.

use anyhow::{Context, Result};
use clap::CommandFactory;
use std::io::{self, Write};

use crate::cli::Cli;

pub fn run_man() -> Result<()> {
    write_man(&mut io::stdout().lock())
}

fn write_man(out: &mut dyn Write) -> Result<()> {
    clap_mangen::Man::new(Cli::command())
        .render(out)
        .context("render man page")
}
