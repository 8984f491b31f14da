//! Completions command: shell completion script for gsuri.

use anyhow::Result;
use clap::CommandFactory;
use clap_complete::Shell;
use std::io::{self, Write};

use crate::cli::Cli;

/// Print the completion script for `shell` to stdout.
pub fn run_completions(shell: Shell) -> Result<()> {
    write_completions(shell, &mut io::stdout().lock())
}

fn write_completions(shell: Shell, out: &mut dyn Write) -> Result<()> {
    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, bin_name, out);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bash_completions_mention_subcommands() {
        let mut buf = Vec::new();
        write_completions(Shell::Bash, &mut buf).unwrap();
        let script = String::from_utf8(buf).unwrap();
        assert!(script.contains("gsuri"));
        assert!(script.contains("inspect"));
    }
}
