//! Command: print a shell completion script.
use clap::CommandFactory as _;
use std::io::Write;

use crate::cli::{Cli, CompletionsOpts};

/// Write the completion script for the requested shell to `out`.
pub fn generate(opts: &CompletionsOpts, out: &mut dyn Write) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(opts.shell, &mut cmd, name, out);
}

/// Print the completion script to stdout.
pub fn run(opts: &CompletionsOpts) {
    generate(opts, &mut std::io::stdout());
}
