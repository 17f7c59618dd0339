//! `swap-profile` binary entry point.
use clap::Parser;
use std::process::ExitCode;

use swap_profile::cli::{self, Cli, Command};
use swap_profile::{commands, logging};

fn main() -> ExitCode {
    let _ = enable_ansi_support::enable_ansi_support();

    let args = match Cli::try_parse() {
        Ok(args) => args,
        Err(err) => {
            let _ = err.print();
            return ExitCode::from(cli::usage_status(&err));
        }
    };

    let command = args.command.unwrap_or(Command::List);
    logging::init_subscriber(args.verbose, command.log_stem());
    let log = logging::Logger::new();

    let result = match &command {
        Command::List => commands::list::run(&args.global, &log),
        Command::Swap(opts) => commands::swap::run(&args.global, opts, &log),
        Command::Completions(opts) => {
            commands::completions::run(opts);
            Ok(())
        }
        Command::Version => {
            commands::version::run();
            Ok(())
        }
    };

    ExitCode::from(commands::finish(result, &log))
}
