//! Command-line interface for `verso`, an interactive search over a poetry corpus.

#![warn(missing_docs)]

mod cli;

use std::process::ExitCode;

use cli::{
    CommandContext,
    args::{Commands, parse_cli},
    commands, logging,
};

fn main() -> ExitCode {
    let cli = parse_cli();
    logging::init(cli.global.verbose);

    let command = cli.command.unwrap_or(Commands::Repl);
    let loaded = match command {
        Commands::Init(_) => CommandContext::load_cwd_only(&cli.global),
        _ => CommandContext::load(&cli.global),
    };
    let mut ctx = match loaded {
        Ok(ctx) => ctx,
        Err(code) => return code,
    };

    commands::run(command, &mut ctx)
}
