//! Implementation of the interactive session.

use std::{
    io::{self, BufWriter},
    process::ExitCode,
};

use crate::cli::{context::CommandContext, session::Session};

/// Runs the interactive session on stdin and stdout.
pub fn run(ctx: &mut CommandContext) -> ExitCode {
    let mut session = Session {
        highlight: ctx.highlight,
        prompt: ctx.config.settings.prompt.clone(),
        noun: ctx.config.corpus.name.clone(),
    };

    let corpus = match ctx.corpus() {
        Ok(corpus) => corpus,
        Err(code) => return code,
    };

    let stdin = io::stdin();
    let mut stdout = BufWriter::new(io::stdout().lock());
    match session.run(corpus, stdin.lock(), &mut stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: session failed: {e}");
            ExitCode::FAILURE
        }
    }
}
