//! Implementation of `verso search`.

use std::{
    io::{self, IsTerminal, Write},
    process::ExitCode,
};

use verso_highlight::Highlighter;
use verso_match::{Query, SearchOutcome};

use crate::cli::{
    args::SearchCommand,
    context::CommandContext,
    output::{results_json, write_results},
};

/// Evaluates one query and prints the matching documents.
pub fn run(ctx: &mut CommandContext, cmd: &SearchCommand) -> ExitCode {
    let Some(query) = Query::from_words(&cmd.words) else {
        eprintln!("error: query contains no words");
        return ExitCode::FAILURE;
    };

    let highlight = ctx.highlight;
    let noun = ctx.config.corpus.name.clone();
    let corpus = match ctx.corpus() {
        Ok(corpus) => corpus,
        Err(code) => return code,
    };

    let outcome = SearchOutcome::run(corpus, query);

    if cmd.json {
        return match results_json(&outcome) {
            Ok(json) if highlight && io::stdout().is_terminal() => {
                println!("{}", Highlighter::new().highlight_json(&json));
                ExitCode::SUCCESS
            }
            Ok(json) => {
                println!("{json}");
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("error: failed to serialize JSON: {e}");
                ExitCode::FAILURE
            }
        };
    }

    let mut stdout = io::stdout().lock();
    match write_results(&mut stdout, &outcome, &noun, highlight).and_then(|()| stdout.flush()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: failed to write results: {e}");
            ExitCode::FAILURE
        }
    }
}
