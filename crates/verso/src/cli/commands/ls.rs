//! Implementation of `verso ls`.

use std::process::ExitCode;

use comfy_table::{Cell, Table, presets::UTF8_FULL_CONDENSED};

use crate::cli::{
    args::LsCommand,
    context::CommandContext,
    output::{header, warning},
};

/// Lists the documents in the corpus.
pub fn run(ctx: &mut CommandContext, cmd: &LsCommand) -> ExitCode {
    let noun = ctx.config.corpus.name.clone();
    let corpus = match ctx.corpus() {
        Ok(corpus) => corpus,
        Err(code) => return code,
    };

    println!("{}", header(&format!("{} {noun}", corpus.len())));

    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    if cmd.long {
        table.set_header(vec!["#", "Title", "Lines", "First line"]);
    } else {
        table.set_header(vec!["#", "Title", "Lines"]);
    }

    for (idx, doc) in corpus.documents().iter().enumerate() {
        let mut row = vec![
            Cell::new(idx + 1),
            Cell::new(&doc.title),
            Cell::new(doc.lines.len()),
        ];
        if cmd.long {
            row.push(Cell::new(doc.lines.first().map_or("", String::as_str)));
        }
        table.add_row(row);
    }

    println!("{table}");
    if corpus.is_empty() {
        println!("{}", warning("(empty corpus)"));
    }

    ExitCode::SUCCESS
}
