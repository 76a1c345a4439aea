//! Implementation of `verso config`.

use std::process::ExitCode;

use verso_config::discover_config_files;
use verso_highlight::Highlighter;

use crate::cli::{
    context::CommandContext,
    output::{dim, header, rule, subheader},
};

/// Prints the discovered config files and the effective settings.
pub fn run(ctx: &CommandContext) -> ExitCode {
    let config_files = discover_config_files(&ctx.cwd);

    println!("{}", header("Configuration"));
    println!();

    println!("{}", subheader("Config files (highest precedence first):"));
    if config_files.is_empty() {
        println!("  {}", dim("(none found; run 'verso init' to create one)"));
    } else {
        for path in &config_files {
            println!("  {}", path.display());
        }
    }
    println!();

    println!("{}", subheader("Corpus:"));
    match &ctx.config.corpus.path {
        Some(path) => println!("  {}", path.display()),
        None => println!("  {}", dim("(bundled sonnets)")),
    }
    println!();

    println!("{}", subheader("Effective settings:"));
    println!("{}", rule(40));
    let highlighter = Highlighter::new();
    print!("{}", highlighter.highlight_toml(&ctx.config.settings_to_toml()));
    println!("{}", rule(40));

    ExitCode::SUCCESS
}
