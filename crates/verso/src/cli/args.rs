//! Clap argument definitions for the `verso` CLI.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Top-level CLI options.
#[derive(Parser)]
#[command(name = "verso", version)]
#[command(about = "Search a poetry corpus for lines containing every query word")]
pub struct Cli {
    /// Options shared by every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute (defaults to the interactive session).
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Flags accepted before or after any subcommand.
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Verbosity level (-v for info logs, -vv for debug logs)
    #[arg(short = 'v', long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Corpus JSON file to search instead of the configured one
    #[arg(long, global = true, value_name = "PATH")]
    pub corpus: Option<PathBuf>,

    /// Disable match highlighting
    #[arg(long, global = true)]
    pub no_highlight: bool,
}

/// Arguments for `verso search`.
#[derive(Args, Debug, Clone)]
pub struct SearchCommand {
    /// Query words; a document must contain all of them
    #[arg(required = true)]
    pub words: Vec<String>,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `verso ls`.
#[derive(Args, Debug, Clone)]
pub struct LsCommand {
    /// Show the first line of each document.
    #[arg(short = 'l', long)]
    pub long: bool,
}

/// Arguments for `verso init`.
#[derive(Args, Debug, Clone)]
pub struct InitCommand {
    /// Create global ~/.verso.toml instead
    #[arg(long)]
    pub global: bool,

    /// Overwrite existing configuration file
    #[arg(long)]
    pub force: bool,
}

/// Supported `verso` subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Start an interactive search session (the default)
    #[command(after_help = "\
SESSION COMMANDS:
  <words>              Search for documents containing every word
  :highlight on|off    Toggle match highlighting
  :help                Show session help
  :quit                Leave the session")]
    Repl,

    /// Run a single query and print matching documents
    #[command(after_help = "\
EXAMPLES:
  verso search summer
  verso search love time
  verso search --json eyes heaven")]
    Search(SearchCommand),

    /// List the documents in the corpus
    Ls(LsCommand),

    /// Show configuration files and effective settings
    Config,

    /// Initialize verso configuration in current directory
    Init(InitCommand),
}

/// Parses CLI arguments.
pub fn parse_cli() -> Cli {
    Cli::parse()
}
