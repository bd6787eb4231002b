use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::walker::WalkOptions;
use lexis_core::TokenizerOptions;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputMode {
    /// Highlighted matching lines per document
    Pretty,
    /// One JSON object per appearance
    Raw,
}

#[derive(Parser, Debug)]
#[command(name = "lexis")]
#[command(about = "Index a directory of text files in memory and look up query terms", long_about = None)]
pub struct Cli {
    /// Directory holding the documents
    pub data_dir: PathBuf,
    /// Space-separated query terms (case-sensitive)
    pub query: String,
    /// Output format
    #[arg(value_enum, default_value_t = OutputMode::Pretty)]
    pub out: OutputMode,
    /// Do not index the "" term produced by leading/trailing punctuation
    #[arg(long, default_value_t = false)]
    pub drop_empty_tokens: bool,
    /// Log and skip unreadable files instead of aborting
    #[arg(long, default_value_t = false)]
    pub skip_unreadable: bool,
    /// Disable ANSI highlighting in pretty output
    #[arg(long, default_value_t = false)]
    pub no_color: bool,
}

/// Validated settings handed to [`crate::run`].
#[derive(Debug, Clone)]
pub struct Config {
    pub data_dir: PathBuf,
    pub query: String,
    pub out: OutputMode,
    pub color: bool,
    pub walk: WalkOptions,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Self {
            data_dir: cli.data_dir,
            query: cli.query,
            out: cli.out,
            color: !cli.no_color,
            walk: WalkOptions {
                skip_unreadable: cli.skip_unreadable,
                tokenizer: TokenizerOptions { keep_empty_tokens: !cli.drop_empty_tokens },
            },
        }
    }
}
