extern crate clap;

use std::path::PathBuf;

use clap::Parser;

/// Lemmatize documents and print one JSON lemma list per document.
#[derive(Debug, Parser)]
#[command(name = "lexprep-bin", version)]
pub struct Cli {
    /// Input files, one document each. Reads stdin when none are given.
    pub files: Vec<PathBuf>,

    /// JSON preprocessor configuration.
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Stopword file, one word per line.
    #[arg(long, short = 's')]
    pub stopwords: Option<PathBuf>,

    /// Stopword language name or code.
    #[arg(long, short = 'l', conflicts_with = "stopwords")]
    pub language: Option<String>,

    /// WordNet dict directory.
    #[arg(long, short = 'w')]
    pub wordnet: Option<PathBuf>,

    /// Keep the original case.
    #[arg(long)]
    pub no_lower: bool,

    /// Keep surrounding whitespace, underscores and stars.
    #[arg(long)]
    pub no_strip: bool,

    /// Treat every input line as its own document.
    #[arg(long)]
    pub lines: bool,

    /// Indent the JSON output.
    #[arg(long)]
    pub pretty: bool,
}
