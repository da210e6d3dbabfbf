extern crate thiserror;

use std::{io, path::PathBuf};

use thiserror::Error;

/// Error type.
#[derive(Debug, Error, PartialEq)]
pub enum Error {
    #[error("{0}")]
    Resource(#[from] ResourceError),

    #[error("{0}")]
    Config(#[from] ConfigError),
}

/// Linguistic resource errors, raised while building a preprocessor.
#[derive(Debug, Error, PartialEq)]
pub enum ResourceError {
    #[error("Unknown stopword language: {0}")]
    UnknownLanguage(String),

    #[error("Stopword corpus {path:?}: {kind}")]
    Corpus { path: PathBuf, kind: io::ErrorKind },

    #[error("Lexicon {path:?}: {kind}")]
    Lexicon { path: PathBuf, kind: io::ErrorKind },

    #[error("Malformed lexicon entry in {path:?} at line {line}")]
    Malformed { path: PathBuf, line: usize },
}

/// Configuration error.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("File I/O Error: {0}")]
    File(io::ErrorKind),

    #[error("Serialization Error: {0}")]
    Serialization(String),
}
