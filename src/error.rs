extern crate thiserror;

use std::{io, path::PathBuf};

use thiserror::Error;

/// Binary error type.
#[derive(Debug, Error)]
pub enum Error {
    #[error("{0}")]
    Preprocess(#[from] lexprep::Error),

    #[error("{0}")]
    Io(#[from] IoError),
}

impl From<lexprep::error::ConfigError> for Error {
    fn from(error: lexprep::error::ConfigError) -> Self {
        Error::Preprocess(error.into())
    }
}

/// I/O errors.
#[derive(Debug, Error, PartialEq)]
pub enum IoError {
    #[error("File Error: {path:?}: {kind}")]
    File { path: PathBuf, kind: io::ErrorKind },

    #[error("Stdin Error: {0}")]
    Stdin(io::ErrorKind),

    #[error("Stdout Error: {0}")]
    Stdout(io::ErrorKind),

    #[error("Serialization Error: {0}")]
    Serialization(String),
}
