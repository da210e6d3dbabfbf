use std::path::Path;

use lexprep::document::Document;
use tokio::io::AsyncReadExt;

use crate::error::IoError;

pub async fn read_file<P: AsRef<Path>>(path: P) -> Result<String, IoError> {
    let path = path.as_ref();

    tokio::fs::read_to_string(path)
        .await
        .map_err(|error| IoError::File {
            path: path.to_path_buf(),
            kind: error.kind(),
        })
}

pub async fn read_stdin() -> Result<String, IoError> {
    let mut buffer = String::new();

    tokio::io::stdin()
        .read_to_string(&mut buffer)
        .await
        .map(|_| buffer)
        .map_err(|error| IoError::Stdin(error.kind()))
}

/// Non-blank lines as separate documents, or the whole buffer as one.
pub fn split_documents(buffer: String, lines: bool) -> Vec<Document> {
    if !lines {
        return vec![Document::new(buffer)];
    }

    buffer
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(Document::from)
        .collect()
}
