use std::{
    env, fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::{
    error::{ConfigError, ResourceError},
    filter::{Punctuation, Stopwords},
};

/// Environment variable naming a WordNet `dict` directory.
pub const WORDNET_ENV: &str = "LEXPREP_WORDNET";

/// Serializable preprocessor options.
///
/// `stopwords` takes precedence over `stopwords_file`, which takes
/// precedence over `language`. An explicitly empty list disables
/// stopword filtering.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreprocessorConfig {
    pub stopwords: Option<Vec<String>>,
    pub stopwords_file: Option<PathBuf>,
    pub language: String,
    /// Punctuation characters; ASCII punctuation when unset or empty.
    pub punct: Option<String>,
    pub lower: bool,
    pub strip: bool,
    pub wordnet: Option<PathBuf>,
}

impl Default for PreprocessorConfig {
    fn default() -> Self {
        Self {
            stopwords: None,
            stopwords_file: None,
            language: "english".to_string(),
            punct: None,
            lower: true,
            strip: true,
            wordnet: None,
        }
    }
}

impl PreprocessorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(text).map_err(|error| ConfigError::Serialization(error.to_string()))
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|error| ConfigError::File(error.kind()))?;
        Self::from_json(&text)
    }

    pub fn stopwords(&self) -> Result<Stopwords, ResourceError> {
        match (&self.stopwords, &self.stopwords_file) {
            (Some(words), _) => Ok(Stopwords::new(words.iter().cloned())),
            (None, Some(path)) => Stopwords::load(path),
            (None, None) => Stopwords::language(&self.language),
        }
    }

    pub fn punctuation(&self) -> Punctuation {
        match self.punct.as_deref() {
            Some(chars) if !chars.is_empty() => Punctuation::new(chars.chars()),
            _ => Punctuation::ascii(),
        }
    }

    /// The configured WordNet directory, else `LEXPREP_WORDNET`.
    pub fn wordnet_dir(&self) -> Option<PathBuf> {
        self.wordnet
            .clone()
            .or_else(|| env::var_os(WORDNET_ENV).map(PathBuf::from))
    }
}
