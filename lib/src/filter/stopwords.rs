extern crate stop_words;

use std::{fs, path::Path};

use hashbrown::HashSet;
use stop_words::LANGUAGE;
use tracing::debug;

use crate::{error::ResourceError, filter::TextFilter, token::Token};

const ENGLISH: &str = include_str!("../../assets/stopwords/english.txt");

/// A stopword set. Membership is exact, with no case folding.
#[derive(Clone, Debug, Default)]
pub struct Stopwords(HashSet<String>);

impl Stopwords {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(words.into_iter().map(Into::into).collect())
    }

    /// The bundled English list.
    pub fn english() -> Self {
        Self::parse(ENGLISH)
    }

    /// Looks up the stopword corpus for a language name or ISO 639-1 code.
    pub fn language(code: &str) -> Result<Self, ResourceError> {
        let lang = match code.to_ascii_lowercase().as_str() {
            "en" | "english" => return Ok(Self::english()),
            "ar" | "arabic" => LANGUAGE::Arabic,
            "da" | "danish" => LANGUAGE::Danish,
            "de" | "german" => LANGUAGE::German,
            "el" | "greek" => LANGUAGE::Greek,
            "es" | "spanish" => LANGUAGE::Spanish,
            "fi" | "finnish" => LANGUAGE::Finnish,
            "fr" | "french" => LANGUAGE::French,
            "hu" | "hungarian" => LANGUAGE::Hungarian,
            "it" | "italian" => LANGUAGE::Italian,
            "nl" | "dutch" => LANGUAGE::Dutch,
            "no" | "norwegian" => LANGUAGE::Norwegian,
            "pt" | "portuguese" => LANGUAGE::Portuguese,
            "ro" | "romanian" => LANGUAGE::Romanian,
            "ru" | "russian" => LANGUAGE::Russian,
            "sv" | "swedish" => LANGUAGE::Swedish,
            "tr" | "turkish" => LANGUAGE::Turkish,
            _ => return Err(ResourceError::UnknownLanguage(code.to_string())),
        };

        let stopwords = Self::new(stop_words::get(lang).into_iter().map(|word| word.to_string()));
        debug!(language = code, count = stopwords.len(), "loaded stopword corpus");
        Ok(stopwords)
    }

    /// Reads one word per line. Blank lines and `#` comments are skipped.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ResourceError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|error| ResourceError::Corpus {
            path: path.to_path_buf(),
            kind: error.kind(),
        })?;

        let stopwords = Self::parse(&text);
        debug!(path = ?path, count = stopwords.len(), "loaded stopword file");
        Ok(stopwords)
    }

    fn parse(text: &str) -> Self {
        Self::new(
            text.lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#')),
        )
    }

    #[inline]
    pub fn contains(&self, word: &str) -> bool {
        self.0.contains(word)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl TextFilter for Stopwords {
    fn keep(&self, token: &Token) -> bool {
        !self.contains(token)
    }
}
