extern crate unicode_segmentation;

use unicode_segmentation::UnicodeSegmentation;

/// Splits a document into sentences.
pub trait SentenceSegmenter: std::fmt::Debug + Send + Sync {
    fn sentences<'a>(&self, text: &'a str) -> Vec<&'a str>;
}

/// Sentence boundaries per Unicode Standard Annex #29.
///
/// Each sentence is trimmed of surrounding whitespace and blank
/// sentences are dropped.
#[derive(Clone, Debug, Default)]
pub struct UnicodeSentences;

impl UnicodeSentences {
    pub fn new() -> Self {
        Self
    }
}

impl SentenceSegmenter for UnicodeSentences {
    fn sentences<'a>(&self, text: &'a str) -> Vec<&'a str> {
        text.split_sentence_bounds()
            .map(str::trim)
            .filter(|sentence| !sentence.is_empty())
            .collect()
    }
}

/// One sentence per non-blank line.
#[derive(Clone, Debug, Default)]
pub struct Lines;

impl Lines {
    pub fn new() -> Self {
        Self
    }
}

impl SentenceSegmenter for Lines {
    fn sentences<'a>(&self, text: &'a str) -> Vec<&'a str> {
        text.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect()
    }
}
