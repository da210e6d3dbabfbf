extern crate regex;

use std::sync::OnceLock;

use regex::Regex;

use crate::{
    token::{Token, Tokens},
    tokenizer::TextTokenizer,
};

fn pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\w+|[^\w\s]+").expect("word/punctuation pattern compiles"))
}

/// Splits text into runs of word characters and runs of punctuation.
///
/// Word characters are Unicode `\w` (letters, digits, marks, connector
/// punctuation such as `_`), so `_foo_` stays a single token.
#[derive(Clone, Debug, Default)]
pub struct WordPunct;

impl WordPunct {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TextTokenizer for WordPunct {
    fn tokenize(&self, text: &str) -> Tokens {
        pattern()
            .find_iter(text)
            .map(|found| Token::from(found.as_str()))
            .collect()
    }
}
