mod whitespace;
mod wordpunct;

pub use {whitespace::Whitespace, wordpunct::WordPunct};

use crate::token::Tokens;

/// Splits a sentence into word and punctuation tokens.
pub trait TextTokenizer: std::fmt::Debug + Send + Sync {
    fn tokenize(&self, text: &str) -> Tokens;
}

#[derive(Clone, Debug)]
pub enum Tokenizer {
    WordPunct(WordPunct),
    Whitespace(Whitespace),
}

impl Default for Tokenizer {
    fn default() -> Self {
        Tokenizer::WordPunct(WordPunct::new())
    }
}

impl TextTokenizer for Tokenizer {
    fn tokenize(&self, text: &str) -> Tokens {
        match self {
            Tokenizer::WordPunct(tokenizer) => tokenizer.tokenize(text),
            Tokenizer::Whitespace(tokenizer) => tokenizer.tokenize(text),
        }
    }
}
