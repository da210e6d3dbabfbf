pub mod punctuation;
pub mod stopwords;

pub use {punctuation::Punctuation, stopwords::Stopwords};

use crate::token::Token;

/// Decides whether a normalized token is emitted.
pub trait TextFilter: std::fmt::Debug + Send + Sync {
    fn keep(&self, token: &Token) -> bool;
}
