mod wordnet;

pub use wordnet::WordNet;

use crate::tagger::Pos;

/// Maps a token to its dictionary base form for a part of speech.
///
/// Tokens missing from the dictionary come back unchanged.
pub trait Lemmatizer: std::fmt::Debug + Send + Sync {
    fn lemmatize(&self, token: &str, pos: Pos) -> String;
}
