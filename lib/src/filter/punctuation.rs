use hashbrown::HashSet;

use crate::{filter::TextFilter, token::Token};

/// `string.punctuation`: every ASCII punctuation character.
pub const ASCII_PUNCTUATION: &str = r##"!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~"##;

/// Rejects tokens made up entirely of punctuation characters.
///
/// The empty token is all-punctuation and is rejected too.
#[derive(Clone, Debug)]
pub struct Punctuation(HashSet<char>);

impl Default for Punctuation {
    fn default() -> Self {
        Self::ascii()
    }
}

impl Punctuation {
    pub fn new<I: IntoIterator<Item = char>>(chars: I) -> Self {
        Self(chars.into_iter().collect())
    }

    pub fn ascii() -> Self {
        Self::new(ASCII_PUNCTUATION.chars())
    }

    #[inline]
    pub fn contains(&self, ch: char) -> bool {
        self.0.contains(&ch)
    }

    #[inline]
    pub fn is_punctuation(&self, token: &str) -> bool {
        token.chars().all(|ch| self.contains(ch))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The set as a string, in code point order.
    pub fn to_sorted_string(&self) -> String {
        let mut chars = self.0.iter().copied().collect::<Vec<_>>();
        chars.sort_unstable();
        chars.into_iter().collect()
    }
}

impl TextFilter for Punctuation {
    fn keep(&self, token: &Token) -> bool {
        !self.is_punctuation(token)
    }
}
