mod rule;

pub use rule::RuleTagger;

use std::{
    fmt::{Display, Formatter},
    ops::Deref,
};

use serde::{Deserialize, Serialize};

use crate::token::{Token, Tokens};

/// A Penn Treebank part-of-speech code such as `NNS` or `VBG`.
#[derive(Clone, Debug, Default, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tag(String);

impl Tag {
    pub fn new<S: Into<String>>(tag: S) -> Self {
        Self(tag.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The simplified category used for lemma lookup.
    #[inline]
    pub fn pos(&self) -> Pos {
        Pos::from_tag(&self.0)
    }
}

impl Deref for Tag {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<&str> for Tag {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for Tag {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl Display for Tag {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A token paired with its tag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tagged {
    pub token: Token,
    pub tag: Tag,
}

impl Tagged {
    pub fn new<T: Into<Token>, G: Into<Tag>>(token: T, tag: G) -> Self {
        Self {
            token: token.into(),
            tag: tag.into(),
        }
    }
}

/// Simplified part of speech understood by the lemmatizer.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pos {
    Noun,
    Verb,
    Adjective,
    Adverb,
}

impl Pos {
    pub const ALL: [Pos; 4] = [Pos::Noun, Pos::Verb, Pos::Adjective, Pos::Adverb];

    /// Maps a Penn Treebank tag by its first character. Anything that is not
    /// a verb, adverb or adjective tag, including the empty tag, is a noun.
    pub fn from_tag(tag: &str) -> Self {
        match tag.chars().next() {
            Some('V') => Pos::Verb,
            Some('R') => Pos::Adverb,
            Some('J') => Pos::Adjective,
            _ => Pos::Noun,
        }
    }

    /// WordNet file suffix: `index.<name>` and `<name>.exc`.
    pub fn wordnet_name(&self) -> &'static str {
        match self {
            Pos::Noun => "noun",
            Pos::Verb => "verb",
            Pos::Adjective => "adj",
            Pos::Adverb => "adv",
        }
    }
}

/// Assigns a part-of-speech tag to every token of a sentence.
///
/// Implementations return exactly one `Tagged` per input token, in order.
pub trait Tagger: std::fmt::Debug + Send + Sync {
    fn tag(&self, tokens: Tokens) -> Vec<Tagged>;
}
