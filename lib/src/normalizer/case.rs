use crate::{normalizer::TextNormalizer, token::Token};

/// Unicode lowercasing.
#[derive(Clone, Debug, Default)]
pub struct Lowercase;

impl Lowercase {
    pub fn new() -> Self {
        Self
    }
}

impl TextNormalizer for Lowercase {
    fn normalize(&self, token: &mut Token) {
        if token.chars().any(char::is_uppercase) {
            let lowered = token.to_lowercase();
            *token.inner_mut() = lowered;
        }
    }
}
