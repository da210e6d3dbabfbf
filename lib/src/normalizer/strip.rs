use crate::{normalizer::TextNormalizer, token::Token};

/// Trims surrounding whitespace, then `_`, then `*`.
///
/// Each pass runs once, so `*_x_*` becomes `_x_`.
#[derive(Clone, Debug, Default)]
pub struct Strip;

impl Strip {
    pub fn new() -> Self {
        Self
    }
}

impl TextNormalizer for Strip {
    fn normalize(&self, token: &mut Token) {
        let stripped = token.trim().trim_matches('_').trim_matches('*');
        if stripped.len() != token.len() {
            let stripped = stripped.to_owned();
            *token.inner_mut() = stripped;
        }
    }
}
