//! Tokenizer configuration.

use clex_core::CacheConfig;

/// What the tokenizer does with a leading character that fits no class.
///
/// The character is consumed either way.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InvalidCharPolicy {
    /// Produce no token for this call.
    #[default]
    Abstain,
    /// Return [`LexError::InvalidCharacter`](crate::LexError::InvalidCharacter).
    Report,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TokenizerConfig {
    pub cache: CacheConfig,
    pub invalid_char: InvalidCharPolicy,
}

impl TokenizerConfig {
    #[must_use]
    pub fn with_half_capacity(mut self, half_capacity: usize) -> Self {
        self.cache = CacheConfig::with_half_capacity(half_capacity);
        self
    }

    #[must_use]
    pub fn with_invalid_char(mut self, policy: InvalidCharPolicy) -> Self {
        self.invalid_char = policy;
        self
    }
}
