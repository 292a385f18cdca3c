//! Tokenizer errors.

use clex_core::CacheError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LexError {
    /// A leading character matched no token class. Only raised under
    /// [`InvalidCharPolicy::Report`](crate::InvalidCharPolicy::Report).
    #[error("invalid character '{}'", .byte.escape_ascii())]
    InvalidCharacter { byte: u8 },

    /// Custom tables let non-ASCII bytes into a lexeme that do not form
    /// UTF-8.
    #[error("lexeme is not valid UTF-8: '{}'", .lexeme.escape_ascii())]
    NonUtf8Lexeme { lexeme: Vec<u8> },

    /// Read-ahead failure: source I/O or a broken rollback.
    #[error(transparent)]
    Cache(#[from] CacheError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_character_escapes_byte() {
        assert_eq!(
            LexError::InvalidCharacter { byte: b'@' }.to_string(),
            "invalid character '@'"
        );
        assert_eq!(
            LexError::InvalidCharacter { byte: 0x07 }.to_string(),
            "invalid character '\\x07'"
        );
    }

    #[test]
    fn non_utf8_lexeme_is_escaped() {
        assert_eq!(
            LexError::NonUtf8Lexeme { lexeme: vec![b'+', 0xC3] }.to_string(),
            "lexeme is not valid UTF-8: '+\\xc3'"
        );
    }

    #[test]
    fn cache_errors_pass_through() {
        let err = LexError::from(CacheError::RollbackWindowExceeded { position: 3 });
        assert_eq!(
            err.to_string(),
            CacheError::RollbackWindowExceeded { position: 3 }.to_string()
        );
    }
}
