//! Per-call lexeme state machine over a [`ReadCache`].
//!
//! Each call to [`Tokenizer::next_token()`] skips whitespace, lets the first
//! character pick a [`ScanState`], then consumes characters until the state's
//! terminating condition fires. Terminators that do not belong to the lexeme
//! are handed back with a single rollback, so the next call starts on them.
//!
//! # Operator Runs
//!
//! An operator lexeme keeps growing while operator characters follow, and
//! stops right after the first `=`. `==`, `<=`, `>=` and `!=` come out as one
//! token each, and so does `+-` (and `+-*` etc.). Separate operators need
//! whitespace or another character class between them.
//!
//! # Source Errors
//!
//! A read error in the middle of a lexeme returns the error and keeps the
//! bytes gathered so far. The next call picks the lexeme up where it stopped.

use std::io::Read;
use std::sync::Arc;

use clex_core::ReadCache;

use crate::{InvalidCharPolicy, LexError, LexTables, Token, TokenKind, TokenizerConfig};

/// State fixed by the first character of a lexeme.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ScanState {
    Identifier,
    Number,
    Operator,
    BoundarySymbol,
}

/// What to do with the character just read.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Step {
    /// Append and keep scanning.
    Extend,
    /// Append and finish.
    Close,
    /// Un-read and finish.
    Reject,
}

impl ScanState {
    /// Boundary symbols reject every lookahead, so they stay one character.
    fn step(self, byte: u8, tables: &LexTables) -> Step {
        match self {
            ScanState::Identifier if byte.is_ascii_alphanumeric() => Step::Extend,
            ScanState::Number if byte.is_ascii_digit() => Step::Extend,
            ScanState::Operator if tables.is_operator(byte) => {
                if byte == b'=' {
                    Step::Close
                } else {
                    Step::Extend
                }
            }
            _ => Step::Reject,
        }
    }
}

/// Whitespace between lexemes: space, newline, tab, carriage return.
#[inline]
fn is_whitespace(byte: u8) -> bool {
    matches!(byte, b' ' | b'\n' | b'\t' | b'\r')
}

/// Pulls classified tokens out of a byte source.
///
/// Owns its [`ReadCache`] exclusively. Also an [`Iterator`] over
/// `Result<Token, LexError>` that skips abstentions and ends once the input
/// is exhausted.
#[derive(Debug)]
pub struct Tokenizer<R> {
    cache: ReadCache<R>,
    tables: Arc<LexTables>,
    invalid_char: InvalidCharPolicy,
    /// Lexeme cut short by a source error.
    interrupted: Option<(ScanState, Vec<u8>)>,
}

impl<R: Read> Tokenizer<R> {
    /// Tokenizer with the shared C tables and default configuration.
    pub fn new(source: R) -> Result<Self, LexError> {
        Self::with_config(source, TokenizerConfig::default())
    }

    pub fn with_config(source: R, config: TokenizerConfig) -> Result<Self, LexError> {
        Self::with_tables(source, LexTables::shared(), config)
    }

    pub fn with_tables(
        source: R,
        tables: Arc<LexTables>,
        config: TokenizerConfig,
    ) -> Result<Self, LexError> {
        Ok(Tokenizer {
            cache: ReadCache::with_config(source, config.cache)?,
            tables,
            invalid_char: config.invalid_char,
            interrupted: None,
        })
    }

    /// `true` once no further tokens can be produced.
    pub fn is_exhausted(&self) -> bool {
        self.cache.eof()
    }

    /// Assemble and classify the next lexeme.
    ///
    /// Returns `Ok(None)` when only whitespace remained, or when the leading
    /// character fits no class and the policy is
    /// [`InvalidCharPolicy::Abstain`].
    #[tracing::instrument(level = "trace", skip_all)]
    pub fn next_token(&mut self) -> Result<Option<Token>, LexError> {
        let (state, mut bytes) = match self.interrupted.take() {
            Some(resumed) => resumed,
            None => {
                let Some(first) = self.skip_whitespace()? else {
                    return Ok(None);
                };
                let Some(state) = self.classify(first) else {
                    return self.unclassifiable(first);
                };
                (state, vec![first])
            }
        };

        if let Err(err) = self.accumulate(state, &mut bytes) {
            self.interrupted = Some((state, bytes));
            return Err(err);
        }

        let lexeme = String::from_utf8(bytes)
            .map_err(|err| LexError::NonUtf8Lexeme {
                lexeme: err.into_bytes(),
            })?;
        let kind = self.finalize(state, &lexeme);
        tracing::trace!(lexeme = %lexeme, kind = %kind, "token");
        Ok(Some(Token::new(lexeme, kind)))
    }

    /// Read the next byte from the underlying cache.
    pub fn next_char(&mut self) -> Result<Option<u8>, LexError> {
        Ok(self.cache.next_char()?)
    }

    /// Un-read the byte returned by the last [`next_char()`](Self::next_char).
    pub fn roll_back(&mut self) -> Result<(), LexError> {
        Ok(self.cache.roll_back()?)
    }

    fn skip_whitespace(&mut self) -> Result<Option<u8>, LexError> {
        while let Some(byte) = self.cache.next_char()? {
            if !is_whitespace(byte) {
                return Ok(Some(byte));
            }
        }
        Ok(None)
    }

    /// Priority: alphabetic, digit, operator, boundary symbol.
    fn classify(&self, byte: u8) -> Option<ScanState> {
        if byte.is_ascii_alphabetic() {
            Some(ScanState::Identifier)
        } else if byte.is_ascii_digit() {
            Some(ScanState::Number)
        } else if self.tables.is_operator(byte) {
            Some(ScanState::Operator)
        } else if self.tables.is_boundary_symbol(byte) {
            Some(ScanState::BoundarySymbol)
        } else {
            None
        }
    }

    /// Extend `lexeme` until the state's terminator or end of input.
    fn accumulate(&mut self, state: ScanState, lexeme: &mut Vec<u8>) -> Result<(), LexError> {
        while let Some(byte) = self.cache.next_char()? {
            match state.step(byte, &self.tables) {
                Step::Extend => lexeme.push(byte),
                Step::Close => {
                    lexeme.push(byte);
                    break;
                }
                Step::Reject => {
                    self.cache.roll_back()?;
                    break;
                }
            }
        }
        Ok(())
    }

    fn finalize(&self, state: ScanState, lexeme: &str) -> TokenKind {
        match state {
            ScanState::Identifier if self.tables.is_keyword(lexeme) => TokenKind::Keyword,
            ScanState::Identifier => TokenKind::Identifier,
            ScanState::Number => TokenKind::Number,
            ScanState::Operator => TokenKind::Operator,
            ScanState::BoundarySymbol => TokenKind::BoundarySymbol,
        }
    }

    fn unclassifiable(&self, byte: u8) -> Result<Option<Token>, LexError> {
        match self.invalid_char {
            InvalidCharPolicy::Abstain => {
                tracing::debug!(byte = %byte.escape_ascii(), "no token class for character");
                Ok(None)
            }
            InvalidCharPolicy::Report => Err(LexError::InvalidCharacter { byte }),
        }
    }
}

impl<R> Tokenizer<R> {
    pub fn tables(&self) -> &LexTables {
        &self.tables
    }

    /// Give back the underlying source. Buffered, unread bytes are dropped.
    pub fn into_inner(self) -> R {
        self.cache.into_inner()
    }
}

impl<R: Read> Iterator for Tokenizer<R> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.is_exhausted() {
            match self.next_token() {
                Ok(Some(token)) => return Some(Ok(token)),
                Ok(None) => {}
                Err(err) => return Some(Err(err)),
            }
        }
        None
    }
}
