//! Token values produced by the [`Tokenizer`](crate::Tokenizer).

use std::fmt;

/// Classification tag attached to every lexeme.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Identifier-shaped lexeme found in the keyword table.
    Keyword,
    /// Run of operator characters, ending at the first `=`.
    Operator,
    /// Run of decimal digits. No sign, point, or exponent.
    Number,
    Identifier,
    /// Single punctuation character that never combines.
    BoundarySymbol,
}

impl TokenKind {
    /// Human-readable name used by the `[lexeme, kind]` rendering.
    pub const fn display_name(self) -> &'static str {
        match self {
            TokenKind::Keyword => "keyword",
            TokenKind::Operator => "operator",
            TokenKind::Number => "number",
            TokenKind::Identifier => "ident",
            TokenKind::BoundarySymbol => "boundary symbols",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A classified lexeme.
///
/// Owned by the caller; holds no reference back to the source.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    lexeme: String,
    kind: TokenKind,
}

impl Token {
    pub fn new(lexeme: impl Into<String>, kind: TokenKind) -> Self {
        let lexeme = lexeme.into();
        debug_assert!(!lexeme.is_empty(), "tokens always carry a lexeme");
        Token { lexeme, kind }
    }

    #[inline]
    pub fn lexeme(&self) -> &str {
        &self.lexeme
    }

    #[inline]
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn into_lexeme(self) -> String {
        self.lexeme
    }
}

/// Renders as `[lexeme, kind]`, e.g. `[int, keyword]`.
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.lexeme, self.kind)
    }
}
