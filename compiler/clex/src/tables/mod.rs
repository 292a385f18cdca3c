//! Closed membership tables: keywords, operator characters, boundary symbols.
//!
//! Tables are immutable once built and shared by [`Arc`] between tokenizers.
//! [`LexTables::shared()`] hands out the process-wide C table, constructed on
//! first use. Custom sets go through [`LexTables::builder()`].
//!
//! Classification priority is fixed by the tokenizer (alphabetic, digit,
//! operator, boundary), so a byte placed in both the operator and boundary
//! sets always classifies as an operator.

use std::sync::{Arc, OnceLock};

use rustc_hash::FxHashSet;

/// C23 keywords.
///
/// Identifiers only start with an ASCII letter and continue with ASCII
/// alphanumerics, so the underscore-bearing entries here never match a
/// scanned lexeme. They stay in the table so the set is the complete C list.
pub const C_KEYWORDS: [&str; 59] = [
    "alignas",
    "alignof",
    "auto",
    "bool",
    "break",
    "case",
    "char",
    "const",
    "constexpr",
    "continue",
    "default",
    "do",
    "double",
    "else",
    "enum",
    "extern",
    "false",
    "float",
    "for",
    "goto",
    "if",
    "inline",
    "int",
    "long",
    "nullptr",
    "register",
    "restrict",
    "return",
    "short",
    "signed",
    "sizeof",
    "static",
    "static_assert",
    "struct",
    "switch",
    "thread_local",
    "true",
    "typedef",
    "typeof",
    "typeof_unqual",
    "union",
    "unsigned",
    "void",
    "volatile",
    "while",
    "_Alignas",
    "_Alignof",
    "_Atomic",
    "_BitInt",
    "_Bool",
    "_Complex",
    "_Decimal128",
    "_Decimal32",
    "_Decimal64",
    "_Generic",
    "_Imaginary",
    "_Noreturn",
    "_Static_assert",
    "_Thread_local",
];

/// Characters that form operators.
pub const C_OPERATOR_CHARS: &[u8] = b"+-*/><=!";

/// Single-character punctuation.
pub const C_BOUNDARY_CHARS: &[u8] = b"[](){}.;,";

/// Immutable lookup tables consulted by the tokenizer.
#[derive(Clone, Debug, Default)]
pub struct LexTables {
    keywords: FxHashSet<Box<str>>,
    operators: FxHashSet<u8>,
    boundary_symbols: FxHashSet<u8>,
}

impl LexTables {
    /// The C keyword, operator, and boundary-symbol tables.
    pub fn c_language() -> Self {
        Self::builder()
            .keywords(C_KEYWORDS)
            .operators(C_OPERATOR_CHARS.iter().copied())
            .boundary_symbols(C_BOUNDARY_CHARS.iter().copied())
            .build()
    }

    /// Process-wide C tables, built once.
    pub fn shared() -> Arc<Self> {
        static SHARED: OnceLock<Arc<LexTables>> = OnceLock::new();
        Arc::clone(SHARED.get_or_init(|| Arc::new(Self::c_language())))
    }

    pub fn builder() -> LexTablesBuilder {
        LexTablesBuilder::default()
    }

    /// Exact, case-sensitive keyword match.
    #[inline]
    pub fn is_keyword(&self, word: &str) -> bool {
        self.keywords.contains(word)
    }

    #[inline]
    pub fn is_operator(&self, byte: u8) -> bool {
        self.operators.contains(&byte)
    }

    #[inline]
    pub fn is_boundary_symbol(&self, byte: u8) -> bool {
        self.boundary_symbols.contains(&byte)
    }

    pub fn keyword_count(&self) -> usize {
        self.keywords.len()
    }
}

/// Accumulates table entries; [`build()`](Self::build) freezes them.
#[derive(Debug, Default)]
pub struct LexTablesBuilder {
    tables: LexTables,
}

impl LexTablesBuilder {
    #[must_use]
    pub fn keywords<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Box<str>>,
    {
        self.tables.keywords.extend(words.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn operators(mut self, bytes: impl IntoIterator<Item = u8>) -> Self {
        self.tables.operators.extend(bytes);
        self
    }

    #[must_use]
    pub fn boundary_symbols(mut self, bytes: impl IntoIterator<Item = u8>) -> Self {
        self.tables.boundary_symbols.extend(bytes);
        self
    }

    pub fn build(self) -> LexTables {
        self.tables
    }
}

#[cfg(test)]
mod tests;
