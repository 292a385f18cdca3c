//! Tokenizer for a C-like language.
//!
//! Turns any [`std::io::Read`] source into classified [`Token`]s: keywords,
//! identifiers, numbers, operators, and boundary symbols. Read-ahead and the
//! one-character rollback at the end of every lexeme are handled by
//! [`clex_core::ReadCache`].
//!
//! # Architecture
//!
//! ```text
//! io::Read ──► ReadCache (clex_core) ──► Tokenizer ──► Token
//!                                            ▲
//!                                     Arc<LexTables>
//! ```
//!
//! # Example
//!
//! ```
//! use clex::{tokenize, TokenKind};
//!
//! let tokens = tokenize("int x = 10;".as_bytes())?;
//! let kinds: Vec<_> = tokens.iter().map(|t| t.kind()).collect();
//! assert_eq!(
//!     kinds,
//!     [
//!         TokenKind::Keyword,
//!         TokenKind::Identifier,
//!         TokenKind::Operator,
//!         TokenKind::Number,
//!         TokenKind::BoundarySymbol,
//!     ]
//! );
//! # Ok::<(), clex::LexError>(())
//! ```

mod config;
mod lex_error;
mod tables;
mod token;
mod tokenizer;

use std::io::Read;
use std::sync::Once;

pub use clex_core::{CacheConfig, CacheError};
pub use config::{InvalidCharPolicy, TokenizerConfig};
pub use lex_error::LexError;
pub use tables::{LexTables, LexTablesBuilder, C_BOUNDARY_CHARS, C_KEYWORDS, C_OPERATOR_CHARS};
pub use token::{Token, TokenKind};
pub use tokenizer::Tokenizer;

/// Tokenize a whole source with default configuration.
///
/// Unclassifiable characters are skipped. Stops at the first read error.
pub fn tokenize<R: Read>(source: R) -> Result<Vec<Token>, LexError> {
    Tokenizer::new(source)?.collect()
}

static TRACING_INIT: Once = Once::new();

/// Install a stderr subscriber for `clex` and `clex_core` events.
///
/// Does nothing unless `RUST_LOG` holds a valid filter, for example
/// `RUST_LOG=clex=trace,clex_core=debug`. Leaves an already installed global
/// subscriber in place. Repeated calls are no-ops.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let Ok(filter) = EnvFilter::try_from_default_env() else {
            return;
        };
        let layer = fmt::layer()
            .compact()
            .without_time()
            .with_target(true)
            .with_writer(std::io::stderr);
        if tracing_subscriber::registry().with(layer).with(filter).try_init().is_err() {
            tracing::debug!("global subscriber already set, keeping it");
        }
    });
}
