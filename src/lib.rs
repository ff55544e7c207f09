//! Lexical front-end for the SurrealQL LR parser.
//!
//! This crate classifies identifier-like spans as keyword terminals, resolves
//! spellings whose meaning depends on the parser position, and performs the
//! bounded lookahead which decides whether a `{` opens an object literal or a
//! block. It is consumed by a parser runtime through two narrow seams: the
//! [`ParseStack`] shift query and the [`Cursor`] peek query. Nothing in this
//! crate ever errors; every decision point has a defined decline outcome and
//! malformed input is reported downstream by the parser itself.
//!
//! ```
//! use surrealql_tokens::{classify, ParseStack, TokenKind};
//!
//! /// A parser state in which nothing is shiftable.
//! struct Stuck;
//!
//! impl ParseStack for Stuck {
//!     fn can_shift(&self, _: TokenKind) -> bool {
//!         false
//!     }
//! }
//!
//! // Unknown words are left to the parser's generic identifier terminal.
//! assert!(classify("certainly_not_a_keyword", &Stuck).is_none());
//! // Keywords match in any case.
//! assert_eq!(classify("select", &Stuck), classify("SELECT", &Stuck));
//! ```

use tracing::trace;
use unicase::UniCase;

pub mod lexer;
pub mod token;

pub use lexer::{object_open, skip_space, BytesReader, Cursor};
pub use token::{Span, Token, TokenKind};

use lexer::keywords;

/// The parser's view of its current LR state, borrowed by the classifier for
/// the duration of a single decision.
pub trait ParseStack {
	/// Returns whether the grammar permits shifting `kind` in the current
	/// state.
	fn can_shift(&self, kind: TokenKind) -> bool;
}

/// Classify an identifier-like span as a terminal symbol.
///
/// Spellings with a context-sensitive dual role are resolved first: their
/// candidate terminals are tried in order and the first one the parser can
/// shift wins. Everything else falls through to the flat keyword table.
/// `None` means the span matched no keyword and should be treated as the
/// parser's generic identifier terminal; unknown words are never an error.
///
/// Classification is ASCII case-insensitive and a pure function of the text
/// and the parser state.
pub fn classify(text: &str, stack: &impl ParseStack) -> Option<TokenKind> {
	let key = UniCase::ascii(text);

	if let Some(candidates) = keywords::CONTEXTUAL.get(&key) {
		for &kind in candidates.iter() {
			if stack.can_shift(kind) {
				trace!(%kind, "classified {text:?} by parser context");
				return Some(kind);
			}
		}
	}

	keywords::KEYWORDS.get(&key).copied()
}

/// Takes a string and returns if it could be a reserved keyword in certain
/// contexts.
pub fn could_be_reserved_keyword(s: &str) -> bool {
	keywords::could_be_reserved(s)
}
