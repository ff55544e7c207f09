//! The external scanner deciding whether a `{` opens an object literal or a
//! block.
//!
//! The grammar is ambiguous at `{`: `{ a: 1 }` is an object while `{ a; 1 }`
//! is a block. Instead of backtracking, a bounded lookahead scans at most one
//! key and a colon past the brace and tags the brace with a zero-width
//! [`TokenKind::ObjectOpen`] marker when object syntax is found.

use tracing::trace;

use super::unicode::{byte, U8Ext};
use super::Cursor;
use crate::token::{Span, Token, TokenKind};

/// Advance `off` past whitespace and line comments, returning the offset of
/// the next significant byte.
///
/// Whitespace is space, tab, line feed and carriage return. Line comments
/// open with `#`, `//` or `--` and run until end of line or end of input; a
/// lone `/` or `-` is not a comment. The scan makes a single forward pass
/// and never consumes input.
pub fn skip_space<C: Cursor>(cursor: &C, mut off: usize) -> usize {
	loop {
		let Some(next) = cursor.peek(off) else {
			return off;
		};
		match next {
			byte::SP | byte::TAB | byte::LF | byte::CR => off += 1,
			b'#' => off = eat_line_comment(cursor, off + 1),
			b'/' | b'-' if cursor.peek(off + 1) == Some(next) => {
				off = eat_line_comment(cursor, off + 2);
			}
			_ => return off,
		}
	}
}

/// Skip a line comment body, returning the offset of the terminating newline
/// or end of input. The newline itself is left for the caller to treat as
/// ordinary whitespace.
fn eat_line_comment<C: Cursor>(cursor: &C, mut off: usize) -> usize {
	while let Some(next) = cursor.peek(off) {
		if matches!(next, byte::LF | byte::CR) {
			break;
		}
		off += 1;
	}
	off
}

/// Scan a potential object key starting at `off`, returning the offset one
/// past its end.
///
/// A key is either a maximal run of identifier bytes or a quoted string.
/// Returns `None` when the byte at `off` cannot start a key. An unterminated
/// quoted key yields the end-of-input offset so that the colon check in the
/// caller fails instead of erroring.
fn skip_object_key<C: Cursor>(cursor: &C, mut off: usize) -> Option<usize> {
	match cursor.peek(off)? {
		x if x.is_identifier_continue() => {
			while cursor.peek(off).is_some_and(|x| x.is_identifier_continue()) {
				off += 1;
			}
			Some(off)
		}
		// `&` is accepted as a quote character alongside `"`; the previous
		// tokenizer matched byte 38 here and this grammar keeps the quirk.
		// A `'` quoted key is therefore NOT recognised.
		quote @ (b'"' | b'&') => {
			let mut escaped = false;
			loop {
				off += 1;
				let Some(next) = cursor.peek(off) else {
					return Some(off);
				};
				if next == quote && !escaped {
					return Some(off + 1);
				}
				escaped = next == b'\\';
			}
		}
		_ => None,
	}
}

/// The external scanner consulted when the parser sits on a candidate `{`.
///
/// Returns a [`TokenKind::ObjectOpen`] token of length 1 covering the brace
/// when the lookahead finds object-literal syntax, or `None` to decline and
/// leave block matching to the grammar. Declining is the only failure mode;
/// malformed input surfaces downstream as a parser syntax error.
pub fn object_open<C: Cursor>(cursor: &C) -> Option<Token> {
	if cursor.peek(0) != Some(b'{') {
		return None;
	}

	let off = skip_space(cursor, 1);
	match cursor.peek(off)? {
		// A second open brace is taken as a nested block, never an object,
		// even when the inner braces themselves would scan as an object.
		b'{' => None,
		// An empty object.
		b'}' => Some(accept(cursor)),
		_ => {
			let key = skip_object_key(cursor, off)?;
			let off = skip_space(cursor, key);
			(cursor.peek(off) == Some(b':')).then(|| accept(cursor))
		}
	}
}

fn accept<C: Cursor>(cursor: &C) -> Token {
	trace!(offset = cursor.offset(), "tagging brace as object open");
	Token {
		kind: TokenKind::ObjectOpen,
		span: Span {
			offset: cursor.offset() as u32,
			len: 1,
		},
	}
}
