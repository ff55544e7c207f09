//! Scanners invoked by the host parser at specific positions in the input.

pub mod keywords;
pub mod object;
pub mod reader;
pub mod unicode;

#[cfg(test)]
mod test;

pub use object::{object_open, skip_space};
pub use reader::BytesReader;

/// Bounded lookahead into the remaining input, relative to the position the
/// scanner was invoked at.
///
/// The cursor is owned by the host parser and borrowed for the duration of a
/// single scan; scanners only ever peek and never consume input themselves.
pub trait Cursor {
	/// The absolute offset of the position the scanner was invoked at.
	fn offset(&self) -> usize;

	/// Read the byte `offset` bytes ahead without consuming it.
	///
	/// Returns `None` at end of input.
	fn peek(&self, offset: usize) -> Option<u8>;
}
