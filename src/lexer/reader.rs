use super::Cursor;

/// A reader over a complete in-memory source buffer.
///
/// This is the [`Cursor`] implementation used by hosts which own a plain byte
/// slice. The reader tracks the position the next scan starts from; scanners
/// peek relative to that position and the host advances past accepted tokens
/// with [`BytesReader::advance`].
#[derive(Clone, Debug)]
pub struct BytesReader<'a> {
	data: &'a [u8],
	current: usize,
}

impl<'a> BytesReader<'a> {
	pub fn new(data: &'a [u8]) -> Self {
		BytesReader {
			data,
			current: 0,
		}
	}

	/// The byte at the current position, if any.
	pub fn next(&mut self) -> Option<u8> {
		let res = self.data.get(self.current).copied();
		if res.is_some() {
			self.current += 1;
		}
		res
	}

	/// Move the current position `n` bytes forward, clamped to end of input.
	pub fn advance(&mut self, n: usize) {
		self.current = (self.current + n).min(self.data.len());
	}

	/// Whether the reader has consumed all input.
	pub fn is_at_end(&self) -> bool {
		self.current == self.data.len()
	}
}

impl Cursor for BytesReader<'_> {
	fn offset(&self) -> usize {
		self.current
	}

	fn peek(&self, offset: usize) -> Option<u8> {
		self.data.get(self.current + offset).copied()
	}
}
