//! Character related utilities.

/// Byte constants significant to the scanners.
pub mod byte {
	/// Character tabulation
	pub const TAB: u8 = b'\t';
	/// Line feed
	pub const LF: u8 = 0xA;
	/// Carriage return
	pub const CR: u8 = 0xD;
	/// Space
	pub const SP: u8 = 0x20;
}

pub trait U8Ext {
	/// Whether this byte can appear in a plain identifier.
	fn is_identifier_continue(&self) -> bool;
}

impl U8Ext for u8 {
	fn is_identifier_continue(&self) -> bool {
		matches!(self, b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'_')
	}
}
