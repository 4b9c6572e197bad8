use alloc::vec::Vec;

use crate::ReadOnlyBinaryStream;
use crate::buffer::StreamBuffer;
use crate::fixed::write_fixed;
use crate::varint::{NORMALIZED_FLOAT_SCALE, encode_unsigned, zigzag_encode32, zigzag_encode64};

/// Append-only writer backed by a growable buffer.
///
/// Writes never fail, the buffer grows as needed. Every `write_*` method has a `get_*`
/// counterpart on [ReadOnlyBinaryStream] using the same layout, values must be read in the order
/// they were written.
///
/// # Example
/// ```
/// use binary_stream::BinaryStream;
/// let mut wr = BinaryStream::new();
/// wr.write_byte(0xFF);
/// wr.write_var_int(-2);
/// wr.write_string("hi");
/// assert_eq!(wr.data(), &[0xFF, 0x03, 0x02, b'h', b'i']);
///
/// let mut rd = wr.reader();
/// assert_eq!(rd.get_byte(), 255);
/// assert_eq!(rd.get_var_int(), -2);
/// assert_eq!(rd.get_string().unwrap(), "hi");
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct BinaryStream {
    buffer: Vec<u8>,
}

impl BinaryStream {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty stream, capacity is only a hint to avoid reallocations.
    pub fn with_capacity(capacity: usize) -> Self {
        BinaryStream {
            buffer: Vec::with_capacity(capacity),
        }
    }

    /// Continue writing after the provided bytes, no copy is made.
    pub fn from_vec(buffer: Vec<u8>) -> Self {
        BinaryStream { buffer }
    }

    /// Continue writing after a copy of the provided bytes.
    pub fn from_slice(buffer: &[u8]) -> Self {
        BinaryStream {
            buffer: buffer.to_vec(),
        }
    }

    /// Number of bytes written so far.
    #[inline]
    pub fn size(&self) -> usize {
        self.buffer.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Make room for at least `additional` more bytes. Only affects allocations.
    pub fn reserve(&mut self, additional: usize) {
        self.buffer.reserve(additional);
    }

    /// Drop all written bytes, allocated capacity is kept.
    pub fn reset(&mut self) {
        #[cfg(feature = "defmt-extended")]
        defmt::trace!("reset(): dropping {} bytes", self.buffer.len());
        #[cfg(feature = "tracing-extended")]
        tracing::trace!("reset(): dropping {} bytes", self.buffer.len());
        self.buffer.clear();
    }

    /// Bytes written so far.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.buffer
    }

    /// Copy of the bytes written so far, the stream is left as is.
    pub fn copy_buffer(&self) -> Vec<u8> {
        self.buffer.clone()
    }

    /// Take the bytes written so far, leaving the stream empty and ready for the next message.
    pub fn get_and_release_data(&mut self) -> Vec<u8> {
        #[cfg(feature = "defmt-extended")]
        defmt::trace!("get_and_release_data(): {=[u8]:x}", self.buffer.as_slice());
        #[cfg(feature = "tracing-extended")]
        tracing::trace!("get_and_release_data(): {:02x?}", self.buffer);
        core::mem::take(&mut self.buffer)
    }

    /// Reader borrowing the bytes written so far, starting from the first one.
    pub fn reader(&self) -> ReadOnlyBinaryStream<'_> {
        ReadOnlyBinaryStream::from_buffer(StreamBuffer::Borrowed(&self.buffer))
    }

    /// Write one byte.
    pub fn write_byte(&mut self, value: u8) {
        self.buffer.push(value);
    }

    /// Same as [write_byte](Self::write_byte).
    #[inline]
    pub fn write_unsigned_char(&mut self, value: u8) {
        self.write_byte(value);
    }

    /// Write bool as one byte, 1 or 0.
    pub fn write_bool(&mut self, value: bool) {
        self.write_byte(value as u8);
    }

    write_fixed!(unsigned_short, u16, to_le_bytes, "Little Endian");
    write_fixed!(signed_short, i16, to_le_bytes, "Little Endian");
    write_fixed!(unsigned_int, u32, to_le_bytes, "Little Endian");
    write_fixed!(signed_int, i32, to_le_bytes, "Little Endian");
    write_fixed!(unsigned_int64, u64, to_le_bytes, "Little Endian");
    write_fixed!(signed_int64, i64, to_le_bytes, "Little Endian");
    write_fixed!(float, f32, to_le_bytes, "Little Endian");
    write_fixed!(double, f64, to_le_bytes, "Little Endian");
    write_fixed!(signed_big_endian_int, i32, to_be_bytes, "Big Endian");

    /// Write lower 24 bits in Little Endian, higher bits are dropped.
    pub fn write_unsigned_int24(&mut self, value: u32) {
        let [b0, b1, b2, _] = value.to_le_bytes();
        self.buffer.extend_from_slice(&[b0, b1, b2]);
    }

    /// Write u32 in LEB128, from 1 to 5 bytes.
    pub fn write_unsigned_var_int(&mut self, value: u32) {
        encode_unsigned(value as u64, &mut self.buffer);
    }

    /// Write u64 in LEB128, from 1 to 10 bytes.
    pub fn write_unsigned_var_int64(&mut self, value: u64) {
        encode_unsigned(value, &mut self.buffer);
    }

    /// Write i32 mapped with ZigZag and encoded in LEB128.
    pub fn write_var_int(&mut self, value: i32) {
        self.write_unsigned_var_int(zigzag_encode32(value));
    }

    /// Write i64 mapped with ZigZag and encoded in LEB128.
    pub fn write_var_int64(&mut self, value: i64) {
        self.write_unsigned_var_int64(zigzag_encode64(value));
    }

    /// Write float as a fixed point number: `value * 2147483647` truncated towards zero and written
    /// with [write_var_int64](Self::write_var_int64). Out of range values saturate.
    pub fn write_normalized_float(&mut self, value: f64) {
        self.write_var_int64((value * NORMALIZED_FLOAT_SCALE) as i64);
    }

    /// Write UTF-8 string prefixed with its length in bytes as LEB128 u32.
    ///
    /// # Panics
    /// If the string is longer than `u32::MAX` bytes, which cannot be represented on the wire.
    pub fn write_string(&mut self, value: &str) {
        let len = u32::try_from(value.len()).expect("string length does not fit into u32");
        self.write_unsigned_var_int(len);
        self.write_raw_bytes(value.as_bytes());
    }

    /// Write the first `num` bytes of origin as is, or all of them if origin is shorter.
    pub fn write_bytes(&mut self, origin: &[u8], num: usize) {
        let num = num.min(origin.len());
        self.write_raw_bytes(&origin[..num]);
    }

    /// Write the provided slice as is. Length is not written, so the reader must know it.
    pub fn write_raw_bytes(&mut self, raw: &[u8]) {
        self.buffer.extend_from_slice(raw);
    }

    /// Append unread bytes of another stream, without consuming them.
    pub fn write_stream(&mut self, stream: &ReadOnlyBinaryStream<'_>) {
        self.write_raw_bytes(stream.get_left_buffer());
    }
}

impl From<Vec<u8>> for BinaryStream {
    fn from(buffer: Vec<u8>) -> Self {
        BinaryStream::from_vec(buffer)
    }
}

impl From<BinaryStream> for Vec<u8> {
    fn from(stream: BinaryStream) -> Self {
        stream.buffer
    }
}

impl AsRef<[u8]> for BinaryStream {
    fn as_ref(&self) -> &[u8] {
        &self.buffer
    }
}
