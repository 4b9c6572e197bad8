use alloc::string::String;
use alloc::vec::Vec;

use crate::Error;
use crate::buffer::{Ownership, StreamBuffer};
use crate::fixed::get_fixed;
use crate::varint::{
    CONTINUATION_BIT, GROUP_MASK, NORMALIZED_FLOAT_SCALE, zigzag_decode32, zigzag_decode64,
};

/// Sequential reader over a fully received buffer.
///
/// Reading past the end of the buffer never panics and never returns an error. Instead the stream
/// is marked as overflowed, the read returns 0 / false / empty and the cursor stays at the start of
/// that read. The flag is sticky: every read after it short-circuits to the default value without
/// touching the buffer. Check [is_overflowed](Self::is_overflowed) once after decoding a message.
///
/// # Example
/// ```
/// use binary_stream::ReadOnlyBinaryStream;
/// let mut rd = ReadOnlyBinaryStream::new(&[0x2A, 0x03, 0x02, b'h', b'i']);
/// assert_eq!(rd.get_byte(), 42);
/// assert_eq!(rd.get_var_int(), -2);
/// assert_eq!(rd.get_string().unwrap(), "hi");
/// assert_eq!(rd.get_unsigned_int(), 0);
/// assert!(rd.is_overflowed());
/// ```
#[derive(Clone, Debug, Default)]
pub struct ReadOnlyBinaryStream<'i> {
    buf: StreamBuffer<'i>,
    /// Next byte to read from, never beyond buf.len()
    read_pos: usize,
    overflowed: bool,
}

impl<'i> ReadOnlyBinaryStream<'i> {
    /// Create a stream viewing the provided slice.
    pub fn new(buf: &'i [u8]) -> Self {
        Self::with_ownership(buf, Ownership::Borrow)
    }

    /// Create a stream that either views or copies the provided slice.
    pub fn with_ownership(buf: &'i [u8], ownership: Ownership) -> Self {
        Self::from_buffer(StreamBuffer::new(buf, ownership))
    }

    pub(crate) fn from_buffer(buf: StreamBuffer<'i>) -> Self {
        ReadOnlyBinaryStream {
            buf,
            read_pos: 0,
            overflowed: false,
        }
    }

    /// Copy the viewed bytes if needed, so that the stream no longer depends on the caller's buffer.
    /// Cursor and overflow flag are preserved.
    pub fn into_owned(self) -> ReadOnlyBinaryStream<'static> {
        ReadOnlyBinaryStream {
            buf: self.buf.into_owned(),
            read_pos: self.read_pos,
            overflowed: self.overflowed,
        }
    }

    pub fn ownership(&self) -> Ownership {
        self.buf.ownership()
    }

    /// Read one byte, returns 0 on overflow.
    pub fn get_byte(&mut self) -> u8 {
        self.read_array::<1>()
            .map(|[byte]| byte)
            .unwrap_or_default()
    }

    /// Same as [get_byte](Self::get_byte).
    #[inline]
    pub fn get_unsigned_char(&mut self) -> u8 {
        self.get_byte()
    }

    /// Read one byte, any non-zero value is true.
    pub fn get_bool(&mut self) -> bool {
        self.get_byte() != 0
    }

    get_fixed!(unsigned_short, u16, from_le_bytes, "Little Endian");
    get_fixed!(signed_short, i16, from_le_bytes, "Little Endian");
    get_fixed!(unsigned_int, u32, from_le_bytes, "Little Endian");
    get_fixed!(signed_int, i32, from_le_bytes, "Little Endian");
    get_fixed!(unsigned_int64, u64, from_le_bytes, "Little Endian");
    get_fixed!(signed_int64, i64, from_le_bytes, "Little Endian");
    get_fixed!(float, f32, from_le_bytes, "Little Endian");
    get_fixed!(double, f64, from_le_bytes, "Little Endian");
    // The only Big Endian field on the wire.
    get_fixed!(signed_big_endian_int, i32, from_be_bytes, "Big Endian");

    /// Read 3 bytes in Little Endian, zero-extended.
    pub fn get_unsigned_int24(&mut self) -> u32 {
        self.read_array::<3>()
            .map(|[b0, b1, b2]| u32::from_le_bytes([b0, b1, b2, 0]))
            .unwrap_or_default()
    }

    /// Read LEB128 encoded u32.
    ///
    /// There is no limit on the number of continuation bytes, bits that do not fit into u32 are
    /// dropped. Returns 0 on overflow.
    pub fn get_unsigned_var_int(&mut self) -> u32 {
        let start = self.read_pos;
        let mut value = 0u32;
        let mut shift = 0u32;
        loop {
            let byte = self.get_byte();
            value |= ((byte & GROUP_MASK) as u32)
                .checked_shl(shift)
                .unwrap_or(0);
            if byte & CONTINUATION_BIT == 0 {
                break;
            }
            shift = shift.saturating_add(7);
        }
        if self.overflowed {
            self.read_pos = start;
            return 0;
        }
        value
    }

    /// Read LEB128 encoded u64.
    ///
    /// Unlike [get_unsigned_var_int](Self::get_unsigned_var_int), a continuation chain that does
    /// not fit into 64 bits is rejected with [Error::VarIntTooLong]. Running out of bytes is
    /// handled as any other overflow and returns `Ok(0)`.
    pub fn get_unsigned_var_int64(&mut self) -> Result<u64, Error> {
        let start = self.read_pos;
        let mut value = 0u64;
        let mut shift = 0u32;
        loop {
            let byte = self.get_byte();
            value |= ((byte & GROUP_MASK) as u64) << shift;
            if byte & CONTINUATION_BIT == 0 {
                break;
            }
            shift += 7;
            if shift >= 64 {
                #[cfg(feature = "defmt-extended")]
                defmt::trace!("get_unsigned_var_int64(): too long, started at {}", start);
                #[cfg(feature = "tracing-extended")]
                tracing::trace!("get_unsigned_var_int64(): too long, started at {start}");
                return Err(Error::VarIntTooLong);
            }
        }
        if self.overflowed {
            self.read_pos = start;
            return Ok(0);
        }
        Ok(value)
    }

    /// Read ZigZag encoded i32.
    pub fn get_var_int(&mut self) -> i32 {
        zigzag_decode32(self.get_unsigned_var_int())
    }

    /// Read ZigZag encoded i64.
    pub fn get_var_int64(&mut self) -> Result<i64, Error> {
        Ok(zigzag_decode64(self.get_unsigned_var_int64()?))
    }

    /// Read a fixed point number written with
    /// [write_normalized_float](crate::BinaryStream::write_normalized_float).
    pub fn get_normalized_float(&mut self) -> Result<f64, Error> {
        Ok(self.get_var_int64()? as f64 / NORMALIZED_FLOAT_SCALE)
    }

    /// Read UTF-8 string prefixed with its length in bytes as LEB128 u32.
    ///
    /// Returns an empty string on overflow, including when the length prefix claims more bytes
    /// than are left. Invalid UTF-8 is reported as [Error::MalformedUtf8], the string bytes are
    /// consumed in that case.
    pub fn get_string(&mut self) -> Result<String, Error> {
        let start = self.read_pos;
        let len = self.get_unsigned_var_int() as usize;
        if len == 0 {
            return Ok(String::new());
        }
        let Some(bytes) = self.take(len) else {
            self.read_pos = start;
            return Ok(String::new());
        };
        match core::str::from_utf8(bytes) {
            Ok(s) => Ok(String::from(s)),
            Err(_e) => {
                #[cfg(feature = "defmt-extended")]
                defmt::trace!("get_string(): malformed UTF-8 at {}", start);
                #[cfg(feature = "tracing-extended")]
                tracing::trace!("get_string(): malformed UTF-8 at {start}: {_e}");
                Err(Error::MalformedUtf8)
            }
        }
    }

    /// Fill target with the next `target.len()` bytes.
    /// Returns false and leaves target untouched on overflow.
    pub fn get_bytes(&mut self, target: &mut [u8]) -> bool {
        match self.take(target.len()) {
            Some(bytes) => {
                target.copy_from_slice(bytes);
                true
            }
            None => false,
        }
    }

    /// Read the next `len` bytes into a new Vec, empty on overflow.
    pub fn get_byte_vec(&mut self, len: usize) -> Vec<u8> {
        self.take(len).map(<[u8]>::to_vec).unwrap_or_default()
    }

    /// Position of the next byte to be read.
    #[inline]
    pub fn get_position(&self) -> usize {
        self.read_pos
    }

    #[inline]
    pub fn is_overflowed(&self) -> bool {
        self.overflowed
    }

    #[inline]
    pub fn has_data_left(&self) -> bool {
        self.read_pos < self.buf.len()
    }

    /// Unread bytes, the cursor is not moved.
    pub fn get_left_buffer(&self) -> &[u8] {
        &self.buf[self.read_pos..]
    }

    /// Returns the number of unread bytes.
    #[inline]
    pub fn bytes_left(&self) -> usize {
        self.buf.len() - self.read_pos
    }

    /// Total length of the underlying buffer, read or not.
    #[inline]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    fn read_array<const N: usize>(&mut self) -> Option<[u8; N]> {
        self.take(N)?.try_into().ok()
    }

    /// Advance by len bytes and return them, or raise the overflow flag without moving.
    fn take(&mut self, len: usize) -> Option<&[u8]> {
        if self.overflowed {
            return None;
        }
        if self.bytes_left() < len {
            #[cfg(feature = "defmt-extended")]
            defmt::trace!(
                "overflow at {}: {} bytes requested, {} left",
                self.read_pos,
                len,
                self.bytes_left()
            );
            #[cfg(feature = "tracing-extended")]
            tracing::trace!(
                "overflow at {}: {len} bytes requested, {} left",
                self.read_pos,
                self.bytes_left()
            );
            self.overflowed = true;
            return None;
        }
        let start = self.read_pos;
        self.read_pos += len;
        Some(&self.buf[start..self.read_pos])
    }
}

impl ReadOnlyBinaryStream<'static> {
    /// Create a stream owning the provided bytes, no copy is made.
    pub fn from_vec(buf: Vec<u8>) -> Self {
        Self::from_buffer(StreamBuffer::Owned(buf))
    }
}
