#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod binary_stream;
pub use binary_stream::BinaryStream;
pub mod buffer;
pub use buffer::Ownership;
pub mod read_only_stream;
pub use read_only_stream::ReadOnlyBinaryStream;
pub mod varint;

mod fixed;

/// Hard decoding errors.
///
/// Running out of bytes is not one of them: reads past the end of the buffer raise the sticky
/// overflow flag and return a default value instead, see [ReadOnlyBinaryStream::is_overflowed].
#[derive(thiserror::Error, Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    #[error("VarInt64 continuation chain does not fit into 64 bits")]
    VarIntTooLong,
    #[error("String bytes are not valid UTF-8")]
    MalformedUtf8,
}

pub mod prelude {
    pub use crate::Error as BinaryStreamError;
    pub use crate::binary_stream::BinaryStream;
    pub use crate::buffer::Ownership;
    pub use crate::read_only_stream::ReadOnlyBinaryStream;
    pub use crate::varint::{
        NORMALIZED_FLOAT_SCALE, unsigned_var_int_len, zigzag_decode32, zigzag_decode64,
        zigzag_encode32, zigzag_encode64,
    };
}
