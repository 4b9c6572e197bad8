use alloc::vec::Vec;
use core::ops::Deref;

/// How a [ReadOnlyBinaryStream](crate::ReadOnlyBinaryStream) holds on to the bytes it is given.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Ownership {
    /// View the caller's buffer without copying, the stream cannot outlive it.
    #[default]
    Borrow,
    /// Copy the bytes into a buffer owned by the stream.
    Copy,
}

/// Immutable bytes behind a read cursor, either borrowed or owned.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum StreamBuffer<'i> {
    Borrowed(&'i [u8]),
    Owned(Vec<u8>),
}

impl<'i> StreamBuffer<'i> {
    pub fn new(buf: &'i [u8], ownership: Ownership) -> Self {
        match ownership {
            Ownership::Borrow => StreamBuffer::Borrowed(buf),
            Ownership::Copy => StreamBuffer::Owned(buf.to_vec()),
        }
    }

    pub fn ownership(&self) -> Ownership {
        match self {
            StreamBuffer::Borrowed(_) => Ownership::Borrow,
            StreamBuffer::Owned(_) => Ownership::Copy,
        }
    }

    /// Detach from the borrowed bytes by copying them, owned buffers are moved as is.
    pub fn into_owned(self) -> StreamBuffer<'static> {
        match self {
            StreamBuffer::Borrowed(buf) => StreamBuffer::Owned(buf.to_vec()),
            StreamBuffer::Owned(buf) => StreamBuffer::Owned(buf),
        }
    }
}

impl Default for StreamBuffer<'_> {
    fn default() -> Self {
        StreamBuffer::Borrowed(&[])
    }
}

impl Deref for StreamBuffer<'_> {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        match self {
            StreamBuffer::Borrowed(buf) => buf,
            StreamBuffer::Owned(buf) => buf.as_slice(),
        }
    }
}
