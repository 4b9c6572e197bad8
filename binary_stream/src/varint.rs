//! Base-128 variable length integers (LEB128) and ZigZag mapping of signed values onto them.
//!
//! Each byte carries 7 bits of the number, least significant group first, the high bit is set
//! when one more byte follows.

use alloc::vec::Vec;

/// Fixed point scale of the normalized float encoding, `i32::MAX` as a float.
pub const NORMALIZED_FLOAT_SCALE: f64 = 2147483647.0;

pub(crate) const CONTINUATION_BIT: u8 = 0x80;
pub(crate) const GROUP_MASK: u8 = 0x7F;

/// Map signed onto unsigned so that small magnitudes stay small: 0, -1, 1, -2 => 0, 1, 2, 3.
#[inline]
pub fn zigzag_encode32(value: i32) -> u32 {
    ((value << 1) ^ (value >> 31)) as u32
}

#[inline]
pub fn zigzag_decode32(value: u32) -> i32 {
    if value & 1 != 0 {
        !((value >> 1) as i32)
    } else {
        (value >> 1) as i32
    }
}

#[inline]
pub fn zigzag_encode64(value: i64) -> u64 {
    ((value << 1) ^ (value >> 63)) as u64
}

#[inline]
pub fn zigzag_decode64(value: u64) -> i64 {
    if value & 1 != 0 {
        !((value >> 1) as i64)
    } else {
        (value >> 1) as i64
    }
}

/// Number of bytes an unsigned varint takes on the wire, at least 1.
pub fn unsigned_var_int_len(value: u64) -> usize {
    if value == 0 {
        1
    } else {
        ((64 - value.leading_zeros()) as usize).div_ceil(7)
    }
}

/// Append `value` as an unsigned varint. Always emits at least one byte.
pub(crate) fn encode_unsigned(mut value: u64, out: &mut Vec<u8>) {
    loop {
        let mut byte = value as u8 & GROUP_MASK;
        value >>= 7;
        if value != 0 {
            byte |= CONTINUATION_BIT;
        }
        out.push(byte);
        if value == 0 {
            break;
        }
    }
}
