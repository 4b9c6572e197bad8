//! Byte layouts that other implementations of the codec depend on.

use binary_stream::prelude::*;
use hex_literal::hex;

#[test]
fn byte_and_bool() {
    let mut wr = BinaryStream::new();
    wr.write_byte(0xFF);
    wr.write_unsigned_char(0x7F);
    wr.write_bool(true);
    wr.write_bool(false);
    assert_eq!(wr.data(), hex!("FF 7F 01 00"));

    let mut rd = wr.reader();
    assert_eq!(rd.get_byte(), 255);
    assert_eq!(rd.get_unsigned_char(), 0x7F);
    assert!(rd.get_bool());
    assert!(!rd.get_bool());
}

#[test]
fn any_non_zero_byte_is_true() {
    let mut rd = ReadOnlyBinaryStream::new(&[0x02, 0x80, 0x00]);
    assert!(rd.get_bool());
    assert!(rd.get_bool());
    assert!(!rd.get_bool());
}

#[test]
fn shorts() {
    let mut wr = BinaryStream::new();
    wr.write_unsigned_short(0xBEEF);
    wr.write_signed_short(i16::MIN);
    // 300 does not fit into a byte, but does into a short
    wr.write_unsigned_short(300);
    assert_eq!(wr.data(), hex!("EF BE 00 80 2C 01"));
}

#[test]
fn ints_little_endian_and_big_endian() {
    let mut wr = BinaryStream::new();
    wr.write_unsigned_int(1);
    wr.write_signed_int(-1);
    wr.write_signed_big_endian_int(1);
    assert_eq!(wr.data(), hex!("01 00 00 00 FF FF FF FF 00 00 00 01"));

    let mut rd = wr.reader();
    assert_eq!(rd.get_signed_big_endian_int(), 0x0100_0000);
    assert_eq!(rd.get_signed_int(), -1);
    assert_eq!(rd.get_signed_big_endian_int(), 1);
}

#[test]
fn int64() {
    let mut wr = BinaryStream::new();
    wr.write_unsigned_int64(0x0102_0304_0506_0708);
    wr.write_signed_int64(-2);
    assert_eq!(
        wr.data(),
        hex!("08 07 06 05 04 03 02 01 FE FF FF FF FF FF FF FF")
    );
}

#[test]
fn floats() {
    let mut wr = BinaryStream::new();
    wr.write_float(-2.0);
    wr.write_double(0.1);
    assert_eq!(wr.data(), hex!("00 00 00 C0 9A 99 99 99 99 99 B9 3F"));

    let mut rd = wr.reader();
    assert_eq!(rd.get_float(), -2.0);
    assert_eq!(rd.get_double(), 0.1);
}

#[test]
fn int24() {
    let mut wr = BinaryStream::new();
    wr.write_unsigned_int24(0xFF_FFFF);
    wr.write_unsigned_int24(0x1_000_000);
    assert_eq!(wr.data(), hex!("FF FF FF 00 00 00"));

    let mut rd = wr.reader();
    assert_eq!(rd.get_unsigned_int24(), 0xFF_FFFF);
    assert_eq!(rd.get_unsigned_int24(), 0);
    assert!(!rd.is_overflowed());
}

#[test]
fn unsigned_var_int_groups() {
    let cases: &[(u64, &[u8])] = &[
        (0, &hex!("00")[..]),
        (1, &hex!("01")[..]),
        (127, &hex!("7F")[..]),
        (128, &hex!("80 01")[..]),
        (300, &hex!("AC 02")[..]),
        (16_384, &hex!("80 80 01")[..]),
        (u32::MAX as u64, &hex!("FF FF FF FF 0F")[..]),
        (1 << 63, &hex!("80 80 80 80 80 80 80 80 80 01")[..]),
    ];
    for (value, bytes) in cases {
        let mut wr = BinaryStream::new();
        wr.write_unsigned_var_int64(*value);
        assert_eq!(wr.data(), *bytes, "value {value}");

        if let Ok(value32) = u32::try_from(*value) {
            let mut wr = BinaryStream::new();
            wr.write_unsigned_var_int(value32);
            assert_eq!(wr.data(), *bytes, "value {value}");
        }
    }
}

#[test]
fn signed_var_int_zigzag() {
    let mut wr = BinaryStream::new();
    wr.write_var_int(0);
    wr.write_var_int(-1);
    wr.write_var_int(1);
    wr.write_var_int(-2);
    wr.write_var_int(i32::MIN);
    wr.write_var_int64(i64::MAX);
    assert_eq!(
        wr.data(),
        hex!("00 01 02 03 FF FF FF FF 0F FE FF FF FF FF FF FF FF FF 01")
    );
}

#[test]
fn normalized_float() {
    let mut wr = BinaryStream::new();
    wr.write_normalized_float(1.0);
    assert_eq!(wr.data(), hex!("FE FF FF FF 0F"));

    let mut rd = wr.reader();
    assert_eq!(rd.get_normalized_float(), Ok(1.0));
}

#[test]
fn normalized_float_truncates_towards_zero() {
    let step = 1.0 / NORMALIZED_FLOAT_SCALE;
    let mut wr = BinaryStream::new();
    wr.write_normalized_float(step * 0.9);
    wr.write_normalized_float(-step * 0.9);
    assert_eq!(wr.data(), hex!("00 00"));
}

#[test]
fn strings() {
    let mut wr = BinaryStream::new();
    wr.write_string("hi");
    wr.write_string("");
    wr.write_string("héllo");
    assert_eq!(wr.data(), hex!("02 68 69 00 06 68 C3 A9 6C 6C 6F"));

    let mut rd = wr.reader();
    assert_eq!(rd.get_string().unwrap(), "hi");
    assert_eq!(rd.get_string().unwrap(), "");
    assert_eq!(rd.get_string().unwrap(), "héllo");
    assert!(!rd.has_data_left());
}

#[test]
fn long_string_has_multi_byte_prefix() {
    let text = "x".repeat(200);
    let mut wr = BinaryStream::new();
    wr.write_string(&text);
    assert_eq!(&wr.data()[..2], hex!("C8 01"));
    assert_eq!(wr.size(), 202);
    assert_eq!(wr.reader().get_string().unwrap(), text);
}

#[test]
fn mixed_message() {
    let mut wr = BinaryStream::new();
    wr.write_unsigned_var_int(0x90);
    wr.write_string("Steve");
    wr.write_var_int64(-5);
    wr.write_float(1.5);
    wr.write_bool(true);
    wr.write_unsigned_int24(42);

    let bytes = wr.get_and_release_data();
    let mut rd = ReadOnlyBinaryStream::new(&bytes);
    assert_eq!(rd.get_unsigned_var_int(), 0x90);
    assert_eq!(rd.get_string().unwrap(), "Steve");
    assert_eq!(rd.get_var_int64(), Ok(-5));
    assert_eq!(rd.get_float(), 1.5);
    assert!(rd.get_bool());
    assert_eq!(rd.get_unsigned_int24(), 42);
    assert!(!rd.has_data_left());
    assert!(!rd.is_overflowed());
}
