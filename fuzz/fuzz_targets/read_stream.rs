#![no_main]

use binary_stream::{BinaryStream, ReadOnlyBinaryStream};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Some((&selector, data)) = data.split_first() else {
        return;
    };
    let mut rdr = ReadOnlyBinaryStream::new(data);
    let mut wr = BinaryStream::new();
    let mut pos = rdr.get_position();
    let mut overflowed = false;
    for step in 0..64u8 {
        match selector.wrapping_add(step) % 12 {
            0 => wr.write_byte(rdr.get_byte()),
            1 => wr.write_unsigned_short(rdr.get_unsigned_short()),
            2 => wr.write_signed_int(rdr.get_signed_int()),
            3 => wr.write_signed_big_endian_int(rdr.get_signed_big_endian_int()),
            4 => wr.write_double(rdr.get_double()),
            5 => wr.write_unsigned_int24(rdr.get_unsigned_int24()),
            6 => wr.write_unsigned_var_int(rdr.get_unsigned_var_int()),
            7 => wr.write_var_int(rdr.get_var_int()),
            8 => {
                if let Ok(value) = rdr.get_var_int64() {
                    wr.write_var_int64(value);
                }
            }
            9 => {
                if let Ok(value) = rdr.get_normalized_float() {
                    wr.write_normalized_float(value);
                }
            }
            10 => {
                if let Ok(value) = rdr.get_string() {
                    wr.write_string(&value);
                }
            }
            _ => {
                let mut target = [0u8; 5];
                if rdr.get_bytes(&mut target) {
                    wr.write_raw_bytes(&target);
                }
            }
        }

        assert!(rdr.get_position() <= data.len());
        assert!(rdr.get_position() >= pos);
        if overflowed {
            assert!(rdr.is_overflowed());
            assert_eq!(rdr.get_position(), pos);
        }
        overflowed = rdr.is_overflowed();
        pos = rdr.get_position();
    }
    assert_eq!(rdr.get_left_buffer().len(), data.len() - pos);
});
