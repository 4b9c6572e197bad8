macro_rules! get_fixed {
    ($name:ident, $ty:ty, $from_bytes:ident, $endian:literal) => {
        paste::paste! {
            #[doc = "Read `"]
            #[doc = stringify!($ty)]
            #[doc = "` in "]
            #[doc = $endian]
            #[doc = ", returns 0 on overflow."]
            pub fn [<get_ $name>](&mut self) -> $ty {
                self.read_array()
                    .map(<$ty>::$from_bytes)
                    .unwrap_or_default()
            }
        }
    };
}
pub(crate) use get_fixed;

macro_rules! write_fixed {
    ($name:ident, $ty:ty, $to_bytes:ident, $endian:literal) => {
        paste::paste! {
            #[doc = "Write `"]
            #[doc = stringify!($ty)]
            #[doc = "` in "]
            #[doc = $endian]
            #[doc = "."]
            pub fn [<write_ $name>](&mut self, value: $ty) {
                self.buffer.extend_from_slice(&value.$to_bytes());
            }
        }
    };
}
pub(crate) use write_fixed;
