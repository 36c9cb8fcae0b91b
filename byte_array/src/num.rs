macro_rules! write_num {
    ($fn_name:ident, $ty:ty) => {
        #[doc = "Write "]
        #[doc = stringify!($ty)]
        #[doc = " in the current byte order."]
        pub fn $fn_name(&mut self, val: $ty) -> Result<(), Error> {
            let bytes = match self.endian() {
                Endian::Big => val.to_be_bytes(),
                Endian::Little => val.to_le_bytes(),
            };
            self.write_raw_slice(&bytes)
        }
    };
}
pub(crate) use write_num;

macro_rules! read_num {
    ($fn_name:ident, $ty:ty) => {
        #[doc = "Read "]
        #[doc = stringify!($ty)]
        #[doc = " in the current byte order."]
        pub fn $fn_name(&mut self) -> Result<$ty, Error> {
            let bytes = self.read_array()?;
            Ok(match self.endian() {
                Endian::Big => <$ty>::from_be_bytes(bytes),
                Endian::Little => <$ty>::from_le_bytes(bytes),
            })
        }
    };
}
pub(crate) use read_num;
