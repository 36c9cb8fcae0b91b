use crate::{ByteArray, Error};

/// Types that can be written into a [ByteArray] as a sequence of primitive values.
pub trait WriteByteArray {
    fn write_byte_array(&self, wr: &mut ByteArray) -> Result<(), Error>;
}

/// Types that can be read back from a [ByteArray], in the same order they were written.
pub trait ReadByteArray: Sized {
    fn read_byte_array(rd: &mut ByteArray) -> Result<Self, Error>;
}

macro_rules! impl_write {
    ($ty:ty, $write_fn:ident) => {
        impl WriteByteArray for $ty {
            fn write_byte_array(&self, wr: &mut ByteArray) -> Result<(), Error> {
                wr.$write_fn(*self)
            }
        }
    };
}
impl_write!(bool, write_bool);
impl_write!(u8, write_u8);
impl_write!(u16, write_u16);
impl_write!(u32, write_u32);
impl_write!(u64, write_u64);
impl_write!(i8, write_i8);
impl_write!(i16, write_i16);
impl_write!(i32, write_i32);
impl_write!(i64, write_i64);
impl_write!(f32, write_f32);
impl_write!(f64, write_f64);

macro_rules! impl_read {
    ($ty:ty, $read_fn:ident) => {
        impl ReadByteArray for $ty {
            fn read_byte_array(rd: &mut ByteArray) -> Result<Self, Error> {
                rd.$read_fn()
            }
        }
    };
}
impl_read!(bool, read_bool);
impl_read!(u8, read_u8);
impl_read!(u16, read_u16);
impl_read!(u32, read_u32);
impl_read!(u64, read_u64);
impl_read!(i8, read_i8);
impl_read!(i16, read_i16);
impl_read!(i32, read_i32);
impl_read!(i64, read_i64);
impl_read!(f32, read_f32);
impl_read!(f64, read_f64);

/// UTF-8 with u16 length prefix, see [ByteArray::write_utf].
impl WriteByteArray for str {
    fn write_byte_array(&self, wr: &mut ByteArray) -> Result<(), Error> {
        wr.write_utf(self)
    }
}

impl WriteByteArray for String {
    fn write_byte_array(&self, wr: &mut ByteArray) -> Result<(), Error> {
        wr.write_utf(self.as_str())
    }
}

impl ReadByteArray for String {
    fn read_byte_array(rd: &mut ByteArray) -> Result<Self, Error> {
        rd.read_utf()
    }
}

impl<T: WriteByteArray + ?Sized> WriteByteArray for &T {
    fn write_byte_array(&self, wr: &mut ByteArray) -> Result<(), Error> {
        (*self).write_byte_array(wr)
    }
}

impl<T: WriteByteArray, const N: usize> WriteByteArray for [T; N] {
    fn write_byte_array(&self, wr: &mut ByteArray) -> Result<(), Error> {
        for item in self {
            item.write_byte_array(wr)?;
        }
        Ok(())
    }
}

impl<T: ReadByteArray, const N: usize> ReadByteArray for [T; N] {
    fn read_byte_array(rd: &mut ByteArray) -> Result<Self, Error> {
        let mut items = Vec::with_capacity(N);
        for _ in 0..N {
            items.push(T::read_byte_array(rd)?);
        }
        items.try_into().map_err(|items: Vec<T>| Error::OutOfBounds {
            requested: N,
            available: items.len(),
        })
    }
}

macro_rules! impl_tuple {
    ($($name:ident),+) => {
        impl<$($name: WriteByteArray),+> WriteByteArray for ($($name,)+) {
            #[allow(non_snake_case)]
            fn write_byte_array(&self, wr: &mut ByteArray) -> Result<(), Error> {
                let ($($name,)+) = self;
                $($name.write_byte_array(wr)?;)+
                Ok(())
            }
        }

        impl<$($name: ReadByteArray),+> ReadByteArray for ($($name,)+) {
            fn read_byte_array(rd: &mut ByteArray) -> Result<Self, Error> {
                Ok(($($name::read_byte_array(rd)?,)+))
            }
        }
    };
}
impl_tuple!(T0);
impl_tuple!(T0, T1);
impl_tuple!(T0, T1, T2);
impl_tuple!(T0, T1, T2, T3);
impl_tuple!(T0, T1, T2, T3, T4);
impl_tuple!(T0, T1, T2, T3, T4, T5);
impl_tuple!(T0, T1, T2, T3, T4, T5, T6);
impl_tuple!(T0, T1, T2, T3, T4, T5, T6, T7);

#[cfg(test)]
mod tests {
    use crate::{ByteArray, Endian, Error};
    use hex_literal::hex;

    #[test]
    fn tuple() {
        let mut buf = ByteArray::new();
        buf.write(&(0xAA_u8, 0xBBCC_u16)).unwrap();
        assert_eq!(buf.as_slice(), &hex!("AA BBCC"));

        buf.set_position(0);
        let x: (u8, u16) = buf.read().unwrap();
        assert_eq!(x, (0xAA, 0xBBCC));
    }

    #[test]
    fn tuple_little_endian() {
        let mut buf = ByteArray::with_endian(Endian::Little);
        buf.write(&(true, -1i16, 2u32)).unwrap();
        assert_eq!(buf.as_slice(), &hex!("01 FFFF 02000000"));
    }

    #[test]
    fn array() {
        let mut buf = ByteArray::new();
        buf.write(&[1u16, 2, 3]).unwrap();
        assert_eq!(buf.as_slice(), &hex!("0001 0002 0003"));

        buf.set_position(0);
        let x: [u16; 3] = buf.read().unwrap();
        assert_eq!(x, [1, 2, 3]);
    }

    #[test]
    fn array_short_read() {
        let mut buf = ByteArray::try_from(vec![0, 1, 0, 2]).unwrap();
        assert_eq!(
            buf.read::<[u16; 3]>(),
            Err(Error::OutOfBounds {
                requested: 2,
                available: 0
            })
        );
        assert_eq!(buf.position(), 0);
        assert_eq!(buf.read::<[u16; 2]>(), Ok([1, 2]));
    }

    #[test]
    fn strings() {
        let mut buf = ByteArray::new();
        buf.write(&("ab", String::from("c"))).unwrap();
        assert_eq!(buf.as_slice(), &hex!("0002 6162 0001 63"));

        buf.set_position(0);
        let (a, b): (String, String) = buf.read().unwrap();
        assert_eq!(a, "ab");
        assert_eq!(b, "c");
    }
}
