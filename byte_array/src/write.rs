use crate::num::write_num;
use crate::{ByteArray, Endian, Error, WriteByteArray};

impl ByteArray {
    /// Write u8.
    pub fn write_u8(&mut self, val: u8) -> Result<(), Error> {
        self.write_raw_slice(&[val])
    }

    /// Write i8.
    pub fn write_i8(&mut self, val: i8) -> Result<(), Error> {
        self.write_u8(val as u8)
    }

    /// Write bool as one byte, 1 for true and 0 for false.
    pub fn write_bool(&mut self, val: bool) -> Result<(), Error> {
        self.write_u8(val as u8)
    }

    write_num!(write_u16, u16);
    write_num!(write_i16, i16);
    write_num!(write_u32, u32);
    write_num!(write_i32, i32);
    write_num!(write_u64, u64);
    write_num!(write_i64, i64);
    write_num!(write_f32, f32);
    write_num!(write_f64, f64);

    /// Write the provided slice at the current position as is, growing the buffer if needed.
    /// Length is not written, see [ByteArray::write_utf] for self-describing strings.
    pub fn write_raw_slice(&mut self, val: &[u8]) -> Result<(), Error> {
        if val.is_empty() {
            return Ok(());
        }
        let end = self.end_of_write(val.len())?;
        self.ensure_capacity(val.len())?;
        let start = self.position();
        self.as_mut_slice()[start..end].copy_from_slice(val);
        self.set_position(end);
        Ok(())
    }

    /// Write `len` bytes of `src` starting from `offset`, or everything after `offset` if `len` is None.
    ///
    /// ```
    /// use byte_array::ByteArray;
    /// let mut buf = ByteArray::new();
    /// buf.write_bytes(&[1, 2, 3, 4, 5], 1, Some(3)).unwrap();
    /// buf.write_bytes(&[6, 7], 1, None).unwrap();
    /// assert_eq!(buf.as_slice(), &[2, 3, 4, 7]);
    /// ```
    pub fn write_bytes(
        &mut self,
        src: &[u8],
        offset: usize,
        len: Option<usize>,
    ) -> Result<(), Error> {
        let Some(tail) = src.get(offset..) else {
            return Err(Error::OutOfBounds {
                requested: len.unwrap_or(0),
                available: 0,
            });
        };
        let len = len.unwrap_or(tail.len());
        if len > tail.len() {
            return Err(Error::OutOfBounds {
                requested: len,
                available: tail.len(),
            });
        }
        self.write_raw_slice(&tail[..len])
    }

    /// Write any object that implements [WriteByteArray].
    ///
    /// Composite values are first written into a scratch buffer with the same byte order, so that
    /// failing half way through leaves this buffer untouched.
    pub fn write<T: WriteByteArray + ?Sized>(&mut self, val: &T) -> Result<(), Error> {
        let mut scratch = ByteArray::with_max_capacity(self.max_capacity());
        scratch.set_endian(self.endian());
        val.write_byte_array(&mut scratch)?;
        self.write_raw_slice(scratch.as_slice())
    }
}
