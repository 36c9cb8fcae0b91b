use crate::num::read_num;
use crate::{ByteArray, Endian, Error, ReadByteArray};

impl ByteArray {
    /// Read u8.
    pub fn read_u8(&mut self) -> Result<u8, Error> {
        let [val] = self.read_array::<1>()?;
        Ok(val)
    }

    /// Read i8.
    pub fn read_i8(&mut self) -> Result<i8, Error> {
        Ok(self.read_u8()? as i8)
    }

    /// Read one byte, any non-zero value is true.
    pub fn read_bool(&mut self) -> Result<bool, Error> {
        Ok(self.read_u8()? != 0)
    }

    read_num!(read_u16, u16);
    read_num!(read_i16, i16);
    read_num!(read_u32, u32);
    read_num!(read_i32, i32);
    read_num!(read_u64, u64);
    read_num!(read_i64, i64);
    read_num!(read_f32, f32);
    read_num!(read_f64, f64);

    /// Borrow `len` bytes at the current position and advance past them.
    pub fn read_raw_slice(&mut self, len: usize) -> Result<&[u8], Error> {
        self.check_available(len)?;
        let start = self.position();
        self.set_position(start + len);
        Ok(&self.as_slice()[start..start + len])
    }

    /// Fill `dst` completely from the current position.
    pub fn read_into(&mut self, dst: &mut [u8]) -> Result<(), Error> {
        let src = self.read_raw_slice(dst.len())?;
        dst.copy_from_slice(src);
        Ok(())
    }

    /// Copy `len` bytes, or all the available bytes if `len` is None, into `dst` starting at index
    /// `offset`. `dst` is extended with zeroes if needed, its position is not changed.
    ///
    /// ```
    /// use byte_array::ByteArray;
    /// let mut src = ByteArray::try_from(vec![1, 2, 3, 4]).unwrap();
    /// let mut dst = ByteArray::try_from(vec![9]).unwrap();
    /// src.set_position(1);
    /// src.read_bytes(&mut dst, 2, None).unwrap();
    /// assert_eq!(dst.as_slice(), &[9, 0, 2, 3, 4]);
    /// assert_eq!(dst.position(), 0);
    /// assert_eq!(src.bytes_available(), 0);
    /// ```
    pub fn read_bytes(
        &mut self,
        dst: &mut ByteArray,
        offset: usize,
        len: Option<usize>,
    ) -> Result<(), Error> {
        let len = len.unwrap_or_else(|| self.bytes_available());
        self.check_available(len)?;
        let end = match offset.checked_add(len) {
            Some(end) if end <= dst.max_capacity() => end,
            _ => {
                return Err(Error::CapacityExceeded {
                    requested: offset.saturating_add(len),
                    max: dst.max_capacity(),
                })
            }
        };
        if end > dst.len() {
            dst.set_len(end)?;
        }
        let src = self.read_raw_slice(len)?;
        dst.as_mut_slice()[offset..end].copy_from_slice(src);
        Ok(())
    }

    /// Read any value that implements [ReadByteArray].
    /// Position is restored if reading a composite value fails half way through.
    pub fn read<T: ReadByteArray>(&mut self) -> Result<T, Error> {
        let position = self.position();
        let result = T::read_byte_array(self);
        if result.is_err() {
            self.set_position(position);
        }
        result
    }

    pub(crate) fn read_array<const N: usize>(&mut self) -> Result<[u8; N], Error> {
        let mut bytes = [0u8; N];
        self.read_into(&mut bytes)?;
        Ok(bytes)
    }
}
