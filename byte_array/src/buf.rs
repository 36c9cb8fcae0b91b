use crate::{Endian, Error, MAX_CAPACITY};

/// Growable byte buffer with a read/write cursor and a selectable byte order.
///
/// Reads and writes happen at [position](ByteArray::position) and advance it by the width of the
/// value. Writes grow the buffer on demand, by exactly the amount missing, up to
/// [max_capacity](ByteArray::max_capacity). Every operation either succeeds completely or fails
/// without touching the position, length or content.
///
/// # Example
/// ```
/// use byte_array::{ByteArray, Endian};
/// let mut buf = ByteArray::new();
/// buf.write_u32(0x1234_5678).unwrap();
/// buf.set_endian(Endian::Little);
/// buf.write_u16(0xAABB).unwrap();
/// assert_eq!(buf.as_slice(), &[0x12, 0x34, 0x56, 0x78, 0xBB, 0xAA]);
///
/// buf.set_position(0);
/// buf.set_endian(Endian::Big);
/// assert_eq!(buf.read_u32(), Ok(0x1234_5678));
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ByteArray {
    buf: Vec<u8>,
    // Next byte to read from or write to, can be past the end of buf
    position: usize,
    endian: Endian,
    max_capacity: usize,
}

impl ByteArray {
    /// Create an empty buffer with Big Endian byte order.
    pub fn new() -> Self {
        Self {
            buf: Vec::new(),
            position: 0,
            endian: Endian::Big,
            max_capacity: MAX_CAPACITY,
        }
    }

    /// Create an empty buffer with the provided byte order.
    pub fn with_endian(endian: Endian) -> Self {
        Self {
            endian,
            ..Self::new()
        }
    }

    /// Create an empty buffer which will refuse to grow past `max_capacity` bytes.
    /// Values larger than [MAX_CAPACITY] are clamped to it.
    pub fn with_max_capacity(max_capacity: usize) -> Self {
        Self {
            max_capacity: max_capacity.min(MAX_CAPACITY),
            ..Self::new()
        }
    }

    /// Total number of bytes stored.
    #[inline]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Truncate or extend the buffer to `len` bytes.
    ///
    /// Truncation moves position back to `len` if it was past it. Extension fills new bytes with
    /// zeroes and does not move position.
    pub fn set_len(&mut self, len: usize) -> Result<(), Error> {
        if len > self.max_capacity {
            return Err(Error::CapacityExceeded {
                requested: len,
                max: self.max_capacity,
            });
        }

        #[cfg(feature = "tracing-extended")]
        tracing::trace!("set_len({len}): was {} position={}", self.buf.len(), self.position);

        if len <= self.buf.len() {
            self.buf.truncate(len);
            self.position = self.position.min(len);
        } else {
            self.buf.resize(len, 0);
        }
        Ok(())
    }

    /// Current read/write position in bytes.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Move the cursor. Any value is accepted: reads past the end fail with [Error::OutOfBounds],
    /// writes past the end zero-fill the gap before writing.
    #[inline]
    pub fn set_position(&mut self, position: usize) {
        self.position = position;
    }

    /// Byte order used by multi-byte accessors.
    #[inline]
    pub fn endian(&self) -> Endian {
        self.endian
    }

    /// Change byte order for all the following operations, already written data is not affected.
    #[inline]
    pub fn set_endian(&mut self, endian: Endian) {
        self.endian = endian;
    }

    /// Upper bound for the buffer length.
    #[inline]
    pub fn max_capacity(&self) -> usize {
        self.max_capacity
    }

    /// Number of bytes between position and the end of the buffer, 0 if position is past the end.
    #[inline]
    pub fn bytes_available(&self) -> usize {
        self.buf.len().saturating_sub(self.position)
    }

    /// Make sure `bytes` can be written at the current position, growing the buffer by exactly the
    /// missing amount if needed. New bytes are zeroed.
    pub fn ensure_capacity(&mut self, bytes: usize) -> Result<(), Error> {
        let required = self.end_of_write(bytes)?;
        if required > self.buf.len() {
            #[cfg(feature = "tracing-extended")]
            tracing::trace!("grow {} -> {required}", self.buf.len());
            self.buf.resize(required, 0);
        }
        Ok(())
    }

    /// Set position and length to zero, discarding all the data. Allocation is kept.
    pub fn clear(&mut self) {
        #[cfg(feature = "tracing-extended")]
        tracing::trace!("clear(): dropping {} bytes", self.buf.len());
        self.buf.clear();
        self.position = 0;
    }

    /// Whole buffer content, independent of position.
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.buf
    }

    /// Whole buffer content, independent of position.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.buf
    }

    /// Consume the buffer and return the stored bytes.
    pub fn into_vec(self) -> Vec<u8> {
        self.buf
    }

    /// Index one past the last byte of a `bytes` long write at the current position,
    /// or an error if the buffer is not allowed to grow that far.
    pub(crate) fn end_of_write(&self, bytes: usize) -> Result<usize, Error> {
        match self.position.checked_add(bytes) {
            Some(end) if end <= self.max_capacity => Ok(end),
            _ => Err(Error::CapacityExceeded {
                requested: self.position.saturating_add(bytes),
                max: self.max_capacity,
            }),
        }
    }

    /// Check that `len` bytes can be read from the current position.
    /// Fails even for `len == 0` when position is past the end.
    #[inline]
    pub(crate) fn check_available(&self, len: usize) -> Result<(), Error> {
        let available = self.bytes_available();
        if available < len || self.position > self.buf.len() {
            return Err(Error::OutOfBounds {
                requested: len,
                available,
            });
        }
        Ok(())
    }
}

impl TryFrom<Vec<u8>> for ByteArray {
    type Error = Error;

    /// Wrap existing bytes, position is set to 0.
    fn try_from(buf: Vec<u8>) -> Result<Self, Self::Error> {
        if buf.len() > MAX_CAPACITY {
            return Err(Error::CapacityExceeded {
                requested: buf.len(),
                max: MAX_CAPACITY,
            });
        }
        Ok(Self {
            buf,
            ..Self::new()
        })
    }
}

impl TryFrom<&[u8]> for ByteArray {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() > MAX_CAPACITY {
            return Err(Error::CapacityExceeded {
                requested: bytes.len(),
                max: MAX_CAPACITY,
            });
        }
        Ok(Self {
            buf: bytes.to_vec(),
            ..Self::new()
        })
    }
}

impl Default for ByteArray {
    fn default() -> Self {
        Self::new()
    }
}

impl AsRef<[u8]> for ByteArray {
    fn as_ref(&self) -> &[u8] {
        &self.buf
    }
}

#[cfg(test)]
mod tests {
    use crate::{ByteArray, Error, MAX_CAPACITY};

    #[test]
    fn starts_empty() {
        let buf = ByteArray::new();
        assert_eq!(buf.len(), 0);
        assert_eq!(buf.position(), 0);
        assert_eq!(buf.bytes_available(), 0);
        assert_eq!(buf.max_capacity(), MAX_CAPACITY);
    }

    #[test]
    fn grow_by_deficit() {
        let mut buf = ByteArray::try_from(vec![1, 2, 3, 4]).unwrap();
        buf.set_position(2);
        buf.ensure_capacity(2).unwrap();
        assert_eq!(buf.len(), 4);
        buf.ensure_capacity(5).unwrap();
        assert_eq!(buf.len(), 7);
        assert_eq!(buf.as_slice(), &[1, 2, 3, 4, 0, 0, 0]);
        assert_eq!(buf.position(), 2);
    }

    #[test]
    fn grow_past_max() {
        let mut buf = ByteArray::with_max_capacity(4);
        buf.ensure_capacity(4).unwrap();
        assert_eq!(
            buf.ensure_capacity(5),
            Err(Error::CapacityExceeded {
                requested: 5,
                max: 4
            })
        );
        assert_eq!(buf.len(), 4);
    }

    #[test]
    fn max_capacity_is_clamped() {
        let buf = ByteArray::with_max_capacity(usize::MAX);
        assert_eq!(buf.max_capacity(), MAX_CAPACITY);
    }

    #[test]
    fn position_overflow() {
        let mut buf = ByteArray::new();
        buf.set_position(usize::MAX);
        assert!(matches!(
            buf.ensure_capacity(1),
            Err(Error::CapacityExceeded { .. })
        ));
        assert_eq!(buf.len(), 0);
    }

    #[test]
    fn truncate_clamps_position() {
        let mut buf = ByteArray::new();
        buf.set_len(10).unwrap();
        buf.set_position(8);
        buf.set_len(3).unwrap();
        assert_eq!(buf.position(), 3);
        assert_eq!(buf.bytes_available(), 0);
    }

    #[test]
    fn truncate_keeps_position_before_end() {
        let mut buf = ByteArray::try_from(&[1u8, 2, 3, 4, 5][..]).unwrap();
        buf.set_position(1);
        buf.set_len(3).unwrap();
        assert_eq!(buf.position(), 1);
        assert_eq!(buf.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn extend_zero_fills() {
        let mut buf = ByteArray::try_from(vec![0xFF]).unwrap();
        buf.set_len(4).unwrap();
        assert_eq!(buf.as_slice(), &[0xFF, 0, 0, 0]);
        assert_eq!(buf.position(), 0);
        assert!(buf.set_len(MAX_CAPACITY + 1).is_err());
        assert_eq!(buf.len(), 4);
    }

    #[test]
    fn clear_twice() {
        let mut buf = ByteArray::try_from(vec![1, 2, 3]).unwrap();
        buf.set_position(2);
        buf.clear();
        assert_eq!((buf.position(), buf.len()), (0, 0));
        buf.clear();
        assert_eq!((buf.position(), buf.len()), (0, 0));
    }

    #[test]
    fn zero_length_past_end() {
        let mut buf = ByteArray::try_from(vec![1, 2, 3]).unwrap();
        buf.set_position(3);
        assert_eq!(buf.check_available(0), Ok(()));
        buf.set_position(4);
        assert_eq!(
            buf.check_available(0),
            Err(Error::OutOfBounds {
                requested: 0,
                available: 0
            })
        );
    }

    #[test]
    fn available_past_end() {
        let mut buf = ByteArray::try_from(vec![1, 2]).unwrap();
        buf.set_position(5);
        assert_eq!(buf.bytes_available(), 0);
        assert_eq!(
            buf.check_available(1),
            Err(Error::OutOfBounds {
                requested: 1,
                available: 0
            })
        );
    }
}
