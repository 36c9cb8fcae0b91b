use crate::{ByteArray, Error};
use std::io;

impl From<Error> for io::Error {
    fn from(err: Error) -> Self {
        let kind = match err {
            Error::OutOfBounds { .. } => io::ErrorKind::UnexpectedEof,
            Error::CapacityExceeded { .. } => io::ErrorKind::OutOfMemory,
            Error::UnsupportedEncoding(_) | Error::StrTooLong(_) => io::ErrorKind::InvalidInput,
        };
        io::Error::new(kind, err)
    }
}

/// Writes at the current position, growing the buffer. All or nothing, partial writes are not performed.
impl io::Write for ByteArray {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.write_raw_slice(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Reads up to `buf.len()` bytes from the current position.
impl io::Read for ByteArray {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let len = buf.len().min(self.bytes_available());
        buf[..len].copy_from_slice(self.read_raw_slice(len)?);
        Ok(len)
    }
}
