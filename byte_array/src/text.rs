use crate::{ByteArray, Error};
use encoding_rs::{Encoding, UTF_16BE, UTF_16LE};

/// Character set used by the `*_utf*` family of methods.
pub const UTF8: &str = "utf-8";

/// Service that converts between strings and bytes in a named character set.
///
/// Implementations must never emit a byte order mark, and must not strip or sniff one when decoding.
pub trait CharsetCodec {
    fn encoding_exists(&self, charset: &str) -> bool;

    fn encode(&self, value: &str, charset: &str) -> Result<Vec<u8>, Error>;

    fn decode(&self, bytes: &[u8], charset: &str) -> Result<String, Error>;
}

/// [CharsetCodec] backed by `encoding_rs`, accepting WHATWG Encoding Standard labels
/// (case-insensitive, e.g. `"utf-8"`, `"windows-1251"`, `"shift_jis"`, `"utf-16le"`).
///
/// Characters not representable in the target legacy encoding are written as HTML numeric
/// character references. Malformed input is decoded with U+FFFD replacement characters.
#[derive(Copy, Clone, Debug, Default)]
pub struct EncodingRsCodec;

impl EncodingRsCodec {
    fn lookup(charset: &str) -> Result<&'static Encoding, Error> {
        // Labels that map to the "replacement" encoding cannot round trip anything.
        Encoding::for_label_no_replacement(charset.as_bytes())
            .ok_or_else(|| Error::UnsupportedEncoding(charset.to_string()))
    }
}

impl CharsetCodec for EncodingRsCodec {
    fn encoding_exists(&self, charset: &str) -> bool {
        Self::lookup(charset).is_ok()
    }

    fn encode(&self, value: &str, charset: &str) -> Result<Vec<u8>, Error> {
        let encoding = Self::lookup(charset)?;
        // encoding_rs only decodes UTF-16, encoding into it is done here.
        if encoding == UTF_16LE {
            return Ok(value.encode_utf16().flat_map(u16::to_le_bytes).collect());
        }
        if encoding == UTF_16BE {
            return Ok(value.encode_utf16().flat_map(u16::to_be_bytes).collect());
        }
        let (bytes, _, _) = encoding.encode(value);
        Ok(bytes.into_owned())
    }

    fn decode(&self, bytes: &[u8], charset: &str) -> Result<String, Error> {
        let encoding = Self::lookup(charset)?;
        let (text, _had_errors) = encoding.decode_without_bom_handling(bytes);
        Ok(text.into_owned())
    }
}

impl ByteArray {
    /// Encode `value` with the provided character set and write it at the current position.
    /// If `with_length_prefix` is true, the encoded length is written first as u16 in the current
    /// byte order.
    ///
    /// ```
    /// use byte_array::ByteArray;
    /// let mut buf = ByteArray::new();
    /// buf.write_multi_byte("Привет", "windows-1251", true).unwrap();
    /// assert_eq!(buf.as_slice(), &[0, 6, 0xCF, 0xF0, 0xE8, 0xE2, 0xE5, 0xF2]);
    /// ```
    pub fn write_multi_byte(
        &mut self,
        value: &str,
        charset: &str,
        with_length_prefix: bool,
    ) -> Result<(), Error> {
        self.write_multi_byte_with(&EncodingRsCodec, value, charset, with_length_prefix)
    }

    /// Same as [ByteArray::write_multi_byte], but with a user provided codec.
    pub fn write_multi_byte_with<C: CharsetCodec + ?Sized>(
        &mut self,
        codec: &C,
        value: &str,
        charset: &str,
        with_length_prefix: bool,
    ) -> Result<(), Error> {
        if !codec.encoding_exists(charset) {
            #[cfg(feature = "tracing-extended")]
            tracing::trace!("write_multi_byte: unsupported charset {charset:?}");
            return Err(Error::UnsupportedEncoding(charset.to_string()));
        }
        let bytes = codec.encode(value, charset)?;

        #[cfg(feature = "tracing-extended")]
        tracing::trace!(
            "write_multi_byte({charset}, prefix={with_length_prefix}): {} chars -> {} bytes",
            value.chars().count(),
            bytes.len()
        );

        if with_length_prefix {
            let len = u16::try_from(bytes.len()).map_err(|_| Error::StrTooLong(bytes.len()))?;
            // fail before the prefix is written if the payload will not fit
            self.end_of_write(2 + bytes.len())?;
            self.write_u16(len)?;
        }
        self.write_bytes(&bytes, 0, None)
    }

    /// Read exactly `len` bytes and decode them with the provided character set.
    pub fn read_multi_byte(&mut self, len: usize, charset: &str) -> Result<String, Error> {
        self.read_multi_byte_with(&EncodingRsCodec, len, charset)
    }

    /// Same as [ByteArray::read_multi_byte], but with a user provided codec.
    pub fn read_multi_byte_with<C: CharsetCodec + ?Sized>(
        &mut self,
        codec: &C,
        len: usize,
        charset: &str,
    ) -> Result<String, Error> {
        if !codec.encoding_exists(charset) {
            #[cfg(feature = "tracing-extended")]
            tracing::trace!("read_multi_byte: unsupported charset {charset:?}");
            return Err(Error::UnsupportedEncoding(charset.to_string()));
        }
        self.check_available(len)?;
        let start = self.position();
        let value = codec.decode(&self.as_slice()[start..start + len], charset)?;
        self.set_position(start + len);

        #[cfg(feature = "tracing-extended")]
        tracing::trace!("read_multi_byte({len}, {charset}) = {value:?}");

        Ok(value)
    }

    /// Write UTF-8 string prefixed with its length in bytes as u16.
    pub fn write_utf(&mut self, value: &str) -> Result<(), Error> {
        self.write_multi_byte(value, UTF8, true)
    }

    /// Read a string written with [ByteArray::write_utf].
    pub fn read_utf(&mut self) -> Result<String, Error> {
        self.read_utf_with(&EncodingRsCodec)
    }

    /// Same as [ByteArray::read_utf], but with a user provided codec.
    pub fn read_utf_with<C: CharsetCodec + ?Sized>(&mut self, codec: &C) -> Result<String, Error> {
        let position = self.position();
        let len = self.read_u16()?;
        let result = self.read_multi_byte_with(codec, len as usize, UTF8);
        if result.is_err() {
            self.set_position(position);
        }
        result
    }

    /// Write UTF-8 string without a length prefix.
    pub fn write_utf_bytes(&mut self, value: &str) -> Result<(), Error> {
        self.write_multi_byte(value, UTF8, false)
    }

    /// Read `len` bytes as UTF-8 string.
    pub fn read_utf_bytes(&mut self, len: usize) -> Result<String, Error> {
        self.read_multi_byte(len, UTF8)
    }
}
