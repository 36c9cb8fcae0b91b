use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// Byte order used by all the multi-byte accessors of [ByteArray](crate::ByteArray).
/// Single byte values (u8, i8, bool) and raw slices are not affected.
///
/// Displayed and parsed as `"bigEndian"` / `"littleEndian"`:
/// ```
/// use byte_array::Endian;
/// let endian: Endian = "littleEndian".parse().unwrap();
/// assert_eq!(endian, Endian::Little);
/// assert_eq!(Endian::Big.to_string(), "bigEndian");
/// ```
#[derive(
    Copy, Clone, Debug, Default, Eq, PartialEq, Hash, AsRefStr, Display, EnumIter, EnumString,
)]
pub enum Endian {
    /// Most significant byte first.
    #[default]
    #[strum(serialize = "bigEndian")]
    Big,
    /// Least significant byte first.
    #[strum(serialize = "littleEndian")]
    Little,
}

impl Endian {
    /// Byte order of the target this code is compiled for.
    pub const fn native() -> Self {
        if cfg!(target_endian = "big") {
            Endian::Big
        } else {
            Endian::Little
        }
    }

    /// The other byte order.
    pub const fn swapped(self) -> Self {
        match self {
            Endian::Big => Endian::Little,
            Endian::Little => Endian::Big,
        }
    }
}
