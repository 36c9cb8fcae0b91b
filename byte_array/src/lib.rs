pub use buf::ByteArray;
pub use endian::Endian;
pub use text::{CharsetCodec, EncodingRsCodec};
pub use traits::{ReadByteArray, WriteByteArray};

pub mod buf;
pub mod endian;
mod io;
mod num;
pub mod read;
pub mod text;
pub mod traits;
pub mod write;

/// Hard ceiling for the length of any [ByteArray], 1 GiB.
pub const MAX_CAPACITY: usize = 1 << 30;

#[derive(thiserror::Error, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    #[error("Requested {requested} bytes, but only {available} are available")]
    OutOfBounds { requested: usize, available: usize },
    #[error("Buffer would grow to {requested} bytes, maximum is {max}")]
    CapacityExceeded { requested: usize, max: usize },
    #[error("Unsupported character set: {0}")]
    UnsupportedEncoding(String),
    #[error("Encoded string is {0} bytes long, which does not fit into u16 length prefix")]
    StrTooLong(usize),
}

pub mod prelude {
    pub use crate::buf::ByteArray;
    pub use crate::endian::Endian;
    pub use crate::text::{CharsetCodec, EncodingRsCodec};
    pub use crate::traits::{ReadByteArray, WriteByteArray};
    pub use crate::Error as ByteArrayError;
    pub use crate::MAX_CAPACITY;
}
