use thiserror::Error;

use crate::wire::RecordType;

/// Failures raised while encoding or decoding DNS wire data.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WireError {
    /// A fixed-size or length-declared field runs past the end of the buffer.
    #[error("Truncated message: needed {needed} bytes, {available} available")]
    Truncated { needed: usize, available: usize },

    /// A label is empty or longer than 63 bytes.
    #[error("Invalid label length: {len} (must be 1-63)")]
    InvalidLabel { len: usize },

    /// Resource data does not fit the fixed size of its record type.
    #[error("Invalid rdata for {record_type} record: {len} bytes")]
    InvalidRData { record_type: RecordType, len: usize },

    /// A compression pointer was found where a label length was expected.
    #[error("Compression pointers are not supported (at offset {offset})")]
    UnsupportedCompression { offset: usize },
}
