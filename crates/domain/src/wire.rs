//! DNS message wire format (RFC 1035 §4.1).
//!
//! All multi-byte integers are big-endian. Domain names are written as
//! length-prefixed labels; compression pointers are rejected on decode.
mod flags;
mod header;
mod message;
mod name;
mod question;
mod reader;
mod record;
mod record_type;

pub use flags::{HeaderFlags, Opcode, ResponseCode};
pub use header::{Header, HEADER_LEN};
pub use message::Message;
pub use name::{DomainName, MAX_LABEL_LEN};
pub use question::Question;
pub use reader::WireReader;
pub use record::ResourceRecord;
pub use record_type::{RecordClass, RecordType};

/// Largest datagram accepted or produced over plain UDP.
pub const MAX_DATAGRAM_LEN: usize = 512;
