use super::flags::HeaderFlags;
use super::reader::WireReader;
use crate::errors::WireError;

/// Encoded size of every DNS header.
pub const HEADER_LEN: usize = 12;

/// Fixed 12-byte message header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Header {
    pub id: u16,
    pub flags: HeaderFlags,
    pub question_count: u16,
    pub answer_count: u16,
    pub authority_count: u16,
    pub additional_count: u16,
}

impl Header {
    pub fn to_bytes(&self) -> [u8; HEADER_LEN] {
        let mut buf = [0u8; HEADER_LEN];
        buf[0..2].copy_from_slice(&self.id.to_be_bytes());
        buf[2..4].copy_from_slice(&self.flags.bits().to_be_bytes());
        buf[4..6].copy_from_slice(&self.question_count.to_be_bytes());
        buf[6..8].copy_from_slice(&self.answer_count.to_be_bytes());
        buf[8..10].copy_from_slice(&self.authority_count.to_be_bytes());
        buf[10..12].copy_from_slice(&self.additional_count.to_be_bytes());
        buf
    }

    pub fn write_to(&self, buf: &mut Vec<u8>) {
        buf.extend_from_slice(&self.to_bytes());
    }

    /// Decodes the header from the first 12 bytes of `buf`. Trailing bytes
    /// are left for the section decoders.
    pub fn decode(buf: &[u8]) -> Result<Self, WireError> {
        let mut reader = WireReader::new(buf);
        reader.ensure(HEADER_LEN)?;

        Ok(Self {
            id: reader.read_u16()?,
            flags: HeaderFlags::from_bits(reader.read_u16()?),
            question_count: reader.read_u16()?,
            answer_count: reader.read_u16()?,
            authority_count: reader.read_u16()?,
            additional_count: reader.read_u16()?,
        })
    }
}
