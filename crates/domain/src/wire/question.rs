use super::name::DomainName;
use super::reader::WireReader;
use super::record_type::{RecordClass, RecordType};
use crate::errors::WireError;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Question {
    pub name: DomainName,
    pub record_type: RecordType,
    pub record_class: RecordClass,
}

impl Question {
    pub fn new(
        name: impl Into<DomainName>,
        record_type: RecordType,
        record_class: RecordClass,
    ) -> Self {
        Self {
            name: name.into(),
            record_type,
            record_class,
        }
    }

    pub fn encoded_len(&self) -> usize {
        self.name.encoded_len() + 4
    }

    pub fn write_to(&self, buf: &mut Vec<u8>) -> Result<(), WireError> {
        self.name.write_to(buf)?;
        buf.extend_from_slice(&self.record_type.to_u16().to_be_bytes());
        buf.extend_from_slice(&self.record_class.to_u16().to_be_bytes());
        Ok(())
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, WireError> {
        let mut buf = Vec::with_capacity(self.encoded_len());
        self.write_to(&mut buf)?;
        Ok(buf)
    }

    /// Decodes a question starting at `offset`, returning it with the offset
    /// just past its class field.
    pub fn decode(buf: &[u8], offset: usize) -> Result<(Self, usize), WireError> {
        let mut reader = WireReader::at(buf, offset);
        let question = Self::read(&mut reader)?;
        Ok((question, reader.position()))
    }

    pub(crate) fn read(reader: &mut WireReader<'_>) -> Result<Self, WireError> {
        let name = DomainName::read(reader)?;
        reader.ensure(4)?;
        let record_type = RecordType::from_u16(reader.read_u16()?);
        let record_class = RecordClass::from_u16(reader.read_u16()?);

        Ok(Self {
            name,
            record_type,
            record_class,
        })
    }
}
