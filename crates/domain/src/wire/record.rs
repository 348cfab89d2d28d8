use std::net::Ipv4Addr;

use super::name::DomainName;
use super::reader::WireReader;
use super::record_type::{RecordClass, RecordType};
use crate::errors::WireError;

/// Bytes between the owner name and the rdata: type, class, TTL, rdlength.
const FIXED_FIELDS_LEN: usize = 10;

/// A resource record as carried in the answer section.
///
/// The rdlength field is not stored; it is written from `rdata.len()` so the
/// two can never disagree.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceRecord {
    pub name: DomainName,
    pub record_type: RecordType,
    pub record_class: RecordClass,
    pub ttl: u32,
    pub rdata: Vec<u8>,
}

impl ResourceRecord {
    /// An `IN A` record. Octets are stored in address order.
    pub fn a(name: impl Into<DomainName>, ttl: u32, address: Ipv4Addr) -> Self {
        Self {
            name: name.into(),
            record_type: RecordType::A,
            record_class: RecordClass::IN,
            ttl,
            rdata: address.octets().to_vec(),
        }
    }

    pub fn rdlength(&self) -> usize {
        self.rdata.len()
    }

    /// The address of an A record with well-formed rdata.
    pub fn ipv4(&self) -> Option<Ipv4Addr> {
        if self.record_type != RecordType::A {
            return None;
        }
        let octets: [u8; 4] = self.rdata.as_slice().try_into().ok()?;
        Some(Ipv4Addr::from(octets))
    }

    pub fn encoded_len(&self) -> usize {
        self.name.encoded_len() + FIXED_FIELDS_LEN + self.rdata.len()
    }

    pub fn write_to(&self, buf: &mut Vec<u8>) -> Result<(), WireError> {
        self.validate_rdata()?;
        let rdlength = self.rdata.len() as u16;

        self.name.write_to(buf)?;
        buf.reserve(FIXED_FIELDS_LEN + self.rdata.len());
        buf.extend_from_slice(&self.record_type.to_u16().to_be_bytes());
        buf.extend_from_slice(&self.record_class.to_u16().to_be_bytes());
        buf.extend_from_slice(&self.ttl.to_be_bytes());
        buf.extend_from_slice(&rdlength.to_be_bytes());
        buf.extend_from_slice(&self.rdata);
        Ok(())
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, WireError> {
        let mut buf = Vec::with_capacity(self.encoded_len());
        self.write_to(&mut buf)?;
        Ok(buf)
    }

    /// Decodes a record starting at `offset`, returning it with the offset
    /// just past its rdata.
    pub fn decode(buf: &[u8], offset: usize) -> Result<(Self, usize), WireError> {
        let mut reader = WireReader::at(buf, offset);
        let record = Self::read(&mut reader)?;
        Ok((record, reader.position()))
    }

    pub(crate) fn read(reader: &mut WireReader<'_>) -> Result<Self, WireError> {
        let name = DomainName::read(reader)?;
        reader.ensure(FIXED_FIELDS_LEN)?;
        let record_type = RecordType::from_u16(reader.read_u16()?);
        let record_class = RecordClass::from_u16(reader.read_u16()?);
        let ttl = reader.read_u32()?;
        let rdlength = reader.read_u16()? as usize;
        let rdata = reader.read_bytes(rdlength)?.to_vec();

        let record = Self {
            name,
            record_type,
            record_class,
            ttl,
            rdata,
        };
        record.validate_rdata()?;
        Ok(record)
    }

    fn validate_rdata(&self) -> Result<(), WireError> {
        let len = self.rdata.len();
        let fixed_mismatch = self
            .record_type
            .fixed_rdata_len()
            .is_some_and(|expected| expected != len);

        if fixed_mismatch || len > u16::MAX as usize {
            return Err(WireError::InvalidRData {
                record_type: self.record_type,
                len,
            });
        }
        Ok(())
    }
}
