use crate::errors::WireError;

/// Bounds-checked cursor over an inbound buffer.
///
/// Every read either returns the requested bytes and advances, or fails with
/// [`WireError::Truncated`] and leaves the position untouched.
#[derive(Debug, Clone)]
pub struct WireReader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> WireReader<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    pub fn at(buf: &'a [u8], pos: usize) -> Self {
        Self { buf, pos }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        self.buf.len().saturating_sub(self.pos)
    }

    pub fn read_u8(&mut self) -> Result<u8, WireError> {
        let bytes = self.read_bytes(1)?;
        Ok(bytes[0])
    }

    pub fn read_u16(&mut self) -> Result<u16, WireError> {
        let bytes = self.read_bytes(2)?;
        Ok(u16::from_be_bytes([bytes[0], bytes[1]]))
    }

    pub fn read_u32(&mut self) -> Result<u32, WireError> {
        let bytes = self.read_bytes(4)?;
        Ok(u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    pub fn read_bytes(&mut self, len: usize) -> Result<&'a [u8], WireError> {
        self.ensure(len)?;
        let slice = &self.buf[self.pos..self.pos + len];
        self.pos += len;
        Ok(slice)
    }

    /// Fails unless at least `len` bytes remain.
    pub fn ensure(&self, len: usize) -> Result<(), WireError> {
        let available = self.remaining();
        if available < len {
            return Err(WireError::Truncated {
                needed: len,
                available,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_big_endian_integers() {
        let buf = [0x12, 0x34, 0x00, 0x00, 0x0E, 0x10, 0xFF];
        let mut reader = WireReader::new(&buf);
        assert_eq!(reader.read_u16().unwrap(), 0x1234);
        assert_eq!(reader.read_u32().unwrap(), 3600);
        assert_eq!(reader.read_u8().unwrap(), 0xFF);
        assert_eq!(reader.remaining(), 0);
    }

    #[test]
    fn test_short_read_reports_truncation_and_keeps_position() {
        let buf = [0x00, 0x01, 0x02];
        let mut reader = WireReader::at(&buf, 2);
        assert_eq!(
            reader.read_u16(),
            Err(WireError::Truncated {
                needed: 2,
                available: 1
            })
        );
        assert_eq!(reader.position(), 2);
    }

    #[test]
    fn test_position_past_end_has_nothing_remaining() {
        let buf = [0u8; 4];
        let reader = WireReader::at(&buf, 10);
        assert_eq!(reader.remaining(), 0);
        assert!(reader.ensure(1).is_err());
    }
}
