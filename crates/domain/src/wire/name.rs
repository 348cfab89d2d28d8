use std::fmt;

use super::reader::WireReader;
use crate::errors::WireError;

/// Longest label the length byte can describe without touching the two
/// high bits reserved for pointers and extended label types.
pub const MAX_LABEL_LEN: usize = 63;

const LABEL_TYPE_MASK: u8 = 0xC0;

/// A domain name as an ordered list of raw labels.
///
/// Labels are stored exactly as received or given (case-preserved, no
/// escaping). Text names are split on `.`; the empty string is the root and
/// has no labels. Validation happens at encode time, so a name built from
/// text may hold labels that cannot be written.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct DomainName {
    labels: Vec<Vec<u8>>,
}

impl DomainName {
    pub fn root() -> Self {
        Self::default()
    }

    pub fn from_labels<I, L>(labels: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<Vec<u8>>,
    {
        Self {
            labels: labels.into_iter().map(Into::into).collect(),
        }
    }

    pub fn labels(&self) -> impl Iterator<Item = &[u8]> {
        self.labels.iter().map(Vec::as_slice)
    }

    pub fn label_count(&self) -> usize {
        self.labels.len()
    }

    pub fn is_root(&self) -> bool {
        self.labels.is_empty()
    }

    /// Size of the wire form: a length byte plus the bytes of every label,
    /// then the terminating zero.
    pub fn encoded_len(&self) -> usize {
        self.labels.iter().map(|l| l.len() + 1).sum::<usize>() + 1
    }

    /// Appends the wire form to `buf`. Nothing is written if any label is
    /// empty or longer than [`MAX_LABEL_LEN`].
    pub fn write_to(&self, buf: &mut Vec<u8>) -> Result<(), WireError> {
        if let Some(bad) = self
            .labels
            .iter()
            .find(|l| l.is_empty() || l.len() > MAX_LABEL_LEN)
        {
            return Err(WireError::InvalidLabel { len: bad.len() });
        }

        buf.reserve(self.encoded_len());
        for label in &self.labels {
            buf.push(label.len() as u8);
            buf.extend_from_slice(label);
        }
        buf.push(0);
        Ok(())
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, WireError> {
        let mut buf = Vec::with_capacity(self.encoded_len());
        self.write_to(&mut buf)?;
        Ok(buf)
    }

    /// Decodes a name starting at `offset`, returning it together with the
    /// offset just past the terminating zero byte.
    pub fn decode(buf: &[u8], offset: usize) -> Result<(Self, usize), WireError> {
        let mut reader = WireReader::at(buf, offset);
        let name = Self::read(&mut reader)?;
        Ok((name, reader.position()))
    }

    pub(crate) fn read(reader: &mut WireReader<'_>) -> Result<Self, WireError> {
        let mut labels = Vec::new();

        loop {
            let len_offset = reader.position();
            let len = reader.read_u8()?;
            if len == 0 {
                break;
            }
            if len & LABEL_TYPE_MASK == LABEL_TYPE_MASK {
                return Err(WireError::UnsupportedCompression { offset: len_offset });
            }
            if len as usize > MAX_LABEL_LEN {
                return Err(WireError::InvalidLabel { len: len as usize });
            }
            labels.push(reader.read_bytes(len as usize)?.to_vec());
        }

        Ok(Self { labels })
    }
}

impl From<&str> for DomainName {
    fn from(value: &str) -> Self {
        if value.is_empty() {
            return Self::root();
        }
        Self::from_labels(value.split('.').map(str::as_bytes))
    }
}

impl From<String> for DomainName {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl PartialEq<&str> for DomainName {
    fn eq(&self, other: &&str) -> bool {
        *self == DomainName::from(*other)
    }
}

impl fmt::Display for DomainName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            return f.write_str(".");
        }
        for (i, label) in self.labels.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            f.write_str(&String::from_utf8_lossy(label))?;
        }
        Ok(())
    }
}
