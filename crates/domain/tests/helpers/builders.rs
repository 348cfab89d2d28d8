#![allow(dead_code)]

/// Assembles raw query datagrams byte by byte, independent of the codec
/// under test.
pub struct QueryBytesBuilder {
    id: u16,
    flags: u16,
    question_count: Option<u16>,
    questions: Vec<(String, u16, u16)>,
    trailing: Vec<u8>,
}

impl QueryBytesBuilder {
    pub fn new() -> Self {
        Self {
            id: 0x1234,
            flags: 0x0100,
            question_count: None,
            questions: Vec::new(),
            trailing: Vec::new(),
        }
    }

    pub fn id(mut self, id: u16) -> Self {
        self.id = id;
        self
    }

    pub fn flags(mut self, flags: u16) -> Self {
        self.flags = flags;
        self
    }

    /// Overrides QDCOUNT instead of deriving it from the questions added.
    pub fn question_count(mut self, count: u16) -> Self {
        self.question_count = Some(count);
        self
    }

    pub fn question(mut self, name: &str, qtype: u16, qclass: u16) -> Self {
        self.questions.push((name.to_string(), qtype, qclass));
        self
    }

    pub fn trailing(mut self, bytes: &[u8]) -> Self {
        self.trailing.extend_from_slice(bytes);
        self
    }

    pub fn build(self) -> Vec<u8> {
        let qdcount = self
            .question_count
            .unwrap_or(self.questions.len() as u16);

        let mut buf = Vec::new();
        buf.extend_from_slice(&self.id.to_be_bytes());
        buf.extend_from_slice(&self.flags.to_be_bytes());
        buf.extend_from_slice(&qdcount.to_be_bytes());
        buf.extend_from_slice(&[0, 0, 0, 0, 0, 0]);

        for (name, qtype, qclass) in &self.questions {
            buf.extend_from_slice(&wire_name(name));
            buf.extend_from_slice(&qtype.to_be_bytes());
            buf.extend_from_slice(&qclass.to_be_bytes());
        }

        buf.extend_from_slice(&self.trailing);
        buf
    }
}

impl Default for QueryBytesBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn wire_name(name: &str) -> Vec<u8> {
    let mut buf = Vec::new();
    if !name.is_empty() {
        for label in name.split('.') {
            buf.push(label.len() as u8);
            buf.extend_from_slice(label.as_bytes());
        }
    }
    buf.push(0);
    buf
}
