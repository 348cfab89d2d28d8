use super::header::{Header, HEADER_LEN};
use super::question::Question;
use super::reader::WireReader;
use super::record::ResourceRecord;
use crate::errors::WireError;

/// A DNS message: header, question section and answer section.
///
/// Authority and additional sections are neither parsed nor produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub header: Header,
    pub questions: Vec<Question>,
    pub answers: Vec<ResourceRecord>,
}

impl Message {
    /// Concatenates the header, each question and each record, in order.
    ///
    /// Header counts are written exactly as given. The first encoding
    /// failure is returned; no partial buffer escapes.
    pub fn build(
        header: &Header,
        questions: &[Question],
        records: &[ResourceRecord],
    ) -> Result<Vec<u8>, WireError> {
        let capacity = HEADER_LEN
            + questions.iter().map(Question::encoded_len).sum::<usize>()
            + records.iter().map(ResourceRecord::encoded_len).sum::<usize>();

        let mut buf = Vec::with_capacity(capacity);
        header.write_to(&mut buf);
        for question in questions {
            question.write_to(&mut buf)?;
        }
        for record in records {
            record.write_to(&mut buf)?;
        }
        Ok(buf)
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, WireError> {
        Self::build(&self.header, &self.questions, &self.answers)
    }

    /// Decodes the header and exactly `question_count` questions. Anything
    /// after the question section is ignored.
    pub fn parse_request(buf: &[u8]) -> Result<Self, WireError> {
        let header = Header::decode(buf)?;

        let mut reader = WireReader::at(buf, HEADER_LEN);
        let mut questions = Vec::with_capacity((header.question_count as usize).min(16));
        for _ in 0..header.question_count {
            questions.push(Question::read(&mut reader)?);
        }

        Ok(Self {
            header,
            questions,
            answers: Vec::new(),
        })
    }
}
