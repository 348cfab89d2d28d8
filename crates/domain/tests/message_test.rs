mod helpers;

use helpers::{wire_name, QueryBytesBuilder};
use std::net::Ipv4Addr;
use stubdns_domain::{
    Header, HeaderFlags, Message, Opcode, Question, RecordClass, RecordType, ResourceRecord,
    WireError, HEADER_LEN,
};

fn response_header(question_count: u16, answer_count: u16) -> Header {
    Header {
        id: 0x0A0B,
        flags: HeaderFlags::default().with_response(true),
        question_count,
        answer_count,
        authority_count: 0,
        additional_count: 0,
    }
}

#[test]
fn test_build_concatenates_sections_in_order() {
    let header = response_header(1, 1);
    let question = Question::new("codecrafters.io", RecordType::A, RecordClass::IN);
    let answer = ResourceRecord::a("codecrafters.io", 60, Ipv4Addr::new(8, 8, 8, 8));

    let bytes = Message::build(&header, &[question.clone()], &[answer.clone()]).unwrap();

    let mut expected = header.to_bytes().to_vec();
    expected.extend(question.to_bytes().unwrap());
    expected.extend(answer.to_bytes().unwrap());
    assert_eq!(bytes, expected);
}

#[test]
fn test_build_header_only() {
    let header = response_header(0, 0);

    let bytes = Message::build(&header, &[], &[]).unwrap();

    assert_eq!(bytes, header.to_bytes().to_vec());
}

#[test]
fn test_build_propagates_question_failure() {
    let bad = Question::new("a..b", RecordType::A, RecordClass::IN);

    assert_eq!(
        Message::build(&response_header(1, 0), &[bad], &[]),
        Err(WireError::InvalidLabel { len: 0 })
    );
}

#[test]
fn test_build_propagates_record_failure() {
    let bad = ResourceRecord {
        name: "a".into(),
        record_type: RecordType::A,
        record_class: RecordClass::IN,
        ttl: 1,
        rdata: vec![0; 16],
    };

    assert!(matches!(
        Message::build(&response_header(0, 1), &[], &[bad]),
        Err(WireError::InvalidRData { .. })
    ));
}

#[test]
fn test_parse_single_question_request() {
    let buf = QueryBytesBuilder::new()
        .id(0x4242)
        .flags(0x0100)
        .question("codecrafters.io", 1, 1)
        .build();

    let message = Message::parse_request(&buf).unwrap();

    assert_eq!(message.header.id, 0x4242);
    assert_eq!(message.header.flags.opcode(), Opcode::Query);
    assert!(message.header.flags.recursion_desired());
    assert_eq!(message.questions.len(), 1);
    assert_eq!(message.questions[0].name, "codecrafters.io");
    assert_eq!(message.questions[0].record_type, RecordType::A);
    assert_eq!(message.questions[0].record_class, RecordClass::IN);
    assert!(message.answers.is_empty());
}

#[test]
fn test_parse_multiple_questions_in_order() {
    let buf = QueryBytesBuilder::new()
        .question("abc.longassdomainname.com", 1, 1)
        .question("def.longassdomainname.com", 28, 1)
        .build();

    let message = Message::parse_request(&buf).unwrap();

    assert_eq!(message.questions.len(), 2);
    assert_eq!(message.questions[0].name, "abc.longassdomainname.com");
    assert_eq!(message.questions[1].name, "def.longassdomainname.com");
    assert_eq!(message.questions[1].record_type, RecordType::AAAA);
}

#[test]
fn test_parse_ignores_sections_after_questions() {
    let mut trailing = wire_name("example.com");
    trailing.extend_from_slice(&[0x00, 0x29, 0x10, 0x00]);
    let buf = QueryBytesBuilder::new()
        .question("example.com", 1, 1)
        .trailing(&trailing)
        .build();

    let message = Message::parse_request(&buf).unwrap();

    assert_eq!(message.questions.len(), 1);
}

#[test]
fn test_parse_short_buffer_is_truncated() {
    assert!(matches!(
        Message::parse_request(&[0x12, 0x34, 0x01]),
        Err(WireError::Truncated { .. })
    ));
}

#[test]
fn test_parse_fewer_questions_than_declared_is_truncated() {
    let buf = QueryBytesBuilder::new()
        .question_count(2)
        .question("example.com", 1, 1)
        .build();

    assert!(matches!(
        Message::parse_request(&buf),
        Err(WireError::Truncated { .. })
    ));
}

#[test]
fn test_parse_zero_questions() {
    let buf = QueryBytesBuilder::new().build();
    assert_eq!(buf.len(), HEADER_LEN);

    let message = Message::parse_request(&buf).unwrap();

    assert!(message.questions.is_empty());
}

#[test]
fn test_parse_compressed_question_name_is_rejected() {
    let buf = QueryBytesBuilder::new()
        .question_count(1)
        .trailing(&[0xC0, 0x0C, 0x00, 0x01, 0x00, 0x01])
        .build();

    assert_eq!(
        Message::parse_request(&buf),
        Err(WireError::UnsupportedCompression { offset: HEADER_LEN })
    );
}

#[test]
fn test_to_bytes_matches_build() {
    let message = Message {
        header: response_header(1, 0),
        questions: vec![Question::new("a.b", RecordType::A, RecordClass::IN)],
        answers: vec![],
    };

    assert_eq!(
        message.to_bytes().unwrap(),
        Message::build(&message.header, &message.questions, &message.answers).unwrap()
    );
}
