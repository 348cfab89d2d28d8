use crate::ports::AnswerSource;
use std::sync::Arc;
use stubdns_domain::{Header, HeaderFlags, Message, ResponseCode};
use tracing::debug;

/// Turns a parsed request into its response.
///
/// Stateless: the response depends only on the request and the answer
/// source. The ID, opcode and RD bit are echoed; AA, TC, RA and Z are
/// always clear. Non-standard opcodes get NOTIMP. Every question is echoed
/// and answered through the [`AnswerSource`].
pub struct RespondToQueryUseCase {
    answers: Arc<dyn AnswerSource>,
}

impl RespondToQueryUseCase {
    pub fn new(answers: Arc<dyn AnswerSource>) -> Self {
        Self { answers }
    }

    pub fn execute(&self, request: &Message) -> Message {
        let request_flags = request.header.flags;
        let opcode = request_flags.opcode();

        let response_code = if opcode.is_standard_query() {
            ResponseCode::NoError
        } else {
            ResponseCode::NotImp
        };

        let questions = request.questions.clone();
        let answers: Vec<_> = questions
            .iter()
            .filter_map(|q| self.answers.answer(q))
            .collect();

        let flags = HeaderFlags::default()
            .with_response(true)
            .with_opcode(opcode)
            .with_authoritative(false)
            .with_truncated(false)
            .with_recursion_desired(request_flags.recursion_desired())
            .with_recursion_available(false)
            .with_reserved(0)
            .with_response_code(response_code);

        let header = Header {
            id: request.header.id,
            flags,
            question_count: questions.len() as u16,
            answer_count: answers.len() as u16,
            authority_count: 0,
            additional_count: 0,
        };

        debug!(
            id = header.id,
            %opcode,
            rcode = %response_code,
            questions = header.question_count,
            answers = header.answer_count,
            "Built response"
        );

        Message {
            header,
            questions,
            answers,
        }
    }
}
