use stubdns_domain::{Question, ResourceRecord};

/// Produces the answer record for one question.
///
/// This is the seam where a real resolution strategy plugs in. Returning
/// `None` leaves the question unanswered.
pub trait AnswerSource: Send + Sync {
    fn answer(&self, question: &Question) -> Option<ResourceRecord>;
}
