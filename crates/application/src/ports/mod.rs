mod answer_source;

pub use answer_source::AnswerSource;
