pub mod answer_service;
pub mod question_service;

pub use answer_service::AnswerService;
pub use question_service::QuestionService;

pub(crate) const QUESTION_NOT_FOUND: &str = "Question not found";
pub(crate) const ANSWER_NOT_FOUND: &str = "Answer not found";
