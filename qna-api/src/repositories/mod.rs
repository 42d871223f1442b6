//! Row-level access to the `questions` and `answers` tables.
//!
//! Repositories borrow a single connection, so everything a service does
//! for one request runs on the connection it checked out.

pub mod answer_repository;
pub mod question_repository;

pub use answer_repository::AnswerRepository;
pub use question_repository::QuestionRepository;
