//! Question bank: a flat CSV file of exam questions and reference answers.
//!
//! * [`QuestionRecord`] — one row (`question`, `official_answer`, `chapter`).
//! * [`QuestionBank`] — reads the file on demand and draws a random row.
//! * [`QuestionBankError`] — why the file could not be read.

pub mod bank;
pub mod record;

pub use bank::{parse_questions, QuestionBank, QuestionBankError};
pub use record::{QuestionRecord, ERROR_CHAPTER};
