use std::path::PathBuf;
use std::sync::Arc;

use crate::evaluate::AnswerEvaluator;
use crate::questions::QuestionBank;

/// Shared, immutable handler state. Cloned per request.
#[derive(Clone)]
pub struct AppState {
    pub questions: Arc<QuestionBank>,
    pub evaluator: Arc<AnswerEvaluator>,
    pub index_page: Arc<PathBuf>,
}

impl AppState {
    pub fn new(questions: QuestionBank, evaluator: AnswerEvaluator, index_page: PathBuf) -> Self {
        Self {
            questions: Arc::new(questions),
            evaluator: Arc::new(evaluator),
            index_page: Arc::new(index_page),
        }
    }
}
