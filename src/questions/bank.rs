//! CSV-backed question bank.
//!
//! The file is re-read on every draw; nothing is cached between requests, so
//! edits to the CSV show up on the next `GET /api/question`.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;

use super::record::QuestionRecord;

// ---------------------------------------------------------------------------
// QuestionBankError
// ---------------------------------------------------------------------------

/// Failure to read the question bank.
#[derive(Debug, Error)]
pub enum QuestionBankError {
    /// The configured file does not exist.
    #[error("question bank not found: {0}")]
    NotFound(PathBuf),

    /// The file exists but could not be opened or read.
    #[error("failed to read question bank: {0}")]
    Io(#[from] std::io::Error),

    /// The header row could not be parsed.
    #[error("failed to parse question bank: {0}")]
    Csv(#[from] csv::Error),

    /// The header row has no column for a required field.
    #[error("question bank has no {0} column")]
    MissingColumn(&'static str),
}

/// Header names accepted for each required field.
const REQUIRED_COLUMNS: &[(&str, &[&str])] = &[
    ("question", &["question", "Question"]),
    ("official_answer", &["official_answer", "Answer", "answer"]),
];

// ---------------------------------------------------------------------------
// QuestionBank
// ---------------------------------------------------------------------------

/// Handle on the question CSV file. Construction does no I/O.
#[derive(Debug, Clone)]
pub struct QuestionBank {
    path: PathBuf,
}

impl QuestionBank {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every row of the bank.
    pub fn load(&self) -> Result<Vec<QuestionRecord>, QuestionBankError> {
        if !self.path.exists() {
            return Err(QuestionBankError::NotFound(self.path.clone()));
        }
        let mut file = File::open(&self.path)?;
        let mut content = String::new();
        file.read_to_string(&mut content)?;
        parse_questions(&content)
    }

    /// Pick one question uniformly at random using the thread RNG.
    ///
    /// See [`QuestionBank::draw_with`].
    pub fn draw(&self) -> Option<QuestionRecord> {
        self.draw_with(&mut rand::thread_rng())
    }

    /// Pick one question uniformly at random.
    ///
    /// * `Some(row)` — one row of the file.
    /// * `None` — the file was read but holds no rows.
    /// * `Some(sentinel)` — the file is missing or unreadable; the sentinel
    ///   carries the `"Error"` chapter (see [`QuestionRecord::error`]).
    pub fn draw_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<QuestionRecord> {
        match self.load() {
            Ok(questions) => questions.choose(rng).cloned(),
            Err(QuestionBankError::NotFound(path)) => {
                log::warn!("Question bank not found at {}", path.display());
                Some(QuestionRecord::error("question bank not found"))
            }
            Err(e) => {
                log::warn!("Question bank unreadable: {e}");
                Some(QuestionRecord::error(e.to_string()))
            }
        }
    }
}

/// Parse CSV text with a header row into question records.
///
/// The header must name the question and answer columns. Rows that do not
/// fit (too short, bad quoting) are logged and skipped so the rest of the
/// bank stays usable.
pub fn parse_questions(csv_text: &str) -> Result<Vec<QuestionRecord>, QuestionBankError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(csv_text.as_bytes());

    let headers = rdr.headers()?.clone();
    for (field, names) in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| names.contains(&h)) {
            return Err(QuestionBankError::MissingColumn(*field));
        }
    }

    let mut questions = Vec::new();
    for result in rdr.deserialize::<QuestionRecord>() {
        match result {
            Ok(record) => questions.push(record),
            Err(e) => log::warn!("Skipping malformed question bank row: {e}"),
        }
    }
    Ok(questions)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use tempfile::tempdir;

    const BANK: &str = "\
Question,Answer,chapter
What does TO/GA stand for?,Take-off / go-around.,Automation
What is V1?,The take-off decision speed.,Performance
Define QNH.,Altimeter setting giving elevation on the ground.,Meteorology
";

    fn bank_in_temp(content: &str) -> (QuestionBank, tempfile::TempDir) {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("question_bank.csv");
        std::fs::write(&path, content).expect("write csv");
        (QuestionBank::new(path), dir)
    }

    #[test]
    fn parses_spreadsheet_headers() {
        let rows = parse_questions(BANK).unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].question, "What does TO/GA stand for?");
        assert_eq!(rows[0].official_answer, "Take-off / go-around.");
        assert_eq!(rows[0].chapter, "Automation");
    }

    #[test]
    fn parses_api_style_headers_and_extra_columns() {
        let csv = "question,official_answer,chapter,source\nQ1,A1,C1,manual p.3\n";
        let rows = parse_questions(csv).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].official_answer, "A1");
        assert_eq!(rows[0].chapter, "C1");
    }

    #[test]
    fn missing_chapter_column_defaults_to_empty() {
        let rows = parse_questions("Question,Answer\nQ1,A1\n").unwrap();
        assert_eq!(rows[0].chapter, "");
    }

    #[test]
    fn quoted_fields_keep_commas() {
        let csv = "Question,Answer,chapter\n\"Name two flaps settings, in order.\",\"1, then 5\",Flaps\n";
        let rows = parse_questions(csv).unwrap();
        assert_eq!(rows[0].question, "Name two flaps settings, in order.");
        assert_eq!(rows[0].official_answer, "1, then 5");
    }

    #[test]
    fn missing_required_column_is_an_error() {
        let err = parse_questions("chapter\nC1\n").unwrap_err();
        assert!(matches!(err, QuestionBankError::MissingColumn("question")));

        let err = parse_questions("Question,chapter\nQ1,C1\n").unwrap_err();
        assert!(matches!(
            err,
            QuestionBankError::MissingColumn("official_answer")
        ));
    }

    #[test]
    fn short_row_is_skipped() {
        let rows = parse_questions("Question,Answer,chapter\nQ1,A1,C1\nQ2,A2,C2\nQ3\n").unwrap();
        let questions: Vec<_> = rows.iter().map(|r| r.question.as_str()).collect();
        assert_eq!(questions, ["Q1", "Q2"]);
    }

    #[test]
    fn bank_with_short_row_still_draws_good_rows() {
        let (bank, _dir) = bank_in_temp("Question,Answer,chapter\nQ1,A1,C1\nQ2,A2,C2\nQ3\n");
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..20 {
            let drawn = bank.draw_with(&mut rng).expect("non-empty bank");
            assert!(!drawn.is_error(), "{drawn:?}");
            assert!(drawn.question == "Q1" || drawn.question == "Q2");
        }
    }

    #[test]
    fn draw_returns_a_row_from_the_file() {
        let (bank, _dir) = bank_in_temp(BANK);
        let rows = bank.load().unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let drawn = bank.draw_with(&mut rng).expect("non-empty bank");
            assert!(rows.contains(&drawn), "{drawn:?} not in bank");
        }
    }

    #[test]
    fn draw_eventually_visits_every_row() {
        let (bank, _dir) = bank_in_temp(BANK);
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.insert(bank.draw_with(&mut rng).unwrap().question);
        }
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn header_only_file_draws_none() {
        let (bank, _dir) = bank_in_temp("Question,Answer,chapter\n");
        assert_eq!(bank.draw(), None);
    }

    #[test]
    fn missing_file_draws_error_sentinel() {
        let dir = tempdir().expect("temp dir");
        let bank = QuestionBank::new(dir.path().join("absent.csv"));

        assert!(matches!(bank.load(), Err(QuestionBankError::NotFound(_))));
        let rec = bank.draw().expect("sentinel");
        assert_eq!(rec.chapter, "Error");
        assert!(rec.question.starts_with("Error:"));
    }

    #[test]
    fn unreadable_file_draws_error_sentinel() {
        // A directory exists but cannot be read as a file.
        let dir = tempdir().expect("temp dir");
        let bank = QuestionBank::new(dir.path());

        let rec = bank.draw().expect("sentinel");
        assert!(rec.is_error());
    }

    #[test]
    fn file_is_reread_on_every_draw() {
        let (bank, _dir) = bank_in_temp("Question,Answer,chapter\nOld,A,C\n");
        assert_eq!(bank.draw().unwrap().question, "Old");

        std::fs::write(bank.path(), "Question,Answer,chapter\nNew,A,C\n").unwrap();
        assert_eq!(bank.draw().unwrap().question, "New");
    }
}
