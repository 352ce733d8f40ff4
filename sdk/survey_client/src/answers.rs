//! Plaintext answers, validated against the question catalog before anything
//! is encrypted.

use survey::questions::{self, QUESTION_COUNT};

use crate::ClientError;

/// Parse one answer typed by a participant.
///
/// Accepts a decimal option index, surrounding whitespace allowed, and
/// rejects anything outside `[0, option_count)` of `question_id`.
pub fn parse_answer(text: &str, question_id: u32) -> Result<u8, ClientError> {
    let option_count =
        questions::option_count(question_id).ok_or(ClientError::QuestionOutOfRange)?;
    let value: u8 = text
        .trim()
        .parse()
        .map_err(|_| ClientError::InvalidAnswer)?;
    if u32::from(value) >= option_count {
        return Err(ClientError::InvalidAnswer);
    }
    Ok(value)
}

/// A complete, in-range set of answers, one per question in catalog order.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SurveyAnswers {
    values: [u8; QUESTION_COUNT as usize],
}

impl SurveyAnswers {
    pub fn new(values: [u8; QUESTION_COUNT as usize]) -> Result<Self, ClientError> {
        for (question, value) in questions::QUESTIONS.iter().zip(values) {
            if u32::from(value) >= question.option_count() {
                return Err(ClientError::InvalidAnswer);
            }
        }
        Ok(Self { values })
    }

    /// Parse five answers as typed, in catalog order.
    pub fn parse(texts: [&str; QUESTION_COUNT as usize]) -> Result<Self, ClientError> {
        let mut values = [0u8; QUESTION_COUNT as usize];
        for (id, (slot, text)) in values.iter_mut().zip(texts).enumerate() {
            *slot = parse_answer(text, id as u32)?;
        }
        Ok(Self { values })
    }

    pub fn get(&self, question_id: u32) -> Option<u8> {
        self.values.get(question_id as usize).copied()
    }

    pub fn values(&self) -> [u8; QUESTION_COUNT as usize] {
        self.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_in_range_answers() {
        assert_eq!(parse_answer("0", 0), Ok(0));
        assert_eq!(parse_answer(" 3\n", 1), Ok(3));
        assert_eq!(parse_answer("1", 2), Ok(1));
    }

    #[test]
    fn rejects_out_of_range_and_garbage() {
        assert_eq!(parse_answer("2", 2), Err(ClientError::InvalidAnswer));
        assert_eq!(parse_answer("4", 4), Err(ClientError::InvalidAnswer));
        assert_eq!(parse_answer("-1", 0), Err(ClientError::InvalidAnswer));
        assert_eq!(parse_answer("300", 1), Err(ClientError::InvalidAnswer));
        assert_eq!(parse_answer("", 0), Err(ClientError::InvalidAnswer));
        assert_eq!(parse_answer("one", 0), Err(ClientError::InvalidAnswer));
    }

    #[test]
    fn rejects_unknown_question() {
        assert_eq!(parse_answer("0", 5), Err(ClientError::QuestionOutOfRange));
    }

    #[test]
    fn full_set_is_validated() {
        let answers = SurveyAnswers::new([2, 3, 1, 2, 3]).unwrap();
        assert_eq!(answers.get(1), Some(3));
        assert_eq!(answers.get(5), None);

        assert_eq!(
            SurveyAnswers::new([0, 0, 2, 0, 0]),
            Err(ClientError::InvalidAnswer)
        );
    }

    #[test]
    fn parse_full_set() {
        let answers = SurveyAnswers::parse(["1", "0", "1", "2", "3"]).unwrap();
        assert_eq!(answers.values(), [1, 0, 1, 2, 3]);
        assert_eq!(
            SurveyAnswers::parse(["1", "0", "x", "2", "3"]),
            Err(ClientError::InvalidAnswer)
        );
    }
}
