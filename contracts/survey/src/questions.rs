//! Static question catalog.
//!
//! The catalog is fixed at compile time; a different survey means a new
//! deployment. Option indices are positions in `options`.

use soroban_sdk::{contracttype, Env, String, Vec};

pub const QUESTION_COUNT: u32 = 5;

/// Width of the padded per-question count array.
pub const MAX_OPTIONS: u32 = 4;

pub struct Question {
    pub id: u32,
    pub title: &'static str,
    pub options: &'static [&'static str],
}

impl Question {
    pub fn option_count(&self) -> u32 {
        self.options.len() as u32
    }

    pub fn to_info(&self, env: &Env) -> QuestionInfo {
        let mut options = Vec::new(env);
        for label in self.options {
            options.push_back(String::from_str(env, label));
        }
        QuestionInfo {
            id: self.id,
            title: String::from_str(env, self.title),
            options,
        }
    }
}

pub const QUESTIONS: [Question; QUESTION_COUNT as usize] = [
    Question {
        id: 0,
        title: "Which AI area do you explore most?",
        options: &["LLMs", "Computer vision", "Robotics"],
    },
    Question {
        id: 1,
        title: "How often do you use AI tools?",
        options: &["Daily", "Weekly", "Monthly", "Rarely"],
    },
    Question {
        id: 2,
        title: "What is your biggest AI concern?",
        options: &["Privacy", "Jobs and economy"],
    },
    Question {
        id: 3,
        title: "Which deployment do you prefer?",
        options: &["Cloud", "On-device", "Hybrid"],
    },
    Question {
        id: 4,
        title: "How much do you trust AI outputs?",
        options: &["A lot", "Somewhat", "Not much", "It depends"],
    },
];

pub fn question(question_id: u32) -> Option<&'static Question> {
    QUESTIONS.get(question_id as usize)
}

pub fn option_count(question_id: u32) -> Option<u32> {
    question(question_id).map(Question::option_count)
}

/// Question definition as returned to clients.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct QuestionInfo {
    pub id: u32,
    pub title: String,
    pub options: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_counts_match_catalog() {
        let counts: [u32; 5] = core::array::from_fn(|i| option_count(i as u32).unwrap());
        assert_eq!(counts, [3, 4, 2, 3, 4]);
        assert_eq!(option_count(QUESTION_COUNT), None);
    }

    #[test]
    fn ids_are_positions() {
        for (i, q) in QUESTIONS.iter().enumerate() {
            assert_eq!(q.id as usize, i);
        }
    }

    #[test]
    fn padding_width_covers_every_question() {
        let widest = QUESTIONS.iter().map(Question::option_count).max().unwrap();
        assert_eq!(widest, MAX_OPTIONS);
    }

    #[test]
    fn info_carries_labels() {
        let env = Env::default();
        let info = question(2).unwrap().to_info(&env);
        assert_eq!(info.id, 2);
        assert_eq!(info.options.len(), 2);
        assert_eq!(
            info.options.get(1).unwrap(),
            String::from_str(&env, "Jobs and economy")
        );
    }
}
