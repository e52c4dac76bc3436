use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Generated questions and answers keyed by their 1-based position.
///
/// An index the model did not provide is absent rather than filled with a
/// placeholder, so `questions[&3]` always means "the model's third question".
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuizSet {
    pub questions: BTreeMap<u32, String>,
    pub answers: BTreeMap<u32, String>,
}

impl QuizSet {
    /// Number of positions that have both a question and an answer.
    pub fn pair_count(&self) -> usize {
        self.questions
            .keys()
            .filter(|index| self.answers.contains_key(index))
            .count()
    }

    /// True when neither side holds any entry.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty() && self.answers.is_empty()
    }

    /// True when every index in `1..=expected` has a question and an answer.
    ///
    /// Walks the stored entries only, so a huge `expected` stays cheap.
    pub fn is_complete(&self, expected: u32) -> bool {
        covers(&self.questions, expected) && covers(&self.answers, expected)
    }

    /// Indices in `1..=expected` lacking a question, an answer, or both, in order.
    ///
    /// Lazy: take only as many as needed when `expected` is large.
    pub fn missing_indices(&self, expected: u32) -> impl Iterator<Item = u32> + '_ {
        (1..=expected).filter(move |index| {
            !self.questions.contains_key(index) || !self.answers.contains_key(index)
        })
    }

    /// Question/answer pairs in index order, skipping incomplete positions.
    pub fn pairs(&self) -> impl Iterator<Item = (u32, &str, &str)> + '_ {
        self.questions.iter().filter_map(|(index, question)| {
            self.answers
                .get(index)
                .map(|answer| (*index, question.as_str(), answer.as_str()))
        })
    }
}

/// True when the map holds every key in `1..=expected`.
fn covers(map: &BTreeMap<u32, String>, expected: u32) -> bool {
    expected == 0 || map.range(1..=expected).count() == expected as usize
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum GenerationResult {
    Text(String),
    Quiz(QuizSet),
}

impl GenerationResult {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            GenerationResult::Text(text) => Some(text),
            GenerationResult::Quiz(_) => None,
        }
    }

    pub fn as_quiz(&self) -> Option<&QuizSet> {
        match self {
            GenerationResult::Quiz(quiz) => Some(quiz),
            GenerationResult::Text(_) => None,
        }
    }

    pub fn into_text(self) -> Option<String> {
        match self {
            GenerationResult::Text(text) => Some(text),
            GenerationResult::Quiz(_) => None,
        }
    }

    pub fn into_quiz(self) -> Option<QuizSet> {
        match self {
            GenerationResult::Quiz(quiz) => Some(quiz),
            GenerationResult::Text(_) => None,
        }
    }
}
