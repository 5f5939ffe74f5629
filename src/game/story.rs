//! Shared story log
//!
//! Sentences are only ever appended; display numbering starts at 1.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Story {
    sentences: Vec<String>,
}

impl Story {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, sentence: &str) {
        self.sentences.push(sentence.to_string());
    }

    /// Sentences paired with their 1-indexed display number
    pub fn numbered(&self) -> impl Iterator<Item = (usize, &str)> {
        self.sentences
            .iter()
            .enumerate()
            .map(|(i, s)| (i + 1, s.as_str()))
    }

    /// Plain-text export, one sentence per line
    pub fn to_text(&self) -> String {
        let mut text = self.sentences.join("\n");
        if !text.is_empty() {
            text.push('\n');
        }
        text
    }

    pub fn sentences(&self) -> &[String] {
        &self.sentences
    }

    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }
}

impl From<Vec<String>> for Story {
    fn from(sentences: Vec<String>) -> Self {
        Self { sentences }
    }
}
