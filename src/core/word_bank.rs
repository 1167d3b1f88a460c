//! Fixed list of target words and which of them the player has already typed

use crate::core::error::GameError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    pub title: String,
    pub scored: bool,
}

impl Word {
    pub fn new(title: impl Into<String>) -> Self {
        Self { title: title.into(), scored: false }
    }
}

#[derive(Debug, Clone)]
pub struct WordBank {
    words: Vec<Word>,
}

impl WordBank {
    /// Build the bank in seed order, every word unscored
    pub fn new<I, S>(seed: I) -> Result<Self, GameError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: Vec<Word> = seed.into_iter().map(Word::new).collect();
        if words.is_empty() {
            return Err(GameError::InvalidConfiguration("word list is empty".into()));
        }
        Ok(Self { words })
    }

    /// Mark the first word whose title equals `guess` as scored.
    ///
    /// Returns true whenever such a word exists, including one that was
    /// already scored. An unknown guess leaves the bank untouched.
    pub fn submit(&mut self, guess: &str) -> bool {
        match self.words.iter().position(|w| w.title == guess) {
            Some(idx) => {
                self.words[idx].scored = true;
                true
            }
            None => false,
        }
    }

    pub fn score(&self) -> usize {
        self.words.iter().filter(|w| w.scored).count()
    }

    pub fn total(&self) -> usize {
        self.words.len()
    }

    pub fn is_complete(&self) -> bool {
        self.score() == self.total()
    }

    pub fn entries(&self) -> &[Word] {
        &self.words
    }
}
