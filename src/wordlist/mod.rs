use std::path::Path;

use anyhow::{Context, Result};
use rand::Rng;
use tokio::fs;

/// Ordered list of candidate root words, one per line of a resource file.
///
/// An empty file loads successfully as an empty list; the emptiness is
/// surfaced as [`GameError::EmptyWordList`](crate::GameError) when a round
/// is started, so I/O failures and the missing-data precondition stay
/// distinguishable.
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    /// Load root word candidates from a newline-delimited file.
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .await
            .with_context(|| format!("failed to read word list {}", path.display()))?;
        let words: Vec<String> = content
            .lines()
            .map(|line| line.trim().to_lowercase())
            .filter(|word| !word.is_empty())
            .collect();

        tracing::info!("Loaded {} root word candidates", words.len());

        Ok(Self { words })
    }

    /// Build a word list from an in-memory collection.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|word| word.as_ref().trim().to_lowercase())
                .filter(|word| !word.is_empty())
                .collect(),
        }
    }

    /// Get the number of candidate root words
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the list has no candidates
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Pick one entry uniformly at random. Returns `None` iff the list is
    /// empty.
    pub fn pick<'a>(&'a self, rng: &mut impl Rng) -> Option<&'a str> {
        if self.words.is_empty() {
            return None;
        }

        let idx = rng.random_range(0..self.words.len());
        Some(self.words[idx].as_str())
    }
}
