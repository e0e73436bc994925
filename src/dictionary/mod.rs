use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use tokio::fs;

use crate::MIN_WORD_LENGTH;

/// Capability for deciding whether a word is a real dictionary word.
///
/// The game core calls this once per candidate, after every structural rule
/// has passed. Tests inject a fixed in-memory set via
/// [`Dictionary::from_words`].
pub trait SpellChecker {
    fn is_recognized_word(&self, word: &str, language: &str) -> bool;
}

impl<T: SpellChecker + ?Sized> SpellChecker for &T {
    fn is_recognized_word(&self, word: &str, language: &str) -> bool {
        (**self).is_recognized_word(word, language)
    }
}

/// Word set for a single language, backed by a `HashSet`.
pub struct Dictionary {
    words: HashSet<String>,
    language: String,
}

impl Dictionary {
    /// Load a dictionary from a newline-delimited word file.
    ///
    /// Entries are trimmed and lowercased; entries shorter than
    /// [`MIN_WORD_LENGTH`] are dropped since no candidate that short can be
    /// accepted anyway.
    pub async fn load<P: AsRef<Path>>(path: P, language: impl Into<String>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .await
            .with_context(|| format!("failed to read dictionary file {}", path.display()))?;
        let words: HashSet<String> = content
            .lines()
            .map(|line| line.trim().to_lowercase())
            .filter(|word| word.chars().count() >= MIN_WORD_LENGTH)
            .collect();

        tracing::info!("Loaded {} words into dictionary", words.len());

        Ok(Self {
            words,
            language: language.into(),
        })
    }

    /// Build a dictionary from an in-memory word collection.
    pub fn from_words<I, S>(words: I, language: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|word| word.as_ref().trim().to_lowercase())
                .collect(),
            language: language.into(),
        }
    }

    /// Create an empty dictionary (for testing)
    pub fn empty(language: impl Into<String>) -> Self {
        Self {
            words: HashSet::new(),
            language: language.into(),
        }
    }

    /// Check if a word exists in the dictionary
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    /// Get the number of words in the dictionary
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if dictionary is empty
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Language code this dictionary was loaded for.
    pub fn language(&self) -> &str {
        &self.language
    }
}

impl SpellChecker for Dictionary {
    fn is_recognized_word(&self, word: &str, language: &str) -> bool {
        language == self.language && self.contains(word)
    }
}
