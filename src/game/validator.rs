use crate::dictionary::SpellChecker;
use crate::models::{RejectReason, ValidationOutcome};
use crate::utils::letters;
use crate::MIN_WORD_LENGTH;

/// Stateless rule pipeline for a single candidate word.
///
/// Rules run in a fixed priority order and only the first failure is
/// reported. The dictionary lookup comes last, so structurally invalid
/// input never reaches the spell checker.
pub struct WordValidator<C> {
    checker: C,
    language: String,
}

impl<C: SpellChecker> WordValidator<C> {
    pub fn new(checker: C, language: impl Into<String>) -> Self {
        Self {
            checker,
            language: language.into(),
        }
    }

    /// Evaluate `candidate` against the root word and the words already
    /// accepted this round.
    ///
    /// `candidate` must already be normalized (lowercase, trimmed);
    /// [`RoundState::submit`](crate::RoundState::submit) normalizes exactly
    /// once before delegating here.
    pub fn validate(
        &self,
        candidate: &str,
        root_word: &str,
        used_words: &[String],
    ) -> ValidationOutcome {
        if !Self::is_long_enough(candidate) {
            return ValidationOutcome::rejected(RejectReason::TooShort);
        }
        if !Self::is_not_root(candidate, root_word) {
            return ValidationOutcome::rejected(RejectReason::SameAsRoot);
        }
        if !Self::is_original(candidate, used_words) {
            return ValidationOutcome::rejected(RejectReason::AlreadyUsed);
        }
        if !Self::is_possible(candidate, root_word) {
            return ValidationOutcome::rejected(RejectReason::NotSubset);
        }
        if !self.is_real(candidate) {
            return ValidationOutcome::rejected(RejectReason::NotAWord);
        }

        ValidationOutcome::Accepted
    }

    fn is_long_enough(word: &str) -> bool {
        word.chars().count() >= MIN_WORD_LENGTH
    }

    fn is_not_root(word: &str, root_word: &str) -> bool {
        word != root_word
    }

    fn is_original(word: &str, used_words: &[String]) -> bool {
        !used_words.iter().any(|used| used == word)
    }

    /// Multiset-subset test: every letter of `word`, with multiplicity,
    /// must be available in `root_word`.
    fn is_possible(word: &str, root_word: &str) -> bool {
        letters::is_spellable_from(word, root_word)
    }

    fn is_real(&self, word: &str) -> bool {
        self.checker.is_recognized_word(word, &self.language)
    }
}
