use rand::Rng;

use crate::dictionary::SpellChecker;
use crate::error::GameError;
use crate::models::{RoundEvent, ValidationOutcome};
use crate::wordlist::WordList;

use super::WordValidator;

/// Mutable state of one round: the root word, the running score and the
/// accepted words, most recent first.
///
/// Two phases only: idle (no root word yet) and in-round. Starting a round
/// while one is in progress resets it; there is no terminal phase.
#[derive(Debug, Default)]
pub struct RoundState {
    root_word: Option<String>,
    score: i32,
    used_words: Vec<String>,
    events: Vec<RoundEvent>,
}

impl RoundState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start (or reset) a round with a root word drawn uniformly at random
    /// from `words`.
    ///
    /// Fails with [`GameError::EmptyWordList`] when the list has no entries;
    /// no fallback word is substituted, since a missing resource is the
    /// caller's problem to surface.
    pub fn start_round(&mut self, words: &WordList) -> Result<(), GameError> {
        self.start_round_with_rng(words, &mut rand::rng())
    }

    /// Same as [`start_round`](Self::start_round) with an injected RNG, for
    /// deterministic selection in tests.
    pub fn start_round_with_rng(
        &mut self,
        words: &WordList,
        rng: &mut impl Rng,
    ) -> Result<(), GameError> {
        let root_word = words
            .pick(rng)
            .ok_or(GameError::EmptyWordList)?
            .to_lowercase();

        tracing::info!("Starting round with root word '{}'", root_word);

        self.score = 0;
        self.used_words.clear();
        self.events.push(RoundEvent::RoundStarted {
            root_word: root_word.clone(),
        });
        self.root_word = Some(root_word);

        Ok(())
    }

    /// Evaluate one player submission.
    ///
    /// The raw input is normalized (trimmed, lowercased) exactly once here.
    /// A submission that is blank after normalization is a no-op and returns
    /// `Ok(None)`. Otherwise the validator decides: on acceptance the score
    /// grows by the word's character count and the word is prepended to the
    /// used list; on rejection round data is untouched and the reason is
    /// returned for display.
    ///
    /// Fails with [`GameError::NoActiveRound`] when called before any
    /// [`start_round`](Self::start_round).
    pub fn submit<C: SpellChecker>(
        &mut self,
        raw_candidate: &str,
        validator: &WordValidator<C>,
    ) -> Result<Option<ValidationOutcome>, GameError> {
        let root_word = self.root_word.as_deref().ok_or(GameError::NoActiveRound)?;

        let candidate = raw_candidate.trim().to_lowercase();
        if candidate.is_empty() {
            return Ok(None);
        }

        let outcome = validator.validate(&candidate, root_word, &self.used_words);

        match &outcome {
            ValidationOutcome::Accepted => {
                let points = candidate.chars().count() as i32;
                self.score += points;
                tracing::debug!(
                    "Accepted '{}' for {} points (score now {})",
                    candidate,
                    points,
                    self.score
                );
                self.events.push(RoundEvent::WordAccepted {
                    word: candidate.clone(),
                    points,
                    score: self.score,
                });
                self.used_words.insert(0, candidate);
            }
            ValidationOutcome::Rejected { reason } => {
                tracing::debug!("Rejected '{}': {:?}", candidate, reason);
            }
        }

        Ok(Some(outcome))
    }

    /// Root word of the current round, `None` while idle.
    pub fn root_word(&self) -> Option<&str> {
        self.root_word.as_deref()
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    /// Accepted words this round, most recent first.
    pub fn used_words(&self) -> &[String] {
        &self.used_words
    }

    pub fn is_in_round(&self) -> bool {
        self.root_word.is_some()
    }

    /// Take all pending presentation notifications, leaving the queue empty.
    ///
    /// Draining is optional; the queue is not part of the round data and
    /// ignoring it changes nothing about scoring or validation.
    pub fn drain_events(&mut self) -> Vec<RoundEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::Dictionary;
    use crate::models::RejectReason;

    fn validator(words: &[&str]) -> WordValidator<Dictionary> {
        WordValidator::new(Dictionary::from_words(words.iter().copied(), "en"), "en")
    }

    /// Round already started on the single root word "silkworm".
    fn round() -> RoundState {
        let mut state = RoundState::new();
        state
            .start_round(&WordList::from_words(["silkworm"]))
            .unwrap();
        state
    }

    #[test]
    fn test_submit_before_start_fails() {
        let mut state = RoundState::new();
        let result = state.submit("silk", &validator(&["silk"]));
        assert_eq!(result, Err(GameError::NoActiveRound));
        assert!(!state.is_in_round());
    }

    #[test]
    fn test_start_round_with_empty_list_fails() {
        let mut state = RoundState::new();
        let result = state.start_round(&WordList::from_words(Vec::<String>::new()));
        assert_eq!(result, Err(GameError::EmptyWordList));

        // Still idle: no root word was substituted
        assert!(!state.is_in_round());
        assert_eq!(state.root_word(), None);
    }

    #[test]
    fn test_start_round_sets_lowercased_root() {
        let mut state = RoundState::new();
        state
            .start_round(&WordList::from_words(["SILKWORM"]))
            .unwrap();
        assert_eq!(state.root_word(), Some("silkworm"));
        assert_eq!(state.score(), 0);
        assert!(state.used_words().is_empty());
    }

    #[test]
    fn test_accepted_word_scores_its_length() {
        let mut state = round();
        let outcome = state.submit("silk", &validator(&["silk"])).unwrap();

        assert_eq!(outcome, Some(ValidationOutcome::Accepted));
        assert_eq!(state.score(), 4);
        assert_eq!(state.used_words(), ["silk".to_string()]);
    }

    #[test]
    fn test_used_words_are_most_recent_first() {
        let mut state = round();
        let validator = validator(&["silk", "worm"]);

        state.submit("silk", &validator).unwrap();
        state.submit("worm", &validator).unwrap();

        assert_eq!(
            state.used_words(),
            ["worm".to_string(), "silk".to_string()]
        );
        assert_eq!(state.score(), 8);
    }

    #[test]
    fn test_submission_is_normalized_before_checking() {
        let mut state = round();
        let outcome = state.submit("  SiLk \n", &validator(&["silk"])).unwrap();

        assert_eq!(outcome, Some(ValidationOutcome::Accepted));
        assert_eq!(state.used_words(), ["silk".to_string()]);
    }

    #[test]
    fn test_blank_submission_is_a_no_op() {
        let mut state = round();
        let outcome = state.submit("   \n", &validator(&["silk"])).unwrap();

        assert_eq!(outcome, None);
        assert_eq!(state.score(), 0);
        assert!(state.used_words().is_empty());
    }

    #[test]
    fn test_root_word_is_rejected_case_insensitively() {
        let mut state = round();
        let outcome = state
            .submit("SILKWORM", &validator(&["silkworm"]))
            .unwrap();

        assert_eq!(
            outcome,
            Some(ValidationOutcome::rejected(RejectReason::SameAsRoot))
        );
        assert_eq!(state.score(), 0);
    }

    #[test]
    fn test_resubmitting_an_accepted_word_is_rejected() {
        let mut state = round();
        let validator = validator(&["silk"]);

        state.submit("silk", &validator).unwrap();
        let outcome = state.submit("silk", &validator).unwrap();

        assert_eq!(
            outcome,
            Some(ValidationOutcome::rejected(RejectReason::AlreadyUsed))
        );
        assert_eq!(state.score(), 4);
        assert_eq!(state.used_words(), ["silk".to_string()]);
    }

    #[test]
    fn test_rejection_leaves_state_untouched() {
        let mut state = round();
        let validator = validator(&["silk"]);
        state.submit("silk", &validator).unwrap();

        for raw in ["ow", "silkworm", "silk", "zebra", "lks"] {
            state.submit(raw, &validator).unwrap();
            assert_eq!(state.score(), 4);
            assert_eq!(state.used_words(), ["silk".to_string()]);
        }
    }

    #[test]
    fn test_structural_pass_still_requires_real_word() {
        // "sworm" uses each of s, w, o, r, m once; all available in the root
        let mut state = round();
        let outcome = state.submit("sworm", &validator(&[])).unwrap();

        assert_eq!(
            outcome,
            Some(ValidationOutcome::rejected(RejectReason::NotAWord))
        );
    }

    #[test]
    fn test_restart_resets_score_and_used_words() {
        let mut state = round();
        state.submit("silk", &validator(&["silk"])).unwrap();
        assert_eq!(state.score(), 4);

        state
            .start_round(&WordList::from_words(["paper"]))
            .unwrap();

        assert_eq!(state.root_word(), Some("paper"));
        assert_eq!(state.score(), 0);
        assert!(state.used_words().is_empty());
        assert!(state.is_in_round());
    }

    #[test]
    fn test_acceptance_emits_one_event() {
        let mut state = round();
        state.drain_events();

        state.submit("silk", &validator(&["silk"])).unwrap();

        let events = state.drain_events();
        assert_eq!(
            events,
            [RoundEvent::WordAccepted {
                word: "silk".to_string(),
                points: 4,
                score: 4,
            }]
        );

        // Draining emptied the queue
        assert!(state.drain_events().is_empty());
    }

    #[test]
    fn test_rejection_emits_no_event() {
        let mut state = round();
        state.drain_events();

        state.submit("silkworm", &validator(&["silkworm"])).unwrap();

        assert!(state.drain_events().is_empty());
    }

    #[test]
    fn test_round_start_emits_event() {
        let mut state = RoundState::new();
        state
            .start_round(&WordList::from_words(["silkworm"]))
            .unwrap();

        assert_eq!(
            state.drain_events(),
            [RoundEvent::RoundStarted {
                root_word: "silkworm".to_string(),
            }]
        );
    }
}
