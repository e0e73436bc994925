use serde::{Deserialize, Serialize};

/// Why a submitted candidate was rejected.
///
/// Exactly one reason is reported per rejection: the first rule that failed,
/// in the validator's fixed priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectReason {
    /// Shorter than [`MIN_WORD_LENGTH`](crate::MIN_WORD_LENGTH) characters.
    TooShort,
    /// Identical to the root word.
    SameAsRoot,
    /// Already accepted earlier in this round.
    AlreadyUsed,
    /// Cannot be assembled from the root word's letters.
    NotSubset,
    /// Not recognized by the spell checker.
    NotAWord,
}

/// Result of evaluating one candidate word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ValidationOutcome {
    Accepted,
    Rejected { reason: RejectReason },
}

impl ValidationOutcome {
    pub fn rejected(reason: RejectReason) -> Self {
        ValidationOutcome::Rejected { reason }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, ValidationOutcome::Accepted)
    }
}

/// Notifications emitted by [`RoundState`](crate::RoundState) for the
/// presentation layer to react to (list animations, score flashes).
///
/// Rejections emit no event; the returned [`ValidationOutcome`] already
/// carries the reason. Draining or ignoring events never affects round data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RoundEvent {
    RoundStarted {
        root_word: String,
    },
    WordAccepted {
        word: String,
        points: i32,
        score: i32,
    },
}
