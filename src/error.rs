use thiserror::Error;

/// Structural failures that abort an operation instead of rejecting a word.
///
/// Gameplay rejections are data, not errors; they are reported through
/// [`ValidationOutcome::Rejected`](crate::ValidationOutcome).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// The supplied word list had no entries to choose a root word from.
    /// There is no fallback word; the caller decides whether to reload the
    /// list or abort.
    #[error("cannot start a round: the word list is empty")]
    EmptyWordList,

    /// `submit` was called before any round was started.
    #[error("no round in progress")]
    NoActiveRound,
}
