//! Core of a single-player word-building game: the player is shown a root
//! word and submits candidate words that must be spellable from the root
//! word's letters and pass a dictionary check. Each accepted word scores its
//! length in points.
//!
//! The crate owns the validation rules and the round state machine only;
//! rendering and input belong to the embedding application.

pub mod config;
pub mod dictionary;
pub mod error;
pub mod game;
pub mod models;
pub mod utils;
pub mod wordlist;

pub use config::Config;
pub use dictionary::{Dictionary, SpellChecker};
pub use error::GameError;
pub use game::{RoundState, WordValidator};
pub use models::{RejectReason, RoundEvent, ValidationOutcome};
pub use wordlist::WordList;

/// Minimum accepted candidate length, in characters.
pub const MIN_WORD_LENGTH: usize = 3;
