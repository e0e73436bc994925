use anyhow::Result;
use serde::Deserialize;
use std::env;

/// Configuration resolved from environment variables (a `.env` file is
/// honored when present).
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub game: GameConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GameConfig {
    /// Newline-delimited file of candidate root words.
    pub word_list_path: String,
    /// Newline-delimited file of recognized dictionary words.
    pub dictionary_path: String,
    /// Language code handed to the spell checker.
    pub language: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let game = GameConfig {
            word_list_path: env::var("WORD_LIST_PATH")
                .unwrap_or_else(|_| "./start.txt".to_string()),
            dictionary_path: env::var("DICTIONARY_PATH")
                .unwrap_or_else(|_| "./dictionary.txt".to_string()),
            language: env::var("GAME_LANGUAGE")
                .unwrap_or_else(|_| "en".to_string()),
        };

        Ok(Config { game })
    }
}
