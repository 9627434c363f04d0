//! Top-level error type

use thiserror::Error;

use crate::config::ConfigError;
use crate::highscores::HighscoreError;

/// Errors that end a run of the game
#[derive(Error, Debug)]
pub enum GameError {
    /// Configuration could not be loaded or is invalid
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// A highscore could not be saved
    #[error("Highscore error: {0}")]
    Highscore(#[from] HighscoreError),
}
