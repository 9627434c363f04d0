//! Scenes
//!
//! A scene is one mutually exclusive mode of the game. The [`Director`]
//! owns every scene, calls the active one once per frame and applies the
//! [`SceneCommand`] it returns. Scenes never reference each other.
//!
//! [`Director`]: crate::director::Director

pub mod game;
pub mod menu;

use crate::engine::Frame;
use crate::highscores::HighscoreEntry;

pub use game::GameScene;
pub use menu::MenuScene;

/// Scene tags the director routes between
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SceneId {
    /// Title screen with the highscore table
    Menu,

    /// Gameplay, including the game over panel
    Game,
}

/// What a scene asks the director to do after a frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SceneCommand {
    /// Keep running the current scene
    None,

    /// Enable gameplay and switch to the game scene
    StartGame,

    /// Reset the game and switch to the menu
    OpenMenu,

    /// Clear the field and start a new session in the game scene
    Restart,

    /// Persist a highscore, then return to the menu
    SaveScore(HighscoreEntry),

    /// Exit the application
    Quit,
}

/// A mode of the application with its own update and rendering
pub trait Scene {
    /// Advance the scene by one frame and queue its drawing
    fn advance(&mut self, frame: &mut Frame<'_>) -> SceneCommand;
}
