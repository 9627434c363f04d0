//! Menu scene

use crate::collision::Rect;
use crate::engine::Frame;
use crate::highscores::HighscoreEntry;
use crate::math::Vec2;

use super::{Scene, SceneCommand};

/// Title screen with play/quit controls and the highscore table
pub struct MenuScene {
    rows: Vec<HighscoreEntry>,
    display_count: usize,
}

impl MenuScene {
    /// Create a menu showing at most `display_count` highscores
    pub const fn new(display_count: usize) -> Self {
        Self {
            rows: Vec::new(),
            display_count,
        }
    }

    /// Replace the displayed table with the first rows of `entries`
    pub fn set_highscores(&mut self, entries: &[HighscoreEntry]) {
        self.rows = entries.iter().take(self.display_count).cloned().collect();
    }

    /// Rows currently displayed
    pub fn highscores(&self) -> &[HighscoreEntry] {
        &self.rows
    }
}

impl Scene for MenuScene {
    fn advance(&mut self, frame: &mut Frame<'_>) -> SceneCommand {
        let ui = &mut *frame.ui;
        let mut command = SceneCommand::None;

        ui.label("ASTEROIDS", Vec2::new(60.0, 30.0), 120.0);
        if ui.button("PLAY", Rect::from_xywh(200.0, 130.0, 200.0, 30.0)) {
            command = SceneCommand::StartGame;
        }
        if ui.button("QUIT", Rect::from_xywh(200.0, 170.0, 200.0, 30.0)) {
            command = SceneCommand::Quit;
        }

        ui.label("HIGHSCORES: ", Vec2::new(200.0, 210.0), 32.0);
        let mut y = 240.0;
        for (position, entry) in self.rows.iter().enumerate() {
            ui.label(&format!("{}. {entry}", position + 1), Vec2::new(200.0, y), 32.0);
            y += 30.0;
        }

        command
    }
}
