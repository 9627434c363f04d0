//! Scene director
//!
//! Top-level owner of the scenes and the highscore store. The engine calls
//! [`Director::frame`] once per frame; the active scene runs and the command
//! it returns is applied here, so scenes never need to reach each other.

use crate::config::GameConfig;
use crate::engine::Frame;
use crate::highscores::{HighscoreEntry, HighscoreError, HighscoreStore};
use crate::scenes::{GameScene, MenuScene, Scene, SceneCommand, SceneId};

/// Owns every scene and routes transitions between them
pub struct Director {
    menu: MenuScene,
    game: GameScene,
    store: HighscoreStore,
    active: SceneId,
    display_count: usize,
    last_save_error: Option<HighscoreError>,
}

impl Director {
    /// Create a director starting on the menu
    pub fn new(config: &GameConfig, store: HighscoreStore) -> Self {
        let display_count = config.highscores.display_count;
        let mut menu = MenuScene::new(display_count);
        menu.set_highscores(store.top(display_count));

        Self {
            menu,
            game: GameScene::new(config),
            store,
            active: SceneId::Menu,
            display_count,
            last_save_error: None,
        }
    }

    /// Run the active scene for one frame; false once the application should exit
    pub fn frame(&mut self, frame: &mut Frame<'_>) -> bool {
        let command = match self.active {
            SceneId::Menu => self.menu.advance(frame),
            SceneId::Game => self.game.advance(frame),
        };
        self.apply(command)
    }

    fn apply(&mut self, command: SceneCommand) -> bool {
        match command {
            SceneCommand::None => {}
            SceneCommand::StartGame => {
                self.game.set_playing(true);
                self.activate(SceneId::Game);
            }
            SceneCommand::OpenMenu => self.open_menu(),
            SceneCommand::Restart => self.restart(),
            SceneCommand::SaveScore(entry) => self.save_score(entry),
            SceneCommand::Quit => {
                log::info!("Quit requested");
                return false;
            }
        }
        true
    }

    fn save_score(&mut self, entry: HighscoreEntry) {
        match self.store.append(entry) {
            Ok(_) => self.open_menu(),
            Err(e) => {
                log::error!("Failed to save highscore: {e}");
                self.game.report_save_error(e.to_string());
                self.last_save_error = Some(e);
            }
        }
    }

    fn restart(&mut self) {
        self.last_save_error = None;
        self.game.reset();
        self.game.set_playing(true);
        self.activate(SceneId::Game);
    }

    fn open_menu(&mut self) {
        self.last_save_error = None;
        self.game.reset();
        self.menu.set_highscores(self.store.top(self.display_count));
        self.activate(SceneId::Menu);
    }

    fn activate(&mut self, scene: SceneId) {
        if self.active != scene {
            log::info!("Switching scene {:?} -> {scene:?}", self.active);
        }
        self.active = scene;
    }

    /// Currently active scene
    pub const fn active(&self) -> SceneId {
        self.active
    }

    /// The game scene
    pub const fn game(&self) -> &GameScene {
        &self.game
    }

    /// The game scene, mutably
    pub fn game_mut(&mut self) -> &mut GameScene {
        &mut self.game
    }

    /// The menu scene
    pub const fn menu(&self) -> &MenuScene {
        &self.menu
    }

    /// The highscore table
    pub const fn store(&self) -> &HighscoreStore {
        &self.store
    }

    /// Take the error from the most recent failed save, if any
    pub fn take_save_error(&mut self) -> Option<HighscoreError> {
        self.last_save_error.take()
    }
}
