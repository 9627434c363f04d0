//! Game scene
//!
//! Owns the player ship, the live bullets and asteroids, the score and the
//! asteroid spawn timer. Simulation only runs while the scene is active AND
//! gameplay is enabled; once the ship is hit the scene keeps rendering the
//! frozen field under a game over panel.

use std::time::Duration;

use slotmap::{new_key_type, SlotMap};

use crate::collision::{collides, Rect};
use crate::components::{Entity, Player, Sprite, Texture};
use crate::config::GameConfig;
use crate::engine::{Audio, Frame, Keyboard, Keys, Sound, Ui};
use crate::highscores::HighscoreEntry;
use crate::math::{wrap_coordinate, Vec2};
use crate::spawner::AsteroidSpawner;

use super::{Scene, SceneCommand};

new_key_type! {
    /// Stable handle to a live bullet
    pub struct BulletKey;

    /// Stable handle to a live asteroid
    pub struct AsteroidKey;
}

/// What happens to an asteroid during the collision pass
enum AsteroidFate {
    HitPlayer,
    Culled,
    Shot(BulletKey),
    Drift,
}

/// Gameplay scene
pub struct GameScene {
    config: GameConfig,
    spawner: AsteroidSpawner,

    playing: bool,
    score: u32,
    player: Player,
    bullets: SlotMap<BulletKey, Entity>,
    asteroids: SlotMap<AsteroidKey, Entity>,

    last_spawn: Option<Duration>,
    spawn_interval: Duration,

    player_name: String,
    save_error: Option<String>,

    engine_looping: bool,
}

impl GameScene {
    /// Create a scene with a fresh field; gameplay starts disabled
    pub fn new(config: &GameConfig) -> Self {
        let spawner = AsteroidSpawner::new(config.playfield.clone(), config.asteroid.clone(), config.seed);
        Self {
            spawner,
            playing: false,
            score: 0,
            player: Self::spawn_player(config),
            bullets: SlotMap::with_key(),
            asteroids: SlotMap::with_key(),
            last_spawn: None,
            spawn_interval: config.spawn.initial_interval(),
            player_name: String::new(),
            save_error: None,
            engine_looping: false,
            config: config.clone(),
        }
    }

    fn spawn_player(config: &GameConfig) -> Player {
        let size = Vec2::new(config.player.width, config.player.height);
        Player::new(config.playfield.center() - size / 2.0, size)
    }

    /// Clear the field back to its starting state; gameplay is left disabled
    pub fn reset(&mut self) {
        self.player = Self::spawn_player(&self.config);
        self.bullets.clear();
        self.asteroids.clear();
        self.score = 0;
        self.last_spawn = None;
        self.spawn_interval = self.config.spawn.restart_interval();
        self.save_error = None;
        self.engine_looping = false;
        self.playing = false;
    }

    /// Enable or disable the simulation
    pub fn set_playing(&mut self, playing: bool) {
        if playing && !self.playing {
            log::info!("Session started");
        }
        self.playing = playing;
    }

    /// Whether the simulation is running
    pub const fn is_playing(&self) -> bool {
        self.playing
    }

    /// Current score
    pub const fn score(&self) -> u32 {
        self.score
    }

    /// The player ship
    pub const fn player(&self) -> &Player {
        &self.player
    }

    /// The player ship, mutably
    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    /// Live bullets
    pub fn bullets(&self) -> impl Iterator<Item = &Entity> {
        self.bullets.values()
    }

    /// Live asteroids
    pub fn asteroids(&self) -> impl Iterator<Item = &Entity> {
        self.asteroids.values()
    }

    /// Number of live bullets
    pub fn bullet_count(&self) -> usize {
        self.bullets.len()
    }

    /// Number of live asteroids
    pub fn asteroid_count(&self) -> usize {
        self.asteroids.len()
    }

    /// Place a bullet on the field
    pub fn insert_bullet(&mut self, bullet: Entity) -> BulletKey {
        self.bullets.insert(bullet)
    }

    /// Place an asteroid on the field
    pub fn insert_asteroid(&mut self, asteroid: Entity) -> AsteroidKey {
        self.asteroids.insert(asteroid)
    }

    /// Current delay between asteroid spawns
    pub const fn spawn_interval(&self) -> Duration {
        self.spawn_interval
    }

    /// Name typed into the game over prompt
    pub fn player_name(&self) -> &str {
        &self.player_name
    }

    /// Show a failed save on the game over panel so the player can retry
    pub fn report_save_error(&mut self, message: impl Into<String>) {
        self.save_error = Some(message.into());
    }

    /// Message from the last failed save, if any
    pub fn save_error(&self) -> Option<&str> {
        self.save_error.as_deref()
    }

    fn simulate(&mut self, frame: &mut Frame<'_>) {
        self.steer(frame.keyboard, frame.audio);
        self.move_player();
        if frame.keyboard.is_pressed_once(Keys::FIRE) {
            self.fire(frame.audio);
        }
        self.update_bullets();
        self.update_spawn_timer(frame.now);
        self.update_asteroids(frame.audio);
    }

    fn steer(&mut self, keyboard: &dyn Keyboard, audio: &mut dyn Audio) {
        let acceleration = self.config.player.acceleration;
        let rotation_speed = self.config.player.rotation_speed;

        if keyboard.is_down(Keys::THRUST) {
            self.player.thrust(acceleration);
        }
        if keyboard.is_down(Keys::REVERSE) {
            self.player.thrust(-acceleration);
        }
        self.update_engine_sound(keyboard.is_down(Keys::THRUST | Keys::REVERSE), audio);

        if keyboard.is_down(Keys::LEFT) {
            self.player.turn(-rotation_speed);
        }
        if keyboard.is_down(Keys::RIGHT) {
            self.player.turn(rotation_speed);
        }
    }

    /// Start or stop the engine loop to match whether a thrust key is held
    fn update_engine_sound(&mut self, thrusting: bool, audio: &mut dyn Audio) {
        if thrusting && !self.engine_looping {
            audio.play_looped(Sound::Engine);
        } else if !thrusting && self.engine_looping {
            audio.stop_loop(Sound::Engine);
        }
        self.engine_looping = thrusting;
    }

    fn move_player(&mut self) {
        let playfield = &self.config.playfield;
        let position = self.player.sprite.position + self.player.velocity;
        self.player.sprite.position = Vec2::new(
            wrap_coordinate(position.x, playfield.width),
            wrap_coordinate(position.y, playfield.height),
        );
    }

    fn fire(&mut self, audio: &mut dyn Audio) {
        let size = self.config.bullet.size;
        let sprite = Sprite::new(self.player.sprite.position, Vec2::new(size, size), Texture::Bullet);
        self.bullets.insert(Entity::new(sprite, self.player.direction));
        audio.play(Sound::Laser);
    }

    fn update_bullets(&mut self) {
        let field = self.config.playfield.bounds();
        let margin = self.config.bullet.cull_margin;
        let speed = self.config.bullet.speed;

        self.bullets.retain(|_, bullet| {
            if !field.contains_with_margin(bullet.sprite.position, margin) {
                return false;
            }
            bullet.advance(speed);
            true
        });
    }

    fn update_spawn_timer(&mut self, now: Duration) {
        let last_spawn = *self.last_spawn.get_or_insert(now);
        if now.saturating_sub(last_spawn) <= self.spawn_interval {
            return;
        }

        let asteroid = self.spawner.spawn();
        self.asteroids.insert(asteroid);
        self.last_spawn = Some(now);

        let floor = self.config.spawn.min_interval();
        if self.spawn_interval > floor {
            self.spawn_interval = self
                .spawn_interval
                .saturating_sub(self.config.spawn.interval_step())
                .max(floor);
        }
        log::debug!("Asteroid spawned, next in {:?}", self.spawn_interval);
    }

    fn update_asteroids(&mut self, audio: &mut dyn Audio) {
        let field = self.config.playfield.bounds();
        let player = self.player.sprite.bounds();
        let keys: Vec<AsteroidKey> = self.asteroids.keys().collect();

        for key in keys {
            match self.asteroid_fate(key, &field, &player) {
                Some(AsteroidFate::HitPlayer) => {
                    self.end_session(audio);
                    return;
                }
                Some(AsteroidFate::Culled) => {
                    self.asteroids.remove(key);
                }
                Some(AsteroidFate::Shot(bullet)) => {
                    self.bullets.remove(bullet);
                    self.asteroids.remove(key);
                    self.score += self.config.scoring.points_per_asteroid;
                    audio.play(Sound::Explosion);
                    log::debug!("Asteroid destroyed, score {}", self.score);
                }
                Some(AsteroidFate::Drift) => {
                    if let Some(asteroid) = self.asteroids.get_mut(key) {
                        asteroid.advance(self.config.asteroid.speed);
                        asteroid.sprite.rotation += self.config.asteroid.spin;
                    }
                }
                None => {}
            }
        }
    }

    fn asteroid_fate(&self, key: AsteroidKey, field: &Rect, player: &Rect) -> Option<AsteroidFate> {
        let asteroid = self.asteroids.get(key)?;
        let bounds = asteroid.sprite.bounds();

        if collides(&bounds, player) {
            return Some(AsteroidFate::HitPlayer);
        }
        if !field.contains_with_margin(asteroid.sprite.position, self.config.asteroid.cull_margin) {
            return Some(AsteroidFate::Culled);
        }

        let fate = self
            .bullets
            .iter()
            .find(|(_, bullet)| collides(&bounds, &bullet.sprite.bounds()))
            .map_or(AsteroidFate::Drift, |(bullet, _)| AsteroidFate::Shot(bullet));
        Some(fate)
    }

    fn end_session(&mut self, audio: &mut dyn Audio) {
        self.playing = false;
        self.engine_looping = false;
        audio.stop_all();
        audio.play(Sound::Explosion);
        log::info!("Game over, final score {}", self.score);
    }

    fn render(&mut self, frame: &mut Frame<'_>) -> SceneCommand {
        frame.draw.push(&self.player.sprite);
        for bullet in self.bullets.values() {
            frame.draw.push(&bullet.sprite);
        }
        for asteroid in self.asteroids.values() {
            frame.draw.push(&asteroid.sprite);
        }

        frame.ui.label(&format!("Score: {}", self.score), Vec2::new(10.0, 10.0), 32.0);

        if self.playing {
            SceneCommand::None
        } else {
            self.game_over_panel(frame.ui)
        }
    }

    fn game_over_panel(&mut self, ui: &mut dyn Ui) -> SceneCommand {
        let mut command = SceneCommand::None;

        ui.label("GAME OVER", Vec2::new(160.0, 100.0), 64.0);
        let max_name_len = self.config.highscores.max_name_len;
        ui.text_input("NAME", Vec2::new(200.0, 160.0), max_name_len, &mut self.player_name);

        if let Some(error) = &self.save_error {
            ui.label(&format!("Could not save score: {error}"), Vec2::new(20.0, 360.0), 20.0);
            if ui.button("RETRY", Rect::from_xywh(200.0, 200.0, 95.0, 30.0)) {
                command = SceneCommand::SaveScore(self.entry());
            }
            if ui.button("DISCARD", Rect::from_xywh(305.0, 200.0, 95.0, 30.0)) {
                log::info!("Discarded unsaved score {}", self.score);
                command = SceneCommand::OpenMenu;
            }
        } else if ui.button("SAVE SCORE", Rect::from_xywh(200.0, 200.0, 200.0, 30.0)) {
            command = SceneCommand::SaveScore(self.entry());
        }

        if ui.button("RESTART", Rect::from_xywh(200.0, 240.0, 200.0, 30.0)) {
            command = SceneCommand::Restart;
        }
        if ui.button("MAIN MENU", Rect::from_xywh(200.0, 280.0, 200.0, 30.0)) {
            command = SceneCommand::OpenMenu;
        }
        if ui.button("QUIT", Rect::from_xywh(200.0, 320.0, 200.0, 30.0)) {
            command = SceneCommand::Quit;
        }

        command
    }

    fn entry(&self) -> HighscoreEntry {
        let name: String = self.player_name.chars().take(self.config.highscores.max_name_len).collect();
        HighscoreEntry::new(name, self.score)
    }
}

impl Scene for GameScene {
    fn advance(&mut self, frame: &mut Frame<'_>) -> SceneCommand {
        if self.playing {
            self.simulate(frame);
        }
        self.render(frame)
    }
}
