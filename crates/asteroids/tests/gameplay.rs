//! End-to-end gameplay scenarios driven through the headless engine

use std::io::Write;
use std::time::Duration;

use asteroids::prelude::*;
use tempfile::{tempdir, NamedTempFile};

fn config() -> GameConfig {
    GameConfig {
        seed: Some(2024),
        ..GameConfig::default()
    }
}

/// Director with no stored highscores, already switched into a running game
fn start_game(config: &GameConfig, engine: &mut HeadlessEngine, clock: &mut FrameClock) -> Director {
    let dir = tempdir().unwrap();
    let store = HighscoreStore::load(dir.path().join("scores.txt"));
    let mut director = Director::new(config, store);

    engine.ui_mut().click("PLAY");
    engine.run_frame(&mut director, Keys::empty(), clock.tick());
    assert_eq!(director.active(), SceneId::Game);
    assert!(director.game().is_playing());
    director
}

fn asteroid_at(x: f32, y: f32) -> Entity {
    let sprite = Sprite::new(Vec2::new(x, y), Vec2::new(80.0, 80.0), Texture::AsteroidBig);
    Entity::new(sprite, Vec2::new(1.0, 0.0))
}

fn bullet_at(x: f32, y: f32) -> Entity {
    let sprite = Sprite::new(Vec2::new(x, y), Vec2::new(32.0, 32.0), Texture::Bullet);
    Entity::new(sprite, Vec2::new(0.0, 1.0))
}

#[test]
fn idle_session_only_spawns_on_timer() {
    let mut config = config();
    config.asteroid.speed = 0.0;
    let mut engine = HeadlessEngine::new();
    let mut clock = FrameClock::from_hz(60);
    let mut director = start_game(&config, &mut engine, &mut clock);
    let start = director.game().player().sprite.position;

    // two seconds: the first 1.5s interval elapses once
    for _ in 0..120 {
        engine.run_frame(&mut director, Keys::empty(), clock.tick());
    }

    let game = director.game();
    assert!(game.is_playing());
    assert_eq!(game.player().sprite.position, start);
    assert_eq!(game.score(), 0);
    assert_eq!(game.bullet_count(), 0);
    assert_eq!(game.asteroid_count(), 1);
    assert_eq!(game.spawn_interval(), Duration::from_millis(1480));
}

#[test]
fn fire_triggers_once_per_press() {
    let mut engine = HeadlessEngine::new();
    let mut clock = FrameClock::from_hz(60);
    let mut director = start_game(&config(), &mut engine, &mut clock);

    engine.run_frame(&mut director, Keys::FIRE, clock.tick());
    assert_eq!(director.game().bullet_count(), 1);

    for _ in 0..10 {
        engine.run_frame(&mut director, Keys::FIRE, clock.tick());
    }
    assert_eq!(director.game().bullet_count(), 1);
    assert_eq!(engine.draw_list().count(Texture::Bullet), 1);

    engine.run_frame(&mut director, Keys::empty(), clock.tick());
    engine.run_frame(&mut director, Keys::FIRE, clock.tick());
    assert_eq!(director.game().bullet_count(), 2);
    assert_eq!(engine.audio().played(Sound::Laser), 2);
}

#[test]
fn bullet_follows_ship_heading() {
    let mut engine = HeadlessEngine::new();
    let mut clock = FrameClock::from_hz(60);
    let mut director = start_game(&config(), &mut engine, &mut clock);

    engine.run_frame(&mut director, Keys::RIGHT | Keys::FIRE, clock.tick());

    let game = director.game();
    let bullet = game.bullets().next().unwrap();
    assert_eq!(bullet.direction, game.player().direction);
    // spawned at the ship, then advanced once by eight pixels
    let travelled = bullet.sprite.position - game.player().sprite.position;
    assert!((travelled.norm() - 8.0).abs() < 1e-3);
}

#[test]
fn shot_asteroid_scores_once() {
    let mut engine = HeadlessEngine::new();
    let mut clock = FrameClock::from_hz(60);
    let mut director = start_game(&config(), &mut engine, &mut clock);

    let game = director.game_mut();
    game.insert_asteroid(asteroid_at(40.0, 40.0));
    game.insert_bullet(bullet_at(50.0, 50.0));
    game.insert_bullet(bullet_at(60.0, 50.0));
    game.insert_bullet(bullet_at(70.0, 60.0));

    engine.run_frame(&mut director, Keys::empty(), clock.tick());

    let game = director.game();
    assert_eq!(game.score(), 10);
    assert_eq!(game.asteroid_count(), 0);
    assert_eq!(game.bullet_count(), 2);
    assert_eq!(engine.audio().played(Sound::Explosion), 1);
    assert!(engine.ui().has_label("Score: 10"));
}

#[test]
fn each_asteroid_needs_its_own_bullet() {
    let mut engine = HeadlessEngine::new();
    let mut clock = FrameClock::from_hz(60);
    let mut director = start_game(&config(), &mut engine, &mut clock);

    let game = director.game_mut();
    game.insert_asteroid(asteroid_at(40.0, 40.0));
    game.insert_asteroid(asteroid_at(60.0, 40.0));
    game.insert_bullet(bullet_at(70.0, 50.0));

    engine.run_frame(&mut director, Keys::empty(), clock.tick());

    let game = director.game();
    assert_eq!(game.score(), 10);
    assert_eq!(game.asteroid_count(), 1);
    assert_eq!(game.bullet_count(), 0);
}

#[test]
fn ship_collision_ends_session_same_frame() {
    let mut engine = HeadlessEngine::new();
    let mut clock = FrameClock::from_hz(60);
    let mut director = start_game(&config(), &mut engine, &mut clock);

    let ship = director.game().player().sprite.position;
    let game = director.game_mut();
    game.insert_asteroid(asteroid_at(ship.x - 10.0, ship.y - 10.0));
    game.insert_asteroid(asteroid_at(40.0, 40.0));

    engine.run_frame(&mut director, Keys::THRUST, clock.tick());

    let game = director.game();
    assert!(!game.is_playing());
    assert_eq!(director.active(), SceneId::Game);
    assert_eq!(game.score(), 0);
    let untouched = game.asteroids().any(|a| a.sprite.position == Vec2::new(40.0, 40.0));
    assert!(untouched);
    assert!(engine.ui().has_label("GAME OVER"));
    assert!(engine.ui().has_button("SAVE SCORE"));

    // the field stays frozen afterwards
    let frozen: Vec<Vec2> = game.asteroids().map(|a| a.sprite.position).collect();
    engine.run_frame(&mut director, Keys::THRUST | Keys::FIRE, clock.tick());
    let after: Vec<Vec2> = director.game().asteroids().map(|a| a.sprite.position).collect();
    assert_eq!(frozen, after);
    assert_eq!(director.game().bullet_count(), 0);
}

#[test]
fn engine_sound_survives_restart_with_thrust_held() {
    let mut engine = HeadlessEngine::new();
    let mut clock = FrameClock::from_hz(60);
    let mut director = start_game(&config(), &mut engine, &mut clock);

    engine.run_frame(&mut director, Keys::THRUST, clock.tick());
    assert!(engine.audio().is_looping(Sound::Engine));

    let ship = director.game().player().sprite.position;
    director.game_mut().insert_asteroid(asteroid_at(ship.x - 10.0, ship.y - 10.0));
    engine.run_frame(&mut director, Keys::THRUST, clock.tick());
    assert!(!director.game().is_playing());
    assert!(!engine.audio().is_looping(Sound::Engine));

    engine.ui_mut().click("RESTART");
    engine.run_frame(&mut director, Keys::THRUST, clock.tick());
    for _ in 0..5 {
        engine.run_frame(&mut director, Keys::THRUST, clock.tick());
    }

    assert!(director.game().is_playing());
    assert!(director.game().player().velocity.x > 0.0);
    assert!(engine.audio().is_looping(Sound::Engine));
}

#[test]
fn score_only_rises_in_steps_of_ten() {
    let mut engine = HeadlessEngine::new();
    let mut clock = FrameClock::from_hz(60);
    let mut director = start_game(&config(), &mut engine, &mut clock);
    let mut previous = 0;

    for frame in 0..3600u64 {
        if !director.game().is_playing() {
            break;
        }
        let held = if frame % 6 < 3 { Keys::LEFT | Keys::FIRE } else { Keys::LEFT };
        engine.run_frame(&mut director, held, clock.tick());

        let score = director.game().score();
        assert!(score >= previous);
        assert_eq!((score - previous) % 10, 0);
        previous = score;
    }

    let explosions = engine.audio().played(Sound::Explosion);
    let death = usize::from(!director.game().is_playing());
    assert_eq!(usize::try_from(previous / 10).unwrap(), explosions - death);
}

#[test]
fn highscores_load_in_descending_order() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"Ann,50\nBob,80\nCara,30\n").unwrap();
    let store = HighscoreStore::load(file.path());

    assert_eq!(
        store.entries(),
        &[
            HighscoreEntry::new("Bob", 80),
            HighscoreEntry::new("Ann", 50),
            HighscoreEntry::new("Cara", 30),
        ]
    );
}

#[test]
fn full_round_trip_through_menu() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("scores.txt");
    std::fs::write(&path, "Ann,50\nBob,80\nCara,30\n").unwrap();
    let mut director = Director::new(&config(), HighscoreStore::load(&path));
    let mut engine = HeadlessEngine::new();
    let mut clock = FrameClock::from_hz(60);

    engine.run_frame(&mut director, Keys::empty(), clock.tick());
    assert!(engine.ui().has_label("1. Bob: 80"));
    assert!(engine.ui().has_label("3. Cara: 30"));

    engine.ui_mut().click("PLAY");
    engine.run_frame(&mut director, Keys::empty(), clock.tick());

    let ship = director.game().player().sprite.position;
    let game = director.game_mut();
    game.insert_bullet(bullet_at(100.0, 100.0));
    game.insert_asteroid(asteroid_at(90.0, 90.0));
    game.insert_asteroid(asteroid_at(ship.x, ship.y));
    engine.run_frame(&mut director, Keys::empty(), clock.tick());
    assert!(!director.game().is_playing());

    engine.ui_mut().type_text("Dee");
    engine.ui_mut().click("SAVE SCORE");
    engine.run_frame(&mut director, Keys::empty(), clock.tick());
    engine.run_frame(&mut director, Keys::empty(), clock.tick());
    let contents = std::fs::read_to_string(&path).unwrap();

    assert_eq!(director.active(), SceneId::Menu);
    assert_eq!(contents, "Ann,50\nBob,80\nCara,30\nDee,10\n");
    assert!(engine.ui().has_label("4. Dee: 10"));

    // a fresh session starts from a clean field
    engine.ui_mut().click("PLAY");
    engine.run_frame(&mut director, Keys::empty(), clock.tick());
    assert!(director.game().is_playing());
    assert_eq!(director.game().score(), 0);
    assert_eq!(director.game().asteroid_count(), 0);
}
