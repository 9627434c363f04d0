//! Asteroids attract mode
//!
//! Runs one unattended session through the headless engine: starts a game
//! from the menu, lets an autopilot spin and shoot until the ship is lost or
//! the frame limit is reached, then saves the score and shows the highscore
//! table. Settings come from `asteroids.toml`, else `asteroids.ron`.

use asteroids::logging;
use asteroids::prelude::*;

const CONFIG_PATHS: [&str; 2] = ["asteroids.toml", "asteroids.ron"];
const FRAME_RATE: u32 = 60;
const MAX_FRAMES: u64 = 60 * 60 * 5;
const PILOT_NAME: &str = "AUTOPILOT";

fn main() {
    logging::init();
    if let Err(e) = run() {
        log::error!("{e}");
        eprintln!("Application error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), GameError> {
    let config = GameConfig::load_first_or_default(&CONFIG_PATHS)?;

    let store = HighscoreStore::load(&config.highscores.path);
    let mut director = Director::new(&config, store);
    let mut engine = HeadlessEngine::new();
    let mut clock = FrameClock::from_hz(FRAME_RATE);

    log::info!("Starting attract mode");
    engine.ui_mut().click("PLAY");
    engine.run_frame(&mut director, Keys::empty(), clock.tick());

    while director.game().is_playing() {
        if clock.frame_count() >= MAX_FRAMES {
            log::info!("Frame limit reached, ending the session");
            director.game_mut().set_playing(false);
            break;
        }
        let held = autopilot(clock.frame_count());
        engine.run_frame(&mut director, held, clock.tick());
    }

    log::info!(
        "Session over after {:.1}s with score {}",
        clock.elapsed().as_secs_f32(),
        director.game().score()
    );

    engine.ui_mut().type_text(PILOT_NAME);
    engine.ui_mut().click("SAVE SCORE");
    engine.run_frame(&mut director, Keys::empty(), clock.tick());

    if let Some(e) = director.take_save_error() {
        engine.ui_mut().click("DISCARD");
        engine.run_frame(&mut director, Keys::empty(), clock.tick());
        return Err(e.into());
    }

    for (position, entry) in director.menu().highscores().iter().enumerate() {
        log::info!("{}. {entry}", position + 1);
    }
    Ok(())
}

/// Keep turning and tap fire every eight frames
fn autopilot(frame: u64) -> Keys {
    if frame % 8 < 4 {
        Keys::RIGHT | Keys::FIRE
    } else {
        Keys::RIGHT
    }
}
