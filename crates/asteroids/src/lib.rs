//! # Asteroids
//!
//! Gameplay core for a small 2D Asteroids arcade game.
//!
//! Rendering, audio, keyboard input and the immediate-mode UI belong to the
//! host engine. This crate owns everything above them:
//!
//! - **Scenes**: the menu and the game scene, switched by a [`Director`]
//! - **Entities**: the player ship, bullets and asteroids, stored in arenas
//! - **Collisions**: axis-aligned bounding box overlap tests
//! - **Highscores**: a plain text table loaded at startup and appended on save
//!
//! The engine drives the game through [`engine::Frame`], a per-frame bundle of
//! the keyboard snapshot, audio sink, UI layer and draw list.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::time::Duration;
//! use asteroids::prelude::*;
//!
//! let config = GameConfig::default();
//! let store = HighscoreStore::load(&config.highscores.path);
//! let mut director = Director::new(&config, store);
//! let mut engine = HeadlessEngine::new();
//!
//! engine.ui_mut().click("PLAY");
//! engine.run_frame(&mut director, Keys::empty(), Duration::ZERO);
//! assert_eq!(director.active(), SceneId::Game);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod collision;
pub mod components;
pub mod config;
pub mod director;
pub mod engine;
pub mod error;
pub mod highscores;
pub mod logging;
pub mod math;
pub mod scenes;
pub mod spawner;
pub mod time;

pub use director::Director;
pub use error::GameError;

/// Common imports for game users
pub mod prelude {
    pub use crate::{
        collision::{collides, Rect},
        components::{AsteroidSize, Entity, Player, Sprite, Texture},
        config::{Config, ConfigError, GameConfig},
        director::Director,
        engine::{
            headless::HeadlessEngine, Audio, DrawList, Frame, Keyboard, Keys, Sound, Ui,
        },
        error::GameError,
        highscores::{HighscoreEntry, HighscoreError, HighscoreStore},
        math::Vec2,
        scenes::{Scene, SceneCommand, SceneId},
        time::FrameClock,
    };
}
