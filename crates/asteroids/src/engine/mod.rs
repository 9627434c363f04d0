//! Engine seams
//!
//! The host engine owns the window, renderer, mixer and UI toolkit. The game
//! only sees the traits in this module, bundled into a [`Frame`] once per
//! rendered frame:
//!
//! - [`Keyboard`]: held / released / pressed-once queries over [`Keys`]
//! - [`Audio`]: one-shot and looped sound cues
//! - [`Ui`]: immediate-mode labels, buttons and a text field
//! - [`DrawList`]: sprites to draw this frame
//!
//! [`headless`] implements all of them in memory for tests and the demo runner.

pub mod audio;
pub mod headless;
pub mod input;
pub mod render;
pub mod ui;

use std::time::Duration;

pub use audio::{Audio, Sound};
pub use input::{KeyState, Keyboard, Keys};
pub use render::{DrawList, SpriteCommand};
pub use ui::Ui;

/// Everything a scene may touch during one frame
pub struct Frame<'a> {
    /// Keyboard snapshot for this frame
    pub keyboard: &'a dyn Keyboard,

    /// Sound effect sink
    pub audio: &'a mut dyn Audio,

    /// Immediate-mode UI layer
    pub ui: &'a mut dyn Ui,

    /// Sprites to draw this frame
    pub draw: &'a mut DrawList,

    /// Time since the engine started, sampled once at the start of the frame
    pub now: Duration,
}
