//! Headless engine
//!
//! Implements every engine seam in memory: keyboard input comes from a held
//! key set per frame, sounds are recorded instead of played, UI clicks and
//! typing are queued by label, and the draw list is kept for inspection.

use std::collections::HashSet;
use std::time::Duration;

use crate::collision::Rect;
use crate::director::Director;
use crate::math::Vec2;

use super::{Audio, DrawList, Frame, KeyState, Keys, Sound, Ui};

/// A recorded audio call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioEvent {
    /// One-shot playback
    Play(Sound),
    /// Looped playback started
    Loop(Sound),
    /// Looped playback stopped
    StopLoop(Sound),
    /// Everything stopped
    StopAll,
}

/// Audio sink that records calls and tracks active loops
#[derive(Debug, Default)]
pub struct RecordingAudio {
    events: Vec<AudioEvent>,
    looping: HashSet<Sound>,
}

impl RecordingAudio {
    /// Every call so far, oldest first
    pub fn events(&self) -> &[AudioEvent] {
        &self.events
    }

    /// How many times `sound` was played once
    pub fn played(&self, sound: Sound) -> usize {
        self.events.iter().filter(|e| **e == AudioEvent::Play(sound)).count()
    }

    /// Whether `sound` is looping right now
    pub fn is_looping(&self, sound: Sound) -> bool {
        self.looping.contains(&sound)
    }

    /// Forget recorded calls; active loops keep playing
    pub fn clear_events(&mut self) {
        self.events.clear();
    }
}

impl Audio for RecordingAudio {
    fn play(&mut self, sound: Sound) {
        log::trace!("Play {}", sound.name());
        self.events.push(AudioEvent::Play(sound));
    }

    fn play_looped(&mut self, sound: Sound) {
        log::trace!("Loop {}", sound.name());
        self.looping.insert(sound);
        self.events.push(AudioEvent::Loop(sound));
    }

    fn stop_loop(&mut self, sound: Sound) {
        self.looping.remove(&sound);
        self.events.push(AudioEvent::StopLoop(sound));
    }

    fn stop_all(&mut self) {
        self.looping.clear();
        self.events.push(AudioEvent::StopAll);
    }
}

/// UI layer driven by queued clicks and typing
///
/// Queued input applies to the next frame only; anything not consumed by a
/// matching widget is dropped when the frame ends.
#[derive(Debug, Default)]
pub struct ScriptedUi {
    pending_clicks: Vec<String>,
    pending_text: Option<String>,
    labels: Vec<String>,
    buttons: Vec<String>,
}

impl ScriptedUi {
    /// Click the button labelled `text` during the next frame
    pub fn click(&mut self, text: &str) {
        self.pending_clicks.push(text.to_string());
    }

    /// Replace the contents of the next text field drawn
    pub fn type_text(&mut self, text: &str) {
        self.pending_text = Some(text.to_string());
    }

    /// Labels drawn during the last frame
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Buttons drawn during the last frame
    pub fn buttons(&self) -> &[String] {
        &self.buttons
    }

    /// Whether a label with exactly `text` was drawn during the last frame
    pub fn has_label(&self, text: &str) -> bool {
        self.labels.iter().any(|l| l == text)
    }

    /// Whether a button labelled `text` was drawn during the last frame
    pub fn has_button(&self, text: &str) -> bool {
        self.buttons.iter().any(|b| b == text)
    }

    fn begin_frame(&mut self) {
        self.labels.clear();
        self.buttons.clear();
    }

    fn end_frame(&mut self) {
        for click in self.pending_clicks.drain(..) {
            log::debug!("Click on {click:?} matched no button");
        }
        self.pending_text = None;
    }
}

impl Ui for ScriptedUi {
    fn label(&mut self, text: &str, _position: Vec2, _font_size: f32) {
        self.labels.push(text.to_string());
    }

    fn button(&mut self, text: &str, _area: Rect) -> bool {
        self.buttons.push(text.to_string());
        match self.pending_clicks.iter().position(|c| c == text) {
            Some(index) => {
                self.pending_clicks.remove(index);
                true
            }
            None => false,
        }
    }

    fn text_input(&mut self, _label: &str, _position: Vec2, max_len: usize, value: &mut String) -> bool {
        match self.pending_text.take() {
            Some(text) => {
                *value = text.chars().take(max_len).collect();
                true
            }
            None => false,
        }
    }
}

/// In-memory engine for tests and unattended runs
#[derive(Debug, Default)]
pub struct HeadlessEngine {
    keys: KeyState,
    audio: RecordingAudio,
    ui: ScriptedUi,
    draw: DrawList,
}

impl HeadlessEngine {
    /// Create an engine with no keys held
    pub fn new() -> Self {
        Self::default()
    }

    /// Run one frame of `director`; false once the application should exit
    pub fn run_frame(&mut self, director: &mut Director, held: Keys, now: Duration) -> bool {
        self.step(held, now, |frame| director.frame(frame))
    }

    /// Run one frame through `f` with `held` as the keys currently down
    pub fn step<R>(&mut self, held: Keys, now: Duration, f: impl FnOnce(&mut Frame<'_>) -> R) -> R {
        self.keys.advance(held);
        self.draw.clear();
        self.ui.begin_frame();

        let mut frame = Frame {
            keyboard: &self.keys,
            audio: &mut self.audio,
            ui: &mut self.ui,
            draw: &mut self.draw,
            now,
        };
        let result = f(&mut frame);

        self.ui.end_frame();
        result
    }

    /// Recorded audio
    pub const fn audio(&self) -> &RecordingAudio {
        &self.audio
    }

    /// Recorded audio, mutably
    pub fn audio_mut(&mut self) -> &mut RecordingAudio {
        &mut self.audio
    }

    /// Scripted UI
    pub const fn ui(&self) -> &ScriptedUi {
        &self.ui
    }

    /// Scripted UI, for queueing clicks and typing
    pub fn ui_mut(&mut self) -> &mut ScriptedUi {
        &mut self.ui
    }

    /// Sprites drawn during the last frame
    pub const fn draw_list(&self) -> &DrawList {
        &self.draw
    }
}
