//! Immediate-mode UI layer
//!
//! Widgets are declared every frame. Interactive widgets report whether the
//! user activated them during this frame.

use crate::collision::Rect;
use crate::math::Vec2;

/// Immediate-mode widgets supplied by the engine
pub trait Ui {
    /// Draw a text label with its top-left corner at `position`
    fn label(&mut self, text: &str, position: Vec2, font_size: f32);

    /// Draw a button; true if it was clicked this frame
    fn button(&mut self, text: &str, area: Rect) -> bool;

    /// Draw a single-line text field editing `value`, capped at `max_len`
    /// characters; true if the value changed this frame
    fn text_input(&mut self, label: &str, position: Vec2, max_len: usize, value: &mut String) -> bool;
}
