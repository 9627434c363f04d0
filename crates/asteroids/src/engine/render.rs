//! Per-frame draw list

use crate::components::{Sprite, Texture};
use crate::math::Vec2;

/// One textured quad to draw
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteCommand {
    /// Texture to sample
    pub texture: Texture,
    /// Top-left corner
    pub position: Vec2,
    /// Rotation in radians
    pub rotation: f32,
    /// Width and height
    pub size: Vec2,
}

impl From<&Sprite> for SpriteCommand {
    fn from(sprite: &Sprite) -> Self {
        Self {
            texture: sprite.texture,
            position: sprite.position,
            rotation: sprite.rotation,
            size: sprite.size,
        }
    }
}

/// Sprites queued for the current frame, in draw order
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    commands: Vec<SpriteCommand>,
}

impl DrawList {
    /// Create an empty draw list
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a sprite
    pub fn push(&mut self, sprite: &Sprite) {
        self.commands.push(SpriteCommand::from(sprite));
    }

    /// Drop everything queued
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Queued commands
    pub fn commands(&self) -> &[SpriteCommand] {
        &self.commands
    }

    /// Number of queued sprites using `texture`
    pub fn count(&self, texture: Texture) -> usize {
        self.commands.iter().filter(|c| c.texture == texture).count()
    }

    /// Number of queued sprites
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether nothing is queued
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
