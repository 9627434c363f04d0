//! Game-specific components

use crate::collision::Rect;
use crate::math::{rotate_heading, Vec2};

/// Texture references understood by the host engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Texture {
    /// Player ship
    Ship,

    /// Bullet
    Bullet,

    /// Large asteroid
    AsteroidBig,

    /// Small asteroid
    AsteroidSmall,
}

/// Visual representation of an entity
#[derive(Debug, Clone, PartialEq)]
pub struct Sprite {
    /// Top-left corner in screen space
    pub position: Vec2,

    /// Rotation in radians
    pub rotation: f32,

    /// Width and height
    pub size: Vec2,

    /// Texture to draw with
    pub texture: Texture,
}

impl Sprite {
    /// Create an unrotated sprite
    pub const fn new(position: Vec2, size: Vec2, texture: Texture) -> Self {
        Self {
            position,
            rotation: 0.0,
            size,
            texture,
        }
    }

    /// Screen-space bounding box used for collisions
    pub const fn bounds(&self) -> Rect {
        Rect::new(self.position, self.size)
    }
}

/// A moving game object: a sprite and the direction it travels in
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    /// Visual representation
    pub sprite: Sprite,

    /// Travel direction, scaled by the entity's speed each frame
    pub direction: Vec2,
}

impl Entity {
    /// Create a new entity
    pub const fn new(sprite: Sprite, direction: Vec2) -> Self {
        Self { sprite, direction }
    }

    /// Advance the entity one frame along its direction
    pub fn advance(&mut self, speed: f32) {
        self.sprite.position += self.direction * speed;
    }
}

/// Player ship state
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    /// Ship sprite
    pub sprite: Sprite,

    /// Unit heading the ship thrusts and fires along
    pub direction: Vec2,

    /// Velocity carried between frames
    pub velocity: Vec2,
}

impl Player {
    /// Create a ship at rest at `position`, facing right
    pub fn new(position: Vec2, size: Vec2) -> Self {
        Self {
            sprite: Sprite::new(position, size, Texture::Ship),
            direction: Vec2::new(1.0, 0.0),
            velocity: Vec2::zeros(),
        }
    }

    /// Accelerate along the heading; negative `amount` brakes or reverses
    pub fn thrust(&mut self, amount: f32) {
        self.velocity += self.direction * amount;
    }

    /// Turn the ship by `angle` radians
    pub fn turn(&mut self, angle: f32) {
        self.sprite.rotation += angle;
        self.direction = rotate_heading(self.direction, angle);
    }
}

/// Asteroid size categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AsteroidSize {
    /// Large asteroid
    Big,

    /// Small asteroid
    Small,
}

impl AsteroidSize {
    /// Texture drawn for this size
    pub const fn texture(self) -> Texture {
        match self {
            Self::Big => Texture::AsteroidBig,
            Self::Small => Texture::AsteroidSmall,
        }
    }
}
