//! Asteroid spawning
//!
//! Asteroids appear just outside a random playfield edge and drift inward.
//! The inward component of the direction is always exactly one while the
//! sideways component is uniform in `[0, 1)`, so trajectories lean toward the
//! entry axis rather than being spread evenly by angle.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::components::{AsteroidSize, Entity, Sprite};
use crate::config::{AsteroidConfig, PlayfieldConfig};
use crate::math::Vec2;

/// Playfield edge an asteroid enters from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    /// Left edge, travelling right
    Left,
    /// Top edge, travelling down
    Top,
    /// Right edge, travelling left
    Right,
    /// Bottom edge, travelling up
    Bottom,
}

impl Edge {
    /// All edges, clockwise from the left
    pub const ALL: [Self; 4] = [Self::Left, Self::Top, Self::Right, Self::Bottom];
}

/// Builds asteroids at random positions around the playfield
pub struct AsteroidSpawner {
    rng: StdRng,
    playfield: PlayfieldConfig,
    asteroid: AsteroidConfig,
}

impl AsteroidSpawner {
    /// Create a spawner; a `seed` makes the sequence reproducible
    pub fn new(playfield: PlayfieldConfig, asteroid: AsteroidConfig, seed: Option<u64>) -> Self {
        let rng = seed.map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);
        Self {
            rng,
            playfield,
            asteroid,
        }
    }

    /// Spawn an asteroid of random size at a random edge
    pub fn spawn(&mut self) -> Entity {
        let size = if self.rng.gen_bool(0.5) {
            AsteroidSize::Big
        } else {
            AsteroidSize::Small
        };
        let edge = Edge::ALL[self.rng.gen_range(0..Edge::ALL.len())];
        self.spawn_at(edge, size)
    }

    /// Spawn an asteroid of the given size entering from `edge`
    pub fn spawn_at(&mut self, edge: Edge, size: AsteroidSize) -> Entity {
        let width = self.playfield.width;
        let height = self.playfield.height;
        let offset = self.asteroid.spawn_offset;
        let drift: f32 = self.rng.gen();

        let (position, direction) = match edge {
            Edge::Left => (Vec2::new(-offset, self.band(height)), Vec2::new(1.0, drift)),
            Edge::Top => (Vec2::new(self.band(width), -offset), Vec2::new(drift, 1.0)),
            Edge::Right => (Vec2::new(width + offset, self.band(height)), Vec2::new(-1.0, drift)),
            Edge::Bottom => (Vec2::new(self.band(width), height + offset), Vec2::new(drift, -1.0)),
        };

        let edge_length = match size {
            AsteroidSize::Big => self.asteroid.big_size,
            AsteroidSize::Small => self.asteroid.small_size,
        };
        let sprite = Sprite::new(position, Vec2::new(edge_length, edge_length), size.texture());

        log::trace!("Spawned {size:?} asteroid from {edge:?} at {position:?}");
        Entity::new(sprite, direction)
    }

    /// Random whole-pixel coordinate along an edge of length `extent`, inset from both ends
    fn band(&mut self, extent: f32) -> f32 {
        let start = self.asteroid.spawn_band_inset.floor();
        let end = (extent - self.asteroid.spawn_band_inset).floor().max(start + 1.0);
        self.rng.gen_range(start..end).floor()
    }
}
