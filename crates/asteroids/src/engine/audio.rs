//! Sound effect cues

/// Sound effects the game triggers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sound {
    /// Looped while the ship thrusts
    Engine,

    /// Asteroid destroyed or ship lost
    Explosion,

    /// Bullet fired
    Laser,
}

impl Sound {
    /// Name the engine registered the sound under
    pub const fn name(self) -> &'static str {
        match self {
            Self::Engine => "engine",
            Self::Explosion => "explosion",
            Self::Laser => "laser",
        }
    }
}

/// Fire-and-forget sound playback
pub trait Audio {
    /// Play a sound once
    fn play(&mut self, sound: Sound);

    /// Play a sound on repeat until stopped
    fn play_looped(&mut self, sound: Sound);

    /// Stop a looping sound
    fn stop_loop(&mut self, sound: Sound);

    /// Stop everything that is playing
    fn stop_all(&mut self);
}
