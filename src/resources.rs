// resources.rs
use crate::components::Direction;
use crate::error::SettingsError;
use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::Path;

/// Largest allowed arena half extent, in cells.
pub const MAX_ARENA_HALF_EXTENT: i32 = 256;

#[derive(Clone, Debug)]
pub struct KeyBindings {
    pub up: Vec<KeyCode>,
    pub down: Vec<KeyCode>,
    pub left: Vec<KeyCode>,
    pub right: Vec<KeyCode>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            up: vec![KeyCode::KeyW, KeyCode::ArrowUp],
            down: vec![KeyCode::KeyS, KeyCode::ArrowDown],
            left: vec![KeyCode::KeyA, KeyCode::ArrowLeft],
            right: vec![KeyCode::KeyD, KeyCode::ArrowRight],
        }
    }
}

impl KeyBindings {
    pub fn keys(&self, direction: Direction) -> &[KeyCode] {
        match direction {
            Direction::Up => &self.up,
            Direction::Down => &self.down,
            Direction::Left => &self.left,
            Direction::Right => &self.right,
        }
    }

    /// True if any key bound to `direction` went down this frame.
    pub fn just_pressed(&self, input: &ButtonInput<KeyCode>, direction: Direction) -> bool {
        input.any_just_pressed(self.keys(direction).iter().copied())
    }
}

#[derive(Resource, Clone, Debug)]
pub struct SnakeSettings {
    /// Seconds between snake moves.
    pub tick_seconds: f64,
    /// Pixels per grid cell.
    pub cell_size: f32,
    /// Walls sit at x = ±arena_half_width and y = ±arena_half_height.
    pub arena_half_width: i32,
    pub arena_half_height: i32,
    /// Chance per frame of playing the ambient hiss.
    pub hiss_probability: f64,
    pub key_bindings: KeyBindings,
    pub hiss_clip: String,
    pub eat_clip: String,
    pub game_over_clip: String,
    pub rng_seed: Option<u64>,
    pub debug_colliders: bool,
}

impl Default for SnakeSettings {
    fn default() -> Self {
        Self {
            tick_seconds: 0.08,
            cell_size: 24.0,
            arena_half_width: 14,
            arena_half_height: 10,
            hiss_probability: 1.0 / 9.0,
            key_bindings: KeyBindings::default(),
            hiss_clip: "audio/hiss.wav".into(),
            eat_clip: "audio/eat.wav".into(),
            game_over_clip: "audio/game_over.wav".into(),
            rng_seed: None,
            debug_colliders: false,
        }
    }
}

impl SnakeSettings {
    pub fn clips(&self) -> [&str; 3] {
        [
            self.hiss_clip.as_str(),
            self.eat_clip.as_str(),
            self.game_over_clip.as_str(),
        ]
    }

    /// Checks everything that would otherwise break mid-game. Clip paths are
    /// resolved against `asset_root`.
    pub fn validate(&self, asset_root: &Path) -> Result<(), SettingsError> {
        if !(self.tick_seconds > 0.0) {
            return Err(SettingsError::NonPositiveTick(self.tick_seconds));
        }
        if !(self.cell_size > 0.0) {
            return Err(SettingsError::NonPositiveCellSize(self.cell_size));
        }
        if !(0.0..=1.0).contains(&self.hiss_probability) {
            return Err(SettingsError::HissProbabilityOutOfRange(
                self.hiss_probability,
            ));
        }
        // Interior must hold more than the head's starting cell.
        if self.arena_half_width < 2 || self.arena_half_height < 2 {
            return Err(SettingsError::ArenaTooSmall {
                half_width: self.arena_half_width,
                half_height: self.arena_half_height,
            });
        }
        if self.arena_half_width > MAX_ARENA_HALF_EXTENT
            || self.arena_half_height > MAX_ARENA_HALF_EXTENT
        {
            return Err(SettingsError::ArenaTooLarge {
                half_width: self.arena_half_width,
                half_height: self.arena_half_height,
            });
        }
        for clip in self.clips() {
            let path = asset_root.join(clip);
            if !path.is_file() {
                return Err(SettingsError::MissingAudioClip(path));
            }
        }
        Ok(())
    }

    pub fn make_rng(&self) -> SnakeRng {
        match self.rng_seed {
            Some(seed) => SnakeRng::seeded(seed),
            None => SnakeRng(StdRng::from_os_rng()),
        }
    }
}

/// Source of randomness for the hiss and food placement.
#[derive(Resource)]
pub struct SnakeRng(pub StdRng);

impl SnakeRng {
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

#[derive(Resource)]
pub struct SnakeAudio {
    pub hiss: Handle<AudioSource>,
    pub eat: Handle<AudioSource>,
    pub game_over: Handle<AudioSource>,
}
