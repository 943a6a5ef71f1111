// components.rs
use bevy::prelude::*;

/// One of the four grid directions the snake can travel in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    Up,
    Down,
    Left,
    #[default]
    Right,
}

impl Direction {
    /// Priority order used when several direction keys land in the same frame.
    pub const PRIORITY: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn as_vec2(self) -> Vec2 {
        match self {
            Direction::Up => Vec2::new(0.0, 1.0),
            Direction::Down => Vec2::new(0.0, -1.0),
            Direction::Left => Vec2::new(-1.0, 0.0),
            Direction::Right => Vec2::new(1.0, 0.0),
        }
    }

    /// Picks the first requested direction (in `PRIORITY` order) that isn't a
    /// reversal of `current`. Falls back to `current` when nothing qualifies.
    pub fn steer(current: Direction, requested: impl Fn(Direction) -> bool) -> Direction {
        Self::PRIORITY
            .into_iter()
            .find(|&candidate| requested(candidate) && candidate != current.opposite())
            .unwrap_or(current)
    }
}

/// The snake's head. Owns the rest of the chain: `body[0]` follows the head,
/// the last entry is the tail.
#[derive(Component, Debug, Default)]
pub struct SnakeHead {
    pub direction: Direction,
    pub body: Vec<Entity>,
}

impl SnakeHead {
    /// Number of segments including the head.
    pub fn chain_len(&self) -> usize {
        self.body.len() + 1
    }
}

#[derive(Component, Debug)]
pub struct SnakeSegment {
    pub head: Entity,
}

/// What a collidable entity means to the snake when it runs into it.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    Food,
    Obstacle,
}

/// How new body segments look when the snake grows.
#[derive(Resource, Clone)]
pub struct SegmentPrefab {
    pub color: Color,
    pub size: f32,
}

impl Default for SegmentPrefab {
    fn default() -> Self {
        Self {
            color: Color::srgb(0.3, 0.75, 0.35),
            size: 0.85, // In cells
        }
    }
}

impl SegmentPrefab {
    pub fn bundle(&self, head: Entity, position: Vec3) -> impl Bundle {
        (
            Sprite {
                color: self.color,
                custom_size: Some(Vec2::splat(self.size)),
                ..default()
            },
            Transform::from_translation(position),
            SnakeSegment { head },
        )
    }
}
