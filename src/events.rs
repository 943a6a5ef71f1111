use crate::components::Tag;
use bevy::prelude::*;

// Fired once when a snake head starts overlapping a tagged entity
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnakeOverlapEvent {
    pub snake: Entity,
    pub other: Entity,
    pub tag: Tag,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    Hiss,     // Ambient, random
    Eat,      // Snake grew
    GameOver, // Snake hit an obstacle
}

#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SoundEffectEvent(pub SoundEffect);
