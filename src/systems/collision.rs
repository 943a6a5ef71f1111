use crate::components::{SnakeHead, Tag};
use crate::events::SnakeOverlapEvent;
use bevy::prelude::*;
use bevy_rapier2d::prelude::CollisionEvent;

/// Turns rapier's overlap-entry events into snake-specific ones. Only pairs
/// made of a snake head and a tagged entity get through.
pub fn detect_snake_overlaps(
    mut collision_events: EventReader<CollisionEvent>,
    heads: Query<(), With<SnakeHead>>,
    tags: Query<&Tag>,
    mut overlap_events: EventWriter<SnakeOverlapEvent>,
) {
    for event in collision_events.read() {
        // Only the start of an overlap matters
        let CollisionEvent::Started(a, b, _) = *event else {
            continue;
        };

        for (snake, other) in [(a, b), (b, a)] {
            if !heads.contains(snake) {
                continue;
            }
            match tags.get(other) {
                Ok(&tag) => {
                    overlap_events.send(SnakeOverlapEvent { snake, other, tag });
                }
                Err(_) => debug!("Snake {snake} touched untagged entity {other}"),
            }
        }
    }
}
