// In src/systems/movement.rs
use crate::components::{Direction, SnakeHead, SnakeSegment};
use bevy::prelude::*;

/// Moves a head one cell. Rounding first keeps float drift from piling up.
pub fn step_head(position: Vec3, direction: Direction) -> Vec3 {
    let offset = direction.as_vec2();
    Vec3::new(
        position.x.round() + offset.x,
        position.y.round() + offset.y,
        0.0,
    )
}

/// Given the chain as it stood before this tick (head first), returns where
/// every segment ends up: the head moves to `new_head` and each body segment
/// takes the old position of the one in front of it.
pub fn follow_leader(chain: &[Vec3], new_head: Vec3) -> Vec<Vec3> {
    let mut next = Vec::with_capacity(chain.len());
    next.push(new_head);
    if let Some((_, leaders)) = chain.split_last() {
        next.extend_from_slice(leaders);
    }
    next
}

pub fn advance_snake(
    mut heads: Query<(Entity, &mut Transform, &SnakeHead), Without<SnakeSegment>>,
    mut segments: Query<&mut Transform, With<SnakeSegment>>,
) {
    for (entity, mut head_transform, head) in heads.iter_mut() {
        // Snapshot before anything moves so no segment reads an updated neighbour
        let mut chain = Vec::with_capacity(head.chain_len());
        chain.push(head_transform.translation);
        let mut body = Vec::with_capacity(head.body.len());
        for &segment in &head.body {
            match segments.get(segment) {
                Ok(transform) => {
                    chain.push(transform.translation);
                    body.push(segment);
                }
                Err(_) => warn!("Snake {entity} lost segment {segment}, skipping it"),
            }
        }

        let new_head = step_head(head_transform.translation, head.direction);
        let next = follow_leader(&chain, new_head);

        head_transform.translation = next[0];
        for (segment, position) in body.into_iter().zip(&next[1..]) {
            if let Ok(mut transform) = segments.get_mut(segment) {
                transform.translation = *position;
            }
        }
    }
}
