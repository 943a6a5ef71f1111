use crate::components::{SnakeHead, SnakeSegment, Tag};
use crate::events::SnakeOverlapEvent;
use crate::resources::{SnakeRng, SnakeSettings};
use bevy::prelude::*;
use rand::Rng;

/// Random cell strictly inside the walls that isn't in `occupied`. When the
/// snake fills the whole interior any interior cell is returned.
pub fn pick_food_cell(
    rng: &mut impl Rng,
    half_width: i32,
    half_height: i32,
    occupied: &[IVec2],
) -> IVec2 {
    let xs = -(half_width - 1)..=half_width - 1;
    let ys = -(half_height - 1)..=half_height - 1;
    let free: Vec<IVec2> = ys
        .clone()
        .flat_map(|y| xs.clone().map(move |x| IVec2::new(x, y)))
        .filter(|cell| !occupied.contains(cell))
        .collect();

    if free.is_empty() {
        IVec2::new(rng.random_range(xs), rng.random_range(ys))
    } else {
        free[rng.random_range(0..free.len())]
    }
}

pub fn relocate_eaten_food(
    mut overlap_events: EventReader<SnakeOverlapEvent>,
    settings: Res<SnakeSettings>,
    mut rng: ResMut<SnakeRng>,
    heads: Query<(&Transform, &SnakeHead), Without<Tag>>,
    segments: Query<(&Transform, &SnakeSegment), Without<Tag>>,
    mut foods: Query<(&Tag, &mut Transform)>,
) {
    for event in overlap_events.read() {
        if event.tag != Tag::Food {
            continue;
        }
        let Ok((&Tag::Food, mut food_transform)) = foods.get_mut(event.other) else {
            continue;
        };

        // Leftover segments whose head is gone don't block anything
        let occupied: Vec<IVec2> = heads
            .iter()
            .map(|(transform, _)| transform)
            .chain(
                segments
                    .iter()
                    .filter(|(_, segment)| heads.contains(segment.head))
                    .map(|(transform, _)| transform),
            )
            .map(|t| t.translation.truncate().round().as_ivec2())
            .collect();

        let cell = pick_food_cell(
            &mut rng.0,
            settings.arena_half_width,
            settings.arena_half_height,
            &occupied,
        );
        food_transform.translation = cell.as_vec2().extend(0.0);
        debug!("Food moved to {cell}");
    }
}
