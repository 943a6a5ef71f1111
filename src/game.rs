use crate::components::{SnakeHead, Tag};
use crate::events::{SnakeOverlapEvent, SoundEffectEvent};
use crate::systems::collision::detect_snake_overlaps;
use crate::systems::food::relocate_eaten_food;
use crate::systems::movement::advance_snake;
use crate::systems::snake::handle_snake_overlaps;
use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

/// Fixed-step part of the game: move, let rapier find overlaps, react.
/// Expects rapier to run in `FixedUpdate` as well.
pub struct SnakeSimulationPlugin;

impl Plugin for SnakeSimulationPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<SnakeOverlapEvent>()
            .add_event::<SoundEffectEvent>()
            .add_systems(
                FixedUpdate,
                (
                    advance_snake.before(PhysicsSet::SyncBackend),
                    (
                        detect_snake_overlaps,
                        handle_snake_overlaps,
                        relocate_eaten_food,
                    )
                        .chain()
                        .after(PhysicsSet::Writeback),
                ),
            );
    }
}

pub fn snake_head_bundle(position: Vec3) -> impl Bundle {
    (
        Sprite {
            color: Color::srgb(0.45, 0.9, 0.45),
            custom_size: Some(Vec2::splat(0.9)),
            ..default()
        },
        Transform::from_translation(position),
        SnakeHead::default(),
        RigidBody::KinematicPositionBased,
        Collider::cuboid(0.45, 0.45),
        Sensor,
        ActiveEvents::COLLISION_EVENTS,
        // Walls and food have no rigid body, rapier treats them as fixed
        ActiveCollisionTypes::default() | ActiveCollisionTypes::KINEMATIC_STATIC,
    )
}

pub fn wall_bundle(center: Vec2, half_extents: Vec2) -> impl Bundle {
    (
        Sprite {
            color: Color::srgb(0.35, 0.35, 0.4),
            custom_size: Some(half_extents * 2.0),
            ..default()
        },
        Transform::from_translation(center.extend(0.0)),
        Collider::cuboid(half_extents.x, half_extents.y),
        Tag::Obstacle,
    )
}

/// Center and half extents of the four walls around the arena.
pub fn arena_walls(half_width: i32, half_height: i32) -> [(Vec2, Vec2); 4] {
    let hw = half_width as f32;
    let hh = half_height as f32;
    [
        (Vec2::new(-hw, 0.0), Vec2::new(0.5, hh + 0.5)),
        (Vec2::new(hw, 0.0), Vec2::new(0.5, hh + 0.5)),
        (Vec2::new(0.0, -hh), Vec2::new(hw + 0.5, 0.5)),
        (Vec2::new(0.0, hh), Vec2::new(hw + 0.5, 0.5)),
    ]
}

pub fn food_bundle(cell: IVec2) -> impl Bundle {
    (
        Sprite {
            color: Color::srgb(0.9, 0.25, 0.2),
            custom_size: Some(Vec2::splat(0.7)),
            ..default()
        },
        Transform::from_translation(cell.as_vec2().extend(0.0)),
        Collider::cuboid(0.35, 0.35),
        Sensor,
        Tag::Food,
    )
}
