use bevy::prelude::*;
use bevy_rapier2d::prelude::*;
use std::path::PathBuf;
mod components;
mod error;
mod events;
mod game;
mod resources;
mod systems;

use components::SegmentPrefab;
use error::SettingsError;
use game::{arena_walls, food_bundle, snake_head_bundle, wall_bundle, SnakeSimulationPlugin};
use resources::*;
use systems::audio::*;
use systems::food::pick_food_cell;
use systems::input::snake_input_system;

fn main() -> Result<(), SettingsError> {
    let settings = SnakeSettings::default();
    settings.validate(&asset_root())?;

    let window_width = (2 * settings.arena_half_width + 1) as f32 * settings.cell_size;
    let window_height = (2 * settings.arena_half_height + 1) as f32 * settings.cell_size;

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Snake".into(),
                resolution: (window_width, window_height).into(),
                resizable: false,
                ..default()
            }),
            ..default()
        }))
        .add_plugins(RapierPhysicsPlugin::<NoUserData>::default().in_fixed_schedule())
        .add_plugins(RapierDebugRenderPlugin {
            enabled: settings.debug_colliders,
            ..default()
        })
        .add_plugins(SnakeSimulationPlugin)
        .insert_resource(ClearColor(Color::srgb(0.08, 0.08, 0.1)))
        .insert_resource(Time::<Fixed>::from_seconds(settings.tick_seconds))
        .insert_resource(settings.make_rng())
        .insert_resource(SegmentPrefab::default())
        .insert_resource(settings)
        .add_systems(Startup, (setup_game, load_snake_audio))
        .add_systems(
            Update,
            (snake_input_system, ambient_hiss_system, play_sound_effects).chain(),
        )
        .run();

    Ok(())
}

// Same lookup order Bevy's file asset reader uses
fn asset_root() -> PathBuf {
    let base = std::env::var_os("BEVY_ASSET_ROOT")
        .or_else(|| std::env::var_os("CARGO_MANIFEST_DIR"))
        .map(PathBuf::from)
        .or_else(|| {
            std::env::current_exe()
                .ok()
                .and_then(|exe| exe.parent().map(PathBuf::from))
        })
        .unwrap_or_default();
    base.join("assets")
}

fn setup_game(mut commands: Commands, settings: Res<SnakeSettings>, mut rng: ResMut<SnakeRng>) {
    // One world unit per grid cell
    commands.spawn((
        Camera2d,
        OrthographicProjection {
            scale: 1.0 / settings.cell_size,
            ..OrthographicProjection::default_2d()
        },
    ));

    commands.spawn(snake_head_bundle(Vec3::ZERO));

    for (center, half_extents) in arena_walls(settings.arena_half_width, settings.arena_half_height)
    {
        commands.spawn(wall_bundle(center, half_extents));
    }

    let food_cell = pick_food_cell(
        &mut rng.0,
        settings.arena_half_width,
        settings.arena_half_height,
        &[IVec2::ZERO],
    );
    commands.spawn(food_bundle(food_cell));

    info!(
        "Arena {}x{} cells, food at {food_cell}",
        2 * settings.arena_half_width + 1,
        2 * settings.arena_half_height + 1
    );
}
