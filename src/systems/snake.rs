use crate::components::{Direction, SegmentPrefab, SnakeHead, SnakeSegment, Tag};
use crate::events::{SnakeOverlapEvent, SoundEffect, SoundEffectEvent};
use bevy::prelude::*;

// Reacts to what the snake ran into: food grows it, obstacles reset it
pub fn handle_snake_overlaps(
    mut commands: Commands,
    mut overlap_events: EventReader<SnakeOverlapEvent>,
    mut heads: Query<(&mut Transform, &mut SnakeHead), Without<SnakeSegment>>,
    segments: Query<&Transform, With<SnakeSegment>>,
    prefab: Res<SegmentPrefab>,
    mut sounds: EventWriter<SoundEffectEvent>,
) {
    // Segments spawned this run aren't queryable until commands apply
    let mut spawned: Vec<(Entity, Vec3)> = Vec::new();

    for event in overlap_events.read() {
        let Ok((mut head_transform, mut head)) = heads.get_mut(event.snake) else {
            warn!("Overlap for unknown snake {}", event.snake);
            continue;
        };

        match event.tag {
            Tag::Food => {
                // The new segment sits on the current tail until the next tick pulls the chain along
                let tail = head
                    .body
                    .last()
                    .and_then(|&segment| {
                        segments.get(segment).map(|t| t.translation).ok().or_else(|| {
                            spawned.iter().find(|(e, _)| *e == segment).map(|(_, p)| *p)
                        })
                    })
                    .unwrap_or(head_transform.translation);
                let segment = commands.spawn(prefab.bundle(event.snake, tail)).id();
                head.body.push(segment);
                spawned.push((segment, tail));

                info!("Snake ate, length is now {}", head.chain_len());
                sounds.send(SoundEffectEvent(SoundEffect::Eat));
            }
            Tag::Obstacle => {
                let lost = head.body.len();
                for segment in head.body.drain(..) {
                    commands.entity(segment).despawn_recursive();
                }
                head_transform.translation = Vec3::ZERO;
                head.direction = Direction::default();

                info!("Snake hit an obstacle, dropped {} segments", lost);
                sounds.send(SoundEffectEvent(SoundEffect::GameOver));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        let mut app = App::new();
        app.add_event::<SnakeOverlapEvent>();
        app.add_event::<SoundEffectEvent>();
        app.insert_resource(SegmentPrefab::default());
        app.add_systems(Update, handle_snake_overlaps);
        app
    }

    fn spawn_snake(app: &mut App, at: Vec3) -> Entity {
        app.world_mut()
            .spawn((Transform::from_translation(at), SnakeHead::default()))
            .id()
    }

    fn overlap(app: &mut App, snake: Entity, tag: Tag) {
        let other = app.world_mut().spawn(tag).id();
        app.world_mut()
            .send_event(SnakeOverlapEvent { snake, other, tag });
        app.update();
    }

    fn sounds(app: &App) -> Vec<SoundEffect> {
        let events = app.world().resource::<Events<SoundEffectEvent>>();
        events.get_cursor().read(events).map(|e| e.0).collect()
    }

    fn segment_count(app: &mut App) -> usize {
        app.world_mut()
            .query::<&SnakeSegment>()
            .iter(app.world())
            .count()
    }

    #[test]
    fn food_grows_by_exactly_one() {
        let mut app = app();
        let snake = spawn_snake(&mut app, Vec3::new(3.0, 4.0, 0.0));
        overlap(&mut app, snake, Tag::Food);

        let head = app.world().get::<SnakeHead>(snake).unwrap();
        assert_eq!(head.chain_len(), 2);
        let segment = head.body[0];
        assert_eq!(
            app.world().get::<Transform>(segment).unwrap().translation,
            Vec3::new(3.0, 4.0, 0.0)
        );
        assert_eq!(app.world().get::<SnakeSegment>(segment).unwrap().head, snake);
        assert_eq!(sounds(&app), vec![SoundEffect::Eat]);
    }

    #[test]
    fn growth_stacks_on_the_tail_and_leaves_others_alone() {
        let mut app = app();
        let snake = spawn_snake(&mut app, Vec3::new(2.0, 0.0, 0.0));
        overlap(&mut app, snake, Tag::Food);
        let first = app.world().get::<SnakeHead>(snake).unwrap().body[0];
        app.world_mut().get_mut::<Transform>(first).unwrap().translation =
            Vec3::new(1.0, 0.0, 0.0);

        overlap(&mut app, snake, Tag::Food);

        let head = app.world().get::<SnakeHead>(snake).unwrap();
        assert_eq!(head.chain_len(), 3);
        assert_eq!(head.body[0], first);
        let tail = app.world().get::<Transform>(head.body[1]).unwrap();
        assert_eq!(tail.translation, Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(
            app.world().get::<Transform>(snake).unwrap().translation,
            Vec3::new(2.0, 0.0, 0.0)
        );
    }

    #[test]
    fn two_meals_in_one_step_both_land_on_the_tail() {
        let mut app = app();
        let snake = spawn_snake(&mut app, Vec3::new(1.0, 1.0, 0.0));
        let other = app.world_mut().spawn(Tag::Food).id();
        for _ in 0..2 {
            app.world_mut().send_event(SnakeOverlapEvent {
                snake,
                other,
                tag: Tag::Food,
            });
        }
        app.update();

        let head = app.world().get::<SnakeHead>(snake).unwrap();
        assert_eq!(head.chain_len(), 3);
        for &segment in &head.body {
            assert_eq!(
                app.world().get::<Transform>(segment).unwrap().translation,
                Vec3::new(1.0, 1.0, 0.0)
            );
        }
    }

    #[test]
    fn obstacle_resets_everything() {
        let mut app = app();
        let snake = spawn_snake(&mut app, Vec3::new(-5.0, 7.0, 0.0));
        for _ in 0..3 {
            overlap(&mut app, snake, Tag::Food);
        }
        app.world_mut().get_mut::<SnakeHead>(snake).unwrap().direction = Direction::Up;
        assert_eq!(segment_count(&mut app), 3);

        overlap(&mut app, snake, Tag::Obstacle);

        let head = app.world().get::<SnakeHead>(snake).unwrap();
        assert_eq!(head.chain_len(), 1);
        assert_eq!(head.direction, Direction::Right);
        assert_eq!(
            app.world().get::<Transform>(snake).unwrap().translation,
            Vec3::ZERO
        );
        assert_eq!(segment_count(&mut app), 0);
        assert_eq!(sounds(&app).last(), Some(&SoundEffect::GameOver));
    }

    #[test]
    fn reset_of_a_bare_head_still_recenters() {
        let mut app = app();
        let snake = spawn_snake(&mut app, Vec3::new(9.0, 9.0, 0.0));
        overlap(&mut app, snake, Tag::Obstacle);
        let head = app.world().get::<SnakeHead>(snake).unwrap();
        assert_eq!(head.chain_len(), 1);
        assert_eq!(
            app.world().get::<Transform>(snake).unwrap().translation,
            Vec3::ZERO
        );
    }
}
