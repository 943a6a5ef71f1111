use crate::components::{Direction, SnakeHead};
use crate::resources::SnakeSettings;
use bevy::prelude::*;

pub fn snake_input_system(
    keyboard_input: Res<ButtonInput<KeyCode>>,
    settings: Res<SnakeSettings>,
    mut query: Query<&mut SnakeHead>,
) {
    let bindings = &settings.key_bindings;

    for mut head in query.iter_mut() {
        // Reversal is checked against the direction we're moving in right now,
        // not against anything requested earlier in the frame.
        let next = Direction::steer(head.direction, |candidate| {
            bindings.just_pressed(&keyboard_input, candidate)
        });

        if next != head.direction {
            debug!("Snake turning {:?} -> {:?}", head.direction, next);
            head.direction = next;
        }
    }
}
