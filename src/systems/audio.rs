use crate::events::{SoundEffect, SoundEffectEvent};
use crate::resources::{SnakeAudio, SnakeRng, SnakeSettings};
use bevy::prelude::*;
use rand::Rng;

pub fn load_snake_audio(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    settings: Res<SnakeSettings>,
) {
    commands.insert_resource(SnakeAudio {
        hiss: asset_server.load(settings.hiss_clip.clone()),
        eat: asset_server.load(settings.eat_clip.clone()),
        game_over: asset_server.load(settings.game_over_clip.clone()),
    });
}

// Once per frame, maybe hiss
pub fn ambient_hiss_system(
    settings: Res<SnakeSettings>,
    mut rng: ResMut<SnakeRng>,
    mut sounds: EventWriter<SoundEffectEvent>,
) {
    if rng.0.random_bool(settings.hiss_probability) {
        sounds.send(SoundEffectEvent(SoundEffect::Hiss));
    }
}

/// Fire-and-forget playback; the player entity despawns itself when done.
pub fn play_sound_effects(
    mut commands: Commands,
    mut sounds: EventReader<SoundEffectEvent>,
    audio: Res<SnakeAudio>,
) {
    for SoundEffectEvent(effect) in sounds.read() {
        let clip = match effect {
            SoundEffect::Hiss => &audio.hiss,
            SoundEffect::Eat => &audio.eat,
            SoundEffect::GameOver => &audio.game_over,
        };
        commands.spawn((AudioPlayer::new(clip.clone()), PlaybackSettings::DESPAWN));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hiss_app(probability: f64) -> App {
        let mut app = App::new();
        app.add_event::<SoundEffectEvent>();
        app.insert_resource(SnakeSettings {
            hiss_probability: probability,
            ..default()
        });
        app.insert_resource(SnakeRng::seeded(42));
        app.add_systems(Update, ambient_hiss_system);
        app
    }

    fn hisses(app: &App) -> usize {
        let events = app.world().resource::<Events<SoundEffectEvent>>();
        events.get_cursor().read(events).count()
    }

    #[test]
    fn certain_hiss_fires_every_frame() {
        let mut app = hiss_app(1.0);
        app.update();
        assert_eq!(hisses(&app), 1);
    }

    #[test]
    fn zero_probability_never_hisses() {
        let mut app = hiss_app(0.0);
        for _ in 0..100 {
            app.update();
        }
        assert_eq!(hisses(&app), 0);
    }

    #[test]
    fn default_rate_is_roughly_one_in_nine() {
        let mut rng = SnakeRng::seeded(5).0;
        let p = SnakeSettings::default().hiss_probability;
        let fired = (0..9000).filter(|_| rng.random_bool(p)).count();
        assert!((800..1200).contains(&fired), "fired {fired} times");
    }

    #[test]
    fn each_effect_spawns_a_player() {
        let mut app = App::new();
        app.add_event::<SoundEffectEvent>();
        app.insert_resource(SnakeAudio {
            hiss: Handle::default(),
            eat: Handle::default(),
            game_over: Handle::default(),
        });
        app.add_systems(Update, play_sound_effects);

        app.world_mut().send_event(SoundEffectEvent(SoundEffect::Eat));
        app.world_mut()
            .send_event(SoundEffectEvent(SoundEffect::GameOver));
        app.update();

        let players = app
            .world_mut()
            .query::<&AudioPlayer>()
            .iter(app.world())
            .count();
        assert_eq!(players, 2);
    }
}
