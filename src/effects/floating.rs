//! Effects domain: coins that drift down the screen and can be clicked.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::coins::{CoinCollected, CoinSource};
use crate::content::SceneConfig;
use crate::effects::{
    COIN_COLOR, CoinSpawnTimer, Drift, EffectsRng, FLOATING_COIN_SIZE, Fade, FloatingCoin,
    Lifetime,
};
use crate::kinematics::Viewport;

pub(crate) fn spawn_floating_coins(
    mut commands: Commands,
    time: Res<Time>,
    scene: Res<SceneConfig>,
    viewport: Res<Viewport>,
    mut timer: ResMut<CoinSpawnTimer>,
    mut rng: ResMut<EffectsRng>,
) {
    timer.0.tick(time.delta());
    if !timer.0.just_finished() {
        return;
    }

    let left = rng.coin_left(viewport.width);
    let half = FLOATING_COIN_SIZE * 0.5;
    // Starts just above the top edge.
    let start = viewport.to_world(Vec2::new(left + half, -half));
    let fall_speed = viewport.height / scene.coin_fall_duration;

    commands.spawn((
        FloatingCoin,
        Sprite {
            color: COIN_COLOR,
            custom_size: Some(Vec2::splat(FLOATING_COIN_SIZE)),
            ..default()
        },
        Transform::from_translation(start.extend(15.0)),
        Drift {
            velocity: Vec2::new(0.0, -fall_speed),
            spin: std::f32::consts::TAU / scene.coin_fall_duration,
        },
        Fade::Out,
        Lifetime::new(scene.coin_fall_duration),
    ));
    debug!("Floating coin spawned at x={:.0}", left);
}

/// Whether a world point lies on a floating coin centered at `center`.
pub fn coin_hit(center: Vec2, point: Vec2) -> bool {
    center.distance(point) <= FLOATING_COIN_SIZE * 0.5
}

pub(crate) fn collect_floating_coins(
    mut commands: Commands,
    mouse: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    viewport: Res<Viewport>,
    scene: Res<SceneConfig>,
    coins: Query<(Entity, &Transform), With<FloatingCoin>>,
    mut collected: MessageWriter<CoinCollected>,
) {
    if !mouse.just_pressed(MouseButton::Left) {
        return;
    }
    let Some(cursor) = windows.single().ok().and_then(|w| w.cursor_position()) else {
        return;
    };
    let point = viewport.to_world(cursor);

    for (entity, transform) in &coins {
        if coin_hit(transform.translation.truncate(), point) {
            commands.entity(entity).despawn();
            collected.write(CoinCollected {
                amount: scene.coin_value,
                source: CoinSource::FloatingCoin,
                at: cursor,
            });
        }
    }
}
