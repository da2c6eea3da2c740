//! Movement domain: keyboard and pointer sampling.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::coins::{CoinCollected, CoinSource};
use crate::content::{ControlsConfig, SceneConfig};
use crate::core::ControlLock;
use crate::kinematics::{KinematicsTuning, SpriteState, Viewport};
use crate::movement::resources::MoveKeys;
use crate::movement::{MovementInput, Player, sprite_screen_rect};

/// Keys held while the controls are locked start over once they unlock.
pub(crate) fn read_keyboard(
    time: Res<Time>,
    keyboard: Res<ButtonInput<KeyCode>>,
    controls: Res<ControlsConfig>,
    lock: Res<ControlLock>,
    mut keys: Local<MoveKeys>,
    mut input: ResMut<MovementInput>,
) {
    if lock.is_locked() {
        *keys = MoveKeys::default();
        return;
    }

    if keyboard.just_pressed(KeyCode::Space) || keyboard.just_pressed(KeyCode::ArrowUp) {
        input.request_jump();
    }

    let dt = time.delta_secs();
    let left = keys.left.update(
        keyboard.just_pressed(KeyCode::ArrowLeft),
        keyboard.pressed(KeyCode::ArrowLeft),
        dt,
        &controls,
    );
    let right = keys.right.update(
        keyboard.just_pressed(KeyCode::ArrowRight),
        keyboard.pressed(KeyCode::ArrowRight),
        dt,
        &controls,
    );

    let steps = right as f32 - left as f32;
    if steps != 0.0 {
        input.push_move(steps * controls.move_step);
    }
}

/// Clicking the sprite makes it jump and pays out a coin.
pub(crate) fn read_sprite_click(
    mouse: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    viewport: Res<Viewport>,
    tuning: Res<KinematicsTuning>,
    scene: Res<SceneConfig>,
    query: Query<&SpriteState, With<Player>>,
    mut input: ResMut<MovementInput>,
    mut coins: MessageWriter<CoinCollected>,
) {
    if !mouse.just_pressed(MouseButton::Left) {
        return;
    }
    let Some(cursor) = windows.single().ok().and_then(|w| w.cursor_position()) else {
        return;
    };

    for state in &query {
        if sprite_screen_rect(state, &viewport, &tuning).contains(cursor) {
            input.request_jump();
            coins.write(CoinCollected {
                amount: scene.coin_value,
                source: CoinSource::SpriteClick,
                at: cursor,
            });
        }
    }
}
