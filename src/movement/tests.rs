//! Movement domain: tests for input accumulation and the tick system.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use super::systems::{advance_sprite, read_keyboard};
use super::{
    KeyRepeat, MovementInput, Player, SpriteJumped, SpriteLanded, SpriteLeftPlatform,
    feet_position, sprite_screen_rect,
};
use crate::content::ControlsConfig;
use crate::core::{ControlLock, LockSource};
use crate::kinematics::{KinematicsTuning, Platform, PlatformId, SpriteState, Support, Viewport};
use crate::pipes::PlatformLayout;

// -----------------------------------------------------------------------------
// KeyRepeat tests
// -----------------------------------------------------------------------------

#[test]
fn test_key_repeat_fires_once_on_press() {
    let controls = ControlsConfig::default();
    let mut repeat = KeyRepeat::default();

    assert_eq!(repeat.update(true, true, 0.016, &controls), 1);
    assert_eq!(repeat.update(false, true, 0.1, &controls), 0);
}

#[test]
fn test_key_repeat_starts_after_delay() {
    let controls = ControlsConfig::default();
    let mut repeat = KeyRepeat::default();
    repeat.update(true, true, 0.0, &controls);

    // 0.25s held: still inside the 0.3s delay
    assert_eq!(repeat.update(false, true, 0.25, &controls), 0);
    // 0.31s held: first repeat
    assert_eq!(repeat.update(false, true, 0.06, &controls), 1);
    // 0.35s held: next repeat at 0.333
    assert_eq!(repeat.update(false, true, 0.04, &controls), 1);
}

#[test]
fn test_key_repeat_caps_burst_after_stall() {
    let controls = ControlsConfig::default();
    let mut repeat = KeyRepeat::default();
    repeat.update(true, true, 0.0, &controls);

    assert_eq!(repeat.update(false, true, 5.0, &controls), 4);
    // The schedule restarts from now instead of catching up.
    assert_eq!(repeat.update(false, true, 0.01, &controls), 0);
}

#[test]
fn test_key_repeat_resets_on_release() {
    let controls = ControlsConfig::default();
    let mut repeat = KeyRepeat::default();
    repeat.update(true, true, 0.0, &controls);
    repeat.update(false, true, 0.5, &controls);

    assert_eq!(repeat.update(false, false, 0.016, &controls), 0);
    assert_eq!(repeat.update(true, true, 0.016, &controls), 1);
    assert_eq!(repeat.update(false, true, 0.1, &controls), 0);
}

#[test]
fn test_key_already_held_waits_for_delay() {
    let controls = ControlsConfig::default();
    let mut repeat = KeyRepeat::default();

    // First frame the key is seen it is already down, with no press event.
    assert_eq!(repeat.update(false, true, 0.5, &controls), 0);
    assert_eq!(repeat.update(false, true, 0.25, &controls), 0);
    // 0.31s after it was first seen: first repeat
    assert_eq!(repeat.update(false, true, 0.06, &controls), 1);
}

// -----------------------------------------------------------------------------
// MovementInput tests
// -----------------------------------------------------------------------------

#[test]
fn test_movement_input_take_clears() {
    let mut input = MovementInput::default();
    input.request_jump();
    input.push_move(40.0);
    input.push_move(40.0);

    let taken = input.take();
    assert!(taken.jump);
    assert_eq!(taken.move_delta, 80.0);

    let empty = input.take();
    assert!(!empty.jump);
    assert_eq!(empty.move_delta, 0.0);
}

// -----------------------------------------------------------------------------
// Geometry helpers
// -----------------------------------------------------------------------------

#[test]
fn test_sprite_screen_rect_tracks_offset() {
    let viewport = Viewport::new(800.0, 600.0, 200.0);
    let tuning = KinematicsTuning::default();
    let mut state = SpriteState::grounded_at(100.0);

    let rect = sprite_screen_rect(&state, &viewport, &tuning);
    assert_eq!(rect.min, Vec2::new(100.0, 340.0));
    assert_eq!(rect.max, Vec2::new(160.0, 400.0));
    assert!(rect.contains(Vec2::new(130.0, 370.0)));

    state.position.y = -90.0;
    assert_eq!(
        feet_position(&state, &viewport, &tuning),
        Vec2::new(130.0, 310.0)
    );
}

// -----------------------------------------------------------------------------
// advance_sprite system
// -----------------------------------------------------------------------------

#[derive(Resource, Default)]
struct Seen {
    jumps: usize,
    landings: Vec<Support>,
    departures: Vec<PlatformId>,
}

fn record_messages(
    mut jumped: MessageReader<SpriteJumped>,
    mut landed: MessageReader<SpriteLanded>,
    mut left: MessageReader<SpriteLeftPlatform>,
    mut seen: ResMut<Seen>,
) {
    seen.jumps += jumped.read().count();
    seen.landings.extend(landed.read().map(|m| m.surface));
    seen.departures.extend(left.read().map(|m| m.platform));
}

fn tick_app(platforms: Vec<Platform>) -> App {
    let mut app = App::new();
    app.init_resource::<MovementInput>()
        .init_resource::<Seen>()
        .insert_resource(KinematicsTuning::default())
        .insert_resource(Viewport::new(800.0, 600.0, 200.0))
        .insert_resource(PlatformLayout { platforms })
        .add_message::<SpriteJumped>()
        .add_message::<SpriteLanded>()
        .add_message::<SpriteLeftPlatform>()
        .add_systems(Update, (advance_sprite, record_messages).chain());
    app
}

#[test]
fn test_advance_sprite_consumes_input_and_reports_jump() {
    let mut app = tick_app(Vec::new());
    let sprite = app
        .world_mut()
        .spawn((Player, SpriteState::grounded_at(100.0)))
        .id();

    app.world_mut()
        .resource_mut::<MovementInput>()
        .request_jump();
    app.update();

    let state = app.world().get::<SpriteState>(sprite).unwrap();
    assert!(state.is_airborne());
    assert!(state.position.y < 0.0);
    assert_eq!(app.world().resource::<Seen>().jumps, 1);
    assert!(!app.world().resource::<MovementInput>().jump);

    for _ in 0..120 {
        app.update();
    }

    let state = app.world().get::<SpriteState>(sprite).unwrap();
    assert!(state.on_ground());
    assert_eq!(app.world().resource::<Seen>().jumps, 1);
    assert_eq!(app.world().resource::<Seen>().landings, vec![Support::Ground]);
}

#[test]
fn test_advance_sprite_reports_platform_transitions() {
    let platform = Platform::new(PlatformId(1), 280.0, 360.0, 310.0);
    let mut app = tick_app(vec![platform]);
    let sprite = app
        .world_mut()
        .spawn((
            Player,
            SpriteState {
                position: Vec2::new(290.0, -100.0),
                velocity: Vec2::new(0.0, 5.0),
                support: Support::Airborne,
            },
        ))
        .id();

    app.update();
    assert_eq!(
        app.world().get::<SpriteState>(sprite).unwrap().support,
        Support::Platform(PlatformId(1))
    );

    app.world_mut().resource_mut::<PlatformLayout>().platforms.clear();
    app.update();

    let seen = app.world().resource::<Seen>();
    assert_eq!(seen.landings, vec![Support::Platform(PlatformId(1))]);
    assert_eq!(seen.departures, vec![PlatformId(1)]);
}

// -----------------------------------------------------------------------------
// Keyboard system tests
// -----------------------------------------------------------------------------

fn keyboard_app() -> App {
    let mut app = App::new();
    app.init_resource::<MovementInput>()
        .init_resource::<ControlLock>()
        .init_resource::<ButtonInput<KeyCode>>()
        .init_resource::<Time>()
        .insert_resource(ControlsConfig::default())
        .add_systems(Update, read_keyboard);
    app
}

#[test]
fn test_read_keyboard_press_pushes_move() {
    let mut app = keyboard_app();
    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .press(KeyCode::ArrowRight);
    app.update();

    assert_eq!(app.world().resource::<MovementInput>().move_delta, 40.0);
}

#[test]
fn test_read_keyboard_ignores_keys_held_through_lock() {
    let mut app = keyboard_app();
    app.world_mut()
        .resource_mut::<ControlLock>()
        .lock(LockSource::PipeEntry);
    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .press(KeyCode::ArrowLeft);
    app.update();
    assert_eq!(app.world().resource::<MovementInput>().move_delta, 0.0);

    // Still held, press event gone, controls back.
    app.world_mut()
        .resource_mut::<ControlLock>()
        .unlock(LockSource::PipeEntry);
    app.world_mut().resource_mut::<ButtonInput<KeyCode>>().clear();
    app.update();
    app.update();

    let input = app.world().resource::<MovementInput>();
    assert_eq!(input.move_delta, 0.0);
    assert!(!input.jump);
}
