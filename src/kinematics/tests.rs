//! Kinematics domain: tests for the tick function and its tuning helpers.

use bevy::prelude::Vec2;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::{
    KinematicsTuning, Platform, PlatformId, SpriteState, Support, TickInput, Viewport, tick,
};

// Ground line at y = 400, so a platform top at 310 matches the -90 stand offset.
fn viewport() -> Viewport {
    Viewport::new(800.0, 600.0, 200.0)
}

fn pipe(id: u32, left: f32, right: f32) -> Platform {
    Platform::new(PlatformId(id), left, right, 310.0)
}

fn airborne(x: f32, y: f32, vy: f32) -> SpriteState {
    SpriteState {
        position: Vec2::new(x, y),
        velocity: Vec2::new(0.0, vy),
        support: Support::Airborne,
    }
}

fn standing_on(platform: &Platform, x: f32) -> SpriteState {
    SpriteState {
        position: Vec2::new(x, -90.0),
        velocity: Vec2::ZERO,
        support: Support::Platform(platform.id),
    }
}

fn step(state: &mut SpriteState, platforms: &[Platform], input: TickInput) -> super::TickOutcome {
    tick(
        state,
        platforms,
        input,
        &viewport(),
        &KinematicsTuning::default(),
    )
}

// -----------------------------------------------------------------------------
// Rest and lifecycle
// -----------------------------------------------------------------------------

#[test]
fn test_initial_state_is_grounded() {
    let state = SpriteState::default();
    assert_eq!(state.position, Vec2::new(50.0, 0.0));
    assert_eq!(state.velocity, Vec2::ZERO);
    assert!(state.on_ground());
    assert!(!state.on_platform());
    assert!(state.current_platform().is_none());
}

#[test]
fn test_rest_state_is_idempotent() {
    let platforms = [pipe(0, 280.0, 360.0)];
    let initial = SpriteState::grounded_at(100.0);
    let mut state = initial.clone();

    for _ in 0..100 {
        let outcome = step(&mut state, &platforms, TickInput::default());
        assert_eq!(outcome, super::TickOutcome::default());
    }

    assert_eq!(state, initial);
}

#[test]
fn test_narrow_viewport_pins_sprite_to_min_x() {
    let mut state = SpriteState::grounded_at(100.0);
    tick(
        &mut state,
        &[],
        TickInput::default(),
        &Viewport::new(50.0, 600.0, 200.0),
        &KinematicsTuning::default(),
    );
    assert_eq!(state.position.x, 20.0);
}

// -----------------------------------------------------------------------------
// Jumping
// -----------------------------------------------------------------------------

#[test]
fn test_jump_then_land_round_trip() {
    let mut state = SpriteState::grounded_at(100.0);

    let outcome = step(&mut state, &[], TickInput::jump());
    assert!(outcome.jumped);
    assert!(state.is_airborne());

    for _ in 0..4 {
        step(&mut state, &[], TickInput::default());
    }
    assert!(state.position.y < 0.0, "still rising after 5 ticks");

    let mut landed = None;
    for _ in 0..200 {
        let outcome = step(&mut state, &[], TickInput::default());
        if outcome.landed.is_some() {
            landed = outcome.landed;
            break;
        }
    }

    assert_eq!(landed, Some(Support::Ground));
    assert!(state.on_ground());
    assert_eq!(state.position, Vec2::new(100.0, 0.0));
    assert_eq!(state.velocity.y, 0.0);
}

#[test]
fn test_no_double_jump() {
    let mut state = airborne(100.0, -200.0, -10.0);

    let outcome = step(&mut state, &[], TickInput::jump());

    assert!(!outcome.jumped);
    assert!((state.velocity.y - (-9.2)).abs() < 1e-4);
    assert!(state.is_airborne());
}

#[test]
fn test_jump_from_platform_leaves_it() {
    let platform = pipe(3, 280.0, 360.0);
    let mut state = standing_on(&platform, 290.0);

    let outcome = step(&mut state, &[platform], TickInput::jump());

    assert!(outcome.jumped);
    assert_eq!(outcome.left_platform, Some(PlatformId(3)));
    assert!(state.is_airborne());
    assert!(state.velocity.y < 0.0);
    assert!(state.position.y < -90.0);
}

// -----------------------------------------------------------------------------
// Horizontal movement
// -----------------------------------------------------------------------------

#[test]
fn test_move_impulse_is_additive_and_decays() {
    let mut state = SpriteState::grounded_at(100.0);

    step(&mut state, &[], TickInput::moving(40.0));
    // 100 + 20, then friction leaves 16
    assert_eq!(state.position.x, 120.0);
    assert!((state.velocity.x - 16.0).abs() < 1e-4);

    step(&mut state, &[], TickInput::moving(40.0));
    assert!((state.position.x - 156.0).abs() < 1e-3);
    assert!((state.velocity.x - 28.8).abs() < 1e-3);

    for _ in 0..200 {
        step(&mut state, &[], TickInput::default());
    }
    assert!(state.velocity.x.abs() < 1e-3);
}

#[test]
fn test_horizontal_clamp_holds_for_any_input() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let tuning = KinematicsTuning::default();
    let view = viewport();
    let platforms = [pipe(0, 280.0, 360.0), pipe(1, 480.0, 560.0)];
    let mut state = SpriteState::default();

    for _ in 0..2000 {
        let input = TickInput {
            jump: rng.random_bool(0.05),
            move_delta: rng.random_range(-400.0..400.0),
        };
        tick(&mut state, &platforms, input, &view, &tuning);
        assert!(state.position.x >= tuning.min_x);
        assert!(state.position.x <= tuning.max_x(view.width));
    }
}

// -----------------------------------------------------------------------------
// Platforms
// -----------------------------------------------------------------------------

#[test]
fn test_lands_on_platform_within_band() {
    let platform = pipe(4, 280.0, 360.0);
    // Sprite is 60 wide, so x = 290 centers it at 320.
    let mut state = airborne(290.0, -100.0, 5.0);

    let outcome = step(&mut state, &[platform], TickInput::default());

    assert_eq!(outcome.landed, Some(Support::Platform(PlatformId(4))));
    assert!(state.on_platform());
    assert_eq!(state.current_platform(), Some(PlatformId(4)));
    assert_eq!(state.position.y, -90.0);
    assert_eq!(state.velocity.y, 0.0);
}

#[test]
fn test_fast_fall_does_not_tunnel_through_platform() {
    let platform = pipe(0, 280.0, 360.0);
    // Ends the tick 20 px below the top, outside the band, but crossed it.
    let mut state = airborne(290.0, -130.0, 60.0);

    step(&mut state, &[platform], TickInput::default());

    assert!(state.on_platform());
    assert_eq!(state.position.y, -90.0);
}

#[test]
fn test_fall_past_platform_to_ground_still_lands_on_platform() {
    let platform = pipe(0, 280.0, 360.0);
    let mut state = airborne(290.0, -130.0, 200.0);

    let outcome = step(&mut state, &[platform], TickInput::default());

    assert!(state.on_platform());
    assert!(!state.on_ground());
    assert_eq!(outcome.landed, Some(Support::Platform(PlatformId(0))));
}

#[test]
fn test_rising_sprite_does_not_land() {
    let platform = pipe(0, 280.0, 360.0);
    let mut state = airborne(290.0, -100.0, -5.0);

    step(&mut state, &[platform], TickInput::default());

    assert!(state.is_airborne());
}

#[test]
fn test_landing_respects_horizontal_margin() {
    let platform = pipe(0, 280.0, 360.0);
    // Left edge at 341 is past right - 20.
    let mut state = airborne(341.0, -100.0, 5.0);

    step(&mut state, &[platform], TickInput::default());

    assert!(state.is_airborne());
}

#[test]
fn test_standing_on_platform_does_not_sink() {
    let platform = pipe(0, 280.0, 360.0);
    let mut state = standing_on(&platform, 290.0);

    for _ in 0..50 {
        let outcome = step(&mut state, &[platform], TickInput::default());
        assert_eq!(outcome.landed, None);
    }

    assert_eq!(state.position, Vec2::new(290.0, -90.0));
    assert_eq!(state.velocity, Vec2::ZERO);
    assert_eq!(state.current_platform(), Some(PlatformId(0)));
}

#[test]
fn test_departure_past_margin_resumes_falling() {
    let platform = pipe(2, 280.0, 360.0);
    // Left edge at 345 is past right - 30 and outside the landing span.
    let mut state = standing_on(&platform, 345.0);

    let outcome = step(&mut state, &[platform], TickInput::default());
    assert_eq!(outcome.left_platform, Some(PlatformId(2)));
    assert!(state.is_airborne());
    assert!(state.current_platform().is_none());
    assert_eq!(state.velocity.y, 0.0);

    step(&mut state, &[platform], TickInput::default());
    assert!(state.velocity.y > 0.0);
    assert!(state.position.y > -90.0);
}

#[test]
fn test_departure_between_margins_falls_to_ground() {
    let platform = pipe(3, 280.0, 360.0);
    // Left edge at 335 is inside right - 20 but past right - 30.
    let mut state = standing_on(&platform, 335.0);

    let outcome = step(&mut state, &[platform], TickInput::default());
    assert_eq!(outcome.left_platform, Some(PlatformId(3)));
    assert_eq!(outcome.landed, None);
    assert!(state.is_airborne());

    // A jump mid-fall is ignored rather than leaving the sprite hovering.
    let mut previous_vy = state.velocity.y;
    for tick_index in 0..40 {
        let input = if tick_index == 3 {
            TickInput::jump()
        } else {
            TickInput::default()
        };
        let outcome = step(&mut state, &[platform], input);
        if state.on_ground() {
            break;
        }
        assert!(!outcome.jumped);
        assert!(state.velocity.y > previous_vy);
        previous_vy = state.velocity.y;
    }
    assert!(state.on_ground());
    assert_eq!(state.position, Vec2::new(335.0, 0.0));

    let outcome = step(&mut state, &[platform], TickInput::jump());
    assert!(outcome.jumped);
}

#[test]
fn test_walking_off_platform() {
    let platform = pipe(0, 280.0, 360.0);
    let mut state = standing_on(&platform, 290.0);

    let mut left = false;
    for _ in 0..20 {
        let outcome = step(&mut state, &[platform], TickInput::moving(40.0));
        if outcome.left_platform.is_some() {
            left = true;
            break;
        }
    }

    assert!(left);
    assert!(state.position.x > 330.0);

    for _ in 0..200 {
        step(&mut state, &[platform], TickInput::default());
    }
    assert!(state.on_ground());
}

#[test]
fn test_departure_when_platform_disappears() {
    let platform = pipe(0, 280.0, 360.0);
    let mut state = standing_on(&platform, 290.0);

    let outcome = step(&mut state, &[], TickInput::default());

    assert_eq!(outcome.left_platform, Some(PlatformId(0)));
    assert!(state.is_airborne());
}

#[test]
fn test_overlapping_platforms_pick_nearest_surface() {
    let lower = pipe(1, 280.0, 360.0);
    let upper = Platform::new(PlatformId(2), 270.0, 370.0, 300.0);
    // Bottom starts at 290, ten above the upper top and twenty above the lower.
    let mut state = airborne(290.0, -110.0, 15.0);

    step(&mut state, &[lower, upper], TickInput::default());

    assert_eq!(state.current_platform(), Some(PlatformId(2)));
}

#[test]
fn test_equal_surfaces_pick_first_listed() {
    let first = pipe(5, 280.0, 360.0);
    let second = pipe(6, 270.0, 370.0);
    let mut state = airborne(290.0, -100.0, 5.0);

    step(&mut state, &[first, second], TickInput::default());

    assert_eq!(state.current_platform(), Some(PlatformId(5)));
}

// -----------------------------------------------------------------------------
// Support invariants
// -----------------------------------------------------------------------------

#[test]
fn test_support_invariants_hold_under_random_input() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let tuning = KinematicsTuning::default();
    let view = viewport();
    let platforms = [
        pipe(0, 120.0, 200.0),
        pipe(1, 280.0, 360.0),
        pipe(2, 440.0, 520.0),
        pipe(3, 600.0, 680.0),
    ];
    let mut state = SpriteState::default();
    let mut visited_platform = false;

    for _ in 0..5000 {
        let input = TickInput {
            jump: rng.random_bool(0.03),
            move_delta: if rng.random_bool(0.2) {
                rng.random_range(-40.0..40.0)
            } else {
                0.0
            },
        };
        tick(&mut state, &platforms, input, &view, &tuning);

        assert!(!(state.on_ground() && state.on_platform()));
        if state.on_ground() {
            assert_eq!(state.position.y, 0.0);
            assert_eq!(state.velocity.y, 0.0);
        }
        if state.on_platform() {
            assert!(state.current_platform().is_some());
            assert!(state.velocity.y <= 0.0);
            visited_platform = true;
        } else {
            assert!(state.current_platform().is_none());
        }
    }

    assert!(visited_platform);
}

// -----------------------------------------------------------------------------
// Tuning helpers
// -----------------------------------------------------------------------------

#[test]
fn test_max_x_follows_viewport() {
    let tuning = KinematicsTuning::default();
    assert_eq!(tuning.max_x(800.0), 720.0);
    assert_eq!(tuning.max_x(50.0), tuning.min_x);
}

#[test]
fn test_jump_apex_matches_discrete_steps() {
    let tuning = KinematicsTuning::default();
    // 37 rising ticks: 37 * 30 - 0.8 * (37 * 38 / 2)
    assert!((tuning.jump_apex() - 547.6).abs() < 0.5);
}

#[test]
fn test_terminal_speed() {
    let tuning = KinematicsTuning::default();
    assert!((tuning.terminal_speed(40.0) - 80.0).abs() < 1e-3);
    assert!((tuning.terminal_speed(-40.0) - 80.0).abs() < 1e-3);
}

#[test]
fn test_snapshot_copies_flags() {
    let platform = pipe(9, 280.0, 360.0);
    let snapshot = standing_on(&platform, 290.0).snapshot();
    assert!(snapshot.on_platform);
    assert!(!snapshot.on_ground);
    assert_eq!(snapshot.current_platform, Some(PlatformId(9)));
    assert_eq!(snapshot.y, -90.0);
}
