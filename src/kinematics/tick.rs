//! Kinematics domain: one simulation step.

use super::{KinematicsTuning, Platform, PlatformId, SpriteState, Support, Viewport};

/// Impulses captured since the previous tick.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TickInput {
    pub jump: bool,
    pub move_delta: f32,
}

impl TickInput {
    pub fn jump() -> Self {
        Self {
            jump: true,
            move_delta: 0.0,
        }
    }

    pub fn moving(move_delta: f32) -> Self {
        Self {
            jump: false,
            move_delta,
        }
    }
}

/// Support transitions produced by a tick, for the presentation to react to.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TickOutcome {
    pub jumped: bool,
    /// Set when the tick ends supported by something it did not start on.
    pub landed: Option<Support>,
    /// Set when the tick started on a platform and ended off it.
    pub left_platform: Option<PlatformId>,
}

/// Advance `state` by exactly one tick against `platforms` and the ground line.
pub fn tick(
    state: &mut SpriteState,
    platforms: &[Platform],
    input: TickInput,
    viewport: &Viewport,
    tuning: &KinematicsTuning,
) -> TickOutcome {
    let support_before = state.support;
    let mut outcome = TickOutcome::default();

    // Input
    if input.jump && state.is_supported() {
        state.velocity.y = tuning.jump_power;
        state.support = Support::Airborne;
        outcome.jumped = true;
    }
    if input.move_delta != 0.0 {
        state.velocity.x += input.move_delta * tuning.move_scale;
    }

    // Gravity
    if state.is_airborne() {
        state.velocity.y += tuning.gravity;
    }

    // Integration
    let fall_from = state.bottom(viewport.ground_line);
    state.position += state.velocity;
    let fall_to = state.bottom(viewport.ground_line);

    // Friction
    state.velocity.x *= tuning.friction;

    // Bounds
    state.position.x = state
        .position
        .x
        .clamp(tuning.min_x, tuning.max_x(viewport.width));

    // Ground
    if state.position.y >= 0.0 && !state.on_platform() {
        state.position.y = 0.0;
        state.velocity.y = 0.0;
        state.support = Support::Ground;
    }
    if state.on_platform() && state.velocity.y > 0.0 {
        state.velocity.y = 0.0;
    }

    // Landing
    if state.velocity.y >= 0.0 {
        if let Some(platform) = landing_candidate(state, platforms, fall_from, fall_to, tuning) {
            state.position.y = tuning.stand_offset;
            state.velocity.y = 0.0;
            state.support = Support::Platform(platform.id);
        }
    }

    // Departure
    if let Some(id) = state.current_platform() {
        let still_over = platforms.iter().find(|p| p.id == id).is_some_and(|p| {
            let left = state.position.x;
            p.overlaps_span(left, left + tuning.sprite_width(), tuning.departure_margin)
        });
        if !still_over {
            state.support = Support::Airborne;
        }
    }

    if state.support != support_before {
        if state.is_supported() {
            outcome.landed = Some(state.support);
        }
        if let Support::Platform(id) = support_before {
            if state.current_platform() != Some(id) {
                outcome.left_platform = Some(id);
            }
        }
    }

    outcome
}

/// Pick the platform a falling sprite lands on this tick.
///
/// The sprite must overlap the platform span shrunk by the landing margin, or
/// the departure margin if that is wider. When several surfaces qualify, the
/// one whose top is nearest the sprite's bottom at the start of the tick
/// wins; exact ties go to the earliest entry.
fn landing_candidate<'a>(
    state: &SpriteState,
    platforms: &'a [Platform],
    fall_from: f32,
    fall_to: f32,
    tuning: &KinematicsTuning,
) -> Option<&'a Platform> {
    let left = state.position.x;
    let right = left + tuning.sprite_width();
    // Never land where the departure check would drop the sprite again.
    let margin = tuning.landing_margin.max(tuning.departure_margin);

    platforms
        .iter()
        .filter(|p| {
            p.band_crossed(
                fall_from,
                fall_to,
                tuning.landing_tolerance_above,
                tuning.landing_tolerance_below,
            ) && p.overlaps_span(left, right, margin)
        })
        .min_by(|a, b| {
            let da = (a.top - fall_from).abs();
            let db = (b.top - fall_from).abs();
            da.total_cmp(&db)
        })
}
