//! Pipes domain: going down a pipe and coming back out.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::content::ControlsConfig;
use crate::core::{ControlLock, LockSource};
use crate::kinematics::{KinematicsTuning, Platform, PlatformId, SpriteState, Viewport};
use crate::movement::{MovementInput, Player, feet_position, sprite_center};
use crate::pipes::{
    CurrentSection, Pipe, PipeEntered, PipeEntryStarted, PlatformLayout, nearest_pipe,
};

/// Seconds into an entry when the sprite shrinks out of sight.
pub const HIDE_AT: f32 = 0.3;
/// Seconds into an entry when the sprite reappears.
pub const EMERGE_AT: f32 = 1.0;

/// Pipe entry progress. At most one entry runs at a time.
#[derive(Resource, Debug, Default, Clone, PartialEq)]
pub enum PipeEntry {
    #[default]
    Idle,
    Entering {
        pipe: PlatformId,
        section: String,
        elapsed: f32,
    },
}

/// What an entry step asks the presentation to do.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct EntryCues {
    pub hide: bool,
    /// Section reached, once the sprite is back out.
    pub emerge: Option<String>,
}

impl PipeEntry {
    pub fn is_active(&self) -> bool {
        !matches!(self, PipeEntry::Idle)
    }

    /// Start entering `pipe`. Returns false if an entry is already running.
    pub fn begin(&mut self, pipe: PlatformId, section: impl Into<String>) -> bool {
        if self.is_active() {
            return false;
        }
        *self = PipeEntry::Entering {
            pipe,
            section: section.into(),
            elapsed: 0.0,
        };
        true
    }

    /// Advance by `dt` seconds. Both cues can fire in the same step.
    pub fn advance(&mut self, dt: f32) -> EntryCues {
        let mut cues = EntryCues::default();

        let PipeEntry::Entering {
            section, elapsed, ..
        } = &mut *self
        else {
            return cues;
        };

        let before = *elapsed;
        *elapsed += dt;
        cues.hide = before < HIDE_AT && *elapsed >= HIDE_AT;

        if *elapsed >= EMERGE_AT {
            cues.emerge = Some(std::mem::take(section));
            *self = PipeEntry::Idle;
        }

        cues
    }
}

/// Nearest pipe within `range` of `x` that leads somewhere other than
/// `current_section`.
pub fn entry_target<'a>(
    platforms: &[Platform],
    pipes: &[&'a Pipe],
    x: f32,
    range: f32,
    current_section: &str,
) -> Option<(Platform, &'a Pipe)> {
    let open: Vec<Platform> = platforms
        .iter()
        .filter(|p| {
            pipes
                .iter()
                .any(|pipe| pipe.id == p.id && pipe.section != current_section)
        })
        .copied()
        .collect();

    let platform = *nearest_pipe(&open, x, range)?;
    let pipe = pipes.iter().find(|pipe| pipe.id == platform.id)?;
    Some((platform, *pipe))
}

/// Down arrow next to a pipe starts an entry.
pub(crate) fn start_pipe_entry(
    keyboard: Res<ButtonInput<KeyCode>>,
    controls: Res<ControlsConfig>,
    tuning: Res<KinematicsTuning>,
    viewport: Res<Viewport>,
    layout: Res<PlatformLayout>,
    section: Res<CurrentSection>,
    pipes: Query<&Pipe>,
    sprites: Query<&SpriteState, With<Player>>,
    mut entry: ResMut<PipeEntry>,
    mut lock: ResMut<ControlLock>,
    mut input: ResMut<MovementInput>,
    mut started: MessageWriter<PipeEntryStarted>,
) {
    if !keyboard.just_pressed(KeyCode::ArrowDown) || entry.is_active() {
        return;
    }
    let Some(state) = sprites.iter().next() else {
        return;
    };

    let center = sprite_center(state, &viewport, &tuning);
    let pipes: Vec<&Pipe> = pipes.iter().collect();
    let Some((platform, pipe)) = entry_target(
        &layout.platforms,
        &pipes,
        center.x,
        controls.pipe_entry_range,
        &section.0,
    ) else {
        debug!(
            "No pipe away from '{}' within {} px",
            section.0, controls.pipe_entry_range
        );
        return;
    };

    if entry.begin(pipe.id, pipe.section.clone()) {
        lock.lock(LockSource::PipeEntry);
        input.clear();
        info!("Entering pipe to '{}'", pipe.section);
        started.write(PipeEntryStarted {
            section: pipe.section.clone(),
            at: Vec2::new(platform.center_x(), platform.top),
        });
    }
}

pub(crate) fn advance_pipe_entry(
    time: Res<Time>,
    tuning: Res<KinematicsTuning>,
    viewport: Res<Viewport>,
    mut entry: ResMut<PipeEntry>,
    mut lock: ResMut<ControlLock>,
    mut section: ResMut<CurrentSection>,
    mut sprites: Query<(&SpriteState, &mut Transform, &mut Visibility), With<Player>>,
    mut entered: MessageWriter<PipeEntered>,
) {
    if !entry.is_active() {
        return;
    }

    let cues = entry.advance(time.delta_secs());

    for (state, mut transform, mut visibility) in &mut sprites {
        if cues.hide {
            transform.scale = Vec3::splat(0.5);
            *visibility = Visibility::Hidden;
        }
        if let Some(reached) = &cues.emerge {
            transform.scale = Vec3::ONE;
            *visibility = Visibility::Inherited;
            entered.write(PipeEntered {
                section: reached.clone(),
                at: feet_position(state, &viewport, &tuning),
            });
        }
    }

    if let Some(reached) = cues.emerge {
        lock.unlock(LockSource::PipeEntry);
        info!("Arrived at '{}'", reached);
        section.0 = reached;
    }
}
