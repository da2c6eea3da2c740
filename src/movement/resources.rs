//! Movement domain: input accumulation between ticks.

use bevy::prelude::*;

use crate::content::ControlsConfig;
use crate::kinematics::TickInput;

/// Upper bound on repeats emitted in one frame, so a long stall does not
/// dump a burst of impulses.
const MAX_REPEATS_PER_FRAME: u32 = 4;

/// Impulses captured since the last tick. The tick consumes and clears them.
#[derive(Resource, Debug, Default)]
pub struct MovementInput {
    pub jump: bool,
    pub move_delta: f32,
}

impl MovementInput {
    pub fn request_jump(&mut self) {
        self.jump = true;
    }

    pub fn push_move(&mut self, delta: f32) {
        self.move_delta += delta;
    }

    /// Hand the pending impulses to the tick and reset.
    pub fn take(&mut self) -> TickInput {
        let input = TickInput {
            jump: self.jump,
            move_delta: self.move_delta,
        };
        *self = Self::default();
        input
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Turns a held key into a press followed by delayed repeats.
#[derive(Debug, Clone, Default)]
pub struct KeyRepeat {
    /// Whether the key was seen held on an earlier frame.
    tracking: bool,
    held_for: f32,
    next_fire: f32,
}

impl KeyRepeat {
    /// Number of impulses the key produces this frame.
    ///
    /// A key first seen already held, for example one kept down while the
    /// controls were locked, waits out the repeat delay without a press.
    pub fn update(
        &mut self,
        just_pressed: bool,
        pressed: bool,
        dt: f32,
        controls: &ControlsConfig,
    ) -> u32 {
        if !pressed && !just_pressed {
            *self = Self::default();
            return 0;
        }

        if just_pressed || !self.tracking {
            self.tracking = true;
            self.held_for = 0.0;
            self.next_fire = controls.repeat_delay;
            return u32::from(just_pressed);
        }

        self.held_for += dt;
        let mut fired = 0;
        while self.held_for >= self.next_fire && fired < MAX_REPEATS_PER_FRAME {
            fired += 1;
            self.next_fire += controls.repeat_interval;
        }
        if self.held_for >= self.next_fire {
            self.next_fire = self.held_for + controls.repeat_interval;
        }
        fired
    }
}

/// Repeat trackers for both move keys.
#[derive(Debug, Default)]
pub(crate) struct MoveKeys {
    pub left: KeyRepeat,
    pub right: KeyRepeat,
}
