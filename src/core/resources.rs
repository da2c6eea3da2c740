//! Core domain: shared resources for input gating.

use bevy::prelude::*;
use std::collections::HashSet;

/// Things that can take the sprite controls away from the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LockSource {
    /// The sprite is travelling through a pipe.
    PipeEntry,
}

/// Sources currently holding the sprite controls.
#[derive(Resource, Debug, Default)]
pub struct ControlLock {
    sources: HashSet<LockSource>,
}

impl ControlLock {
    pub fn is_locked(&self) -> bool {
        !self.sources.is_empty()
    }

    pub fn is_held_by(&self, source: LockSource) -> bool {
        self.sources.contains(&source)
    }

    /// Returns false if `source` already held the lock.
    pub fn lock(&mut self, source: LockSource) -> bool {
        self.sources.insert(source)
    }

    /// Returns false if `source` was not holding the lock.
    pub fn unlock(&mut self, source: LockSource) -> bool {
        self.sources.remove(&source)
    }
}

/// Run condition for sprite input systems.
pub fn controls_active(lock: Res<ControlLock>) -> bool {
    !lock.is_locked()
}
