//! Kinematics domain: gravity, friction and ground/platform collision for the
//! controllable sprite.
//!
//! Everything here is plain data and functions. The movement domain owns the
//! ECS wiring that feeds input in and reads the state back out.

mod platform;
mod state;
mod tick;
mod tuning;
mod viewport;

#[cfg(test)]
mod tests;

pub use platform::{Platform, PlatformId};
pub use state::{SpriteSnapshot, SpriteState, Support};
pub use tick::{TickInput, TickOutcome, tick};
pub use tuning::KinematicsTuning;
pub use viewport::Viewport;
