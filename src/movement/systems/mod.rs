//! Movement domain: system modules for input, simulation and rendering.

pub(crate) mod input;
pub(crate) mod render;
pub(crate) mod simulate;

pub(crate) use input::{read_keyboard, read_sprite_click};
pub(crate) use render::sync_sprite_transform;
pub(crate) use simulate::advance_sprite;
