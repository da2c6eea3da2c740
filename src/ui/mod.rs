//! UI domain: HUD overlay.

mod hud_status;
mod hud_wallet;

pub use hud_status::section_label;
pub use hud_wallet::coin_label;

use bevy::prelude::*;

use crate::core::FrameSet;
use crate::ui::hud_status::{spawn_status_ui, update_section_label};
use crate::ui::hud_wallet::{spawn_coin_display_ui, update_coin_display};

pub(crate) const HUD_PADDING: f32 = 16.0;
pub(crate) const HUD_TEXT_COLOR: Color = Color::srgb(1.0, 1.0, 1.0);

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, (spawn_coin_display_ui, spawn_status_ui))
            .add_systems(
                Update,
                (update_coin_display, update_section_label).in_set(FrameSet::Present),
            );
    }
}
