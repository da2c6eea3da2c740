//! Pipes domain: pipe platforms, hover feedback and pipe travel.

mod components;
mod entry;
mod layout;


pub use components::{
    CurrentSection, PIPE_COLOR, PIPE_HOVER_COLOR, PIPE_RIM_COLOR, PIPE_RIM_HEIGHT, Pipe,
    PipeEntered, PipeEntryStarted, PipeRim, PlatformLayout,
};
pub use entry::{EMERGE_AT, EntryCues, HIDE_AT, PipeEntry, entry_target};
pub use layout::{layout_platforms, nearest_pipe};

use bevy::prelude::*;

use crate::core::{FrameSet, controls_active};
use crate::pipes::entry::{advance_pipe_entry, start_pipe_entry};
use crate::pipes::layout::{highlight_hovered_pipe, relayout_pipes, spawn_pipes};

pub struct PipesPlugin;

impl Plugin for PipesPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PlatformLayout>()
            .init_resource::<PipeEntry>()
            .init_resource::<CurrentSection>()
            .add_message::<PipeEntryStarted>()
            .add_message::<PipeEntered>()
            .add_systems(Startup, spawn_pipes)
            .add_systems(Update, relayout_pipes.in_set(FrameSet::Layout))
            .add_systems(
                Update,
                start_pipe_entry
                    .in_set(FrameSet::Input)
                    .run_if(controls_active),
            )
            .add_systems(
                Update,
                (advance_pipe_entry, highlight_hovered_pipe).in_set(FrameSet::Present),
            );
    }
}
