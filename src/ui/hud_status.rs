//! UI domain: lives and current section.

use bevy::prelude::*;

use crate::pipes::CurrentSection;
use crate::ui::{HUD_PADDING, HUD_TEXT_COLOR};

/// Marker for the section label text
#[derive(Component)]
pub struct SectionText;

pub fn section_label(section: &str) -> String {
    format!("WORLD: {}", section.to_uppercase())
}

pub(crate) fn spawn_status_ui(mut commands: Commands, section: Res<CurrentSection>) {
    commands
        .spawn(Node {
            position_type: PositionType::Absolute,
            right: Val::Px(HUD_PADDING),
            top: Val::Px(HUD_PADDING),
            flex_direction: FlexDirection::Column,
            align_items: AlignItems::FlexEnd,
            row_gap: Val::Px(4.0),
            ..default()
        })
        .with_children(|parent| {
            parent.spawn((
                Text::new("LIVES x ∞"),
                TextFont {
                    font_size: 18.0,
                    ..default()
                },
                TextColor(HUD_TEXT_COLOR),
            ));
            parent.spawn((
                SectionText,
                Text::new(section_label(&section.0)),
                TextFont {
                    font_size: 18.0,
                    ..default()
                },
                TextColor(HUD_TEXT_COLOR),
            ));
        });
}

pub(crate) fn update_section_label(
    section: Res<CurrentSection>,
    mut query: Query<&mut Text, With<SectionText>>,
) {
    if section.is_changed() {
        for mut text in &mut query {
            **text = section_label(&section.0);
        }
    }
}
