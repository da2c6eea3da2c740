mod coins;
mod content;
mod core;
#[cfg(feature = "dev-tools")]
mod debug;
mod effects;
mod kinematics;
mod movement;
mod pipes;
mod ui;

use bevy::prelude::*;

fn main() {
    let mut app = App::new();
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Pipe Hop".to_string(),
            resolution: (1280, 720).into(),
            resizable: true,
            ..default()
        }),
        ..default()
    }))
    // Content first: the other plugins read its resources while building.
    .add_plugins(content::ContentPlugin)
    .add_plugins((
        core::CorePlugin,
        movement::MovementPlugin,
        pipes::PipesPlugin,
        coins::CoinsPlugin,
        effects::EffectsPlugin,
        ui::UiPlugin,
    ));

    #[cfg(feature = "dev-tools")]
    app.add_plugins(debug::DebugPlugin);

    app.run();
}
