use avian2d::prelude::*;
use bevy::prelude::*;

use tilehop::{core, hazards, movement};

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Tilehop".to_string(),
                resolution: (1280, 720).into(),
                resizable: true,
                ..default()
            }),
            ..default()
        }))
        .add_plugins(PhysicsPlugins::default())
        .add_plugins((
            core::CorePlugin,
            movement::MovementPlugin,
            hazards::HazardsPlugin,
        ))
        .run();
}
