//! Movement domain: demo room and character for manual testing.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::hazards::{GoalZone, LethalSurface};
use crate::movement::{CharacterHandle, GameLayer, Ground, MovementTuning, Wall};

fn block(size: Vec2, position: Vec2, color: Color, layers: CollisionLayers) -> impl Bundle {
    (
        Sprite {
            color,
            custom_size: Some(size),
            ..default()
        },
        Transform::from_translation(position.extend(0.0)),
        RigidBody::Static,
        Collider::rectangle(size.x, size.y),
        layers,
    )
}

pub fn spawn_demo_room(mut commands: Commands) {
    let wall_color = Color::srgb(0.3, 0.3, 0.4);
    let ground_color = Color::srgb(0.4, 0.5, 0.4);
    let platform_color = Color::srgb(0.5, 0.4, 0.3);
    let lava_color = Color::srgb(0.9, 0.3, 0.1);

    let ground_layers = CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]);
    let wall_layers = CollisionLayers::new(GameLayer::Wall, [GameLayer::Player]);
    let hazard_layers = CollisionLayers::new(GameLayer::Hazard, [GameLayer::Player]);

    // Floor, split by a lava strip
    commands.spawn((
        Ground,
        block(
            Vec2::new(500.0, 40.0),
            Vec2::new(-150.0, -200.0),
            ground_color,
            ground_layers,
        ),
    ));
    commands.spawn((
        LethalSurface,
        block(
            Vec2::new(100.0, 30.0),
            Vec2::new(150.0, -205.0),
            lava_color,
            hazard_layers,
        ),
    ));
    commands.spawn((
        Ground,
        block(
            Vec2::new(200.0, 40.0),
            Vec2::new(300.0, -200.0),
            ground_color,
            ground_layers,
        ),
    ));

    for x in [-420.0, 420.0] {
        commands.spawn((
            Wall,
            block(
                Vec2::new(40.0, 500.0),
                Vec2::new(x, 50.0),
                wall_color,
                wall_layers,
            ),
        ));
    }

    for (size, position) in [
        (Vec2::new(150.0, 20.0), Vec2::new(-250.0, -50.0)),
        (Vec2::new(150.0, 20.0), Vec2::new(250.0, 50.0)),
        (Vec2::new(120.0, 20.0), Vec2::new(0.0, 150.0)),
    ] {
        commands.spawn((
            Ground,
            block(size, position, platform_color, ground_layers),
        ));
    }

    // Goal above the highest platform
    commands.spawn((
        GoalZone,
        Transform::from_xyz(0.0, 200.0, 0.0),
        RigidBody::Static,
        Collider::rectangle(80.0, 60.0),
        Sensor,
        CollisionEventsEnabled,
        CollisionLayers::new(GameLayer::Sensor, [GameLayer::Player]),
    ));
}

pub fn spawn_demo_character(mut commands: Commands) {
    commands.queue(|world: &mut World| {
        let handle = CharacterHandle::spawn(world, -250.0, -120.0);
        let size = world
            .get_resource::<MovementTuning>()
            .map(|tuning| tuning.sprite_size())
            .unwrap_or(Vec2::splat(64.0));
        world.entity_mut(handle.entity()).insert(Sprite {
            color: Color::srgb(0.9, 0.9, 0.9),
            custom_size: Some(Vec2::new(size.x * 0.6, size.y)),
            ..default()
        });
    });
}
