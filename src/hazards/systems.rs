//! Hazards domain: contact detection for lethal surfaces and goal zones.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::hazards::{
    CharacterKilledEvent, GoalReachedEvent, GoalZone, HazardWatch, LethalSurface,
};
use crate::movement::{CharacterHandle, CharacterHitbox, Player};

pub(crate) fn arm_hazard_watch(
    mut commands: Commands,
    query: Query<Entity, (Added<Player>, Without<HazardWatch>)>,
) {
    for entity in &query {
        commands.entity(entity).insert(HazardWatch::default());
    }
}

pub(crate) fn detect_hazard_contacts(
    mut collision_events: MessageReader<CollisionStart>,
    mut killed_events: MessageWriter<CharacterKilledEvent>,
    mut goal_events: MessageWriter<GoalReachedEvent>,
    hitboxes: Query<&ColliderOf, With<CharacterHitbox>>,
    lethal: Query<(), With<LethalSurface>>,
    goals: Query<(), With<GoalZone>>,
    mut watches: Query<&mut HazardWatch, With<Player>>,
) {
    for event in collision_events.read() {
        let pairs = [
            (event.collider1, event.collider2),
            (event.collider2, event.collider1),
        ];

        for (character_collider, other) in pairs {
            let Ok(collider_of) = hitboxes.get(character_collider) else {
                continue;
            };
            let character = collider_of.body;
            let Ok(mut watch) = watches.get_mut(character) else {
                continue;
            };

            if lethal.contains(other) && watch.trip_lethal() {
                info!("Character {:?} touched a lethal surface", character);
                killed_events.write(CharacterKilledEvent { character });
            }

            if goals.contains(other) && watch.trip_goal() {
                info!("Character {:?} reached the goal", character);
                goal_events.write(GoalReachedEvent { character });
            }
        }
    }
}

/// Killed characters stop moving; restarting the scene is left to the host.
pub(crate) fn freeze_killed_characters(
    mut commands: Commands,
    mut killed_events: MessageReader<CharacterKilledEvent>,
) {
    for event in killed_events.read() {
        let handle = CharacterHandle::from_entity(event.character);
        commands.queue(move |world: &mut World| handle.freeze(world));
    }
}
