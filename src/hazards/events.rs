//! Hazards domain: events for win/lose flows.

use bevy::ecs::message::Message;
use bevy::prelude::*;

/// Event fired when a character touches a lethal surface
#[derive(Debug)]
pub struct CharacterKilledEvent {
    pub character: Entity,
}

impl Message for CharacterKilledEvent {}

/// Event fired when a character enters a goal zone
#[derive(Debug)]
pub struct GoalReachedEvent {
    pub character: Entity,
}

impl Message for GoalReachedEvent {}
