//! Hazards domain: lethal surfaces and goal zones that end a character's run.

mod components;
mod events;
mod systems;


pub use components::{GoalZone, HazardWatch, LethalSurface};
pub use events::{CharacterKilledEvent, GoalReachedEvent};

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::core::GameState;
use crate::hazards::systems::{arm_hazard_watch, detect_hazard_contacts, freeze_killed_characters};

pub struct HazardsPlugin;

impl Plugin for HazardsPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<CharacterKilledEvent>()
            .add_message::<GoalReachedEvent>()
            .add_systems(
                FixedPostUpdate,
                (arm_hazard_watch, detect_hazard_contacts, freeze_killed_characters)
                    .chain()
                    .after(PhysicsSystems::StepSimulation)
                    .run_if(in_state(GameState::Playing)),
            );
    }
}
