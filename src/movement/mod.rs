//! Movement domain: sensor-driven platformer character control.
//!
//! Each fixed tick runs in this order:
//! 1. `FixedUpdate`: cooldown timers advance, then the movement state machine
//!    reads input and last step's contact flags and writes velocity.
//! 2. `FixedPostUpdate`: contact flags are cleared, avian2d steps the world,
//!    and sensor overlaps are delivered back into the flags.

pub mod body;
pub mod config;
mod components;
mod contact;
mod controller;
mod cooldown;
#[cfg(feature = "dev-tools")]
pub mod dev;
mod input;
mod lifecycle;
mod resources;
mod systems;


pub use body::{BodyLayout, ComposedBody, Fixture};
pub use components::{
    AnimationKey, CharacterHitbox, CharacterSensor, Facing, Frozen, GameLayer, Ground, Player,
    SensorSide, Wall,
};
pub use contact::ContactTracker;
pub use controller::{JumpKind, MovementController, TickOutcome};
pub use cooldown::OneShot;
pub use input::{InputSnapshot, KeySource, MultiKey};
pub use lifecycle::{
    CharacterHandle, CharacterLifecycle, ContactPhase, ContactSubscription, HookKind, HostHooks,
    SubscriptionId,
};
pub use resources::{InputBindings, MovementTuning};

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::core::GameState;
use crate::movement::config::setup_movement_tuning;
use crate::movement::systems::{
    apply_movement, deliver_sensor_contacts, release_on_shutdown, reset_contact_flags,
    sync_sprite_facing, tick_cooldowns,
};

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementTuning>()
            .init_resource::<InputBindings>()
            .init_resource::<HostHooks>()
            .add_systems(Startup, setup_movement_tuning)
            .add_systems(
                FixedUpdate,
                (tick_cooldowns, apply_movement)
                    .chain()
                    .run_if(in_state(GameState::Playing)),
            )
            .add_systems(
                FixedPostUpdate,
                (
                    reset_contact_flags.before(PhysicsSystems::StepSimulation),
                    deliver_sensor_contacts.after(PhysicsSystems::StepSimulation),
                ),
            )
            .add_systems(Update, sync_sprite_facing)
            .add_systems(OnExit(GameState::Playing), release_on_shutdown);

        #[cfg(all(feature = "dev-tools", not(test)))]
        app.add_systems(
            OnEnter(GameState::Playing),
            (dev::spawn_demo_room, dev::spawn_demo_character),
        );
    }
}
