//! Movement domain: cooldown timers and per-tick movement.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{
    AnimationKey, ContactTracker, Facing, HookKind, HostHooks, InputBindings, MovementController,
    MovementTuning,
};

pub(crate) fn tick_cooldowns(
    time: Res<Time>,
    hooks: Res<HostHooks>,
    mut query: Query<&mut MovementController>,
) {
    let delta = time.delta();

    for owner in hooks.owners(HookKind::Update) {
        if let Ok(mut controller) = query.get_mut(owner) {
            controller.tick_timers(delta);
        }
    }
}

pub(crate) fn apply_movement(
    hooks: Res<HostHooks>,
    keyboard: Res<ButtonInput<KeyCode>>,
    bindings: Res<InputBindings>,
    tuning: Res<MovementTuning>,
    mut query: Query<(
        &ContactTracker,
        &mut MovementController,
        &mut LinearVelocity,
        &mut AnimationKey,
    )>,
) {
    let input = bindings.sample(keyboard.as_ref());

    for owner in hooks.owners(HookKind::Update) {
        let Ok((contacts, mut controller, mut velocity, mut animation)) = query.get_mut(owner)
        else {
            continue;
        };

        let Some(outcome) = controller.update(input, contacts, &mut velocity.0, &tuning) else {
            continue;
        };

        if *animation != outcome.animation {
            *animation = outcome.animation;
        }
    }
}

pub(crate) fn sync_sprite_facing(
    mut query: Query<(&MovementController, &mut Sprite), Changed<MovementController>>,
) {
    for (controller, mut sprite) in &mut query {
        let flip = controller.facing == Facing::Left;
        if sprite.flip_x != flip {
            sprite.flip_x = flip;
        }
    }
}
