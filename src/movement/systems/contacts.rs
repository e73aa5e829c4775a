//! Movement domain: contact flag reset and sensor contact delivery.

use avian2d::prelude::*;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;
use std::collections::HashSet;

use crate::movement::{ContactPhase, ContactTracker, HookKind, HostHooks, MovementTuning};

/// Clear every subscribed character's contact flags ahead of the physics step.
pub(crate) fn reset_contact_flags(
    hooks: Res<HostHooks>,
    mut query: Query<&mut ContactTracker>,
) {
    for owner in hooks.owners(HookKind::BeforeStep) {
        if let Ok(mut contacts) = query.get_mut(owner) {
            contacts.reset_flags();
        }
    }
}

/// Deliver this step's sensor overlaps to their owning characters.
///
/// A pair that began touching this step goes to the `Start` subscription,
/// any other touching pair to `Active`, so each overlap is handled once per
/// step. Wall corrections move the body's `Position` directly.
pub(crate) fn deliver_sensor_contacts(
    hooks: Res<HostHooks>,
    tuning: Res<MovementTuning>,
    collisions: Collisions,
    mut collision_started: MessageReader<CollisionStart>,
    sensors: Query<(), With<Sensor>>,
    mut characters: Query<(&mut ContactTracker, &mut Position)>,
) {
    let started: HashSet<(Entity, Entity)> = collision_started
        .read()
        .flat_map(|event| {
            [
                (event.collider1, event.collider2),
                (event.collider2, event.collider1),
            ]
        })
        .collect();

    for subscription in hooks.contact_subscriptions() {
        for pair in collisions.collisions_with(subscription.sensor) {
            if !pair.is_touching() {
                continue;
            }

            let other = if pair.collider1 == subscription.sensor {
                pair.collider2
            } else {
                pair.collider1
            };

            let phase = if started.contains(&(subscription.sensor, other)) {
                ContactPhase::Start
            } else {
                ContactPhase::Active
            };
            if phase != subscription.phase {
                continue;
            }

            let penetration = pair
                .manifolds
                .iter()
                .flat_map(|manifold| manifold.points.iter())
                .map(|point| point.penetration)
                .fold(0.0, f32::max);

            let Ok((mut contacts, mut position)) = characters.get_mut(subscription.owner) else {
                continue;
            };

            let shift = contacts.on_sensor_contact(
                subscription.side,
                sensors.contains(other),
                penetration,
                tuning.penetration_slop,
            );

            if shift != 0.0 {
                position.x += shift;
                debug!(
                    "Wall correction: side={:?}, penetration={}, shift={}",
                    subscription.side, penetration, shift
                );
            }
        }
    }
}
