//! Movement domain: character spawn, hook subscriptions, and teardown.
//!
//! Every per-tick or teardown callback a character needs is an explicit
//! subscription in [`HostHooks`]. The systems that drive ticks, contact
//! delivery and shutdown only ever dispatch to current subscribers, so a
//! character that has been torn down is unreachable from all of them.

use avian2d::prelude::*;
use bevy::ecs::lifecycle::HookContext;
use bevy::ecs::world::DeferredWorld;
use bevy::prelude::*;
use std::collections::BTreeMap;
use std::time::Duration;

use crate::movement::body::spawn_character_body;
use crate::movement::{
    AnimationKey, ContactTracker, Frozen, InputBindings, InputSnapshot, MovementController,
    MovementTuning, Player, SensorSide, TickOutcome,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactPhase {
    Start,
    Active,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HookKind {
    /// Per-tick movement update
    Update,
    /// Contact flag reset, before the physics step
    BeforeStep,
    /// A sensor began or kept overlapping a solid collider
    Contact {
        phase: ContactPhase,
        sensor: Entity,
        side: SensorSide,
    },
    /// Scene left `Playing`
    Shutdown,
    /// Body entity removed from the world, dispatched from the
    /// `CharacterLifecycle` removal hook
    Destroy,
}

/// A live contact subscription, flattened for dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactSubscription {
    pub phase: ContactPhase,
    pub sensor: Entity,
    pub side: SensorSide,
    pub owner: Entity,
}

/// Registry of host hook subscriptions, keyed by handle.
#[derive(Resource, Debug, Default)]
pub struct HostHooks {
    next_id: u64,
    subscriptions: BTreeMap<SubscriptionId, (HookKind, Entity)>,
}

impl HostHooks {
    pub fn subscribe(&mut self, kind: HookKind, owner: Entity) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscriptions.insert(id, (kind, owner));
        id
    }

    /// Returns false if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscriptions.remove(&id).is_some()
    }

    pub fn is_subscribed(&self, id: SubscriptionId) -> bool {
        self.subscriptions.contains_key(&id)
    }

    /// Owners subscribed to `kind`, in subscription order.
    pub fn owners(&self, kind: HookKind) -> Vec<Entity> {
        self.subscriptions
            .values()
            .filter(|(k, _)| *k == kind)
            .map(|(_, owner)| *owner)
            .collect()
    }

    pub fn contact_subscriptions(&self) -> impl Iterator<Item = ContactSubscription> + '_ {
        self.subscriptions
            .values()
            .filter_map(|(kind, owner)| match *kind {
                HookKind::Contact {
                    phase,
                    sensor,
                    side,
                } => Some(ContactSubscription {
                    phase,
                    sensor,
                    side,
                    owner: *owner,
                }),
                _ => None,
            })
    }

    pub fn count_for(&self, owner: Entity) -> usize {
        self.subscriptions
            .values()
            .filter(|(_, o)| *o == owner)
            .count()
    }

    pub fn len(&self) -> usize {
        self.subscriptions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscriptions.is_empty()
    }
}

/// Subscriptions held by one character and whether it has been torn down.
/// Removing this component (for instance by despawning the body) is the
/// destroy signal.
#[derive(Component, Debug, Default)]
#[component(on_remove = release_on_remove)]
pub struct CharacterLifecycle {
    subscriptions: Vec<SubscriptionId>,
    released: bool,
}

impl CharacterLifecycle {
    pub fn subscriptions(&self) -> &[SubscriptionId] {
        &self.subscriptions
    }

    pub fn is_released(&self) -> bool {
        self.released
    }
}

/// Dispatches the `Destroy` hook to the removed body if it still holds a
/// subscription for it.
fn release_on_remove(world: DeferredWorld, context: HookContext) {
    let subscribed = world
        .get_resource::<HostHooks>()
        .is_some_and(|hooks| hooks.owners(HookKind::Destroy).contains(&context.entity));
    if subscribed {
        release(world, context.entity);
    }
}

/// Unsubscribe every hook, cancel both cooldowns and mark the controller
/// inert. Returns false if the character was already released or is unknown.
fn release(mut world: DeferredWorld, entity: Entity) -> bool {
    let subscriptions = {
        let Some(mut lifecycle) = world.get_mut::<CharacterLifecycle>(entity) else {
            return false;
        };
        if lifecycle.released {
            return false;
        }
        lifecycle.released = true;
        std::mem::take(&mut lifecycle.subscriptions)
    };

    if let Some(mut hooks) = world.get_resource_mut::<HostHooks>() {
        for id in &subscriptions {
            hooks.unsubscribe(*id);
        }
    }

    if let Some(mut controller) = world.get_mut::<MovementController>(entity) {
        controller.shut_down();
    }

    info!(
        "Released character {:?}: {} hook subscriptions dropped",
        entity,
        subscriptions.len()
    );
    true
}

/// Host-facing handle to one spawned character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CharacterHandle {
    entity: Entity,
}

impl CharacterHandle {
    pub fn from_entity(entity: Entity) -> Self {
        Self { entity }
    }

    pub fn entity(&self) -> Entity {
        self.entity
    }

    /// Compose the body at `(x, y)` and subscribe it to every host hook.
    pub fn spawn(world: &mut World, x: f32, y: f32) -> Self {
        let tuning = world
            .get_resource::<MovementTuning>()
            .cloned()
            .unwrap_or_default();
        let composed = spawn_character_body(world, Vec2::new(x, y), &tuning);
        let body = composed.body;

        let mut kinds = vec![HookKind::Update, HookKind::BeforeStep];
        for (side, sensor) in composed.sensors {
            for phase in [ContactPhase::Start, ContactPhase::Active] {
                kinds.push(HookKind::Contact {
                    phase,
                    sensor,
                    side,
                });
            }
        }
        kinds.push(HookKind::Shutdown);
        kinds.push(HookKind::Destroy);

        let subscriptions = {
            let mut hooks = world.get_resource_or_init::<HostHooks>();
            kinds
                .into_iter()
                .map(|kind| hooks.subscribe(kind, body))
                .collect::<Vec<_>>()
        };

        world.entity_mut(body).insert((
            Player,
            ContactTracker::default(),
            MovementController::default(),
            AnimationKey::default(),
            CharacterLifecycle {
                subscriptions,
                released: false,
            },
        ));

        info!("Spawned character {:?} at ({}, {})", body, x, y);
        Self { entity: body }
    }

    /// Run one movement tick from the live keyboard state.
    pub fn update(&self, world: &mut World) -> Option<TickOutcome> {
        let input = match (
            world.get_resource::<InputBindings>(),
            world.get_resource::<ButtonInput<KeyCode>>(),
        ) {
            (Some(bindings), Some(keyboard)) => bindings.sample(keyboard),
            _ => InputSnapshot::default(),
        };
        self.update_with(world, input)
    }

    /// Run one movement tick from an explicit input snapshot.
    pub fn update_with(&self, world: &mut World, input: InputSnapshot) -> Option<TickOutcome> {
        let tuning = world
            .get_resource::<MovementTuning>()
            .cloned()
            .unwrap_or_default();

        let mut query = world.query::<(
            &ContactTracker,
            &mut MovementController,
            &mut LinearVelocity,
            &mut AnimationKey,
        )>();
        let Ok((contacts, mut controller, mut velocity, mut animation)) =
            query.get_mut(world, self.entity)
        else {
            return None;
        };

        let outcome = controller.update(input, contacts, &mut velocity.0, &tuning)?;
        *animation = outcome.animation;
        Some(outcome)
    }

    /// Advance the character's cooldown timers.
    pub fn advance_timers(&self, world: &mut World, delta: Duration) {
        if let Some(mut controller) = world.get_mut::<MovementController>(self.entity) {
            controller.tick_timers(delta);
        }
    }

    /// Make the body immovable. Used by win/lose flows.
    pub fn freeze(&self, world: &mut World) {
        let Ok(mut entity) = world.get_entity_mut(self.entity) else {
            return;
        };
        if entity.contains::<Frozen>() {
            return;
        }
        entity.insert((RigidBody::Static, LinearVelocity::ZERO, Frozen));
        info!("Froze character {:?}", self.entity);
    }

    /// Tear the character down and despawn its body. Safe to call any number
    /// of times, and after the body was already despawned elsewhere.
    pub fn destroy(&self, world: &mut World) {
        release(DeferredWorld::from(&mut *world), self.entity);
        if world.get_entity(self.entity).is_ok() {
            world.despawn(self.entity);
        }
    }

    pub fn is_alive(&self, world: &World) -> bool {
        world
            .get::<CharacterLifecycle>(self.entity)
            .is_some_and(|lifecycle| !lifecycle.is_released())
    }

    pub fn position(&self, world: &World) -> Option<Vec2> {
        world.get::<Position>(self.entity).map(|position| position.0)
    }

    pub fn velocity(&self, world: &World) -> Option<Vec2> {
        world.get::<LinearVelocity>(self.entity).map(|velocity| velocity.0)
    }

    pub fn contacts(&self, world: &World) -> Option<ContactTracker> {
        world.get::<ContactTracker>(self.entity).copied()
    }
}
