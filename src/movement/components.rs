//! Movement domain: components and physics layers for locomotion.

use avian2d::prelude::*;
use bevy::prelude::*;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    /// Colliders spawned without explicit `CollisionLayers`, such as
    /// host-built geometry. Characters still collide with them.
    #[default]
    Default,
    /// Ground surfaces (floors, platforms)
    Ground,
    /// Wall surfaces
    Wall,
    /// Player character hitbox and its edge sensors
    Player,
    /// Trigger volumes (goal zones) - should not block movement
    Sensor,
    /// Solid geometry that kills on touch
    Hazard,
}

#[derive(Component, Debug)]
pub struct Player;

/// Which edge of the character a sensor fixture watches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SensorSide {
    Bottom,
    Left,
    Right,
}

/// Child collider that reports overlap for one edge of its parent body.
#[derive(Component, Debug, Clone, Copy)]
pub struct CharacterSensor {
    pub side: SensorSide,
}

/// Marker for the solid hitbox child of a character body. Only the hitbox
/// counts as touching a hazard; the edge sensors reach past it.
#[derive(Component, Debug)]
pub struct CharacterHitbox;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

/// Semantic animation key selected every tick for the renderer.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnimationKey {
    #[default]
    Idle,
    Run,
    /// Animation stopped, holding [`AnimationKey::AIRBORNE_FRAME`]
    Airborne,
}

impl AnimationKey {
    pub const AIRBORNE_FRAME: usize = 10;
}

/// Present once the body has been made immovable by a win/lose flow
#[derive(Component, Debug)]
pub struct Frozen;

/// Marker for ground colliders
#[derive(Component, Debug)]
pub struct Ground;

/// Marker for wall colliders
#[derive(Component, Debug)]
pub struct Wall;
