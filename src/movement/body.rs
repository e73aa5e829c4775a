//! Movement domain: compound character body composition.
//!
//! A character is one dynamic rigid body with four child colliders: a
//! chamfered solid hitbox and three thin sensor strips on the bottom, left
//! and right edges. avian2d fuses child colliders into their parent body, so
//! all four move as a single rigid unit.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{
    CharacterHitbox, CharacterSensor, GameLayer, MovementTuning, SensorSide,
};

/// Thickness of the sensor strips.
const SENSOR_THICKNESS: f32 = 2.0;

/// One collider of the compound body, in body-local space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fixture {
    pub offset: Vec2,
    pub size: Vec2,
    /// Corner rounding; zero for sensors
    pub chamfer: f32,
}

impl Fixture {
    fn strip(offset: Vec2, size: Vec2) -> Self {
        Self {
            offset,
            size,
            chamfer: 0.0,
        }
    }
}

/// Geometry for a character body built from its nominal sprite size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyLayout {
    pub hitbox: Fixture,
    pub bottom: Fixture,
    pub left: Fixture,
    pub right: Fixture,
}

impl BodyLayout {
    /// Compose the layout for a sprite of `size` (full width and height).
    ///
    /// Dimensions must be positive. The chamfer is capped at a quarter of the
    /// hitbox's shorter side so the rounded shape keeps its outer size.
    pub fn compose(size: Vec2, chamfer_radius: f32) -> Self {
        debug_assert!(
            size.x > 0.0 && size.y > 0.0,
            "character sprite size must be positive, got {size:?}"
        );
        let (w, h) = (size.x, size.y);

        let hitbox_size = Vec2::new(w * 0.6, h);
        let chamfer = chamfer_radius.clamp(0.0, hitbox_size.min_element() * 0.25);

        Self {
            hitbox: Fixture {
                offset: Vec2::ZERO,
                size: hitbox_size,
                chamfer,
            },
            bottom: Fixture::strip(
                Vec2::new(0.0, -h * 0.5),
                Vec2::new(w * 0.25, SENSOR_THICKNESS),
            ),
            left: Fixture::strip(
                Vec2::new(-w * 0.35, 0.0),
                Vec2::new(SENSOR_THICKNESS, h * 0.5),
            ),
            right: Fixture::strip(
                Vec2::new(w * 0.35, 0.0),
                Vec2::new(SENSOR_THICKNESS, h * 0.5),
            ),
        }
    }

    pub fn sensors(&self) -> [(SensorSide, Fixture); 3] {
        [
            (SensorSide::Bottom, self.bottom),
            (SensorSide::Left, self.left),
            (SensorSide::Right, self.right),
        ]
    }

    /// Rounded hitbox collider. The border radius grows the shape outward,
    /// so the inner rectangle is shrunk by it on every side.
    pub fn hitbox_collider(&self) -> Collider {
        let inner = (self.hitbox.size - Vec2::splat(2.0 * self.hitbox.chamfer)).max(Vec2::ZERO);
        if self.hitbox.chamfer > 0.0 {
            Collider::round_rectangle(inner.x, inner.y, self.hitbox.chamfer)
        } else {
            Collider::rectangle(self.hitbox.size.x, self.hitbox.size.y)
        }
    }
}

/// Entities making up one spawned character body.
#[derive(Debug, Clone, Copy)]
pub struct ComposedBody {
    pub body: Entity,
    pub hitbox: Entity,
    pub sensors: [(SensorSide, Entity); 3],
}

/// Spawn the compound body at `position` and return its entities.
pub fn spawn_character_body(
    world: &mut World,
    position: Vec2,
    tuning: &MovementTuning,
) -> ComposedBody {
    let layout = BodyLayout::compose(tuning.sprite_size(), tuning.chamfer_radius);
    let transform = Transform::from_translation(position.extend(0.0));

    let body = world
        .spawn((
            transform,
            Position::new(position),
            RigidBody::Dynamic,
            // Infinite rotational inertia so the character never tips over
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
            LinearDamping(tuning.air_friction),
        ))
        .id();

    let hitbox = world
        .spawn((
            CharacterHitbox,
            ChildOf(body),
            Transform::from_translation(layout.hitbox.offset.extend(0.0)),
            layout.hitbox_collider(),
            Friction::new(tuning.friction).with_static_coefficient(tuning.static_friction),
            CollisionEventsEnabled,
            CollisionLayers::new(
                GameLayer::Player,
                [
                    GameLayer::Default,
                    GameLayer::Ground,
                    GameLayer::Wall,
                    GameLayer::Hazard,
                    GameLayer::Sensor,
                ],
            ),
        ))
        .id();

    let sensors = layout.sensors().map(|(side, fixture)| {
        let sensor = world
            .spawn((
                CharacterSensor { side },
                ChildOf(body),
                Transform::from_translation(fixture.offset.extend(0.0)),
                Collider::rectangle(fixture.size.x, fixture.size.y),
                Sensor,
                CollisionEventsEnabled,
                CollisionLayers::new(
                    GameLayer::Player,
                    [
                        GameLayer::Default,
                        GameLayer::Ground,
                        GameLayer::Wall,
                        GameLayer::Hazard,
                    ],
                ),
            ))
            .id();
        (side, sensor)
    });

    ComposedBody {
        body,
        hitbox,
        sensors,
    }
}
