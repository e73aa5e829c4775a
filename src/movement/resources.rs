//! Movement domain: tuning and input binding resources.

use bevy::prelude::*;
use serde::Deserialize;
use std::time::Duration;

use crate::movement::input::MultiKey;

/// Speeds are per second and y points up.
#[derive(Resource, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MovementTuning {
    /// Horizontal speed command and clamp; identical on ground and in air
    pub move_speed: f32,
    /// Upward velocity set by both the ground jump and the double jump
    pub jump_velocity: f32,
    pub jump_cooldown_secs: f32,
    pub double_jump_window_secs: f32,
    /// Overlap left in place after a wall correction
    pub penetration_slop: f32,
    pub gravity: f32,
    pub sprite_width: f32,
    pub sprite_height: f32,
    pub chamfer_radius: f32,
    pub friction: f32,
    pub static_friction: f32,
    pub air_friction: f32,
    pub fixed_hz: f64,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            move_speed: 180.0,
            jump_velocity: 660.0,
            jump_cooldown_secs: 0.25,
            double_jump_window_secs: 0.5,
            penetration_slop: 0.5,
            gravity: 1800.0,
            sprite_width: 64.0,
            sprite_height: 64.0,
            chamfer_radius: 10.0,
            friction: 0.1,
            static_friction: 0.0,
            air_friction: 1.2,
            fixed_hz: 60.0,
        }
    }
}

impl MovementTuning {
    /// Negative or non-finite seconds read as zero.
    pub fn jump_cooldown(&self) -> Duration {
        Duration::try_from_secs_f32(self.jump_cooldown_secs).unwrap_or_default()
    }

    pub fn double_jump_window(&self) -> Duration {
        Duration::try_from_secs_f32(self.double_jump_window_secs).unwrap_or_default()
    }

    pub fn sprite_size(&self) -> Vec2 {
        Vec2::new(self.sprite_width, self.sprite_height)
    }
}

/// Logical actions, each backed by any number of equivalent keys.
#[derive(Resource, Debug, Clone)]
pub struct InputBindings {
    pub left: MultiKey,
    pub right: MultiKey,
    pub jump: MultiKey,
}

impl Default for InputBindings {
    fn default() -> Self {
        Self {
            left: MultiKey::new([KeyCode::ArrowLeft, KeyCode::KeyA]),
            right: MultiKey::new([KeyCode::ArrowRight, KeyCode::KeyD]),
            jump: MultiKey::new([KeyCode::ArrowUp, KeyCode::KeyW]),
        }
    }
}
