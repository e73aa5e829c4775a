//! Hazards domain: markers and per-character trigger state.

use bevy::prelude::*;

/// Solid geometry that kills a character on first touch
#[derive(Component, Debug)]
pub struct LethalSurface;

/// Sensor volume that completes the level when entered
#[derive(Component, Debug)]
pub struct GoalZone;

/// Each trigger fires at most once per character.
#[derive(Component, Debug)]
pub struct HazardWatch {
    lethal_armed: bool,
    goal_armed: bool,
}

impl Default for HazardWatch {
    fn default() -> Self {
        Self {
            lethal_armed: true,
            goal_armed: true,
        }
    }
}

impl HazardWatch {
    /// Returns true the first time only.
    pub fn trip_lethal(&mut self) -> bool {
        std::mem::replace(&mut self.lethal_armed, false)
    }

    /// Returns true the first time only.
    pub fn trip_goal(&mut self) -> bool {
        std::mem::replace(&mut self.goal_armed, false)
    }

    pub fn is_lethal_armed(&self) -> bool {
        self.lethal_armed
    }

    pub fn is_goal_armed(&self) -> bool {
        self.goal_armed
    }
}
