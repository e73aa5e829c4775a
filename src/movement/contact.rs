//! Movement domain: per-tick sensor contact tracking.

use bevy::prelude::*;

use crate::movement::SensorSide;

/// Which edges touched something solid during this tick's contact
/// resolution. All flags are cleared before every physics step and only
/// ever set by contact delivery, so nothing carries over between ticks.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ContactTracker {
    pub touching_ground: bool,
    pub touching_left: bool,
    pub touching_right: bool,
}

impl ContactTracker {
    pub fn reset_flags(&mut self) {
        self.touching_ground = false;
        self.touching_left = false;
        self.touching_right = false;
    }

    pub fn is_on_ground(&self) -> bool {
        self.touching_ground
    }

    /// Record a sensor overlapping another collider and return the horizontal
    /// position correction to apply to the body.
    ///
    /// Sensor-vs-sensor overlaps are ignored. Wall sensors push the body out
    /// of the wall until exactly `slop` of overlap remains, so the sensor is
    /// still touching next tick but wall friction cannot hold the character
    /// up. Overlaps of `slop` or less are left alone.
    pub fn on_sensor_contact(
        &mut self,
        side: SensorSide,
        other_is_sensor: bool,
        penetration: f32,
        slop: f32,
    ) -> f32 {
        if other_is_sensor {
            return 0.0;
        }

        let excess = if penetration > slop {
            penetration - slop
        } else {
            0.0
        };

        match side {
            SensorSide::Bottom => {
                self.touching_ground = true;
                0.0
            }
            SensorSide::Left => {
                self.touching_left = true;
                excess
            }
            SensorSide::Right => {
                self.touching_right = true;
                -excess
            }
        }
    }
}
