//! Tilehop: a sensor-driven 2D platformer character controller on avian2d.

pub mod core;
pub mod hazards;
pub mod movement;
