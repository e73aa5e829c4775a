//! Movement domain: the per-tick movement and jump state machine.

use bevy::prelude::*;
use std::time::Duration;

use crate::movement::cooldown::OneShot;
use crate::movement::input::InputSnapshot;
use crate::movement::{AnimationKey, ContactTracker, Facing, MovementTuning};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpKind {
    Ground,
    Double,
}

/// What one [`MovementController::update`] produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickOutcome {
    pub jump: Option<JumpKind>,
    pub animation: AnimationKey,
}

/// Jump eligibility, facing, and the two cooldown timers of one character.
#[derive(Component, Debug)]
pub struct MovementController {
    pub can_jump: bool,
    pub can_double_jump: bool,
    /// Edge gate: jump input must be seen released before another jump
    pub jump_released: bool,
    pub facing: Facing,
    jump_cooldown: OneShot,
    double_jump_window: OneShot,
    inert: bool,
}

impl Default for MovementController {
    fn default() -> Self {
        Self {
            can_jump: true,
            can_double_jump: true,
            jump_released: true,
            facing: Facing::default(),
            jump_cooldown: OneShot::default(),
            double_jump_window: OneShot::default(),
            inert: false,
        }
    }
}

impl MovementController {
    pub fn is_inert(&self) -> bool {
        self.inert
    }

    pub fn jump_cooldown_active(&self) -> bool {
        self.jump_cooldown.is_pending()
    }

    pub fn double_jump_window_active(&self) -> bool {
        self.double_jump_window.is_pending()
    }

    /// Advance both cooldowns; expiry re-enables jumping and closes the
    /// double-jump window.
    pub fn tick_timers(&mut self, delta: Duration) {
        if self.inert {
            return;
        }
        if self.jump_cooldown.tick(delta) {
            self.can_jump = true;
        }
        if self.double_jump_window.tick(delta) {
            self.can_double_jump = false;
        }
    }

    /// Cancel both cooldowns and turn every later call into a no-op.
    /// Returns false if the controller was already shut down.
    pub fn shut_down(&mut self) -> bool {
        if self.inert {
            return false;
        }
        self.jump_cooldown.cancel();
        self.double_jump_window.cancel();
        self.inert = true;
        true
    }

    /// Run one tick of movement against the body's `velocity`.
    ///
    /// Returns `None` once the controller has been shut down.
    pub fn update(
        &mut self,
        input: InputSnapshot,
        contacts: &ContactTracker,
        velocity: &mut Vec2,
        tuning: &MovementTuning,
    ) -> Option<TickOutcome> {
        if self.inert {
            return None;
        }

        let on_ground = contacts.is_on_ground();
        let in_air = !on_ground;
        // Same speed on ground and in air
        let move_speed = tuning.move_speed;

        // Airborne characters pressing into a wall don't push it
        if input.left {
            self.facing = Facing::Left;
            if !(in_air && contacts.touching_left) {
                velocity.x = -move_speed;
            }
        } else if input.right {
            self.facing = Facing::Right;
            if !(in_air && contacts.touching_right) {
                velocity.x = move_speed;
            }
        }

        // Also caps speed gained from external pushes. Vertical is gravity's.
        velocity.x = velocity.x.clamp(-move_speed, move_speed);

        let mut jump = None;

        if input.jump && self.can_jump && on_ground && self.jump_released {
            self.jump_released = false;
            velocity.y = tuning.jump_velocity;

            // The bottom sensor keeps touching for a few ticks after take-off
            self.can_jump = false;
            self.jump_cooldown.schedule(tuning.jump_cooldown());

            self.can_double_jump = true;
            self.double_jump_window.schedule(tuning.double_jump_window());

            jump = Some(JumpKind::Ground);
            debug!("Ground jump: vy={}", velocity.y);
        }

        if input.jump && in_air && self.can_double_jump && self.jump_released {
            self.jump_released = false;
            velocity.y = tuning.jump_velocity;
            // Single use; only landing or a new ground jump re-arms it
            self.can_double_jump = false;

            jump = Some(JumpKind::Double);
            debug!("Double jump: vy={}", velocity.y);
        }

        if !self.jump_released && !input.jump && on_ground {
            self.jump_released = true;
            self.can_double_jump = true;
        }

        if !input.jump && in_air {
            self.jump_released = true;
        }

        let animation = if on_ground {
            if velocity.x != 0.0 {
                AnimationKey::Run
            } else {
                AnimationKey::Idle
            }
        } else {
            AnimationKey::Airborne
        };

        Some(TickOutcome { jump, animation })
    }
}
