//! Movement domain: multi-key input aggregation.

use bevy::prelude::*;

use crate::movement::InputBindings;

/// Live pressed-state lookup for a single key.
pub trait KeySource {
    fn is_pressed(&self, key: KeyCode) -> bool;
}

impl KeySource for ButtonInput<KeyCode> {
    fn is_pressed(&self, key: KeyCode) -> bool {
        self.pressed(key)
    }
}

/// Several keys treated as one logical input, e.g. the left arrow and `A`.
///
/// Reads are evaluated against the current device state every time; nothing
/// is latched between calls.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MultiKey {
    keys: Vec<KeyCode>,
}

impl MultiKey {
    pub fn new(keys: impl IntoIterator<Item = KeyCode>) -> Self {
        Self {
            keys: keys.into_iter().collect(),
        }
    }

    pub fn keys(&self) -> &[KeyCode] {
        &self.keys
    }

    /// True if any bound key is held.
    pub fn is_down(&self, source: &impl KeySource) -> bool {
        self.keys.iter().any(|key| source.is_pressed(*key))
    }

    /// True only if every bound key is released.
    pub fn is_up(&self, source: &impl KeySource) -> bool {
        self.keys.iter().all(|key| !source.is_pressed(*key))
    }
}

/// The three logical inputs as seen at the start of a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputSnapshot {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
}

impl InputBindings {
    pub fn sample(&self, source: &impl KeySource) -> InputSnapshot {
        InputSnapshot {
            left: self.left.is_down(source),
            right: self.right.is_down(source),
            jump: self.jump.is_down(source),
        }
    }
}
