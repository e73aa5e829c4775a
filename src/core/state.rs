//! Core domain: scene state definitions.

use bevy::prelude::*;

/// Scene flow. Leaving `Playing` is the scene-shutdown signal for every
/// character spawned in it.
#[derive(States, Debug, Hash, Eq, PartialEq, Clone, Default)]
pub enum GameState {
    #[default]
    Boot,
    Playing,
}
