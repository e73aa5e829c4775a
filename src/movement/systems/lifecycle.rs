//! Movement domain: scene shutdown teardown.

use bevy::prelude::*;

use crate::movement::{CharacterHandle, HookKind, HostHooks};

/// Destroy every character subscribed to scene shutdown.
pub(crate) fn release_on_shutdown(world: &mut World) {
    let owners = world
        .get_resource::<HostHooks>()
        .map(|hooks| hooks.owners(HookKind::Shutdown))
        .unwrap_or_default();

    for owner in owners {
        CharacterHandle::from_entity(owner).destroy(world);
    }
}
