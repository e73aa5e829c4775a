//! Movement domain: system modules for per-tick character updates.

pub(crate) mod contacts;
pub(crate) mod lifecycle;
pub(crate) mod movement;

pub(crate) use contacts::{deliver_sensor_contacts, reset_contact_flags};
pub(crate) use lifecycle::release_on_shutdown;
pub(crate) use movement::{apply_movement, sync_sprite_facing, tick_cooldowns};
