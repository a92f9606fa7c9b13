//! Movement domain: input messages consumed by the motion systems.

use bevy::ecs::message::Message;
use bevy::prelude::*;

/// New value of the move stick / direction keys.
#[derive(Debug, Clone, Copy)]
pub struct MoveAxisInput(pub Vec2);

impl Message for MoveAxisInput {}

/// Jump button edge.
#[derive(Debug, Clone, Copy)]
pub struct JumpButtonInput {
    pub pressed: bool,
}

impl Message for JumpButtonInput {}
