//! Movement domain: system modules for locomotion updates.

pub(crate) mod collisions;
pub(crate) mod input;
pub(crate) mod movement;

pub(crate) use collisions::detect_ground;
pub(crate) use input::{latch_input, read_input};
pub(crate) use movement::{
    apply_facing_visual, apply_horizontal_movement, apply_jump, apply_slide, slide_enabled,
    update_facing, update_gravity_scale,
};
