//! Movement domain: platformer locomotion driven by input messages.
//!
//! Fixed step: gravity scale, ground check, horizontal motion, jump.
//! Frame step: input, facing, slide, facing visual.

mod bootstrap;
mod components;
mod dev;
mod events;
mod resources;
pub(crate) mod systems;

pub use components::{
    Facing, FacingVisual, GameLayer, Ground, GroundCheck, JumpLatch, MotionState, Player,
    SlideState,
};
pub use events::{JumpButtonInput, MoveAxisInput};
pub use resources::{HorizontalPolicy, MotionParams};

use bevy::prelude::*;

use crate::movement::bootstrap::spawn_player;
use crate::movement::dev::spawn_test_room;
use crate::movement::systems::{
    apply_facing_visual, apply_horizontal_movement, apply_jump, apply_slide, detect_ground,
    latch_input, read_input, slide_enabled, update_facing, update_gravity_scale,
};

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MotionParams>()
            .add_message::<MoveAxisInput>()
            .add_message::<JumpButtonInput>()
            .add_systems(Startup, (spawn_test_room, spawn_player))
            .add_systems(
                FixedUpdate,
                (
                    update_gravity_scale,
                    detect_ground,
                    apply_horizontal_movement,
                    apply_jump,
                )
                    .chain(),
            )
            .add_systems(
                Update,
                (
                    read_input,
                    latch_input,
                    update_facing,
                    apply_slide.run_if(slide_enabled),
                    apply_facing_visual,
                )
                    .chain(),
            );
    }
}
