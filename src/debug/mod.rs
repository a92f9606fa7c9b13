//! Debug overlay for tuning motion at runtime.
//!
//! - F1: toggle motion info text
//! - F2: toggle ground check and velocity gizmos

mod state;
mod systems;

pub use state::DebugState;

use bevy::prelude::*;

use crate::debug::systems::{draw_motion_gizmos, toggle_debug_overlays, update_debug_info_overlay};

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>()
            .add_systems(Update, (toggle_debug_overlays, update_debug_info_overlay).chain())
            .add_systems(
                Update,
                draw_motion_gizmos.run_if(|state: Res<DebugState>| state.show_gizmos),
            );
    }
}
