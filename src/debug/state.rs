//! Debug domain: overlay toggles.

use bevy::prelude::*;

/// Resource tracking which debug overlays are visible
#[derive(Resource, Debug, Default)]
pub struct DebugState {
    /// Text overlay with velocity, gravity scale and latch state
    pub show_info: bool,
    /// Ground check circle and velocity arrow
    pub show_gizmos: bool,
}

/// Marker for debug info overlay text
#[derive(Component, Debug)]
pub struct DebugInfoOverlay;
