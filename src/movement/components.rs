//! Movement domain: components and physics layers for locomotion.

use avian2d::prelude::*;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground surfaces (floors, platforms)
    Ground,
    /// Player character
    Player,
}

#[derive(Component, Debug)]
pub struct Player;

/// Child entity carrying the player's sprite; mirrored to match facing.
#[derive(Component, Debug)]
pub struct FacingVisual;

/// Marker for ground colliders
#[derive(Component, Debug)]
pub struct Ground;

#[derive(Component, Debug, Default)]
pub struct MotionState {
    /// Latest move axis, each component in [-1, 1].
    pub axis: Vec2,
    pub jump: JumpLatch,
    pub facing: Facing,
    /// Refreshed every fixed step by the ground check.
    pub grounded: bool,
    pub slide: SlideState,
    /// Direction drag is acting along while coasting without input.
    pub drag_direction: Option<Facing>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    pub fn sign(self) -> f32 {
        match self {
            Facing::Right => 1.0,
            Facing::Left => -1.0,
        }
    }
}

/// One-shot jump edges, held until the fixed step consumes them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JumpLatch {
    pressed: bool,
    released: bool,
}

impl JumpLatch {
    /// Press edge. A new press supersedes a release that was never consumed.
    pub fn press(&mut self) {
        self.pressed = true;
        self.released = false;
    }

    pub fn release(&mut self) {
        self.released = true;
    }

    #[cfg(any(test, feature = "dev-tools"))]
    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    #[cfg(any(test, feature = "dev-tools"))]
    pub fn is_released(&self) -> bool {
        self.released
    }

    /// Consumes the press if the body can jump. A consumed press also drops
    /// any pending release so the new jump is not cut on the same step.
    pub fn take_jump(&mut self, grounded: bool) -> bool {
        if self.pressed && grounded {
            self.pressed = false;
            self.released = false;
            true
        } else {
            false
        }
    }

    /// Consumes the release edge unconditionally.
    pub fn take_release(&mut self) -> bool {
        std::mem::take(&mut self.released)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SlideState {
    pub active: bool,
    /// Seconds left; never negative.
    pub timer: f32,
}

/// Circle overlap probe used to detect standing surfaces.
#[derive(Component, Debug, Clone, Copy)]
pub struct GroundCheck {
    /// Anchor relative to the body's origin.
    pub offset: Vec2,
    pub radius: f32,
}
