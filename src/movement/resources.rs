//! Movement domain: tuning resource.

use avian2d::prelude::*;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::movement::GameLayer;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
pub enum HorizontalPolicy {
    /// Velocity follows the input axis instantly.
    #[default]
    DirectSpeed,
    /// Fixed per-step acceleration toward max speed, drag otherwise.
    AccelDrag,
}

#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct MotionParams {
    pub horizontal: HorizontalPolicy,
    pub max_speed: f32,
    /// Speed gained per fixed step under `AccelDrag`.
    pub accel: f32,
    /// Speed lost per fixed step under `AccelDrag` while grounded.
    pub ground_drag: f32,
    /// Speed lost per fixed step under `AccelDrag` while airborne.
    pub air_drag: f32,
    /// Stop drag at zero instead of letting it push the body backwards.
    pub floor_drag_at_zero: bool,
    pub jump_velocity: f32,
    pub jump_cut_multiplier: f32,
    pub grounded_gravity: f32,
    pub rising_gravity: f32,
    pub falling_gravity: f32,
    pub slide_enabled: bool,
    pub slide_speed: f32,
    pub slide_duration: f32,
    pub ground_check_radius: f32,
    pub ground_check_offset: Vec2,
    pub ground_layers: Vec<GameLayer>,
    /// Downward acceleration that the gravity scales multiply.
    pub world_gravity: f32,
}

impl Default for MotionParams {
    fn default() -> Self {
        Self {
            horizontal: HorizontalPolicy::DirectSpeed,
            max_speed: 320.0,
            accel: 40.0,
            ground_drag: 30.0,
            air_drag: 10.0,
            floor_drag_at_zero: false,
            jump_velocity: 640.0,
            jump_cut_multiplier: 0.5,
            grounded_gravity: 1.0,
            rising_gravity: 1.0,
            falling_gravity: 2.0,
            slide_enabled: true,
            slide_speed: 192.0,
            slide_duration: 0.6,
            ground_check_radius: 6.0,
            ground_check_offset: Vec2::new(0.0, -24.0),
            ground_layers: vec![GameLayer::Ground],
            world_gravity: 1800.0,
        }
    }
}

impl MotionParams {
    /// Tuning for the accelerating runner without a slide.
    /// Matches `assets/data/motion_accel.ron`.
    #[cfg(test)]
    pub fn accel_drag() -> Self {
        Self {
            horizontal: HorizontalPolicy::AccelDrag,
            slide_enabled: false,
            ..default()
        }
    }

    pub fn ground_mask(&self) -> LayerMask {
        LayerMask(
            self.ground_layers
                .iter()
                .fold(0, |bits, layer| bits | layer.to_bits()),
        )
    }

    /// Peak height of an uncut jump under the rising gravity scale.
    /// Uses h = v² / (2g)
    pub fn jump_height(&self) -> f32 {
        let g = self.world_gravity * self.rising_gravity;
        if g <= 0.0 {
            return f32::INFINITY;
        }
        self.jump_velocity * self.jump_velocity / (2.0 * g)
    }
}
