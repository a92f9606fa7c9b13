//! Movement domain: player spawn.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{FacingVisual, GameLayer, GroundCheck, MotionParams, MotionState, Player};

pub(crate) const PLAYER_SIZE: Vec2 = Vec2::new(24.0, 48.0);

/// Spawn the player body with a mirrored sprite child.
pub(crate) fn spawn_player(mut commands: Commands, params: Res<MotionParams>) {
    info!(
        "Spawning player: policy={:?}, slide={}, max_speed={}, jump_height={:.1}",
        params.horizontal,
        params.slide_enabled,
        params.max_speed,
        params.jump_height()
    );

    commands.spawn((
        // Identity & Movement
        (
            Player,
            MotionState::default(),
            GroundCheck {
                offset: params.ground_check_offset,
                radius: params.ground_check_radius,
            },
        ),
        Transform::from_xyz(0.0, 100.0, 0.0),
        Visibility::default(),
        // Physics
        (
            RigidBody::Dynamic,
            Collider::rectangle(PLAYER_SIZE.x, PLAYER_SIZE.y),
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
            GravityScale(params.grounded_gravity),
            Friction::new(0.0),
            CollisionLayers::new(GameLayer::Player, params.ground_mask()),
        ),
        // Rendering
        children![(
            FacingVisual,
            Sprite {
                color: Color::srgb(0.9, 0.9, 0.9),
                custom_size: Some(PLAYER_SIZE),
                ..default()
            },
            Transform::default(),
        )],
    ));
}
