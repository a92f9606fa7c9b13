//! Debug domain: overlay systems.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::debug::state::{DebugInfoOverlay, DebugState};
use crate::movement::{GroundCheck, MotionState, Player};

pub(crate) fn toggle_debug_overlays(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_state: ResMut<DebugState>,
) {
    if keyboard.just_pressed(KeyCode::F1) {
        debug_state.show_info = !debug_state.show_info;
        info!("[DEBUG] Motion info {}", on_off(debug_state.show_info));
    }
    if keyboard.just_pressed(KeyCode::F2) {
        debug_state.show_gizmos = !debug_state.show_gizmos;
        info!("[DEBUG] Motion gizmos {}", on_off(debug_state.show_gizmos));
    }
}

fn on_off(enabled: bool) -> &'static str {
    if enabled { "ON" } else { "OFF" }
}

fn spawn_debug_info_overlay(commands: &mut Commands) {
    commands.spawn((
        DebugInfoOverlay,
        Text::new("Loading..."),
        TextFont {
            font_size: 12.0,
            ..default()
        },
        TextColor(Color::srgb(0.8, 0.9, 0.8)),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(20.0),
            bottom: Val::Px(20.0),
            padding: UiRect::all(Val::Px(8.0)),
            ..default()
        },
        BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.7)),
        ZIndex(500),
    ));
}

pub(crate) fn update_debug_info_overlay(
    mut commands: Commands,
    debug_state: Res<DebugState>,
    player_query: Query<(&Transform, &MotionState, &LinearVelocity, &GravityScale), With<Player>>,
    mut overlay_query: Query<&mut Text, With<DebugInfoOverlay>>,
    existing_overlay: Query<Entity, With<DebugInfoOverlay>>,
) {
    if !debug_state.show_info {
        // Cleanup overlay if it exists
        for entity in &existing_overlay {
            commands.entity(entity).despawn();
        }
        return;
    }

    // Ensure overlay exists
    if existing_overlay.is_empty() {
        spawn_debug_info_overlay(&mut commands);
        return;
    }

    if let (Some((transform, state, velocity, gravity_scale)), Ok(mut text)) =
        (player_query.iter().next(), overlay_query.single_mut())
    {
        let pos = transform.translation;
        **text = format!(
            "Pos: ({:.0}, {:.0})\nVel: ({:.1}, {:.1})\nGravity scale: {:.2}\nGrounded: {}\nFacing: {:?}\nSlide: {} ({:.2}s)\nJump pressed/released: {}/{}",
            pos.x,
            pos.y,
            velocity.x,
            velocity.y,
            gravity_scale.0,
            state.grounded,
            state.facing,
            state.slide.active,
            state.slide.timer,
            state.jump.is_pressed(),
            state.jump.is_released()
        );
    }
}

pub(crate) fn draw_motion_gizmos(
    mut gizmos: Gizmos,
    query: Query<(&Transform, &GroundCheck, &MotionState, &LinearVelocity), With<Player>>,
) {
    for (transform, check, state, velocity) in &query {
        let origin = transform.translation.truncate();
        let color = if state.grounded {
            Color::srgb(0.2, 0.9, 0.3)
        } else {
            Color::srgb(0.9, 0.3, 0.2)
        };

        gizmos.circle_2d(origin + check.offset, check.radius, color);
        // Scaled down so typical speeds stay on screen
        gizmos.arrow_2d(origin, origin + velocity.0 * 0.1, Color::srgb(0.3, 0.6, 1.0));
    }
}
