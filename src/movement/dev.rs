//! Movement domain: static test level.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{GameLayer, Ground};

pub(crate) fn spawn_test_room(mut commands: Commands) {
    let ground_color = Color::srgb(0.4, 0.5, 0.4);
    let platform_color = Color::srgb(0.5, 0.4, 0.3);

    let ground_layers = CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]);

    let blocks = [
        // Floor
        (Vec2::new(0.0, -200.0), Vec2::new(1600.0, 40.0), ground_color),
        // Platform 1 - left side
        (Vec2::new(-250.0, -50.0), Vec2::new(150.0, 20.0), platform_color),
        // Platform 2 - right side, higher
        (Vec2::new(250.0, 50.0), Vec2::new(150.0, 20.0), platform_color),
        // Platform 3 - center, highest
        (Vec2::new(0.0, 150.0), Vec2::new(120.0, 20.0), platform_color),
    ];

    for (position, size, color) in blocks {
        commands.spawn((
            Ground,
            Sprite {
                color,
                custom_size: Some(size),
                ..default()
            },
            Transform::from_translation(position.extend(0.0)),
            RigidBody::Static,
            Collider::rectangle(size.x, size.y),
            ground_layers,
        ));
    }
}
