//! Movement domain: input sampling and latching for locomotion.

use bevy::prelude::*;

use crate::movement::{JumpButtonInput, MotionState, MoveAxisInput, Player};

pub(crate) fn keyboard_axis(keyboard: &ButtonInput<KeyCode>) -> Vec2 {
    // Horizontal axis
    let mut x = 0.0;
    if keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft) {
        x -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight) {
        x += 1.0;
    }

    // Vertical axis
    let mut y = 0.0;
    if keyboard.pressed(KeyCode::KeyS) || keyboard.pressed(KeyCode::ArrowDown) {
        y -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyW) || keyboard.pressed(KeyCode::ArrowUp) {
        y += 1.0;
    }

    Vec2::new(x, y)
}

/// Samples the keyboard and emits input messages on change.
pub(crate) fn read_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut last_axis: Local<Vec2>,
    mut axis_writer: MessageWriter<MoveAxisInput>,
    mut jump_writer: MessageWriter<JumpButtonInput>,
) {
    let axis = keyboard_axis(&keyboard);
    if axis != *last_axis {
        *last_axis = axis;
        axis_writer.write(MoveAxisInput(axis));
    }

    let jump_keys = [KeyCode::Space, KeyCode::KeyK];
    if keyboard.any_just_pressed(jump_keys) {
        jump_writer.write(JumpButtonInput { pressed: true });
    }
    if keyboard.any_just_released(jump_keys) {
        jump_writer.write(JumpButtonInput { pressed: false });
    }
}

/// Folds this frame's input messages into the player's motion state.
pub(crate) fn latch_input(
    mut axis_reader: MessageReader<MoveAxisInput>,
    mut jump_reader: MessageReader<JumpButtonInput>,
    mut query: Query<&mut MotionState, With<Player>>,
) {
    let axis = axis_reader.read().last().map(|input| input.0);
    let jumps: Vec<JumpButtonInput> = jump_reader.read().copied().collect();

    if axis.is_none() && jumps.is_empty() {
        return;
    }

    for mut state in &mut query {
        if let Some(axis) = axis {
            state.axis = axis;
        }
        for jump in &jumps {
            latch_jump(&mut state, *jump);
        }
    }
}

pub(crate) fn latch_jump(state: &mut MotionState, input: JumpButtonInput) {
    if input.pressed {
        state.jump.press();
    } else {
        state.jump.release();
    }
}
