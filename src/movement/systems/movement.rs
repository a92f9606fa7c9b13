//! Movement domain: locomotion systems for gravity, running, jumping and sliding.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{
    Facing, FacingVisual, HorizontalPolicy, JumpLatch, MotionParams, MotionState, Player,
    SlideState,
};

/// Vertical speed below which the body counts as neither rising nor falling.
pub(crate) const APEX_DEADBAND: f32 = 0.1;

/// Axis magnitude below which input counts as released.
pub(crate) const AXIS_DEADZONE: f32 = 0.1;

pub(crate) fn gravity_scale_for(vertical_velocity: f32, params: &MotionParams) -> f32 {
    if vertical_velocity < -APEX_DEADBAND {
        params.falling_gravity
    } else if vertical_velocity > APEX_DEADBAND {
        params.rising_gravity
    } else {
        params.grounded_gravity
    }
}

/// Horizontal velocity after one fixed step of the configured policy.
///
/// Under `AccelDrag`, drag acts along `drag_direction`, which is latched from
/// the direction of travel when drag starts and cleared by input. Drag may
/// carry the body past zero but never beyond `max_speed` either way, unless
/// `floor_drag_at_zero` stops it at zero.
pub(crate) fn step_horizontal(
    velocity_x: f32,
    axis_x: f32,
    drag_direction: &mut Option<Facing>,
    grounded: bool,
    params: &MotionParams,
) -> f32 {
    match params.horizontal {
        HorizontalPolicy::DirectSpeed => {
            *drag_direction = None;
            axis_x * params.max_speed
        }
        HorizontalPolicy::AccelDrag => {
            if axis_x.abs() > AXIS_DEADZONE {
                *drag_direction = None;
                let dir = axis_x.signum();
                let speed = (velocity_x * dir + params.accel).min(params.max_speed);
                return speed * dir;
            }

            let Some(dir) = drag_direction.or_else(|| travel_direction(velocity_x)) else {
                // At rest with nothing to slow down.
                return velocity_x;
            };
            *drag_direction = Some(dir);

            let drag = if grounded {
                params.ground_drag
            } else {
                params.air_drag
            };
            let mut speed =
                (velocity_x * dir.sign() - drag).clamp(-params.max_speed, params.max_speed);
            if params.floor_drag_at_zero {
                speed = speed.max(0.0);
            }
            speed * dir.sign()
        }
    }
}

pub(crate) fn travel_direction(velocity_x: f32) -> Option<Facing> {
    if velocity_x > 0.0 {
        Some(Facing::Right)
    } else if velocity_x < 0.0 {
        Some(Facing::Left)
    } else {
        None
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct JumpOutcome {
    pub jumped: bool,
    pub cut: bool,
}

/// Consumes the jump latch against the current velocity.
pub(crate) fn step_jump(
    latch: &mut JumpLatch,
    grounded: bool,
    velocity: &mut Vec2,
    params: &MotionParams,
) -> JumpOutcome {
    let mut outcome = JumpOutcome::default();

    if latch.take_jump(grounded) {
        velocity.y = params.jump_velocity;
        outcome.jumped = true;
    }

    if latch.take_release() && velocity.y > 0.0 {
        velocity.y *= params.jump_cut_multiplier;
        outcome.cut = true;
    }

    outcome
}

pub(crate) fn facing_from_axis(current: Facing, axis_x: f32) -> Facing {
    if axis_x > AXIS_DEADZONE {
        Facing::Right
    } else if axis_x < -AXIS_DEADZONE {
        Facing::Left
    } else {
        current
    }
}

/// Advances the slide by one frame. Returns the forced horizontal velocity
/// when the slide was active during this frame.
///
/// A grounded body that is not sliding starts a new slide immediately, so a
/// body that stays grounded slides forever. This is current game behaviour.
pub(crate) fn step_slide(
    slide: &mut SlideState,
    grounded: bool,
    facing: Facing,
    dt: f32,
    params: &MotionParams,
) -> Option<f32> {
    let mut forced = None;

    if slide.active {
        slide.timer = (slide.timer - dt).max(0.0);
        forced = Some(params.slide_speed * facing.sign());
        if slide.timer <= 0.0 {
            slide.active = false;
        }
    }

    if grounded && !slide.active {
        slide.active = true;
        slide.timer = params.slide_duration;
    }

    forced
}

pub(crate) fn update_gravity_scale(
    params: Res<MotionParams>,
    mut query: Query<(&LinearVelocity, &mut GravityScale), With<Player>>,
) {
    for (velocity, mut gravity_scale) in &mut query {
        gravity_scale.0 = gravity_scale_for(velocity.y, &params);
    }
}

pub(crate) fn apply_horizontal_movement(
    params: Res<MotionParams>,
    mut query: Query<(&mut MotionState, &mut LinearVelocity), With<Player>>,
) {
    for (mut state, mut velocity) in &mut query {
        if state.slide.active {
            continue;
        }

        let state = &mut *state;
        velocity.x = step_horizontal(
            velocity.x,
            state.axis.x,
            &mut state.drag_direction,
            state.grounded,
            &params,
        );
    }
}

pub(crate) fn apply_jump(
    params: Res<MotionParams>,
    mut query: Query<(&mut MotionState, &mut LinearVelocity), With<Player>>,
) {
    for (mut state, mut velocity) in &mut query {
        let grounded = state.grounded;
        let outcome = step_jump(&mut state.jump, grounded, &mut velocity.0, &params);

        if outcome.jumped {
            debug!("Jump: velocity={:?}", velocity.0);
        }
        if outcome.cut {
            debug!("Jump cut: vy now {}", velocity.y);
        }
    }
}

pub(crate) fn update_facing(mut query: Query<&mut MotionState, With<Player>>) {
    for mut state in &mut query {
        let facing = facing_from_axis(state.facing, state.axis.x);
        if facing != state.facing {
            state.facing = facing;
        }
    }
}

pub(crate) fn apply_slide(
    time: Res<Time>,
    params: Res<MotionParams>,
    mut query: Query<(&mut MotionState, &mut LinearVelocity), With<Player>>,
) {
    let dt = time.delta_secs();

    for (mut state, mut velocity) in &mut query {
        let was_sliding = state.slide.active;
        let grounded = state.grounded;
        let facing = state.facing;

        if let Some(vx) = step_slide(&mut state.slide, grounded, facing, dt, &params) {
            velocity.x = vx;
            state.drag_direction = None;
        }

        match (was_sliding, state.slide.active) {
            (false, true) => debug!("Slide started: facing={:?}", facing),
            (true, false) => debug!("Slide ended"),
            _ => {}
        }
    }
}

pub(crate) fn slide_enabled(params: Res<MotionParams>) -> bool {
    params.slide_enabled
}

pub(crate) fn apply_facing_visual(
    players: Query<(&MotionState, &Children), With<Player>>,
    mut visuals: Query<&mut Transform, With<FacingVisual>>,
) {
    for (state, children) in &players {
        for child in children.iter() {
            if let Ok(mut transform) = visuals.get_mut(child) {
                transform.scale.x = state.facing.sign();
            }
        }
    }
}
