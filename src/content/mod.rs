//! Content domain: data-driven motion tuning loaded from RON at startup.

mod loader;
#[cfg(test)]
mod tests;
mod validation;

use loader::{load_motion_params, motion_path};
use validation::validate_params;

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::MotionParams;

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        let params = load_or_default();

        app.insert_resource(Gravity(Vec2::NEG_Y * params.world_gravity))
            .insert_resource(params);
    }
}

/// Load tuning from disk. Any failure falls back to defaults so the game still starts.
fn load_or_default() -> MotionParams {
    let path = motion_path();

    let params = match load_motion_params(&path) {
        Ok(params) => {
            info!("Loaded motion tuning from {}", path.display());
            params
        }
        Err(e) if e.is_missing_file() => {
            warn!("{}, using default motion tuning", e);
            MotionParams::default()
        }
        Err(e) => {
            error!("{}, using default motion tuning", e);
            MotionParams::default()
        }
    };

    for warning in validate_params(&params) {
        warn!("Motion tuning: {}", warning);
    }

    params
}
