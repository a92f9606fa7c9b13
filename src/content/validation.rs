//! Sanity checks for motion tuning values.
//!
//! Nothing here rejects a value: suspicious tuning is reported and then used
//! exactly as written.

use crate::movement::{HorizontalPolicy, MotionParams};

/// A tuning value that is legal but probably a mistake.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationWarning {
    pub field: &'static str,
    pub value: f32,
    pub message: &'static str,
}

impl std::fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "'{}' = {}: {}", self.field, self.value, self.message)
    }
}

/// Helper macro for pushing a warning when a condition holds
macro_rules! warn_if {
    ($warnings:expr, $cond:expr, $field:literal, $value:expr, $message:literal) => {
        if $cond {
            $warnings.push(ValidationWarning {
                field: $field,
                value: $value,
                message: $message,
            });
        }
    };
}

/// Check tuning values. Returns an empty list when everything looks sane.
pub fn validate_params(params: &MotionParams) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    warn_if!(
        warnings,
        params.max_speed <= 0.0,
        "max_speed",
        params.max_speed,
        "player cannot run"
    );
    warn_if!(
        warnings,
        params.jump_velocity <= 0.0,
        "jump_velocity",
        params.jump_velocity,
        "jump does not leave the ground"
    );
    warn_if!(
        warnings,
        !(0.0..=1.0).contains(&params.jump_cut_multiplier),
        "jump_cut_multiplier",
        params.jump_cut_multiplier,
        "releasing jump should shorten it, expected 0..=1"
    );
    warn_if!(
        warnings,
        params.ground_check_radius <= 0.0,
        "ground_check_radius",
        params.ground_check_radius,
        "ground check never overlaps anything"
    );

    for (field, value) in [
        ("grounded_gravity", params.grounded_gravity),
        ("rising_gravity", params.rising_gravity),
        ("falling_gravity", params.falling_gravity),
    ] {
        if value < 0.0 {
            warnings.push(ValidationWarning {
                field,
                value,
                message: "negative gravity scale pushes the body upward",
            });
        }
    }

    if params.horizontal == HorizontalPolicy::AccelDrag {
        warn_if!(
            warnings,
            params.accel <= 0.0,
            "accel",
            params.accel,
            "player never speeds up"
        );
        warn_if!(
            warnings,
            params.ground_drag < 0.0,
            "ground_drag",
            params.ground_drag,
            "drag speeds the player up"
        );
        warn_if!(
            warnings,
            params.air_drag < 0.0,
            "air_drag",
            params.air_drag,
            "drag speeds the player up"
        );
    }

    if params.slide_enabled {
        warn_if!(
            warnings,
            params.slide_duration <= 0.0,
            "slide_duration",
            params.slide_duration,
            "slide ends on the frame it starts"
        );
    }

    if params.ground_layers.is_empty() {
        warnings.push(ValidationWarning {
            field: "ground_layers",
            value: 0.0,
            message: "no ground layers, player is never grounded",
        });
    }

    warnings
}
