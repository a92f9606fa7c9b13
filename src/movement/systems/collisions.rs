//! Movement domain: ground detection.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{GroundCheck, MotionParams, MotionState, Player};

pub(crate) fn detect_ground(
    spatial_query: SpatialQuery,
    params: Res<MotionParams>,
    mut query: Query<(Entity, &Transform, &GroundCheck, &mut MotionState), With<Player>>,
) {
    let mask = params.ground_mask();

    for (entity, transform, check, mut state) in &mut query {
        let was_grounded = state.grounded;

        let filter = SpatialQueryFilter::from_mask(mask).with_excluded_entities([entity]);
        let origin = transform.translation.truncate() + check.offset;
        let probe = Collider::circle(check.radius);

        let hits = spatial_query.shape_intersections(&probe, origin, 0.0, &filter);
        state.grounded = !hits.is_empty();

        if state.grounded && !was_grounded {
            debug!("Landed at {:?}", origin);
        } else if !state.grounded && was_grounded {
            debug!("Left ground at {:?}", origin);
        }
    }
}
