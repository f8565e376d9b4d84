use std::f64::consts::TAU;

use crate::common::limits::{MAX_ANGULAR_VELOCITY, MIN_ANGULAR_VELOCITY};
use crate::math::vec2::Vec2;
use crate::objects::rigid_body::RigidBody;
use crate::world::config::WorldConfig;

/// Advances one body by `dt` with explicit Euler and per-step damping.
///
/// Damping factors are applied once per call regardless of `dt`. The force
/// accumulator is cleared afterwards. Static bodies are left untouched.
pub fn integrate(body: &mut RigidBody, dt: f64, config: &WorldConfig) {
    if body.is_static() {
        return;
    }

    body.last_position = body.position;
    body.shape.rotate(config.spin_scale * body.angular_velocity * dt);

    let acceleration = body.force * body.inv_mass();
    body.linear_velocity += acceleration * dt;

    body.linear_velocity *= config.linear_damping;
    body.set_angular_velocity(body.angular_velocity * config.angular_damping);

    body.position += body.linear_velocity * dt;
    body.force = Vec2::ZERO;
}

/// Limits spin to `±MAX_ANGULAR_VELOCITY` and snaps slow spin to rest.
pub fn clamp_angular_velocity(angular_velocity: f64) -> f64 {
    if angular_velocity.abs() > MAX_ANGULAR_VELOCITY {
        MAX_ANGULAR_VELOCITY.copysign(angular_velocity)
    } else if angular_velocity.abs() < MIN_ANGULAR_VELOCITY {
        0.0
    } else {
        angular_velocity
    }
}

/// Wraps an angle in radians into `[0, 2π)`.
pub fn wrap_angle(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid can round up to TAU for tiny negative inputs.
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}
