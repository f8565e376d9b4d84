//! Contact response for a detected pair.
//!
//! Body A is pushed out of penetration and both bodies receive normal
//! impulses at every contact point, one point at a time. Tangential friction
//! goes to A only, and angular velocity does not enter the relative velocity.

use tracing::trace;

use crate::collision::info::CollisionInfo;
use crate::common::limits::MAX_FORCE;
use crate::common::Material;
use crate::objects::rigid_body::{ForceKind, RigidBody};

/// Resolves a collision with the response registered for `material`.
///
/// Every material currently uses the solid response.
pub fn resolve(material: Material, a: &mut RigidBody, b: &mut RigidBody, info: &CollisionInfo) {
    match material {
        Material::Unspecified
        | Material::Solid
        | Material::Ice
        | Material::Wood
        | Material::Metal
        | Material::Rubber => resolve_solid(a, b, info),
    }
}

/// Sequential-impulse response between two rigid bodies.
pub fn resolve_solid(a: &mut RigidBody, b: &mut RigidBody, info: &CollisionInfo) {
    let (mut normal, mut overlap) = (info.normal, info.overlap);
    if (a.position() - b.position()).dot(normal) < 0.0 {
        normal = -normal;
        overlap = -overlap;
    }
    a.position += overlap;

    let inv_mass_sum = a.inv_mass() + b.inv_mass();
    if inv_mass_sum == 0.0 || normal.is_zero() {
        return;
    }

    let restitution = (a.restitution() + b.restitution()) * 0.5;
    let static_friction = (a.static_friction() + b.static_friction()) * 0.5;
    let dynamic_friction = (a.dynamic_friction() + b.dynamic_friction()) * 0.5;

    for &contact in &info.contact_points {
        let relative = a.linear_velocity() - b.linear_velocity();
        let tangent = (relative - normal * relative.dot(normal)).normalize();

        let j = (-(1.0 + restitution) * relative).dot(normal) / normal.dot(normal * inv_mass_sum);
        let mut jt = -(1.0 + restitution) * relative.dot(tangent) / inv_mass_sum;

        let sliding = jt.abs() >= j * static_friction;
        if sliding {
            jt = -j * dynamic_friction;
        }

        trace!(a = %a.id(), b = %b.id(), j, jt, sliding, ?contact, "contact impulse");

        a.add_force(normal * j, contact, ForceKind::Impulse);
        if jt.abs() < MAX_FORCE {
            a.add_force(tangent * jt, contact, ForceKind::Impulse);
        }
        b.add_force(-normal * j, contact, ForceKind::Impulse);
    }
}
