use crate::math::vec2::Vec2;
use crate::objects::body::Body;
use super::contact::Contact;

/// Tangential speed below which friction is not applied.
pub const FRICTION_SPEED_EPSILON: f64 = 1e-4;

/// World state a contact needs beyond the two bodies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContactParams {
    pub gravity: Vec2,
    pub friction_coefficient: f64,
    /// Step length, used to cap friction so it cannot reverse sliding.
    pub dt: f64,
}

/// Separates two overlapping circles and applies the collision impulse.
///
/// Positions are corrected along the contact normal with a fixed 50/50
/// split, whatever the masses. A static side does not move, so the dynamic
/// body takes the whole correction. No impulse is applied when the bodies
/// are already separating. Returns the closing velocity along the normal.
pub fn resolve_circle_circle(body_a: &mut Body, body_b: &mut Body, contact: &Contact) -> f64 {
    let inv_mass_a = body_a.inv_mass();
    let inv_mass_b = body_b.inv_mass();
    let total_inv_mass = inv_mass_a + inv_mass_b;
    let normal = contact.normal;

    if total_inv_mass == 0.0 {
        return 0.0;
    }

    let (share_a, share_b) = match (body_a.is_static(), body_b.is_static()) {
        (false, false) => (0.5, 0.5),
        (true, _) => (0.0, 1.0),
        (_, true) => (1.0, 0.0),
    };
    body_a.position -= normal * (contact.depth * share_a);
    body_b.position += normal * (contact.depth * share_b);

    let closing_velocity = (body_b.velocity - body_a.velocity).dot(normal);
    if closing_velocity >= 0.0 {
        return closing_velocity;
    }

    let e = body_a.bounciness() * body_b.bounciness();
    // (1+e) * v * mA*mB/(mA+mB), written with inverse masses so a static
    // side drops out.
    let j = (1.0 + e) * closing_velocity / total_inv_mass;
    body_a.velocity += normal * (j * inv_mass_a);
    body_b.velocity -= normal * (j * inv_mass_b);

    closing_velocity
}

/// Resolves a circle against a halfspace. Only the circle is affected.
///
/// In order: push the circle out along the normal, cancel the into-surface
/// part of its gravity with a normal force, add kinetic friction against its
/// sliding direction, then reflect any closing velocity.
/// Returns the closing velocity along the normal.
pub fn resolve_circle_halfspace(
    circle_body: &mut Body,
    plane_body: &Body,
    contact: &Contact,
    params: &ContactParams,
) -> f64 {
    if circle_body.is_static() {
        return 0.0;
    }
    let normal = contact.normal;

    circle_body.position += normal * contact.depth.max(0.0);

    // Applied even when the contact is not closing so a resting body does not
    // sink back in next step.
    let gravity_force = params.gravity * circle_body.mass();
    let into_surface = gravity_force.dot(normal);
    let normal_force = if into_surface < 0.0 {
        normal * -into_surface
    } else {
        Vec2::ZERO
    };
    circle_body.apply_force(normal_force);

    let tangential = circle_body.velocity.reject_from(normal);
    let sliding_speed = tangential.magnitude();
    if sliding_speed > FRICTION_SPEED_EPSILON {
        let mut magnitude = params.friction_coefficient * normal_force.magnitude();
        if params.dt > 0.0 {
            magnitude = magnitude.min(circle_body.mass() * sliding_speed / params.dt);
        }
        circle_body.apply_force(-(tangential / sliding_speed) * magnitude);
    }

    let closing_velocity = circle_body.velocity.dot(normal);
    if closing_velocity < 0.0 {
        let e = circle_body.bounciness() * plane_body.bounciness();
        circle_body.velocity += normal * (closing_velocity * -(1.0 + e));
    }

    closing_velocity
}
