use crate::objects::body::Body;

/// Advances one body by `dt` with semi-implicit Euler.
///
/// Position moves with the velocity the collision pass left behind, then the
/// velocity picks up this step's net force. Static bodies are untouched.
/// The force accumulator is left as is; the world clears it at the start of
/// the next step.
pub fn integrate(body: &mut Body, dt: f64) {
    if body.is_static() {
        return;
    }

    body.position += body.velocity * dt;

    let acceleration = body.net_force * body.inv_mass();
    body.velocity += acceleration * dt;
}
