use crate::math::vec2::Vec2;
use crate::objects::body::Body;
use crate::shapes::Shape;
use super::contact::Contact;

/// Center distance below which two circles count as coincident.
pub const COINCIDENT_EPSILON: f64 = 1e-9;

/// Normal used when two circle centers coincide and `d / |d|` is undefined.
pub const FALLBACK_NORMAL: Vec2 = Vec2::UP;

/// Penetration a circle may be short of a halfspace and still count as
/// touching it. Keeps a resting circle in contact every step instead of
/// dropping out whenever rounding lands it a hair above the surface.
pub const TOUCH_TOLERANCE: f64 = 1e-9;

/// Checks for overlap between two circles.
/// Returns `None` when either body is not a circle or they are apart.
/// Touching circles (zero overlap) count as overlapping.
pub fn check_circle_circle(body_a: &Body, body_b: &Body) -> Option<Contact> {
    let (circle_a, circle_b) = match (body_a.shape(), body_b.shape()) {
        (Shape::Circle(a), Shape::Circle(b)) => (a, b),
        _ => return None,
    };

    let offset = body_b.position - body_a.position;
    let distance = offset.magnitude();
    let overlap = (circle_a.radius() + circle_b.radius()) - distance;
    if overlap < 0.0 {
        return None;
    }

    let normal = if distance > COINCIDENT_EPSILON {
        offset / distance
    } else {
        FALLBACK_NORMAL
    };

    Some(Contact { normal, depth: overlap })
}

/// Checks for overlap between a circle and a halfspace.
/// The contact normal is the halfspace normal.
pub fn check_circle_halfspace(circle_body: &Body, plane_body: &Body) -> Option<Contact> {
    let circle = match circle_body.shape() {
        Shape::Circle(c) => c,
        Shape::Halfspace(_) => return None,
    };
    let plane = match plane_body.shape() {
        Shape::Halfspace(h) => h,
        Shape::Circle(_) => return None,
    };

    let normal = plane.normal();
    // Signed distance of the center from the boundary, positive on the open side.
    let signed_distance = (circle_body.position - plane_body.position).dot(normal);
    let overlap = circle.radius() - signed_distance;
    if overlap <= -TOUCH_TOLERANCE {
        return None;
    }

    Some(Contact { normal, depth: overlap })
}

#[cfg(test)]
mod tests {
    use super::*;
    const EPSILON: f64 = 1e-9;

    fn ball(radius: f64, x: f64, y: f64) -> Body {
        Body::circle(radius, 1.0, Vec2::new(x, y)).unwrap()
    }

    #[test]
    fn test_check_circle_circle_no_collision() {
        let a = ball(1.0, 0.0, 0.0);
        let b = ball(1.0, 3.0, 0.0);
        assert!(check_circle_circle(&a, &b).is_none());
    }

    #[test]
    fn test_check_circle_circle_overlap() {
        let a = ball(1.0, 0.0, 0.0);
        let b = ball(1.0, 1.5, 0.0);
        let contact = check_circle_circle(&a, &b).unwrap();
        assert!((contact.normal - Vec2::new(1.0, 0.0)).magnitude() < EPSILON);
        assert!((contact.depth - 0.5).abs() < EPSILON);
    }

    #[test]
    fn test_check_circle_circle_touching_counts() {
        let a = ball(1.0, 0.0, 0.0);
        let b = ball(1.0, 0.0, 2.0);
        let contact = check_circle_circle(&a, &b).unwrap();
        assert!(contact.depth.abs() < EPSILON);
        assert!((contact.normal - Vec2::new(0.0, 1.0)).magnitude() < EPSILON);
    }

    #[test]
    fn test_check_circle_circle_coincident_uses_fallback() {
        let a = ball(2.0, 5.0, 5.0);
        let b = ball(1.0, 5.0, 5.0);
        let contact = check_circle_circle(&a, &b).unwrap();
        assert_eq!(contact.normal, FALLBACK_NORMAL);
        assert!((contact.depth - 3.0).abs() < EPSILON);
        assert!(contact.normal.is_finite() && contact.depth.is_finite());
    }

    #[test]
    fn test_check_circle_halfspace_ground() {
        let ground = Body::halfspace(Vec2::new(0.0, 10.0), 0.0).unwrap();

        let above = ball(1.0, 3.0, 8.0);
        assert!(check_circle_halfspace(&above, &ground).is_none());

        let sunk = ball(1.0, 3.0, 9.25);
        let contact = check_circle_halfspace(&sunk, &ground).unwrap();
        assert!((contact.normal - Vec2::UP).magnitude() < EPSILON);
        assert!((contact.depth - 0.25).abs() < EPSILON);

        let touching = ball(1.0, -40.0, 9.0);
        let contact = check_circle_halfspace(&touching, &ground).unwrap();
        assert!(contact.depth.abs() < EPSILON);
    }

    #[test]
    fn test_check_circle_halfspace_tilted() {
        // Normal (1, 0): solid side is x < 0.
        let wall = Body::halfspace(Vec2::ZERO, 90.0).unwrap();
        let inside = ball(1.0, 0.5, 100.0);
        let contact = check_circle_halfspace(&inside, &wall).unwrap();
        assert!((contact.normal - Vec2::new(1.0, 0.0)).magnitude() < EPSILON);
        assert!((contact.depth - 0.5).abs() < EPSILON);

        let clear = ball(1.0, 1.5, -100.0);
        assert!(check_circle_halfspace(&clear, &wall).is_none());
    }

    #[test]
    fn test_check_wrong_shapes_is_none() {
        let ground = Body::halfspace(Vec2::ZERO, 0.0).unwrap();
        let b = ball(1.0, 0.0, 0.0);
        assert!(check_circle_circle(&b, &ground).is_none());
        assert!(check_circle_halfspace(&ground, &b).is_none());
    }
}
