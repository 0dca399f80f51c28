use log::trace;

use crate::objects::body::Body;
use crate::shapes::ShapeKind;
use super::detection::{check_circle_circle, check_circle_halfspace};
use super::resolution::{resolve_circle_circle, resolve_circle_halfspace, ContactParams};

/// Detects and immediately resolves one pair. Returns whether the pair
/// overlapped, which drives the colliding highlight.
///
/// Argument order does not matter for circle–halfspace pairs. Pairs of
/// static bodies are skipped, since nothing in them can move.
pub fn resolve_pair(body_a: &mut Body, body_b: &mut Body, params: &ContactParams) -> bool {
    match (body_a.shape().kind(), body_b.shape().kind()) {
        (ShapeKind::Halfspace, ShapeKind::Halfspace) => {
            debug_assert!(
                body_a.is_static() && body_b.is_static(),
                "halfspaces are always static"
            );
            false
        }
        _ if body_a.is_static() && body_b.is_static() => false,
        (ShapeKind::Circle, ShapeKind::Circle) => {
            let Some(contact) = check_circle_circle(body_a, body_b) else {
                return false;
            };
            let closing = resolve_circle_circle(body_a, body_b, &contact);
            trace!(
                "circle contact {} / {}: depth={:.4} closing={:.4}",
                body_a.name(), body_b.name(), contact.depth, closing
            );
            true
        }
        (ShapeKind::Circle, ShapeKind::Halfspace) => circle_halfspace(body_a, body_b, params),
        (ShapeKind::Halfspace, ShapeKind::Circle) => circle_halfspace(body_b, body_a, params),
    }
}

fn circle_halfspace(circle_body: &mut Body, plane_body: &mut Body, params: &ContactParams) -> bool {
    let Some(contact) = check_circle_halfspace(circle_body, plane_body) else {
        return false;
    };
    let closing = resolve_circle_halfspace(circle_body, plane_body, &contact, params);
    trace!(
        "halfspace contact {} / {}: depth={:.4} closing={:.4}",
        circle_body.name(), plane_body.name(), contact.depth, closing
    );
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::vec2::Vec2;
    const EPSILON: f64 = 1e-9;

    fn no_gravity() -> ContactParams {
        ContactParams { gravity: Vec2::ZERO, friction_coefficient: 0.0, dt: 1.0 / 60.0 }
    }

    #[test]
    fn test_resolve_pair_is_symmetric_for_halfspace() {
        let make = || {
            (
                Body::halfspace(Vec2::new(0.0, 10.0), 0.0).unwrap(),
                Body::circle(1.0, 1.0, Vec2::new(0.0, 9.5))
                    .unwrap()
                    .with_velocity(Vec2::new(0.0, 2.0)),
            )
        };

        let (mut plane_1, mut ball_1) = make();
        assert!(resolve_pair(&mut plane_1, &mut ball_1, &no_gravity()));
        let (mut plane_2, mut ball_2) = make();
        assert!(resolve_pair(&mut ball_2, &mut plane_2, &no_gravity()));

        assert_eq!(ball_1, ball_2);
        assert_eq!(plane_1, plane_2);
        assert!((ball_1.position.y - 9.0).abs() < EPSILON);
        assert!((ball_1.velocity.y - -2.0).abs() < EPSILON);
    }

    #[test]
    fn test_resolve_pair_skips_static_pairs() {
        let mut ground = Body::halfspace(Vec2::ZERO, 0.0).unwrap();
        let mut wall = Body::halfspace(Vec2::ZERO, 90.0).unwrap();
        let mut peg = Body::static_circle(1.0, Vec2::ZERO).unwrap();
        let before = peg.clone();

        assert!(!resolve_pair(&mut ground, &mut wall, &no_gravity()));
        assert!(!resolve_pair(&mut ground, &mut peg, &no_gravity()));
        assert_eq!(peg, before);
    }

    #[test]
    fn test_resolve_pair_reports_separated_circles() {
        let mut a = Body::circle(1.0, 1.0, Vec2::ZERO).unwrap();
        let mut b = Body::circle(1.0, 1.0, Vec2::new(5.0, 0.0)).unwrap();
        assert!(!resolve_pair(&mut a, &mut b, &no_gravity()));
    }
}
