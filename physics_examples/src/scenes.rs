use rigid2d::*;

/// Window size in world units; one unit is one pixel, y down.
pub const VIEW_WIDTH: f64 = 800.0;
pub const VIEW_HEIGHT: f64 = 800.0;
/// How far outside the view a body may drift before it is culled.
pub const CULL_MARGIN: f64 = 200.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scene {
    Playground,
    Friction,
    Collide,
}

impl Scene {
    pub const NAMES: &'static str = "playground, friction, collide";

    pub fn parse(name: &str) -> Option<Scene> {
        match name {
            "playground" => Some(Scene::Playground),
            "friction" => Some(Scene::Friction),
            "collide" => Some(Scene::Collide),
            _ => None,
        }
    }

    pub fn build(self, config: WorldConfig) -> PhysicsResult<World> {
        let mut world = World::with_config(config)?;

        // Every scene has a floor near the bottom edge.
        let floor = Body::halfspace(Vec2::new(VIEW_WIDTH / 2.0, VIEW_HEIGHT - 40.0), 0.0)?
            .with_bounciness(0.8);
        world.add(floor);

        match self {
            Scene::Playground => {
                // Ramps rising towards both side walls.
                world.add(Body::halfspace(Vec2::new(0.0, 600.0), 30.0)?);
                world.add(Body::halfspace(Vec2::new(VIEW_WIDTH, 600.0), -30.0)?);
                world.add(Body::static_circle(30.0, Vec2::new(VIEW_WIDTH / 2.0, 450.0))?);

                for i in 0..5 {
                    let x = 300.0 + i as f64 * 50.0;
                    let ball = Body::circle(15.0, 1.0, Vec2::new(x, 100.0 + i as f64 * 20.0))?
                        .with_bounciness(0.7);
                    world.add(ball);
                }
            }
            Scene::Friction => {
                // Resting on the floor; the fastest starts in front so none catch up.
                let radius = 20.0;
                let y = VIEW_HEIGHT - 40.0 - radius;
                for (i, speed) in [150.0, 300.0, 450.0].iter().enumerate() {
                    let x = 60.0 + i as f64 * 100.0;
                    let ball = Body::circle(radius, 1.0 + i as f64, Vec2::new(x, y))?
                        .with_velocity(Vec2::new(*speed, 0.0))
                        .with_bounciness(0.0);
                    world.add(ball);
                }
            }
            Scene::Collide => {
                let y = 300.0;
                let left = Body::circle(30.0, 1.0, Vec2::new(200.0, y))?
                    .with_velocity(Vec2::new(250.0, 0.0));
                let right = Body::circle(30.0, 1.0, Vec2::new(600.0, y))?
                    .with_velocity(Vec2::new(-250.0, 0.0));
                world.add(left);
                world.add(right);
            }
        }

        Ok(world)
    }
}

/// Launch parameters for spawning circles, tuned from the keyboard.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Launcher {
    pub position: Vec2,
    /// Measured from +x towards +y, so negative angles aim upwards.
    pub angle_degrees: f64,
    pub speed: f64,
    pub radius: f64,
    pub mass: f64,
    pub bounciness: f64,
}

impl Default for Launcher {
    fn default() -> Self {
        Self {
            position: Vec2::new(80.0, 500.0),
            angle_degrees: -45.0,
            speed: 700.0,
            radius: 12.0,
            mass: 1.0,
            bounciness: 0.6,
        }
    }
}

impl Launcher {
    pub fn direction(&self) -> Vec2 {
        Vec2::from_angle_degrees(self.angle_degrees)
    }

    pub fn spawn(&self) -> PhysicsResult<Body> {
        Ok(Body::circle(self.radius, self.mass, self.position)?
            .with_velocity(self.direction() * self.speed)
            .with_bounciness(self.bounciness))
    }
}

/// Whether a body is still worth simulating. Static bodies are always kept.
pub fn in_view(body: &Body) -> bool {
    if body.is_static() {
        return true;
    }
    let p = body.position;
    p.x > -CULL_MARGIN
        && p.x < VIEW_WIDTH + CULL_MARGIN
        && p.y > -CULL_MARGIN
        && p.y < VIEW_HEIGHT + CULL_MARGIN
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scene_names_parse() {
        for name in Scene::NAMES.split(", ") {
            assert!(Scene::parse(name).is_some(), "{}", name);
        }
        assert!(Scene::parse("ragdoll").is_none());
    }

    #[test]
    fn test_scenes_build() {
        for scene in [Scene::Playground, Scene::Friction, Scene::Collide] {
            let world = scene.build(WorldConfig::default()).unwrap();
            assert!(world.bodies().any(|(_, b)| !b.is_static()));
        }
    }

    #[test]
    fn test_launcher_spawn() {
        let launcher = Launcher { angle_degrees: 0.0, speed: 10.0, ..Launcher::default() };
        let body = launcher.spawn().unwrap();
        assert!((body.velocity - Vec2::new(10.0, 0.0)).magnitude() < 1e-9);
        assert_eq!(body.position, launcher.position);
        assert_eq!(body.bounciness(), launcher.bounciness);
    }

    #[test]
    fn test_in_view_culls_far_dynamic_bodies() {
        let far = Body::circle(1.0, 1.0, Vec2::new(0.0, VIEW_HEIGHT + 2.0 * CULL_MARGIN)).unwrap();
        let near = Body::circle(1.0, 1.0, Vec2::new(10.0, 10.0)).unwrap();
        let floor = Body::halfspace(Vec2::new(0.0, 1e6), 0.0).unwrap();
        assert!(!in_view(&far));
        assert!(in_view(&near));
        assert!(in_view(&floor));
    }
}
