use ggez::event::{self, EventHandler};
use ggez::glam::Vec2 as GVec2;
use ggez::graphics::{self, Color, DrawMode, DrawParam, Mesh, Text};
use ggez::input::keyboard::{KeyCode, KeyInput};
use ggez::{Context, GameError, GameResult};
use rigid2d::*;

use crate::scenes::{self, Launcher, Scene, VIEW_HEIGHT, VIEW_WIDTH};

const GRAVITY_STEP: f64 = 100.0;
const FRICTION_STEP: f64 = 0.05;
const ANGLE_STEP: f64 = 5.0;
const SPEED_STEP: f64 = 50.0;
// Long enough to cross the window at any rotation.
const HALFSPACE_DRAW_LENGTH: f64 = 2000.0;
const NORMAL_TICK_LENGTH: f64 = 20.0;

fn to_game_error(e: PhysicsError) -> GameError {
    GameError::CustomError(e.to_string())
}

fn point(v: Vec2) -> GVec2 {
    GVec2::new(v.x as f32, v.y as f32)
}

struct MainState {
    world: World,
    scene: Scene,
    config: WorldConfig,
    launcher: Launcher,
}

impl MainState {
    fn new(scene: Scene, config: WorldConfig) -> GameResult<MainState> {
        let world = scene.build(config).map_err(to_game_error)?;
        Ok(MainState { world, scene, config, launcher: Launcher::default() })
    }

    fn reset(&mut self) -> GameResult {
        self.world = self.scene.build(self.config).map_err(to_game_error)?;
        self.launcher = Launcher::default();
        Ok(())
    }

    fn nudge_gravity(&mut self, dy: f64) -> GameResult {
        let gravity = self.world.gravity() + Vec2::new(0.0, dy);
        self.world.set_gravity(gravity).map_err(to_game_error)
    }

    fn hud(&self) -> String {
        format!(
            "{:?} | bodies {}\ngravity {:.0} [G/H]  friction {:.2} [F/V]\nangle {:.0} / speed {:.0} [arrows]  bounce {:.1} [B]\nSpace launch, R reset, Esc quit",
            self.scene,
            self.world.len(),
            self.world.gravity().y,
            self.world.friction_coefficient(),
            self.launcher.angle_degrees,
            self.launcher.speed,
            self.launcher.bounciness,
        )
    }

    fn draw_body(&self, ctx: &mut Context, canvas: &mut graphics::Canvas, body: &Body) -> GameResult {
        let color = if body.is_colliding() {
            Color::RED
        } else {
            Color::WHITE
        };

        match body.shape() {
            Shape::Circle(circle) => {
                let mode = if body.is_static() {
                    DrawMode::stroke(2.0)
                } else {
                    DrawMode::fill()
                };
                let mesh = Mesh::new_circle(ctx, mode, GVec2::new(0.0, 0.0), circle.radius() as f32, 0.1, color)?;
                canvas.draw(&mesh, DrawParam::new().dest(point(body.position)));
            }
            Shape::Halfspace(plane) => {
                let along = plane.tangent() * HALFSPACE_DRAW_LENGTH;
                let edge = Mesh::new_line(
                    ctx,
                    &[point(body.position - along), point(body.position + along)],
                    2.0,
                    color,
                )?;
                canvas.draw(&edge, DrawParam::new());

                let tick = Mesh::new_line(
                    ctx,
                    &[point(body.position), point(body.position + plane.normal() * NORMAL_TICK_LENGTH)],
                    2.0,
                    color,
                )?;
                canvas.draw(&tick, DrawParam::new());
            }
        }
        Ok(())
    }
}

impl EventHandler for MainState {
    fn update(&mut self, ctx: &mut Context) -> GameResult {
        let frame_dt = ctx.time.delta().as_secs_f64();
        self.world.advance(frame_dt);
        self.world.retain(scenes::in_view);
        Ok(())
    }

    fn draw(&mut self, ctx: &mut Context) -> GameResult {
        let mut canvas = graphics::Canvas::from_frame(ctx, Color::BLACK);

        for (_, body) in self.world.bodies() {
            self.draw_body(ctx, &mut canvas, body)?;
        }

        let aim = self.launcher.position + self.launcher.direction() * (self.launcher.speed * 0.1);
        let launcher_mesh = Mesh::new_line(
            ctx,
            &[point(self.launcher.position), point(aim)],
            3.0,
            Color::YELLOW,
        )?;
        canvas.draw(&launcher_mesh, DrawParam::new());

        canvas.draw(
            &Text::new(self.hud()),
            DrawParam::new().dest(GVec2::new(10.0, 10.0)).color(Color::WHITE),
        );

        canvas.finish(ctx)?;
        Ok(())
    }

    fn key_down_event(&mut self, ctx: &mut Context, input: KeyInput, _repeated: bool) -> GameResult {
        match input.keycode {
            Some(KeyCode::Space) => {
                let body = self.launcher.spawn().map_err(to_game_error)?;
                self.world.add(body);
            }
            Some(KeyCode::Left) => self.launcher.angle_degrees -= ANGLE_STEP,
            Some(KeyCode::Right) => self.launcher.angle_degrees += ANGLE_STEP,
            Some(KeyCode::Up) => self.launcher.speed += SPEED_STEP,
            Some(KeyCode::Down) => self.launcher.speed = (self.launcher.speed - SPEED_STEP).max(0.0),
            Some(KeyCode::G) => self.nudge_gravity(GRAVITY_STEP)?,
            Some(KeyCode::H) => self.nudge_gravity(-GRAVITY_STEP)?,
            Some(KeyCode::F) => {
                let friction = self.world.friction_coefficient() + FRICTION_STEP;
                self.world.set_friction_coefficient(friction);
            }
            Some(KeyCode::V) => {
                let friction = self.world.friction_coefficient() - FRICTION_STEP;
                self.world.set_friction_coefficient(friction);
            }
            Some(KeyCode::B) => {
                self.launcher.bounciness = if self.launcher.bounciness > 0.5 { 0.1 } else { 0.9 };
            }
            Some(KeyCode::R) => self.reset()?,
            Some(KeyCode::Escape) => ctx.request_quit(),
            _ => {}
        }
        Ok(())
    }
}

pub fn run_visual(scene: Scene, config: WorldConfig) -> GameResult {
    let cb = ggez::ContextBuilder::new("physics_examples", "rigid2d")
        .window_setup(ggez::conf::WindowSetup::default().title("rigid2d playground"))
        .window_mode(ggez::conf::WindowMode::default().dimensions(VIEW_WIDTH as f32, VIEW_HEIGHT as f32));

    let (ctx, event_loop) = cb.build()?;
    let state = MainState::new(scene, config)?;
    event::run(ctx, event_loop, state)
}
