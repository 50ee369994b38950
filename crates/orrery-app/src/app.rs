//! The update loop owner: drains commands, ticks the world, advances the
//! camera animation, and feeds the renderer, once per frame on one thread.

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use orrery_camera::{Camera, CameraPose, FocusController};
use orrery_catalog::Catalog;
use orrery_config::Config;
use orrery_input::{Command, CommandQueue, CommandSender, pick_body};
use orrery_scene::{Renderer, SceneSnapshot, StarfieldGenerator, StaticGeometry};
use orrery_sim::World;

use crate::panel::InfoPanel;

/// Owns all mutable visualization state. The only mutator is [`App::step`],
/// called from the driving loop; event sources reach it through the
/// command queue.
pub struct App {
    world: World,
    camera: Camera,
    focus: FocusController,
    queue: CommandQueue,
    renderer: Box<dyn Renderer>,
    panel: Box<dyn InfoPanel>,
    pick_rng: ChaCha8Rng,
}

impl App {
    /// Assemble the app from configuration, a catalog, and the two
    /// collaborator seams. `seed` drives both the initial orbital angles
    /// and the fly-to approach angles.
    pub fn new(
        config: &Config,
        catalog: &Catalog,
        seed: u64,
        mut renderer: Box<dyn Renderer>,
        panel: Box<dyn InfoPanel>,
    ) -> Self {
        let mut world = World::new(catalog, seed);
        world.set_speed_multiplier(config.sim.speed_multiplier);

        let starfield = StarfieldGenerator::new(
            config.scene.starfield_seed,
            config.scene.star_count,
            config.scene.starfield_extent,
        );
        let geometry = StaticGeometry::build(&world, &starfield, config.scene.orbit_segments);
        renderer.prepare(&geometry);

        let start = config.camera.start_position;
        let camera = Camera {
            pose: CameraPose::new(glam::DVec3::from_array(start), glam::DVec3::ZERO),
            fov_y: config.camera.fov_y_degrees.to_radians(),
            aspect_ratio: config.window.width as f64 / config.window.height as f64,
            near: config.camera.near,
            far: config.camera.far,
        };

        Self {
            world,
            camera,
            focus: FocusController::with_duration_ms(config.camera.fly_to_ms),
            queue: CommandQueue::new(),
            renderer,
            panel,
            // Approach angles come from their own stream so they do not
            // perturb the world seeding.
            pick_rng: ChaCha8Rng::seed_from_u64(seed.wrapping_add(1)),
        }
    }

    /// A producer handle for event sources (UI thread, tests).
    pub fn sender(&self) -> CommandSender {
        self.queue.sender()
    }

    /// Read access to the world, for hosts that display simulation state.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// The active camera.
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Whether a fly-to currently owns the camera.
    pub fn is_camera_animating(&self) -> bool {
        self.focus.is_animating()
    }

    /// Run one frame: drain commands, integrate, advance the camera
    /// animation, then hand the frame to the renderer.
    pub fn step(&mut self, dt_seconds: f64, now_ms: f64) {
        for command in self.queue.drain() {
            self.apply_command(command, now_ms);
        }

        self.world.tick(dt_seconds);

        let mut pose = self.camera.pose;
        self.focus.advance(now_ms, &mut pose);
        self.camera.pose = pose;

        let snapshot = SceneSnapshot::capture(&self.world, &self.camera);
        self.renderer.render(&snapshot);
    }

    fn apply_command(&mut self, command: Command, now_ms: f64) {
        match command {
            Command::FocusBody { id } => self.focus_body(&id, now_ms),
            Command::PointerPick { ndc_x, ndc_y } => {
                match pick_body(&self.world, &self.camera, ndc_x, ndc_y) {
                    Some(id) => {
                        let id = id.to_string();
                        self.focus_body(&id, now_ms);
                    }
                    None => debug!("pointer pick hit nothing"),
                }
            }
            Command::SetSpeed { multiplier } => {
                self.world.set_speed_multiplier(multiplier);
                debug!("speed multiplier set to {multiplier}");
            }
            Command::Resize { width, height } => {
                self.camera.set_aspect_ratio(width as f64, height as f64);
            }
        }
    }

    fn focus_body(&mut self, id: &str, now_ms: f64) {
        let pick_angle = self.pick_rng.random::<f64>() * std::f64::consts::TAU;
        match self
            .focus
            .focus(&self.world, id, self.camera.pose, pick_angle, now_ms)
        {
            Ok(record) => {
                info!("focusing {}", record.name);
                self.panel.show(record);
            }
            // Expected for stale or mistyped selections; just don't move.
            Err(err) => debug!("focus ignored: {err}"),
        }
    }
}
