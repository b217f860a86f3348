/// Per-frame driver: integrates input, advances rotation, paints the scene
use log::{debug, info};
use rand::Rng;

use crate::config::{Rgb, SceneConfig};
use crate::geometry::Point3D;
use crate::parallax::PointerParallax;
use crate::projection::{Camera, Projected, Viewport};
use crate::scene::Scene;
use crate::transform::Transform;

/// Colour, opacity and stroke width for one draw call
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Style {
    pub color: Rgb,
    pub alpha: f64,
    pub line_width: f64,
}

/// A projected line segment
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: Projected,
    pub end: Projected,
}

/// Host drawing surface (a canvas 2D context, an ASCII raster, a recorder)
pub trait DrawSurface {
    /// Erase the whole surface
    fn clear(&mut self, viewport: Viewport);

    /// Fill a disc centred on `center`
    fn fill_disc(&mut self, center: Projected, radius: f64, style: &Style);

    /// Stroke all segments as a single path
    fn stroke_segments(&mut self, segments: &[Segment], style: &Style);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Stopped,
}

/// Owns all mutable render state and draws one frame per `tick`.
///
/// Event handlers only write target state (`pointer_moved`, `resize`);
/// the next tick integrates it.
#[derive(Debug, Clone)]
pub struct FrameDriver {
    scene: Scene,
    pointer: PointerParallax,
    camera: Camera,
    config: SceneConfig,
    state: LoopState,
    frame_index: u64,
    // Scratch buffers reused across frames
    projected: Vec<Projected>,
    segments: Vec<Segment>,
}

impl FrameDriver {
    /// Build the default scene for `viewport` and start in `Running`
    pub fn new<R: Rng + ?Sized>(viewport: Viewport, config: SceneConfig, rng: &mut R) -> Self {
        let scene = Scene::new(viewport, &config, rng);
        Self::with_scene(scene, config)
    }

    pub fn with_scene(scene: Scene, config: SceneConfig) -> Self {
        let camera = Camera::with_focal_length(scene.viewport(), config.focal_length);
        Self {
            scene,
            pointer: PointerParallax::new(config.smoothing),
            camera,
            config,
            state: LoopState::Running,
            frame_index: 0,
            projected: Vec::new(),
            segments: Vec::new(),
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn pointer(&self) -> &PointerParallax {
        &self.pointer
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn frame_index(&self) -> u64 {
        self.frame_index
    }

    /// Record a pointer position in viewport pixels
    pub fn pointer_moved(&mut self, x: f64, y: f64) {
        self.pointer.point_at(x, y, self.scene.viewport());
    }

    /// Adopt a new viewport: recentre the camera and rebase the shapes
    pub fn resize(&mut self, viewport: Viewport) {
        self.camera.set_viewport(viewport);
        self.scene.resize(viewport);
    }

    pub fn stop(&mut self) {
        if self.state == LoopState::Running {
            info!("render loop stopped after {} frames", self.frame_index);
        }
        self.state = LoopState::Stopped;
    }

    /// Draw one frame and report whether the host should schedule another.
    ///
    /// Particles are drawn first, then shapes in list order. There is no
    /// depth sorting, so a farther shape may overdraw a nearer one.
    pub fn tick<S: DrawSurface + ?Sized>(&mut self, surface: &mut S) -> LoopState {
        if self.state == LoopState::Stopped {
            return LoopState::Stopped;
        }

        self.pointer.step();
        surface.clear(self.scene.viewport());

        self.draw_particles(surface);
        self.draw_shapes(surface);

        if self.frame_index == 0 {
            debug!("first frame drawn");
        }
        self.frame_index += 1;
        self.state
    }

    fn draw_particles<S: DrawSurface + ?Sized>(&self, surface: &mut S) {
        for particle in &self.scene.particles {
            let depth = particle.depth();
            let offset = self.pointer.offset(depth, self.config.particle_parallax);
            let projected = self.camera.project(&Point3D::new(
                particle.position.x + offset.x,
                particle.position.y + offset.y,
                depth,
            ));

            let style = Style {
                color: self.config.accent,
                alpha: particle.alpha * projected.scale * self.config.particle_fade,
                line_width: self.config.edge_width,
            };
            surface.fill_disc(projected, particle.size * projected.scale, &style);
        }
    }

    fn draw_shapes<S: DrawSurface + ?Sized>(&mut self, surface: &mut S) {
        let style = Style {
            color: self.config.accent,
            alpha: self.config.edge_alpha,
            line_width: self.config.edge_width,
        };

        for shape in &mut self.scene.shapes {
            shape.rotation.advance(&shape.rotation_speed);

            let offset = self.pointer.offset(shape.depth(), self.config.shape_parallax);
            let translation = Point3D::new(
                shape.position.x + offset.x,
                shape.position.y + offset.y,
                shape.position.z,
            );

            self.projected.clear();
            self.projected.extend(shape.wireframe.vertices.iter().map(|vertex| {
                let world =
                    Transform::model_point(vertex, shape.scale, &shape.rotation, &translation);
                self.camera.project(&world)
            }));

            self.segments.clear();
            self.segments.extend(shape.wireframe.edges.iter().map(|edge| Segment {
                start: self.projected[edge.start],
                end: self.projected[edge.end],
            }));

            surface.stroke_segments(&self.segments, &style);
        }
    }
}
