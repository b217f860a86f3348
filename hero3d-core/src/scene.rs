/// Scene model: the fixed shape set and the particle field
use log::debug;
use rand::Rng;

use crate::config::SceneConfig;
use crate::geometry::{Point3D, Wireframe};
use crate::projection::Viewport;
use crate::transform::RotationState;

/// Baseline placement relative to the viewport.
///
/// Resolves to `(fx * width, fy * height, depth)`, so a resize rebases the
/// shape without touching its depth.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anchor {
    pub fx: f64,
    pub fy: f64,
    pub depth: f64,
}

impl Anchor {
    pub const fn new(fx: f64, fy: f64, depth: f64) -> Self {
        Self { fx, fy, depth }
    }

    pub fn resolve(&self, viewport: Viewport) -> Point3D {
        Point3D::new(self.fx * viewport.width, self.fy * viewport.height, self.depth)
    }
}

/// One rotating wireframe in the scene
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeInstance {
    pub wireframe: Wireframe,
    pub anchor: Anchor,
    /// World baseline, rewritten only on resize
    pub position: Point3D,
    pub rotation: RotationState,
    pub rotation_speed: RotationState,
    pub scale: f64,
}

impl ShapeInstance {
    pub fn new(
        wireframe: Wireframe,
        anchor: Anchor,
        rotation_speed: RotationState,
        scale: f64,
        viewport: Viewport,
    ) -> Self {
        debug_assert!(scale > 0.0);
        debug_assert!(wireframe.validate().is_ok());
        Self {
            wireframe,
            anchor,
            position: anchor.resolve(viewport),
            rotation: RotationState::zero(),
            rotation_speed,
            scale,
        }
    }

    /// Recompute the baseline for a new viewport
    pub fn rebase(&mut self, viewport: Viewport) {
        self.position = self.anchor.resolve(viewport);
    }

    pub fn depth(&self) -> f64 {
        self.position.z
    }
}

/// A background dot. Never mutated after creation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// Centre-relative screen position; `z` is the depth
    pub position: Point3D,
    pub size: f64,
    pub alpha: f64,
}

impl Particle {
    pub fn depth(&self) -> f64 {
        self.position.z
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub shapes: Vec<ShapeInstance>,
    pub particles: Vec<Particle>,
    viewport: Viewport,
}

impl Scene {
    /// Build the hero scene for `viewport`, scattering particles with `rng`
    pub fn new<R: Rng + ?Sized>(viewport: Viewport, config: &SceneConfig, rng: &mut R) -> Self {
        let scene = Self::from_parts(
            viewport,
            default_shapes(viewport),
            scatter_particles(config.particle_count, viewport, rng),
        );
        debug!(
            "scene built: {} shapes, {} particles at {}x{}",
            scene.shapes.len(),
            scene.particles.len(),
            viewport.width,
            viewport.height
        );
        scene
    }

    pub fn from_parts(
        viewport: Viewport,
        shapes: Vec<ShapeInstance>,
        particles: Vec<Particle>,
    ) -> Self {
        Self {
            shapes,
            particles,
            viewport,
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Rebase shapes on a new viewport.
    ///
    /// Particles keep their original coordinates even if they now fall
    /// outside the visible area.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        for shape in &mut self.shapes {
            shape.rebase(viewport);
        }
        debug!("scene resized to {}x{}", viewport.width, viewport.height);
    }
}

/// Two octahedra, a cube and a tetrahedron at distinct depths and speeds
pub fn default_shapes(viewport: Viewport) -> Vec<ShapeInstance> {
    vec![
        ShapeInstance::new(
            Wireframe::octahedron(),
            Anchor::new(-0.3, -0.2, 400.0),
            RotationState::new(0.002, 0.003, 0.001),
            80.0,
            viewport,
        ),
        ShapeInstance::new(
            Wireframe::cube(),
            Anchor::new(0.35, 0.3, 500.0),
            RotationState::new(-0.002, 0.002, -0.001),
            60.0,
            viewport,
        ),
        ShapeInstance::new(
            Wireframe::tetrahedron(),
            Anchor::new(-0.25, 0.35, 300.0),
            RotationState::new(0.003, -0.001, 0.002),
            50.0,
            viewport,
        ),
        ShapeInstance::new(
            Wireframe::octahedron(),
            Anchor::new(0.2, -0.3, 600.0),
            RotationState::new(0.001, -0.003, 0.001),
            90.0,
            viewport,
        ),
    ]
}

/// Scatter particles across the viewport with depth in `[200, 1200)`
pub fn scatter_particles<R: Rng + ?Sized>(
    count: usize,
    viewport: Viewport,
    rng: &mut R,
) -> Vec<Particle> {
    (0..count)
        .map(|_| Particle {
            position: Point3D::new(
                (rng.random::<f64>() - 0.5) * viewport.width,
                (rng.random::<f64>() - 0.5) * viewport.height,
                rng.random::<f64>() * 1000.0 + 200.0,
            ),
            size: rng.random::<f64>() * 2.0,
            alpha: rng.random::<f64>() * 0.5 + 0.1,
        })
        .collect()
}
