/// Camera and perspective projection onto the drawing surface
use crate::geometry::Point3D;

/// Focal length used by the hero scene
pub const DEFAULT_FOCAL_LENGTH: f64 = 800.0;

/// Drawing surface size in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// A point projected to screen space.
///
/// `scale` is the perspective factor applied at this depth, reused to size
/// and fade particles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projected {
    pub x: f64,
    pub y: f64,
    pub scale: f64,
}

/// Pinhole camera looking down +z with the origin at the viewport centre
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub focal_length: f64,
    pub viewport: Viewport,
}

impl Camera {
    pub fn new(viewport: Viewport) -> Self {
        Self::with_focal_length(viewport, DEFAULT_FOCAL_LENGTH)
    }

    pub fn with_focal_length(viewport: Viewport, focal_length: f64) -> Self {
        Self {
            focal_length,
            viewport,
        }
    }

    /// Recentre on a resized viewport
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Project a 3D point to 2D screen space.
    ///
    /// Callers keep `focal_length + p.z` well above zero; scene depths are
    /// chosen so this always holds, and no guard is applied here.
    pub fn project(&self, p: &Point3D) -> Projected {
        let scale = self.focal_length / (self.focal_length + p.z);
        Projected {
            x: p.x * scale + self.viewport.width / 2.0,
            y: p.y * scale + self.viewport.height / 2.0,
            scale,
        }
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Viewport::new(800.0, 600.0))
    }
}
