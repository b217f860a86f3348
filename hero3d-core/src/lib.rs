/// hero3d Core Library - Scene, transform and frame logic for the hero background
///
/// This library holds everything that does not depend on a host: wireframe
/// templates, the scene model, pointer parallax, projection, and the per-frame
/// driver that paints through a `DrawSurface`.

pub mod config;
pub mod error;
pub mod frame;
pub mod geometry;
pub mod parallax;
pub mod projection;
pub mod scene;
pub mod transform;

// Re-export commonly used types
pub use config::{Rgb, SceneConfig, ACCENT};
pub use error::GeometryError;
pub use frame::{DrawSurface, FrameDriver, LoopState, Segment, Style};
pub use geometry::{Edge, Point3D, Wireframe};
pub use parallax::PointerParallax;
pub use projection::{Camera, Projected, Viewport};
pub use scene::{Anchor, Particle, Scene, ShapeInstance};
pub use transform::{rotate_point, RotationState, Transform};
